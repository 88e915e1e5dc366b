use crate::domain::a004_cart::context::CartContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("storefront started, api origin {}", config.api_origin);

    // Session and cart live for the whole page load; nothing is persisted.
    provide_context(config);
    provide_context(SessionContext::new());
    provide_context(CartContext::new());

    view! {
        <AppRoutes />
    }
}
