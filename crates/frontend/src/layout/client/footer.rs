use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::{routes_with_chrome, AppRoute, Chrome};

#[component]
pub fn FooterClient() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="client-footer">
            <span>"Storefront catalog"</span>
            <nav class="client-footer__links">
                {routes_with_chrome(Chrome::Storefront)
                    .map(|route| view! { <A href=route.path()>{route.title()}</A> })
                    .collect_view()}
                <A href=AppRoute::Login.path()>{AppRoute::Login.title()}</A>
            </nav>
        </footer>
    }
}
