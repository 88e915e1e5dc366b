use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a004_cart::context::use_cart;
use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn NavbarClient(menu_open: RwSignal<bool>) -> impl IntoView {
    let cart = use_cart();
    let session = use_session();

    let cart_count = move || cart.total_quantity();

    view! {
        <header class="navbar">
            <button
                class="navbar__toggle"
                title="Categories"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { icon("x") } else { icon("menu") }}
            </button>

            <A href=AppRoute::Home.path() attr:class="navbar__brand">"Storefront"</A>

            <nav class="navbar__actions">
                <A href=AppRoute::Cart.path() attr:class="navbar__cart">
                    {icon("cart")}
                    <Show when=move || { cart_count() > 0 }>
                        <span class="navbar__badge">{cart_count}</span>
                    </Show>
                </A>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! {
                        <A href=AppRoute::Login.path() attr:class="navbar__login">
                            {icon("user")}
                            <span>"Sign in"</span>
                        </A>
                    }
                >
                    <A href=AppRoute::Dashboard.path() attr:class="navbar__login">
                        {icon("dashboard")}
                        <span>"Admin"</span>
                    </A>
                </Show>
            </nav>
        </header>
    }
}
