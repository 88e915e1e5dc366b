//! Admin top bar: brand, link to the store, session status and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let page_title = move || {
        location
            .pathname
            .with(|p| AppRoute::from_path(p).map(AppRoute::title))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Catalog admin"</span>
                <span class="top-header__page">{page_title}</span>
            </div>

            <div class="top-header__actions">
                <A href=AppRoute::Home.path()>"View store"</A>
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || if session.is_authenticated() { "Signed in" } else { "Guest" }}
                    </span>
                </div>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! { <A href=AppRoute::Login.path()>"Sign in"</A> }
                >
                    // the router picks up the anchor click after the session is dropped
                    <a
                        class="top-header__icon-btn"
                        title="Sign out"
                        href=AppRoute::Login.path()
                        on:click=move |_| session.logout()
                    >
                        {icon("logout")}
                    </a>
                </Show>
            </div>
        </div>
    }
}
