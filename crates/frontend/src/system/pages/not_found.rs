use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=AppRoute::Home.path()>"Go to the store"</A>
        </div>
    }
}
