use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::AppRoute;

/// Target of the "register" link on the login page; sign-up is not offered yet.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Create account"</h1>
                <p>"Registration is not available yet."</p>
                <A href=AppRoute::Login.path()>"Back to sign in"</A>
            </div>
        </div>
    }
}
