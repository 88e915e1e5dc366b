mod state;

pub use state::{apply_login_result, login_error_message, LoginButtonState, LoginEvent, TimerAction};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::routes::routes::AppRoute;
use crate::shared::api_utils::use_api;
use crate::shared::config::use_config;
use crate::shared::icons::{icon, spinner};
use crate::shared::lifetime::Lifetime;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let button_state = RwSignal::new(LoginButtonState::Normal);

    let session = use_session();
    let config = use_config();
    let api_client = use_api();
    let navigate = use_navigate();
    let lifetime = Lifetime::of_current_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = button_state.get_untracked();
        let next = current.transition(LoginEvent::Submit);
        if next == current {
            return;
        }
        set_error_message.set(None);
        button_state.set(next);

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let api_client = api_client.clone();
        let config = config.clone();
        let navigate = navigate.clone();
        let lifetime = lifetime.clone();

        spawn_local(async move {
            let result = api::login(&api_client, username_val, password_val).await;
            let Some(result) = lifetime.keep("login", result) else {
                return;
            };

            let current = button_state.get_untracked();
            let Some((next, message)) =
                session.try_update(|store| apply_login_result(current, store, result))
            else {
                return;
            };
            set_error_message.set(message);
            button_state.set(next);

            while let Some(delay) = button_state.get_untracked().pending_delay(&config) {
                TimeoutFuture::new(delay).await;
                if !lifetime.is_alive() {
                    return;
                }
                match button_state.get_untracked().on_timer() {
                    Some(TimerAction::Advance(next)) => button_state.set(next),
                    Some(TimerAction::NavigateHome) => {
                        navigate(AppRoute::Home.path(), Default::default());
                        return;
                    }
                    None => return,
                }
            }
        });
    };

    let go_register = {
        let navigate = use_navigate();
        move |_| navigate(AppRoute::Register.path(), Default::default())
    };

    let is_locked = move || !button_state.get().is_editable();

    view! {
        <div class="login-container">
            <div class="login-box">
                <form on:submit=on_submit>
                    <h1>"Sign in"</h1>

                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=is_locked
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_locked
                        />
                    </div>

                    <div class="login-actions">
                        <button
                            type="submit"
                            class=move || button_state.get().button_class()
                            disabled=is_locked
                        >
                            {move || match button_state.get() {
                                LoginButtonState::Normal => view! { "Sign in" }.into_any(),
                                LoginButtonState::Loading => view! {
                                    {spinner()}
                                    "Signing in..."
                                }.into_any(),
                                LoginButtonState::Circle => ().into_any(),
                                LoginButtonState::Success => view! {
                                    <span class="login-button__check">{icon("check")}</span>
                                }.into_any(),
                            }}
                        </button>
                    </div>
                </form>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        <strong>"Error:"</strong>
                        " "
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="login-info">
                    <p>
                        "No account yet? "
                        <span class="link" on:click=go_register>"Register here"</span>
                    </p>
                </div>
            </div>
        </div>
    }
}
