//! Login button states.
//!
//! ```text
//! Normal --submit--> Loading --failed--> Normal
//!                    Loading --succeeded--> Circle --400ms--> Success --1000ms--> /home
//! ```

use contracts::system::auth::LoginResponse;

use crate::shared::api_utils::ApiError;
use crate::shared::config::AppConfig;
use crate::system::auth::context::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginButtonState {
    Normal,
    Loading,
    Circle,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    Submit,
    Failed,
    Succeeded,
}

/// What happens once the delay of an animation state has elapsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    Advance(LoginButtonState),
    NavigateHome,
}

impl LoginButtonState {
    /// Applies an event; events that do not apply to the state are ignored.
    pub fn transition(self, event: LoginEvent) -> Self {
        match (self, event) {
            (Self::Normal, LoginEvent::Submit) => Self::Loading,
            (Self::Loading, LoginEvent::Failed) => Self::Normal,
            (Self::Loading, LoginEvent::Succeeded) => Self::Circle,
            (state, _) => state,
        }
    }

    /// Inputs and the submit button only accept interaction in `Normal`
    pub fn is_editable(self) -> bool {
        self == Self::Normal
    }

    /// Delay before [`Self::on_timer`] fires, for the timed states
    pub fn pending_delay(self, config: &AppConfig) -> Option<u32> {
        match self {
            Self::Circle => Some(config.circle_delay_ms),
            Self::Success => Some(config.success_delay_ms),
            Self::Normal | Self::Loading => None,
        }
    }

    pub fn on_timer(self) -> Option<TimerAction> {
        match self {
            Self::Circle => Some(TimerAction::Advance(Self::Success)),
            Self::Success => Some(TimerAction::NavigateHome),
            Self::Normal | Self::Loading => None,
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Self::Normal => "login-button login-button--normal",
            Self::Loading => "login-button login-button--loading",
            Self::Circle | Self::Success => "login-button login-button--circle",
        }
    }
}

/// Message shown under the form after a failed attempt
pub fn login_error_message(error: &ApiError) -> String {
    if error.is_rejected() {
        "Invalid credentials".to_string()
    } else {
        error.to_string()
    }
}

/// Applies the answer of `POST /auth/login` to the session.
///
/// Returns the next button state and the message to show under the form.
/// An accepted answer with a blank token counts as a failure.
pub fn apply_login_result(
    state: LoginButtonState,
    session: &mut SessionStore,
    result: Result<LoginResponse, ApiError>,
) -> (LoginButtonState, Option<String>) {
    let error = match result {
        Ok(response) if session.login(response.token.as_str()) => {
            log::info!("session opened");
            return (state.transition(LoginEvent::Succeeded), None);
        }
        Ok(_) => {
            log::warn!("login answered with an empty token");
            "Invalid credentials".to_string()
        }
        Err(e) => {
            log::warn!("login failed: {}", e);
            login_error_message(&e)
        }
    };
    (state.transition(LoginEvent::Failed), Some(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_login_returns_to_normal() {
        let state = LoginButtonState::Normal.transition(LoginEvent::Submit);
        assert_eq!(state, LoginButtonState::Loading);
        assert!(!state.is_editable());
        assert_eq!(state.transition(LoginEvent::Failed), LoginButtonState::Normal);
    }

    #[test]
    fn test_success_sequence_ends_on_home() {
        let config = AppConfig::default();
        let mut state = LoginButtonState::Normal
            .transition(LoginEvent::Submit)
            .transition(LoginEvent::Succeeded);
        assert_eq!(state, LoginButtonState::Circle);

        let mut delays = Vec::new();
        let mut navigated = false;
        while let Some(delay) = state.pending_delay(&config) {
            delays.push(delay);
            match state.on_timer() {
                Some(TimerAction::Advance(next)) => state = next,
                Some(TimerAction::NavigateHome) => {
                    navigated = true;
                    break;
                }
                None => break,
            }
        }

        assert_eq!(delays, vec![400, 1000]);
        assert_eq!(state, LoginButtonState::Success);
        assert!(navigated);
    }

    #[test]
    fn test_submit_ignored_outside_normal() {
        for state in [
            LoginButtonState::Loading,
            LoginButtonState::Circle,
            LoginButtonState::Success,
        ] {
            assert_eq!(state.transition(LoginEvent::Submit), state);
            assert!(!state.is_editable());
        }
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            login_error_message(&ApiError::Status { status: 401 }),
            "Invalid credentials"
        );
        let offline = ApiError::Network("connection refused".into());
        assert_eq!(login_error_message(&offline), offline.to_string());
    }

    #[test]
    fn test_accepted_login_opens_session() {
        let mut session = SessionStore::default();
        let result = Ok(LoginResponse {
            token: "abc".into(),
        });

        let (state, message) = apply_login_result(LoginButtonState::Loading, &mut session, result);

        assert_eq!(state, LoginButtonState::Circle);
        assert_eq!(message, None);
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(state.on_timer(), Some(TimerAction::Advance(LoginButtonState::Success)));
    }

    #[test]
    fn test_rejected_login_keeps_session_empty() {
        let mut session = SessionStore::default();
        let result = Err(ApiError::Status { status: 401 });

        let (state, message) = apply_login_result(LoginButtonState::Loading, &mut session, result);

        assert_eq!(state, LoginButtonState::Normal);
        assert!(state.is_editable());
        assert_eq!(message.as_deref(), Some("Invalid credentials"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_blank_token_is_a_failure() {
        let mut session = SessionStore::default();
        let result = Ok(LoginResponse { token: " ".into() });

        let (state, message) = apply_login_result(LoginButtonState::Loading, &mut session, result);

        assert_eq!(state, LoginButtonState::Normal);
        assert_eq!(message.as_deref(), Some("Invalid credentials"));
        assert_eq!(session.token(), None);
    }
}
