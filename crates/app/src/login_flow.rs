//! What the login page does with an answer from the `login` server function.
//!
//! Kept apart from the page so the decision table can be tested without
//! rendering anything.

use shared_types::{LoginMode, LoginResponse, Role};
use std::time::Duration;

use crate::delay::sleep;
use crate::routes::Route;

/// Shown for any failure to get an answer from the backend.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Shown on success when the backend sent no message of its own.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Login successful. Redirecting...";

/// Pause between showing the success message and navigating.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    pub fn class(&self) -> &'static str {
        match self {
            MessageTone::Success => "success-msg",
            MessageTone::Error => "error-msg",
        }
    }
}

/// The banner under the active form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginMessage {
    pub tone: MessageTone,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials accepted for the active tab; navigate after the delay.
    Redirect { message: String, role: Role },
    /// The backend refused the credentials.
    Rejected { message: String },
    /// Credentials accepted, but the account belongs to the other tab.
    RoleMismatch { expected: Role, actual: Option<Role> },
    /// No usable answer from the backend.
    NetworkError,
}

impl LoginOutcome {
    /// Decide what to do with the result of a login submitted from `mode`.
    pub fn resolve<E>(mode: LoginMode, result: Result<LoginResponse, E>) -> Self {
        let Ok(response) = result else {
            return LoginOutcome::NetworkError;
        };

        if !response.success {
            return LoginOutcome::Rejected {
                message: response.message,
            };
        }

        let expected = mode.expected_role();
        if response.role != Some(expected) {
            return LoginOutcome::RoleMismatch {
                expected,
                actual: response.role,
            };
        }

        let message = if response.message.is_empty() {
            DEFAULT_SUCCESS_MESSAGE.to_string()
        } else {
            response.message
        };
        LoginOutcome::Redirect {
            message,
            role: expected,
        }
    }

    /// Role whose area to open after [`REDIRECT_DELAY`], if any.
    pub fn redirect_role(&self) -> Option<Role> {
        match self {
            LoginOutcome::Redirect { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// A redirecting outcome keeps both forms disabled until the page is left,
    /// so a second submit cannot schedule another navigation.
    pub fn keeps_form_locked(&self) -> bool {
        self.redirect_role().is_some()
    }

    pub fn message(&self) -> LoginMessage {
        match self {
            LoginOutcome::Redirect { message, .. } => LoginMessage {
                tone: MessageTone::Success,
                text: message.clone(),
            },
            LoginOutcome::Rejected { message } => LoginMessage {
                tone: MessageTone::Error,
                text: message.clone(),
            },
            LoginOutcome::RoleMismatch { expected, actual } => {
                let text = match actual {
                    Some(role @ (Role::Student | Role::Admin)) => format!(
                        "This account is registered as {role}, not {expected}. Please use the {} tab.",
                        tab_name(*role)
                    ),
                    _ => format!("This account does not have {expected} access."),
                };
                LoginMessage {
                    tone: MessageTone::Error,
                    text,
                }
            }
            LoginOutcome::NetworkError => LoginMessage {
                tone: MessageTone::Error,
                text: NETWORK_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

/// Wait out [`REDIRECT_DELAY`], then hand the role's area to `push`.
/// Outcomes that do not redirect return `false` at once.
pub async fn redirect_after(outcome: &LoginOutcome, mut push: impl FnMut(Route)) -> bool {
    let Some(target) = outcome.redirect_role().and_then(Route::home_for) else {
        return false;
    };
    sleep(REDIRECT_DELAY).await;
    push(target);
    true
}

fn tab_name(role: Role) -> &'static str {
    match role {
        Role::Admin => LoginMode::Admin.display_name(),
        Role::Student | Role::Unknown => LoginMode::Student.display_name(),
    }
}
