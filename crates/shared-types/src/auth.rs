use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned designation that decides where a user lands after login.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
    /// Any role string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tab of the login page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    Student,
    Admin,
}

impl LoginMode {
    /// The role a successful login must carry for this tab to navigate.
    pub fn expected_role(&self) -> Role {
        match self {
            LoginMode::Student => Role::Student,
            LoginMode::Admin => Role::Admin,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoginMode::Student => "Student",
            LoginMode::Admin => "Admin",
        }
    }
}

/// Body of `POST /login` on the campus backend.
///
/// The admin tab sends its username in `email`; the backend only knows
/// one credential shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /login`.
///
/// The backend omits `message` on success and `role` on failure, so both
/// are optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
