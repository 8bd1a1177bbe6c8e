pub mod admin;
pub mod auth;
pub mod error;
pub mod feature_flags;
pub mod student;

pub use admin::*;
pub use auth::*;
pub use error::*;
pub use feature_flags::*;
pub use student::*;
