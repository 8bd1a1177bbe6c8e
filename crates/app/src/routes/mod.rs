pub mod admin;
pub mod login;
pub mod not_found;
pub mod student;

use dioxus::prelude::*;
use shared_types::Role;

use admin::AdminDashboard;
use login::Login;
use not_found::NotFound;
use student::StudentDashboard;

/// Application routes. The student and admin areas are reachable by URL;
/// nothing guards them.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/student")]
    StudentDashboard {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing area for a signed-in role.
    pub fn home_for(role: Role) -> Option<Route> {
        match role {
            Role::Student => Some(Route::StudentDashboard {}),
            Role::Admin => Some(Route::AdminDashboard {}),
            Role::Unknown => None,
        }
    }
}
