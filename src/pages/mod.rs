//! Screens
//!
//! One module per routed screen.

mod admin;
mod home;
mod landing;
mod login;
mod reset_password;
mod todos;

pub use admin::AdminPage;
pub use home::HomePage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use reset_password::ResetPasswordPage;
pub use todos::TodosPage;

use crate::models::Role;

/// Every routable screen and its path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    ResetPassword,
    Home,
    Todos,
    Admin,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Login => "/login",
            Page::ResetPassword => "/reset-password",
            Page::Home => "/home",
            Page::Todos => "/todo",
            Page::Admin => "/admin",
        }
    }

    /// Where a fresh session lands, by role
    pub fn post_login(role: Role) -> Page {
        if role.is_admin() {
            Page::Admin
        } else {
            Page::Home
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_land_on_the_admin_view() {
        assert_eq!(Page::post_login(Role::Admin), Page::Admin);
        assert_eq!(Page::post_login(Role::User), Page::Home);
    }

    #[test]
    fn paths_are_stable() {
        assert_eq!(Page::Landing.path(), "/");
        assert_eq!(Page::Login.path(), "/login");
        assert_eq!(Page::ResetPassword.path(), "/reset-password");
        assert_eq!(Page::Home.path(), "/home");
        assert_eq!(Page::Todos.path(), "/todo");
        assert_eq!(Page::Admin.path(), "/admin");
    }
}
