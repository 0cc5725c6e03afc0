/// Login state of the current viewer together with the URL
/// that switches to the other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    LoggedIn { logout_url: String },
    LoggedOut { login_url: String },
}

impl LoginStatus {
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            Self::LoggedIn { logout_url } => logout_url,
            Self::LoggedOut { login_url } => login_url,
        }
    }
}
