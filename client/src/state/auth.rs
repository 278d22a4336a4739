//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the auth-provider listener installed in `App`; read by the
//! session gate and the sidebar user panel.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::auth::AuthSnapshot;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl From<&AuthSnapshot> for AuthState {
    fn from(snapshot: &AuthSnapshot) -> Self {
        Self { user: snapshot.user.clone(), loading: snapshot.is_loading }
    }
}

/// Which top-level screen the session gate shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Loading,
    SignIn,
    Shell,
}

/// Loading wins over everything; otherwise the presence of a user decides.
pub fn gate(state: &AuthState) -> Gate {
    if state.loading {
        Gate::Loading
    } else if state.user.is_some() {
        Gate::Shell
    } else {
        Gate::SignIn
    }
}

/// Email shown in the user panel, verbatim.
pub fn user_email(state: &AuthState) -> Option<&str> {
    state.user.as_ref().map(|u| u.email.as_str())
}
