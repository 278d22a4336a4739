//! Browser adapter for the external hosted auth service.
//!
//! Client-side (hydrate) only: session lookup and logout go over HTTP via
//! `gloo-net` with credentials included, so the provider's own cookies carry
//! the session and this crate never touches a token.
//!
//! ERROR HANDLING
//! ==============
//! Any failed session lookup resolves to signed-out (with a console warning)
//! so the gate never spins forever on a dead backend.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::app::{AUTH_URL_META, PROJECT_ID_META};

use super::auth::{
    AuthConfig, AuthError, AuthHub, AuthListener, AuthProvider, AuthSnapshot, SessionStatus, Subscription,
    classify_session_status,
};
use super::types::User;

/// Provider backed by the hosted auth service.
#[derive(Clone)]
pub struct HostedAuth {
    config: AuthConfig,
    hub: AuthHub,
}

impl HostedAuth {
    /// Create the provider and start the initial session lookup.
    pub fn start(config: AuthConfig) -> Self {
        let provider = Self { config, hub: AuthHub::new(AuthSnapshot::loading()) };
        provider.refresh();
        provider
    }

    /// Read the provider location from the `<meta>` tags written by the
    /// server-rendered shell.
    pub fn config_from_document() -> Option<AuthConfig> {
        let document = web_sys::window()?.document()?;
        let read = |name: &str| {
            document
                .query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        let base_url = read(AUTH_URL_META)?;
        let project_id = read(PROJECT_ID_META)?;
        match AuthConfig::new(&base_url, &project_id) {
            Ok(config) => Some(config),
            Err(e) => {
                log::error!("auth config rejected: {e}");
                None
            }
        }
    }

    /// Re-query the session and publish the outcome.
    pub fn refresh(&self) {
        let hub = self.hub.clone();
        let url = self.config.session_url();
        leptos::task::spawn_local(async move {
            let snapshot = match fetch_session(&url).await {
                Ok(Some(user)) => AuthSnapshot::signed_in(user),
                Ok(None) => AuthSnapshot::signed_out(),
                Err(e) => {
                    log::warn!("session lookup failed: {e}");
                    AuthSnapshot::signed_out()
                }
            };
            hub.publish(snapshot);
        });
    }
}

impl AuthProvider for HostedAuth {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        self.hub.subscribe(listener)
    }

    fn login(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let here = window.location().href().unwrap_or_default();
        match self.config.login_url(&here) {
            Ok(target) => {
                if let Err(e) = window.location().set_href(&target) {
                    log::error!("sign-in redirect failed: {e:?}");
                }
            }
            Err(e) => log::error!("sign-in url invalid: {e}"),
        }
    }

    fn logout(&self) {
        let hub = self.hub.clone();
        let url = self.config.logout_url();
        leptos::task::spawn_local(async move {
            if let Err(e) = post_logout(&url).await {
                log::warn!("logout request failed: {e}");
            }
            hub.publish(AuthSnapshot::signed_out());
        });
    }
}

async fn fetch_session(url: &str) -> Result<Option<User>, AuthError> {
    let resp = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;
    match classify_session_status(resp.status())? {
        SessionStatus::SignedOut => Ok(None),
        SessionStatus::Authenticated => {
            let user = resp.json::<User>().await.map_err(|e| AuthError::Request(e.to_string()))?;
            Ok(Some(user))
        }
    }
}

async fn post_logout(url: &str) -> Result<(), AuthError> {
    let resp = Request::post(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;
    if resp.ok() { Ok(()) } else { Err(AuthError::Status(resp.status())) }
}
