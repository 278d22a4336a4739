//! Auth-provider seam between the UI and the external hosted auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI never handles tokens or sessions itself. It only observes
//! `AuthSnapshot`s pushed by a provider and asks the provider to start a
//! sign-in or end the session. `HostedAuth` (browser) and `StaticAuth`
//! (server render, tests) both sit on top of `AuthHub`.
//!
//! DESIGN
//! ======
//! `Subscription` cancels on drop, so a listener is removed exactly once no
//! matter whether the owner drops it or calls `unsubscribe`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::types::User;

/// State pushed to subscribers on every auth change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthSnapshot {
    /// Session lookup still in flight.
    pub fn loading() -> Self {
        Self { user: None, is_loading: true }
    }

    /// Lookup finished with no session.
    pub fn signed_out() -> Self {
        Self { user: None, is_loading: false }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), is_loading: false }
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

/// Errors raised while configuring or talking to the hosted provider.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid auth base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("auth base url must be http(s), got {0}")]
    UnsupportedScheme(String),

    #[error("auth project id is empty")]
    MissingProjectId,

    #[error("auth request failed: {0}")]
    Request(String),

    #[error("auth endpoint returned status {0}")]
    Status(u16),
}

/// Listener callback invoked with each snapshot.
pub type AuthListener = Box<dyn Fn(&AuthSnapshot) + Send + Sync>;

/// Contract every auth provider fulfills.
pub trait AuthProvider: Send + Sync {
    /// Register `listener`. The current snapshot is delivered immediately,
    /// then again on every change until the returned handle is dropped.
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    /// Start the provider's own sign-in flow.
    fn login(&self);

    /// End the current session.
    fn logout(&self);
}

/// Cloneable, context-friendly handle to the active provider.
#[derive(Clone)]
pub struct AuthHandle(Arc<dyn AuthProvider>);

impl AuthHandle {
    pub fn new(provider: impl AuthProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthSnapshot) + Send + Sync + 'static) -> Subscription {
        self.0.subscribe(Box::new(listener))
    }

    pub fn login(&self) {
        self.0.login();
    }

    pub fn logout(&self) {
        self.0.logout();
    }
}

impl std::fmt::Debug for AuthHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthHandle(..)")
    }
}

/// Unsubscribe handle returned by `AuthProvider::subscribe`.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// What a session-lookup HTTP status means for the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// 2xx: the body carries the signed-in user.
    Authenticated,
    /// 401/403: no session.
    SignedOut,
}

/// Map the status of `GET /api/auth/me`.
///
/// # Errors
///
/// Any status other than 2xx, 401, or 403 is an error; callers treat it as
/// signed out after logging.
pub fn classify_session_status(status: u16) -> Result<SessionStatus, AuthError> {
    match status {
        401 | 403 => Ok(SessionStatus::SignedOut),
        200..=299 => Ok(SessionStatus::Authenticated),
        other => Err(AuthError::Status(other)),
    }
}

// =============================================================================
// HUB
// =============================================================================

type SharedListener = Arc<dyn Fn(&AuthSnapshot) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    snapshot: AuthSnapshot,
    listeners: Vec<(u64, SharedListener)>,
}

/// Listener registry holding the latest snapshot.
///
/// Listeners run outside the lock so they may call back into the hub.
#[derive(Clone, Default)]
pub struct AuthHub {
    inner: Arc<Mutex<HubInner>>,
}

impl AuthHub {
    pub fn new(initial: AuthSnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner { snapshot: initial, ..HubInner::default() })),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Store `snapshot` and deliver it to every listener.
    pub fn publish(&self, snapshot: AuthSnapshot) {
        let listeners: Vec<SharedListener> = {
            let mut inner = self.lock();
            inner.snapshot = snapshot.clone();
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }

    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let listener: SharedListener = Arc::from(listener);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.snapshot.clone())
        };
        listener(&current);

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .listeners
                    .retain(|(lid, _)| *lid != id);
            }
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// STATIC PROVIDER
// =============================================================================

/// Provider with no backend behind it.
///
/// Used for server rendering, where the session is unknown and the gate
/// stays on its loading screen until the browser provider takes over.
#[derive(Clone, Default)]
pub struct StaticAuth {
    hub: AuthHub,
}

impl StaticAuth {
    pub fn new(initial: AuthSnapshot) -> Self {
        Self { hub: AuthHub::new(initial) }
    }

    pub fn hub(&self) -> &AuthHub {
        &self.hub
    }
}

impl AuthProvider for StaticAuth {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        self.hub.subscribe(listener)
    }

    fn login(&self) {}

    fn logout(&self) {
        self.hub.publish(AuthSnapshot::signed_out());
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Location of the hosted auth service.
///
/// Built by the server from its environment and handed to the browser via
/// `<meta>` tags in the HTML shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Origin (plus optional path prefix) of the auth service, without a
    /// trailing slash.
    pub base_url: String,
    pub project_id: String,
}

impl AuthConfig {
    /// Validate and normalize a provider location.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute http(s) URL or
    /// `project_id` is blank.
    pub fn new(base_url: &str, project_id: &str) -> Result<Self, AuthError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let parsed = url::Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AuthError::UnsupportedScheme(parsed.scheme().to_owned()));
        }
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(AuthError::MissingProjectId);
        }
        Ok(Self { base_url: base_url.to_owned(), project_id: project_id.to_owned() })
    }

    /// Endpoint returning the current session's user.
    pub fn session_url(&self) -> String {
        format!("{}/api/auth/me", self.base_url)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/api/auth/logout", self.base_url)
    }

    /// Hosted sign-in page that returns the browser to `redirect_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored base URL no longer parses.
    pub fn login_url(&self, redirect_url: &str) -> Result<String, AuthError> {
        let mut url = url::Url::parse(&format!("{}/auth/login", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("project_id", &self.project_id)
            .append_pair("redirect_url", redirect_url);
        Ok(url.into())
    }
}
