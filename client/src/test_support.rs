//! Test doubles shared by unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::net::auth::{AuthHub, AuthListener, AuthProvider, AuthSnapshot, Subscription};
#[cfg(feature = "ssr")]
use crate::{net::auth::AuthHandle, state::auth::AuthState, state::ui::UiState};

/// Provider that counts calls and unsubscribes.
#[derive(Clone, Default)]
pub struct CountingAuth {
    hub: AuthHub,
    logins: Arc<AtomicUsize>,
    logouts: Arc<AtomicUsize>,
    unsubscribes: Arc<AtomicUsize>,
}

impl CountingAuth {
    pub fn new(initial: AuthSnapshot) -> Self {
        Self { hub: AuthHub::new(initial), ..Self::default() }
    }

    pub fn hub(&self) -> &AuthHub {
        &self.hub
    }

    pub fn logins(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    pub fn logouts(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }

    pub fn unsubscribes(&self) -> usize {
        self.unsubscribes.load(Ordering::SeqCst)
    }
}

impl AuthProvider for CountingAuth {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        let inner = self.hub.subscribe(listener);
        let unsubscribes = Arc::clone(&self.unsubscribes);
        Subscription::new(move || {
            drop(inner);
            unsubscribes.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn login(&self) {
        self.logins.fetch_add(1, Ordering::SeqCst);
    }

    fn logout(&self) {
        self.logouts.fetch_add(1, Ordering::SeqCst);
        self.hub.publish(AuthSnapshot::signed_out());
    }
}

/// Render `view` to HTML with the gate's contexts in place.
#[cfg(feature = "ssr")]
pub fn render_html<V, F>(provider: &CountingAuth, auth: AuthState, ui: UiState, view: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::IntoView,
{
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| {
        provide_context(AuthHandle::new(provider.clone()));
        provide_context(RwSignal::new(auth));
        provide_context(RwSignal::new(ui));
        view().to_html()
    })
}

/// Opening tags (`<tag ...>`) of every `tag` element in `html`.
#[cfg(feature = "ssr")]
pub fn opening_tags<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter_map(|(start, _)| {
            let rest = &html[start..];
            let after = rest[open.len()..].chars().next()?;
            if !(after.is_whitespace() || after == '>' || after == '/') {
                return None;
            }
            rest.find('>').map(|end| &rest[..=end])
        })
        .collect()
}
