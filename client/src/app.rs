//! Root application component: HTML shell, context providers, and the
//! session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the only subscription to the auth provider. Every snapshot is
//! mirrored into `RwSignal<AuthState>`; `SessionGate` turns that into one of
//! three screens. The subscription is dropped when the owner is cleaned up.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::auth::{AuthConfig, AuthHandle, StaticAuth};
use crate::pages::{loading::LoadingPage, shell::ShellPage, sign_in::SignInPage};
use crate::state::auth::{AuthState, Gate, gate};
use crate::state::ui::UiState;

/// `<meta>` name carrying the auth service base URL.
pub const AUTH_URL_META: &str = "documanager:auth-url";
/// `<meta>` name carrying the auth project id.
pub const PROJECT_ID_META: &str = "documanager:project-id";

/// HTML shell rendered on the server for SSR + hydration.
///
/// When the server provides an `AuthConfig` context it is written into
/// `<meta>` tags for the browser-side provider to pick up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let auth_config = use_context::<AuthConfig>();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {auth_config.map(|cfg| view! {
                    <meta name=AUTH_URL_META content=cfg.base_url/>
                    <meta name=PROJECT_ID_META content=cfg.project_id/>
                })}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Provider used when none was placed in context by the caller.
///
/// In the browser this is the hosted provider configured from the shell's
/// `<meta>` tags; on the server the session is unknown, so a static provider
/// keeps the gate on its loading screen.
fn default_provider() -> AuthHandle {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::auth::AuthSnapshot;
        use crate::net::hosted::HostedAuth;

        match HostedAuth::config_from_document() {
            Some(config) => AuthHandle::new(HostedAuth::start(config)),
            None => {
                log::error!("auth provider not configured; showing sign-in without a backend");
                // Start from loading like the server render did, then settle after hydration.
                let fallback = StaticAuth::default();
                let hub = fallback.hub().clone();
                leptos::task::spawn_local(async move { hub.publish(AuthSnapshot::signed_out()) });
                AuthHandle::new(fallback)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        AuthHandle::new(StaticAuth::default())
    }
}

/// Mirror provider snapshots into `auth` until the current owner is cleaned up.
pub fn install_auth_listener(provider: &AuthHandle, auth: RwSignal<AuthState>) {
    let subscription = provider.subscribe(move |snapshot| auth.set(AuthState::from(snapshot)));
    on_cleanup(move || subscription.unsubscribe());
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let provider = use_context::<AuthHandle>().unwrap_or_else(default_provider);
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(provider.clone());
    provide_context(auth);
    provide_context(ui);

    install_auth_listener(&provider, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/documanager.css"/>
        <Title text="DocuManager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionGate/>
            </Routes>
        </Router>
    }
}

/// Loading spinner, sign-in card, or the shell, per the current auth state.
#[component]
pub fn SessionGate() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let screen = Memo::new(move |_| auth.with(gate));

    move || match screen.get() {
        Gate::Loading => view! { <LoadingPage/> }.into_any(),
        Gate::SignIn => view! { <SignInPage/> }.into_any(),
        Gate::Shell => view! { <ShellPage/> }.into_any(),
    }
}
