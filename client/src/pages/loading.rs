//! Full-screen spinner shown while the auth provider resolves the session.

use leptos::prelude::*;

#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="center-page" role="status">
            <div class="center-page__stack">
                <div class="spinner" aria-hidden="true"></div>
                <p class="muted">"Loading DocuManager..."</p>
            </div>
        </div>
    }
}
