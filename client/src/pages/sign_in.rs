//! Sign-in card shown when the provider reports no session.
//!
//! The card owns no credentials UI: the button hands off to the provider's
//! hosted sign-in flow.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::net::auth::AuthHandle;

/// One click, one `login` call.
pub(crate) fn request_sign_in(provider: &AuthHandle) {
    provider.login();
}

/// Click handler for the Sign In button.
pub(crate) fn sign_in_callback(provider: AuthHandle) -> Callback<()> {
    Callback::new(move |()| request_sign_in(&provider))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let on_sign_in = sign_in_callback(expect_context::<AuthHandle>());

    view! {
        <div class="center-page">
            <Card class="sign-in-card">
                <CardHeader class="text-center">
                    <CardTitle class="sign-in-card__title">"DocuManager"</CardTitle>
                    <CardDescription>"Professional Document Management System"</CardDescription>
                </CardHeader>
                <CardContent class="text-center">
                    <p class="muted sign-in-card__prompt">"Please sign in to access your documents"</p>
                    <Button full_width=true on_click=on_sign_in>
                        "Sign In"
                    </Button>
                </CardContent>
            </Card>
        </div>
    }
}
