//! Fixed left sidebar: brand header, view navigation, and user panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes the selected view into `UiState`; reads the signed-in user from
//! `AuthState`. Sign-out goes straight to the auth provider, whose next
//! snapshot flips the session gate back to the sign-in card.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant, button_class};
use crate::components::icon::{Icon, IconKind};
use crate::net::auth::AuthHandle;
use crate::state::auth::{AuthState, user_email};
use crate::state::ui::{UiState, View};

/// Variant for a navigation entry: filled when it is the current view.
pub fn nav_variant(current: View, item: View) -> ButtonVariant {
    if current == item { ButtonVariant::Default } else { ButtonVariant::Ghost }
}

fn nav_icon(view: View) -> IconKind {
    match view {
        View::Dashboard => IconKind::FileText,
        View::Library => IconKind::FolderOpen,
        View::Upload => IconKind::Upload,
        View::Search => IconKind::Search,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__inner">
                <div class="sidebar__header">
                    <h1 class="sidebar__brand">"DocuManager"</h1>
                    <p class="sidebar__tagline">"Document Management"</p>
                </div>
                <nav class="sidebar__nav">
                    {View::ALL.into_iter().map(|view| view! { <NavButton view=view/> }).collect_view()}
                </nav>
                <UserPanel/>
            </div>
        </aside>
    }
}

#[component]
fn NavButton(view: View) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let class = move || {
        let variant = nav_variant(ui.with(|u| u.view), view);
        format!("{} sidebar__nav-item", button_class(variant, ButtonSize::Default, true))
    };

    view! {
        <button
            type="button"
            class=class
            data-view=view.id()
            aria-current=move || ui.with(|u| u.is_active(view)).then_some("page")
            on:click=move |_| ui.update(|u| u.view = view)
        >
            <Icon kind=nav_icon(view) class="icon--inline"/>
            {view.label()}
        </button>
    }
}

#[component]
fn UserPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let provider = expect_context::<AuthHandle>();
    let email = move || auth.with(|a| user_email(a).map(str::to_owned).unwrap_or_default());
    let on_sign_out = Callback::new(move |()| provider.logout());

    view! {
        <div class="sidebar__user">
            <div class="user-panel">
                <div class="user-panel__avatar">
                    <Icon kind=IconKind::User/>
                </div>
                <div class="user-panel__text">
                    <p class="user-panel__email">{email}</p>
                    <p class="user-panel__role">"User"</p>
                </div>
            </div>
            <Button variant=ButtonVariant::Ghost size=ButtonSize::Small full_width=true on_click=on_sign_out>
                <Icon kind=IconKind::LogOut class="icon--inline"/>
                "Sign Out"
            </Button>
        </div>
    }
}
