//! Authenticated shell: sidebar plus the currently selected view.
//!
//! DESIGN
//! ======
//! The main area is a single reactive branch on `UiState::view`, so switching
//! views unmounts the previous one rather than hiding it.

#[cfg(all(test, feature = "ssr"))]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::dashboard::DashboardView;
use crate::pages::library::LibraryView;
use crate::pages::search::SearchView;
use crate::pages::upload::UploadView;
use crate::state::ui::{UiState, View};

#[component]
pub fn ShellPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = Memo::new(move |_| ui.with(|u| u.view));

    view! {
        <div class="shell">
            <Sidebar/>
            <main class="shell__main">
                {move || match current.get() {
                    View::Dashboard => view! { <DashboardView/> }.into_any(),
                    View::Library => view! { <LibraryView/> }.into_any(),
                    View::Upload => view! { <UploadView/> }.into_any(),
                    View::Search => view! { <SearchView/> }.into_any(),
                }}
            </main>
        </div>
    }
}
