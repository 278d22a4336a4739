//! Document library view (empty state).

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::card::{Card, CardContent};
use crate::components::icon::{Icon, IconKind};

#[component]
pub fn LibraryView() -> impl IntoView {
    view! {
        <section class="view" data-view="library">
            <div class="view__header">
                <h2 class="view__title">"Document Library"</h2>
                <p class="muted">"Browse and manage your documents"</p>
            </div>
            <Card>
                <CardContent class="empty-state">
                    <Icon kind=IconKind::FileText class="icon--hero"/>
                    <h3 class="empty-state__title">"No documents yet"</h3>
                    <p class="muted">"Upload your first document to get started"</p>
                    <Button>"Upload Document"</Button>
                </CardContent>
            </Card>
        </section>
    }
}
