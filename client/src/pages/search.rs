//! Search view placeholder.

use leptos::prelude::*;

use crate::components::card::{Card, CardContent};
use crate::components::icon::{Icon, IconKind};

#[component]
pub fn SearchView() -> impl IntoView {
    view! {
        <section class="view" data-view="search">
            <div class="view__header">
                <h2 class="view__title">"Search & Filter"</h2>
                <p class="muted">"Find documents quickly with advanced search"</p>
            </div>
            <Card>
                <CardContent class="empty-state">
                    <Icon kind=IconKind::Search class="icon--hero"/>
                    <h3 class="empty-state__title">"Search your documents"</h3>
                    <p class="muted">"Use the search bar to find documents by name, content, or category"</p>
                </CardContent>
            </Card>
        </section>
    }
}
