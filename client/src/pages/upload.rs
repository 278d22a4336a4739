//! Upload view: a drop zone with no upload pipeline behind it yet.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::card::{Card, CardContent};
use crate::components::icon::{Icon, IconKind};
use crate::state::library::upload_hint;

#[component]
pub fn UploadView() -> impl IntoView {
    view! {
        <section class="view" data-view="upload">
            <div class="view__header">
                <h2 class="view__title">"Upload Documents"</h2>
                <p class="muted">"Add new PDF and Word documents to your library"</p>
            </div>
            <Card>
                <CardContent class="padded">
                    <div class="drop-zone empty-state">
                        <Icon kind=IconKind::Upload class="icon--hero"/>
                        <h3 class="empty-state__title">"Drag and drop files here"</h3>
                        <p class="muted">"or click to browse files"</p>
                        <Button>"Choose Files"</Button>
                        <p class="muted tiny drop-zone__hint">{upload_hint()}</p>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}
