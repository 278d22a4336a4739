//! Dashboard view: library stat cards and a getting-started checklist.
//!
//! No document listing is fetched yet, so the cards summarize an empty
//! library.

use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::icon::{Icon, IconKind};
use crate::state::library::LibrarySummary;

#[component]
pub fn DashboardView() -> impl IntoView {
    let summary = LibrarySummary::from_documents(&[], &[]);

    view! {
        <section class="view" data-view="dashboard">
            <div class="view__header">
                <h2 class="view__title">"Dashboard"</h2>
                <p class="muted">"Welcome to your document management system"</p>
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Total Documents"
                    icon=IconKind::FileText
                    value=summary.total_documents.to_string()
                    caption=summary.documents_caption()
                />
                <StatCard
                    title="Storage Used"
                    icon=IconKind::FolderOpen
                    value=summary.storage_label()
                    caption="of unlimited storage"
                />
                <StatCard
                    title="Categories"
                    icon=IconKind::Settings
                    value=summary.categories.to_string()
                    caption=summary.categories_caption()
                />
                <StatCard
                    title="Recent Activity"
                    icon=IconKind::Upload
                    value=summary.actions_today.to_string()
                    caption="actions today"
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Getting Started"</CardTitle>
                    <CardDescription>"Start managing your documents efficiently"</CardDescription>
                </CardHeader>
                <CardContent class="steps">
                    <Step
                        icon=IconKind::Upload
                        tone="primary"
                        title="Upload your first document"
                        detail="Start by uploading PDF or Word documents"
                    />
                    <Step
                        icon=IconKind::FolderOpen
                        tone="accent"
                        title="Organize with categories"
                        detail="Create categories to keep your documents organized"
                    />
                    <Step
                        icon=IconKind::Search
                        tone="secondary"
                        title="Search and find quickly"
                        detail="Use powerful search to find documents instantly"
                    />
                </CardContent>
            </Card>
        </section>
    }
}

#[component]
fn StatCard(title: &'static str, icon: IconKind, value: String, caption: &'static str) -> impl IntoView {
    view! {
        <Card>
            <CardHeader class="stat-card__header">
                <CardTitle class="stat-card__title">{title}</CardTitle>
                <Icon kind=icon class="muted"/>
            </CardHeader>
            <CardContent>
                <div class="stat-card__value">{value}</div>
                <p class="muted small">{caption}</p>
            </CardContent>
        </Card>
    }
}

#[component]
fn Step(icon: IconKind, tone: &'static str, title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="step">
            <div class=format!("step__badge step__badge--{tone}")>
                <Icon kind=icon/>
            </div>
            <div>
                <h4 class="step__title">{title}</h4>
                <p class="muted small">{detail}</p>
            </div>
        </div>
    }
}
