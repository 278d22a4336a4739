//! Card layout primitives.

use leptos::prelude::*;

fn with_extra(base: &str, extra: &str) -> String {
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=with_extra("card", class)>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=with_extra("card__header", class)>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <h3 class=with_extra("card__title", class)>{children()}</h3> }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="card__description">{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=with_extra("card__content", class)>{children()}</div> }
}
