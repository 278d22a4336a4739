//! Button primitive with the two visual variants the shell uses.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary button; also marks the active sidebar entry.
    #[default]
    Default,
    /// Transparent until hovered.
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
}

/// CSS class list for a button in the given variant and size.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let mut class = String::from("btn");
    class.push_str(match variant {
        ButtonVariant::Default => " btn--default",
        ButtonVariant::Ghost => " btn--ghost",
    });
    if size == ButtonSize::Small {
        class.push_str(" btn--sm");
    }
    if full_width {
        class.push_str(" btn--block");
    }
    class
}

/// Generic action button. Without `on_click` it renders but does nothing.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |_ev: leptos::ev::MouseEvent| {
        if let Some(cb) = on_click.as_ref() {
            cb.run(());
        }
    };

    view! {
        <button type="button" class=button_class(variant, size, full_width) on:click=on_click>
            {children()}
        </button>
    }
}
