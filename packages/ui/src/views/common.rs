//! Small building blocks shared by the dashboard pages.

use dioxus::prelude::*;

use crate::icons::{FaArrowsRotate, FaCircleExclamation, FaMagnifyingGlass, FaSpinner};
use crate::Icon;

/// Page title, subtitle and an optional trailing control (usually a search form).
#[component]
pub fn PageHeader(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page-header",
            div {
                h1 { "{title}" }
                p { "{subtitle}" }
            }
            {children}
        }
    }
}

/// A single statistic with a colored icon badge.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    /// Icon background class, e.g. `"bg-blue"`.
    color: String,
    icon: Element,
    #[props(default)] highlight: bool,
    #[props(default)] onclick: Option<EventHandler<()>>,
) -> Element {
    let mut class = String::from("stat-card");
    if highlight {
        class.push_str(" highlight");
    }
    if onclick.is_some() {
        class.push_str(" clickable");
    }
    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            div { class: "stat-icon {color}", {icon} }
            div {
                class: "stat-info",
                span { class: "stat-label", "{label}" }
                span { class: "stat-value", "{value}" }
            }
        }
    }
}

/// Search input plus submit button. Submitting calls `on_search` with the raw term.
#[component]
pub fn SearchForm(placeholder: String, on_search: EventHandler<String>) -> Element {
    let mut term = use_signal(String::new);

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_search.call(term());
            },
            div {
                class: "input-with-icon",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: term(),
                    oninput: move |evt: FormEvent| term.set(evt.value()),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Buscar" }
        }
    }
}

#[component]
pub fn LoadingState(message: String) -> Element {
    rsx! {
        div {
            class: "loading-state",
            span { class: "spin", Icon { icon: FaSpinner, width: 40, height: 40 } }
            span { "{message}" }
        }
    }
}

/// Empty result. When `failed` is set a retry button is shown as well.
#[component]
pub fn EmptyState(
    message: String,
    #[props(default)] failed: bool,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaCircleExclamation, width: 48, height: 48 }
            p { "{message}" }
            if failed {
                p { class: "empty-state-hint", "No se pudo conectar con el servidor." }
                if let Some(handler) = on_retry {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| handler.call(()),
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        span { "Reintentar" }
                    }
                }
            }
        }
    }
}
