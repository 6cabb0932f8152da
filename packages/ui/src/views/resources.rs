use api::{Listing, Resource, ResourceKind};
use dioxus::prelude::*;

use super::common::{EmptyState, LoadingState, PageHeader, SearchForm};
use crate::format::{cycle, long_date};
use crate::icons::{FaArrowUpRightFromSquare, FaBook, FaCalendar, FaDownload, FaFileLines};
use crate::{use_portal, Icon};

const COVER_GRADIENTS: [&str; 4] = [
    "gradient-green",
    "gradient-blue",
    "gradient-purple",
    "gradient-orange",
];

/// Load resources of `kind`, re-querying the backend whenever a search is submitted.
fn use_resource_listing(
    kind: ResourceKind,
) -> (Option<Listing<Resource>>, Callback<String>, Callback<()>) {
    let portal = use_portal();
    let mut term = use_signal(|| Option::<String>::None);

    let mut listing = use_resource(move || {
        let portal = portal.clone();
        let criterio = term();
        async move { portal.list_resources(kind, criterio.as_deref()).await }
    });

    let search = use_callback(move |raw: String| {
        let next = Some(raw.trim().to_string()).filter(|t| !t.is_empty());
        if *term.peek() == next {
            listing.restart();
        } else {
            term.set(next);
        }
    });
    let retry = use_callback(move |_: ()| listing.restart());

    (listing.cloned(), search, retry)
}

/// The virtual library.
#[component]
pub fn BooksView() -> Element {
    let (books, search, retry) = use_resource_listing(ResourceKind::Book);

    rsx! {
        div {
            class: "books-page",
            PageHeader {
                title: "Biblioteca Virtual",
                subtitle: "Material bibliográfico seleccionado para tu preparación",
                SearchForm { placeholder: "Buscar libro...", on_search: search }
            }

            match books {
                None => rsx! { LoadingState { message: "Cargando libros..." } },
                Some(listing) if listing.is_empty() => rsx! {
                    EmptyState {
                        message: "No se encontraron libros",
                        failed: listing.is_failure(),
                        on_retry: retry,
                    }
                },
                Some(listing) => rsx! {
                    div {
                        class: "books-grid",
                        for (index, book) in listing.data.into_iter().enumerate() {
                            BookCard { key: "{index}", book, cover: cycle(&COVER_GRADIENTS, index) }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BookCard(book: Resource, cover: String) -> Element {
    let category = book
        .kind
        .clone()
        .unwrap_or_else(|| ResourceKind::Book.default_label().to_string());
    let title = book.title.clone().unwrap_or_else(|| "Sin Título".to_string());
    let description = book.description.clone().unwrap_or_else(|| "Sin descripción".to_string());

    rsx! {
        div {
            class: "book-card",
            div {
                class: "book-cover {cover}",
                Icon { icon: FaBook, width: 40, height: 40 }
            }
            div {
                class: "book-content",
                span { class: "book-category", "{category}" }
                h3 { class: "book-title", "{title}" }
                p { class: "book-description", "{description}" }
                ResourceLink {
                    link: book.link.clone(),
                    open_label: "Abrir Recurso",
                    missing_label: "No disponible",
                    block: true,
                }
            }
        }
    }
}

/// Practice documents and past exams.
#[component]
pub fn PracticesView() -> Element {
    let (practices, search, retry) = use_resource_listing(ResourceKind::Practice);

    rsx! {
        div {
            class: "practices-page",
            PageHeader {
                title: "Prácticas y Exámenes",
                subtitle: "Material de práctica para tu preparación",
                SearchForm { placeholder: "Buscar práctica...", on_search: search }
            }

            match practices {
                None => rsx! { LoadingState { message: "Cargando prácticas..." } },
                Some(listing) if listing.is_empty() => rsx! {
                    EmptyState {
                        message: "No se encontraron prácticas",
                        failed: listing.is_failure(),
                        on_retry: retry,
                    }
                },
                Some(listing) => rsx! {
                    div {
                        class: "practices-list",
                        for (index, practice) in listing.data.into_iter().enumerate() {
                            PracticeItem { key: "{index}", practice }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn PracticeItem(practice: Resource) -> Element {
    let title = practice.title.clone().unwrap_or_else(|| "Documento sin título".to_string());
    let description = practice
        .description
        .clone()
        .unwrap_or_else(|| "Sin descripción".to_string());
    let registered = long_date(practice.registered_at.as_deref());
    let kind = practice
        .kind
        .clone()
        .unwrap_or_else(|| ResourceKind::Practice.default_label().to_string());

    rsx! {
        div {
            class: "practice-item",
            div {
                class: "practice-icon",
                Icon { icon: FaFileLines, width: 24, height: 24 }
            }
            div {
                class: "practice-info",
                h3 { "{title}" }
                p { "{description}" }
                div {
                    class: "practice-meta",
                    span {
                        class: "meta-item",
                        Icon { icon: FaCalendar, width: 14, height: 14 }
                        "{registered}"
                    }
                    span { class: "practice-type", "{kind}" }
                }
            }
            ResourceLink { link: practice.link.clone(), open_label: "Abrir", missing_label: "N/D" }
        }
    }
}

/// Opens the resource in a new tab, or a disabled button when there is no link.
#[component]
fn ResourceLink(
    link: Option<String>,
    open_label: String,
    missing_label: String,
    #[props(default)] block: bool,
) -> Element {
    let width = if block { " btn-block" } else { "" };
    match link {
        Some(href) => rsx! {
            a {
                class: "btn btn-primary{width}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                span { "{open_label}" }
            }
        },
        None => rsx! {
            button {
                class: "btn btn-primary{width}",
                disabled: true,
                Icon { icon: FaDownload, width: 16, height: 16 }
                span { "{missing_label}" }
            }
        },
    }
}
