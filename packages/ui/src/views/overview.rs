use dioxus::prelude::*;

use super::common::StatCard;
use super::Section;
use crate::icons::{FaArrowRight, FaBook, FaBookOpen, FaCircleCheck, FaFileLines, FaUsers};
use crate::{use_portal, use_session, Icon};

/// Dashboard home: greeting, headline counts and quick links.
#[component]
pub fn OverviewView(on_navigate: EventHandler<Section>) -> Element {
    let portal = use_portal();
    let session = use_session();
    let first_name = session().profile.first_name();

    let stats = use_resource(move || {
        let portal = portal.clone();
        async move { portal.overview().await }
    });

    let loaded = stats.cloned();
    let value = |f: fn(&api::DashboardStats) -> String| match &loaded {
        Some(s) => f(s),
        None => "...".to_string(),
    };

    rsx! {
        div {
            class: "dashboard-overview",

            section {
                class: "welcome-banner",
                div {
                    class: "welcome-content",
                    h1 { "¡Hola, {first_name}! 👋" }
                    p { "Bienvenido a tu plataforma de estudios. Continúa donde lo dejaste." }
                }
            }

            div {
                class: "stats-grid",
                StatCard {
                    label: "Libros",
                    value: value(|s| s.books.to_string()),
                    color: "bg-blue",
                    icon: rsx! { Icon { icon: FaBookOpen, width: 24, height: 24 } },
                    onclick: move |_| on_navigate.call(Section::Books),
                }
                StatCard {
                    label: "Prácticas",
                    value: value(|s| s.practices.to_string()),
                    color: "bg-purple",
                    icon: rsx! { Icon { icon: FaFileLines, width: 24, height: 24 } },
                    onclick: move |_| on_navigate.call(Section::Practices),
                }
                StatCard {
                    label: "Docentes",
                    value: value(|s| s.teachers.to_string()),
                    color: "bg-orange",
                    icon: rsx! { Icon { icon: FaUsers, width: 24, height: 24 } },
                    onclick: move |_| on_navigate.call(Section::Teachers),
                }
                StatCard {
                    label: "Asistencia",
                    value: value(|s| format!("{}%", s.attendance_percent)),
                    color: "bg-green",
                    icon: rsx! { Icon { icon: FaCircleCheck, width: 24, height: 24 } },
                    onclick: move |_| on_navigate.call(Section::Attendance),
                }
            }

            section {
                class: "quick-access",
                h2 { "Acceso Rápido" }
                div {
                    class: "quick-grid",
                    QuickCard {
                        title: "Biblioteca",
                        description: "Explora libros y recursos de estudio",
                        color: "",
                        onclick: move |_| on_navigate.call(Section::Books),
                        Icon { icon: FaBook, width: 32, height: 32 }
                    }
                    QuickCard {
                        title: "Prácticas",
                        description: "Descarga material de ejercicios",
                        color: "purple",
                        onclick: move |_| on_navigate.call(Section::Practices),
                        Icon { icon: FaFileLines, width: 32, height: 32 }
                    }
                    QuickCard {
                        title: "Docentes",
                        description: "Conoce a tu plana docente",
                        color: "orange",
                        onclick: move |_| on_navigate.call(Section::Teachers),
                        Icon { icon: FaUsers, width: 32, height: 32 }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickCard(
    title: String,
    description: String,
    color: String,
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "quick-card",
            onclick: move |_| onclick.call(()),
            div { class: "quick-icon {color}", {children} }
            div {
                class: "quick-info",
                h3 { "{title}" }
                p { "{description}" }
            }
            span { class: "quick-arrow", Icon { icon: FaArrowRight, width: 20, height: 20 } }
        }
    }
}
