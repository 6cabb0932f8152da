use api::Teacher;
use dioxus::prelude::*;

use super::common::{EmptyState, LoadingState, PageHeader, SearchForm};
use crate::format::{cycle, initials, whatsapp_link};
use crate::icons::{FaEnvelope, FaPhone, FaWhatsapp};
use crate::{use_config, use_portal, Icon};

const AVATAR_COLORS: [&str; 6] = [
    "bg-green",
    "bg-blue",
    "bg-purple",
    "bg-orange",
    "bg-pink",
    "bg-teal",
];

/// The teacher directory with contact actions.
#[component]
pub fn TeachersView() -> Element {
    let portal = use_portal();
    let prefix = use_config().contact.whatsapp_prefix;
    let mut term = use_signal(|| Option::<String>::None);

    let mut listing = use_resource(move || {
        let portal = portal.clone();
        let criterio = term();
        async move { portal.list_teachers(criterio.as_deref()).await }
    });

    let on_search = move |raw: String| {
        let next = Some(raw.trim().to_string()).filter(|t| !t.is_empty());
        if *term.peek() == next {
            listing.restart();
        } else {
            term.set(next);
        }
    };

    rsx! {
        div {
            class: "teachers-page",
            PageHeader {
                title: "Plana Docente",
                subtitle: "Conoce y contacta a tus profesores",
                SearchForm { placeholder: "Buscar docente...", on_search }
            }

            match listing.cloned() {
                None => rsx! { LoadingState { message: "Cargando docentes..." } },
                Some(teachers) if teachers.is_empty() => rsx! {
                    EmptyState {
                        message: "No se encontraron docentes",
                        failed: teachers.is_failure(),
                        on_retry: move |_| listing.restart(),
                    }
                },
                Some(teachers) => rsx! {
                    div {
                        class: "teachers-grid",
                        for (index, teacher) in teachers.data.into_iter().enumerate() {
                            TeacherCard {
                                key: "{index}",
                                teacher,
                                color: cycle(&AVATAR_COLORS, index),
                                whatsapp_prefix: prefix.clone(),
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TeacherCard(teacher: Teacher, color: String, whatsapp_prefix: String) -> Element {
    let full_name = teacher.full_name();
    let avatar = initials(&full_name);
    let subjects = teacher.subject_list();
    let whatsapp = teacher
        .phone
        .as_deref()
        .and_then(|phone| whatsapp_link(&whatsapp_prefix, phone));

    rsx! {
        div {
            class: "card teacher-card",
            div {
                class: "teacher-header",
                div { class: "teacher-avatar {color}", "{avatar}" }
                div {
                    class: "teacher-info",
                    h3 { "{full_name}" }
                    div {
                        class: "subject-badges",
                        for subject in subjects {
                            span { class: "badge", "{subject}" }
                        }
                    }
                }
            }

            div {
                class: "teacher-contact",
                if let Some(email) = teacher.email.clone() {
                    a {
                        class: "contact-item",
                        href: "mailto:{email}",
                        Icon { icon: FaEnvelope, width: 16, height: 16 }
                        span { "{email}" }
                    }
                }
                if let Some(phone) = teacher.phone.clone() {
                    a {
                        class: "contact-item",
                        href: "tel:{phone}",
                        Icon { icon: FaPhone, width: 16, height: 16 }
                        span { "{phone}" }
                    }
                }
            }

            div {
                class: "teacher-actions",
                if let Some(link) = whatsapp {
                    a {
                        class: "btn btn-outline",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { icon: FaWhatsapp, width: 16, height: 16 }
                        span { "WhatsApp" }
                    }
                }
                if let Some(email) = teacher.email.clone() {
                    a {
                        class: "btn btn-primary",
                        href: "mailto:{email}",
                        Icon { icon: FaEnvelope, width: 16, height: 16 }
                        span { "Email" }
                    }
                }
            }
        }
    }
}
