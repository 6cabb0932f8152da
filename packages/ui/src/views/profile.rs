use dioxus::prelude::*;

use super::common::PageHeader;
use crate::use_session;

/// Profile fields shown on the profile page, in order.
const FIELDS: [(&str, &str); 7] = [
    ("nombres", "Nombres"),
    ("ap_paterno", "Apellido paterno"),
    ("ap_materno", "Apellido materno"),
    ("dni", "DNI"),
    ("celular", "Celular"),
    ("email", "Correo"),
    ("rol", "Rol"),
];

/// Read-only view of the stored student profile.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let profile = session().profile;
    let initials = profile.initials();
    let display_name = profile.display_name();

    let rows: Vec<(&str, String)> = FIELDS
        .iter()
        .map(|(key, label)| {
            let value = profile.get_str(key).unwrap_or_else(|| "No registrado".to_string());
            (*label, value)
        })
        .collect();

    rsx! {
        div {
            class: "profile-page",
            PageHeader { title: "Mi Perfil", subtitle: "Datos registrados en la plataforma" }
            div {
                class: "card profile-card",
                div {
                    class: "profile-header",
                    div { class: "avatar large", "{initials}" }
                    div {
                        h2 { "{display_name}" }
                        span { class: "user-role", "Estudiante CEPRE" }
                    }
                }
                dl {
                    class: "profile-fields",
                    for (label, value) in rows {
                        div {
                            key: "{label}",
                            class: "profile-field",
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
