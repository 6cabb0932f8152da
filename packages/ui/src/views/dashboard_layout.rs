use dioxus::prelude::*;

use crate::icons::{
    FaBars, FaBook, FaCalendarCheck, FaFileLines, FaHouse, FaRightFromBracket, FaUser, FaUsers,
    FaXmark,
};
use crate::{sign_out, use_portal, use_session, Icon};

/// Dashboard sections, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Overview,
    Books,
    Practices,
    Teachers,
    Attendance,
    Profile,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Books,
        Section::Practices,
        Section::Teachers,
        Section::Attendance,
        Section::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Inicio",
            Section::Books => "Libros",
            Section::Practices => "Prácticas",
            Section::Teachers => "Docentes",
            Section::Attendance => "Asistencia",
            Section::Profile => "Perfil",
        }
    }
}

#[component]
fn SectionIcon(section: Section) -> Element {
    match section {
        Section::Overview => rsx! { Icon { icon: FaHouse, width: 18, height: 18 } },
        Section::Books => rsx! { Icon { icon: FaBook, width: 18, height: 18 } },
        Section::Practices => rsx! { Icon { icon: FaFileLines, width: 18, height: 18 } },
        Section::Teachers => rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
        Section::Attendance => rsx! { Icon { icon: FaCalendarCheck, width: 18, height: 18 } },
        Section::Profile => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
    }
}

/// Shared dashboard chrome: sidebar menu, top bar and the routed content.
///
/// Platform packages pass the active section, navigation callbacks and an
/// `Outlet` as children.
#[component]
pub fn DashboardLayoutView(
    active: Section,
    on_navigate: EventHandler<Section>,
    /// Called after the session has been cleared.
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let portal = use_portal();
    let session = use_session();
    let mut sidebar_open = use_signal(|| false);

    let profile = session().profile;
    let display_name = profile.display_name();
    let initials = profile.initials();
    let short_initials = profile.short_initials();

    let logout = move |_| {
        sign_out(&portal, session);
        on_logout.call(());
    };

    rsx! {
        div {
            class: "dashboard",

            aside {
                class: if sidebar_open() { "sidebar open" } else { "sidebar" },

                div {
                    class: "sidebar-header",
                    span { class: "logo", "CEPRE" span { class: "logo-dot", "." } }
                    button {
                        class: "sidebar-close",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }

                nav {
                    class: "sidebar-nav",
                    for section in Section::ALL {
                        button {
                            key: "{section.label()}",
                            class: if section == active { "nav-item active" } else { "nav-item" },
                            onclick: move |_| {
                                sidebar_open.set(false);
                                on_navigate.call(section);
                            },
                            SectionIcon { section }
                            span { "{section.label()}" }
                        }
                    }
                }

                div {
                    class: "sidebar-footer",
                    div {
                        class: "user-card",
                        div { class: "avatar", "{initials}" }
                        div {
                            class: "user-info",
                            span { class: "user-name", "{display_name}" }
                            span { class: "user-role", "Estudiante CEPRE" }
                        }
                    }
                    button {
                        class: "logout-btn",
                        onclick: logout,
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        span { "Cerrar Sesión" }
                    }
                }
            }

            if sidebar_open() {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| sidebar_open.set(false),
                }
            }

            div {
                class: "main",
                header {
                    class: "topbar",
                    button {
                        class: "menu-toggle",
                        onclick: move |_| sidebar_open.toggle(),
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                    span { class: "topbar-title", "{active.label()}" }
                    div { class: "avatar small", "{short_initials}" }
                }
                main {
                    class: "content",
                    {children}
                }
            }
        }
    }
}
