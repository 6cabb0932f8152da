use api::{AttendanceFilter, AttendanceRecord, AttendanceStatus, AttendanceSummary};
use dioxus::prelude::*;

use super::common::{EmptyState, LoadingState, PageHeader, StatCard};
use crate::format::short_date;
use crate::icons::{FaCalendarCheck, FaCircleCheck, FaCircleXmark, FaClock};
use crate::{use_portal, Icon};

const FILTERS: [(AttendanceFilter, &str); 4] = [
    (AttendanceFilter::All, "Todos"),
    (AttendanceFilter::Only(AttendanceStatus::Present), "Asistencias"),
    (AttendanceFilter::Only(AttendanceStatus::Late), "Tardanzas"),
    (AttendanceFilter::Only(AttendanceStatus::Absent), "Faltas"),
];

fn status_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "status-success",
        AttendanceStatus::Late => "status-warning",
        AttendanceStatus::Absent => "status-error",
    }
}

/// Attendance history of the signed-in student with summary cards.
#[component]
pub fn AttendanceView() -> Element {
    let portal = use_portal();
    let mut filter = use_signal(AttendanceFilter::default);

    let mut listing = use_resource(move || {
        let portal = portal.clone();
        async move { portal.query_attendance(None, None).await }
    });

    let current = listing.cloned();
    let summary = current
        .as_ref()
        .map(|l| AttendanceSummary::from_records(&l.data))
        .unwrap_or_default();

    rsx! {
        div {
            class: "attendance-page",
            PageHeader {
                title: "Mi Asistencia",
                subtitle: "Historial detallado de asistencias",
            }

            div {
                class: "attendance-stats",
                StatCard {
                    label: "Asistencias",
                    value: "{summary.present}",
                    color: "bg-green",
                    icon: rsx! { Icon { icon: FaCircleCheck, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Tardanzas",
                    value: "{summary.late}",
                    color: "bg-orange",
                    icon: rsx! { Icon { icon: FaClock, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Faltas",
                    value: "{summary.absent}",
                    color: "bg-red",
                    icon: rsx! { Icon { icon: FaCircleXmark, width: 24, height: 24 } },
                }
                StatCard {
                    label: "Porcentaje",
                    value: "{summary.percentage}%",
                    color: "bg-accent",
                    highlight: true,
                    icon: rsx! { Icon { icon: FaCalendarCheck, width: 24, height: 24 } },
                }
            }

            div {
                class: "card",
                div {
                    class: "card-header",
                    h2 { "Historial de Asistencias" }
                    div {
                        class: "filter-bar",
                        for (option, label) in FILTERS {
                            button {
                                key: "{label}",
                                class: if filter() == option { "chip active" } else { "chip" },
                                onclick: move |_| filter.set(option),
                                "{label}"
                            }
                        }
                    }
                }

                match current {
                    None => rsx! { LoadingState { message: "Cargando registros..." } },
                    Some(listing_now) => {
                        let records = filter().apply(&listing_now.data);
                        if records.is_empty() {
                            rsx! {
                                EmptyState {
                                    message: "No hay registros de asistencia",
                                    failed: listing_now.is_failure(),
                                    on_retry: move |_| listing.restart(),
                                }
                            }
                        } else {
                            rsx! {
                                div {
                                    class: "attendance-list",
                                    for (index, record) in records.into_iter().enumerate() {
                                        AttendanceRow { key: "{index}", record }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendanceRow(record: AttendanceRecord) -> Element {
    let category = record.category();
    let status = record.status.clone().unwrap_or_else(|| "Sin estado".to_string());
    let date = short_date(record.date.as_deref());
    let badge = status_class(category);

    rsx! {
        div {
            class: "attendance-item",
            div {
                class: "attendance-date",
                Icon { icon: FaCalendarCheck, width: 18, height: 18 }
                span { "{date}" }
            }
            if let Some(class_name) = record.class_name.clone() {
                div { class: "attendance-class", "{class_name}" }
            }
            if let Some(time) = record.entry_time.clone() {
                div {
                    class: "attendance-time",
                    Icon { icon: FaClock, width: 14, height: 14 }
                    span { "{time}" }
                }
            }
            div {
                class: "attendance-status {badge}",
                match category {
                    AttendanceStatus::Present => rsx! {
                        Icon { icon: FaCircleCheck, width: 16, height: 16 }
                    },
                    AttendanceStatus::Late => rsx! {
                        Icon { icon: FaClock, width: 16, height: 16 }
                    },
                    AttendanceStatus::Absent => rsx! {
                        Icon { icon: FaCircleXmark, width: 16, height: 16 }
                    },
                }
                span { "{status}" }
            }
        }
    }
}
