use dioxus::prelude::*;

mod login;
pub use login::Login;

mod dashboard_layout;
pub use dashboard_layout::DashboardLayout;

use crate::Route;
use ui::views::Section;

/// Route for a sidebar section.
pub(crate) fn route_for(section: Section) -> Route {
    match section {
        Section::Overview => Route::Overview {},
        Section::Attendance => Route::Attendance {},
        Section::Books => Route::Books {},
        Section::Practices => Route::Practices {},
        Section::Teachers => Route::Teachers {},
        Section::Profile => Route::Profile {},
    }
}

/// Sidebar section highlighted for a route.
pub(crate) fn section_for(route: &Route) -> Section {
    match route {
        Route::Attendance {} => Section::Attendance,
        Route::Books {} => Section::Books,
        Route::Practices {} => Section::Practices,
        Route::Teachers {} => Section::Teachers,
        Route::Profile {} => Section::Profile,
        _ => Section::Overview,
    }
}

#[component]
pub fn Overview() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::OverviewView {
            on_navigate: move |section| {
                nav.push(route_for(section));
            },
        }
    }
}

#[component]
pub fn Attendance() -> Element {
    rsx! { ui::views::AttendanceView {} }
}

#[component]
pub fn Books() -> Element {
    rsx! { ui::views::BooksView {} }
}

#[component]
pub fn Practices() -> Element {
    rsx! { ui::views::PracticesView {} }
}

#[component]
pub fn Teachers() -> Element {
    rsx! { ui::views::TeachersView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ui::views::ProfileView {} }
}
