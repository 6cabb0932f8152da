use dioxus::prelude::*;

use views::{Attendance, Books, DashboardLayout, Login, Overview, Practices, Profile, Teachers};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/attendance")]
        Attendance {},
        #[route("/dashboard/books")]
        Books {},
        #[route("/dashboard/practices")]
        Practices {},
        #[route("/dashboard/teachers")]
        Teachers {},
        #[route("/dashboard/profile")]
        Profile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "CEPRE UNDAC" }
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Desktop starts at `/`: jump to the dashboard when a session was restored from disk.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    match api::guard::landing(&session()) {
        api::guard::Landing::Dashboard => nav.replace(Route::Overview {}),
        api::guard::Landing::Login => nav.replace(Route::Login {}),
    };

    rsx! {}
}
