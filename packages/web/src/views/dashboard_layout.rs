use api::guard::{self, Access};
use dioxus::prelude::*;
use ui::views::DashboardLayoutView;

use super::{route_for, section_for};
use crate::Route;

/// Guarded layout for every `/dashboard` route.
#[component]
pub fn DashboardLayout() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    if guard::check(&session()) == Access::RedirectToLogin {
        tracing::debug!("No session, redirecting {} to login", route);
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        DashboardLayoutView {
            active: section_for(&route),
            on_navigate: move |section| {
                nav.push(route_for(section));
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
