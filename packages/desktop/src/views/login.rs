//! Login page view.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login page component. Signed-in students are sent straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session().authenticated {
        nav.replace(Route::Overview {});
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Overview {});
            },
        }
    }
}
