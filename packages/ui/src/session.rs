//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{PortalConfig, Session};

use crate::platform::{make_store, PlatformPortal};

/// The portal shared by every view.
pub fn use_portal() -> PlatformPortal {
    use_context::<PlatformPortal>()
}

/// The current session. Views write it after login and logout so the
/// guard and the sidebar re-render.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Loaded configuration (contact prefix and backend URL).
pub fn use_config() -> PortalConfig {
    use_context::<PortalConfig>()
}

/// Provider component that creates the portal and restores the stored session.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_context_provider(api::load_config);
    let portal = use_context_provider(move || PlatformPortal::connect(&config, make_store()));
    use_context_provider(move || Signal::new(portal.session()));

    rsx! {
        {children}
    }
}

/// Clear the stored session and reset the context.
pub fn sign_out(portal: &PlatformPortal, mut session: Signal<Session>) {
    portal.logout();
    session.set(Session::default());
}
