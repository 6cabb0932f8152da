//! This crate contains all shared UI for the student portal.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaWhatsapp;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod format;

mod platform;
pub use platform::{make_store, PlatformPortal, PlatformStore};

mod session;
pub use session::{sign_out, use_config, use_portal, use_session, SessionProvider};

pub mod views;

pub const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");
