//! Platform-specific session storage and the portal built on it.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Desktop** (native): a JSON file under `<data_dir>/cepre/` via [`store::FileStore`]

use api::{HttpBackend, Portal};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// The portal type every view talks to.
pub type PlatformPortal = Portal<HttpBackend<PlatformStore>, PlatformStore>;

/// Create the session store for the current platform.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("cepre");
        store::FileStore::new(base)
    }
}
