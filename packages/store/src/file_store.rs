//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] implementation that keeps the session record
//! in a single JSON file. It is used on desktop so a student stays signed in across
//! app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json       # serialised Session record
//! ```
//!
//! Writes go to `session.json.tmp` first and are then renamed over the real file,
//! so a crash mid-write leaves either the old record or the new one.
//!
//! ## Platform data directories
//!
//! Callers pass `dirs::data_dir()` joined with `cepre` as a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/cepre/` |
//! | Linux | `~/.local/share/cepre/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\cepre\` |

use std::path::PathBuf;

use crate::error::StoreError;
use crate::repo::SessionStore;

const SESSION_FILE: &str = "session.json";

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn record_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }

    fn temp_path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_FILE}.tmp"))
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(self.record_path()).ok()
    }

    fn save(&self, record: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, record)?;
        std::fs::rename(&tmp, self.record_path())?;
        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(self.record_path()) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove session file: {}", e);
            }
        }
    }
}
