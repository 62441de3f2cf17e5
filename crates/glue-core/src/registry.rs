//! Process-wide active dialect.
//!
//! Install once during startup, then read from anywhere. The first install
//! wins; later installs are rejected and leave the active dialect unchanged.
//!
//! ```rust
//! use glue_core::{registry, Engine};
//!
//! registry::install(Engine::Sqlite.dialect("main")).unwrap();
//! assert_eq!(registry::active().unwrap().name(), "sqlite");
//! ```

use std::sync::OnceLock;

use tracing::{info, warn};

use crate::dialect::Dialect;
use crate::error::{Error, Result};

static ACTIVE: OnceLock<Box<dyn Dialect>> = OnceLock::new();

/// Installs `dialect` as the active dialect.
///
/// # Errors
///
/// Returns [`Error::AlreadyInstalled`] if a dialect was installed before.
pub fn install(dialect: Box<dyn Dialect>) -> Result<()> {
    let name = dialect.name();
    match ACTIVE.set(dialect) {
        Ok(()) => {
            info!(dialect = name, "Installed active dialect");
            Ok(())
        }
        Err(rejected) => {
            let active = ACTIVE.get().map_or(name, |current| current.name());
            warn!(
                dialect = rejected.name(),
                active, "Active dialect already installed; ignoring"
            );
            Err(Error::AlreadyInstalled { active })
        }
    }
}

/// Returns the active dialect.
///
/// # Errors
///
/// Returns [`Error::NotInstalled`] before the first [`install`].
pub fn active() -> Result<&'static dyn Dialect> {
    ACTIVE.get().map(AsRef::as_ref).ok_or(Error::NotInstalled)
}

/// Whether a dialect has been installed.
#[must_use]
pub fn is_installed() -> bool {
    ACTIVE.get().is_some()
}
