//! Error types.
//!
//! Statement generation itself never fails; it returns `None` when there is
//! nothing valid to emit. These errors cover engine lookup and the
//! active-dialect registry.

/// Errors raised outside of statement generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No driver is known under this name.
    #[error("Unknown database engine '{0}'")]
    UnknownEngine(String),

    /// The registry already holds a dialect.
    #[error("An active dialect is already installed: {active}")]
    AlreadyInstalled {
        /// Name of the dialect that stays active.
        active: &'static str,
    },

    /// The registry was read before a dialect was installed.
    #[error("No active dialect installed")]
    NotInstalled,
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
