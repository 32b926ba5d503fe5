//! Error types for scatterview operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scatterview operations.
///
/// Only construction-time failures are fatal. Update-time problems such as
/// a missing data section or malformed cells degrade to documented defaults
/// instead of surfacing here; a host-embedded visual must never crash its
/// host.
#[derive(Error, Debug)]
pub enum Error {
    /// Constructor options were absent; the visual has no mount point and
    /// no valid degraded state exists without one.
    #[error("constructor options are missing: the visual requires a host mount point")]
    MissingInput,
}
