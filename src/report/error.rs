//! Report rendering errors.

/// Errors surfaced by [`ConsoleReporter::render`](super::ConsoleReporter::render).
///
/// Resolution failures are fatal to the call and never retried. Rows written
/// before an error remain written; output is append-only, not transactional.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A named log source is not registered with the driver.
    #[error("log source not registered: {0}")]
    SourceNotFound(String),

    /// The registry entry under the name is not a log source.
    #[error("registered entry `{0}` is not a log source")]
    WrongSourceKind(String),

    /// The output stream rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
