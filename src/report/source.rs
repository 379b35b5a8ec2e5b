//! Log-source capability and registry lookup.

use std::collections::HashMap;

use crate::state::StateScope;

/// One sampled snapshot of named numeric metrics. Records may be sparse;
/// absent entries render as blanks, not errors.
pub type Observation = HashMap<String, f64>;

/// Capability exposed by the collaborator that accumulates observation
/// records.
///
/// The log is ordered and append-only: it never shrinks, and may grow between
/// successive renders. The reporter only reads it.
pub trait LogSource {
    /// Ordered history of observation records.
    fn log(&self) -> &[Observation];

    /// Advance internal state; may append records to the log.
    fn advance(&mut self);

    /// Persist or restore internal state through `scope`.
    fn serialize(&mut self, scope: &mut StateScope<'_>);
}

/// How the reporter reaches its log source.
///
/// A named handle is resolved through the driver's registry on every render
/// and is assumed to be advanced by its owner elsewhere in the pipeline. An
/// owned instance is advanced by the reporter itself at the start of each
/// render. This asymmetry matches the driving loop's observation cadence and
/// is deliberate.
pub enum LogHandle {
    /// Name of a log source registered with the driver.
    Named(String),
    /// Log source owned and advanced by the reporter.
    Owned(Box<dyn LogSource>),
}

/// Why a registry lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Nothing is registered under the name.
    NotFound,
    /// The entry exists but is not a log source.
    WrongKind,
}

/// Registry of named log sources, owned by the training driver.
pub trait SourceRegistry {
    /// Look up a registered log source by name.
    fn source(&mut self, name: &str) -> Result<&mut dyn LogSource, LookupError>;
}
