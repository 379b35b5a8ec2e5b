//! Incremental console reporting for training loops.
//!
//! `informar` renders the observation log accumulated by a training driver as
//! an aligned text table, emitting only the rows appended since the previous
//! call and erasing the in-progress screen region first so repeated calls
//! behave like a live terminal display.
//!
//! # Architecture
//!
//! - [`report::ConsoleReporter`]: the renderer; owns the frozen column layout
//!   and the printed-row cursor
//! - [`report::LogSource`]: capability exposed by the collaborator that
//!   accumulates observation records
//! - [`report::ConsoleEraser`]: platform-selected screen-region erase
//! - [`state::Checkpoint`]: hierarchical save/load scopes for collaborator
//!   state
//!
//! # Example
//!
//! ```
//! use informar::report::{
//!     ConsoleReporter, LogHandle, LogSource, LookupError, Observation, SourceRegistry,
//! };
//! use informar::state::StateScope;
//!
//! /// Toy log source: appends one record per advance.
//! struct Counter {
//!     log: Vec<Observation>,
//! }
//!
//! impl LogSource for Counter {
//!     fn log(&self) -> &[Observation] {
//!         &self.log
//!     }
//!
//!     fn advance(&mut self) {
//!         let step = self.log.len() as f64;
//!         self.log.push(Observation::from([("loss".to_string(), 1.0 / (step + 1.0))]));
//!     }
//!
//!     fn serialize(&mut self, scope: &mut StateScope<'_>) {
//!         scope.item("log", &mut self.log);
//!     }
//! }
//!
//! /// Driver registry with nothing registered.
//! struct NoRegistry;
//!
//! impl SourceRegistry for NoRegistry {
//!     fn source(&mut self, _name: &str) -> Result<&mut dyn LogSource, LookupError> {
//!         Err(LookupError::NotFound)
//!     }
//! }
//!
//! let source = LogHandle::Owned(Box::new(Counter { log: Vec::new() }));
//! let mut reporter = ConsoleReporter::new(source, Vec::new());
//!
//! // One render per training iteration: the owned source is advanced, the
//! // header is emitted once, and each new record becomes one table row.
//! reporter.render(&mut NoRegistry).expect("buffer accepts writes");
//! reporter.render(&mut NoRegistry).expect("buffer accepts writes");
//! assert_eq!(reporter.printed(), 2);
//! ```

pub mod report;
pub mod state;
