//! Console report rendering.
//!
//! The reporter consumes the append-only observation log owned by a
//! [`LogSource`] and prints the records not yet seen as aligned table rows.
//! Column order and widths are frozen from the first available record (or a
//! caller-supplied entry list) and never change afterwards, so the table
//! stays stable even when later records add or drop keys.
//!
//! Screen-region erasure is a separate capability ([`ConsoleEraser`]) chosen
//! once per platform, which keeps the render path free of terminal-family
//! branching.

mod console;
mod error;
mod layout;
mod print;
mod source;


pub use console::{platform_eraser, AnsiEraser, ConsoleEraser};
pub use error::ReportError;
pub use layout::{Column, ColumnLayout};
pub use print::ConsoleReporter;
pub use source::{LogHandle, LogSource, LookupError, Observation, SourceRegistry};
