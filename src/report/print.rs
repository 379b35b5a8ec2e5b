//! Incremental console report renderer.

use std::io::Write;

use super::console::{platform_eraser, ConsoleEraser, ERASE_TO_END};
use super::error::ReportError;
use super::layout::ColumnLayout;
use super::source::{LogHandle, LookupError, SourceRegistry};
use crate::state::StateScope;

/// Child scope name under which an owned log source is checkpointed.
const SOURCE_SCOPE: &str = "log_source";

/// Renders newly appended observation records as aligned table rows.
///
/// The reporter is driven by the training loop: call
/// [`render`](ConsoleReporter::render) once per iteration. The first render
/// against a non-empty log freezes the column layout and emits the header;
/// every later render emits only the rows appended since the previous call,
/// each preceded by a screen-region erase so the in-progress region redraws
/// in place.
///
/// Single-threaded by design: the cursor and frozen layout carry no
/// synchronization and must not be shared across concurrent renders.
pub struct ConsoleReporter<W: Write> {
    entries: Option<Vec<String>>,
    source: LogHandle,
    out: W,
    eraser: Box<dyn ConsoleEraser>,
    layout: Option<ColumnLayout>,
    printed: usize,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter reading from `source` and writing to `out`. Columns
    /// are inferred from the first record unless
    /// [`with_entries`](ConsoleReporter::with_entries) overrides them. The
    /// erase strategy defaults to the platform-selected one.
    pub fn new(source: LogHandle, out: W) -> Self {
        Self {
            entries: None,
            source,
            out,
            eraser: platform_eraser(),
            layout: None,
            printed: 0,
        }
    }

    /// Use an explicit column list, verbatim and in the given order, instead
    /// of inferring columns from the first record.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entries = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the platform-selected erase strategy.
    pub fn with_eraser(mut self, eraser: Box<dyn ConsoleEraser>) -> Self {
        self.eraser = eraser;
        self
    }

    /// Count of records already emitted. Monotonically non-decreasing.
    pub fn printed(&self) -> usize {
        self.printed
    }

    /// Borrow the output stream.
    pub fn stream(&self) -> &W {
        &self.out
    }

    /// Consume the reporter, yielding the output stream.
    pub fn into_stream(self) -> W {
        self.out
    }

    /// Render every record appended since the previous call.
    ///
    /// An owned log source is advanced first so its log reflects the latest
    /// state; a named source is resolved through `registry` and assumed
    /// already advanced by its owner. Each unseen record is emitted as one
    /// row, preceded by a screen-region erase.
    pub fn render(&mut self, registry: &mut dyn SourceRegistry) -> Result<(), ReportError> {
        // Cover artifacts from a previous partial render.
        self.out.write_all(ERASE_TO_END.as_bytes())?;

        let source = match &mut self.source {
            LogHandle::Named(name) => registry.source(name).map_err(|err| match err {
                LookupError::NotFound => ReportError::SourceNotFound(name.clone()),
                LookupError::WrongKind => ReportError::WrongSourceKind(name.clone()),
            })?,
            LogHandle::Owned(source) => {
                source.advance();
                source.as_mut()
            }
        };
        let log = source.log();

        if self.layout.is_none() {
            if let Some(first) = log.first() {
                let layout = ColumnLayout::freeze(self.entries.as_deref(), first);
                self.out.write_all(layout.header().as_bytes())?;
                self.layout = Some(layout);
            }
        }
        let Some(layout) = &self.layout else {
            return Ok(());
        };

        while self.printed < log.len() {
            self.eraser.clear(&mut self.out, 0, 0);
            self.out.write_all(layout.row(&log[self.printed]).as_bytes())?;
            self.printed += 1;
        }
        Ok(())
    }

    /// Delegate the owned log source's state to a named child scope of
    /// `scope`. A named reference is a no-op; the referenced instance is
    /// serialized by its owner.
    pub fn serialize(&mut self, scope: &mut StateScope<'_>) {
        if let LogHandle::Owned(source) = &mut self.source {
            source.serialize(&mut scope.scope(SOURCE_SCOPE));
        }
    }
}
