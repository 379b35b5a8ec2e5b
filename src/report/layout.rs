//! Column layout: entry ordering, widths, and numeric formatting.

use super::source::Observation;

/// Minimum display width of a column.
const MIN_WIDTH: usize = 10;

/// Separator between columns.
const SEPARATOR: &str = "  ";

/// Prefix conventionally marking secondary/derived metrics.
const DERIVED_PREFIX: &str = "dev/";

/// One frozen column: entry name and display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    width: usize,
}

impl Column {
    fn new(name: String) -> Self {
        let width = name.len().max(MIN_WIDTH);
        Self { name, width }
    }

    /// Entry name rendered by this column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display width, `max(10, name length)`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render one cell including the trailing separator: the value
    /// left-aligned to the column width, or blanks of the same total width
    /// when the record lacks this entry.
    pub fn cell(&self, record: &Observation) -> String {
        match record.get(&self.name) {
            Some(value) => {
                format!("{:<width$}{SEPARATOR}", format_general(*value), width = self.width)
            }
            None => " ".repeat(self.width + SEPARATOR.len()),
        }
    }
}

/// Frozen ordered set of columns governing every rendered row.
///
/// Computed exactly once, from either an explicit entry list or the keys of
/// the first record, and invariant for the lifetime of the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<Column>,
}

impl ColumnLayout {
    /// Freeze columns from an explicit entry list (verbatim, in given order)
    /// or from the first record's keys sorted with the derived-metric
    /// tie-break.
    pub fn freeze(entries: Option<&[String]>, first: &Observation) -> Self {
        let names: Vec<String> = match entries {
            Some(list) => list.to_vec(),
            None => {
                let mut keys: Vec<&String> = first.keys().collect();
                keys.sort_by_key(|name| sort_key(name));
                keys.into_iter().cloned().collect()
            }
        };
        Self { columns: names.into_iter().map(Column::new).collect() }
    }

    /// Frozen columns, in render order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header line: entry names left-aligned to their widths, two-space
    /// separated, newline terminated.
    pub fn header(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("{:<width$}", column.name, width = column.width))
            .collect();
        format!("{}\n", cells.join(SEPARATOR))
    }

    /// One data row for `record`, newline terminated.
    pub fn row(&self, record: &Observation) -> String {
        let mut line = String::new();
        for column in &self.columns {
            line.push_str(&column.cell(record));
        }
        line.push('\n');
        line
    }
}

/// Ordering key for inferred entries. Derived-metric names sort as their base
/// name with a sentinel suffix, placing them directly after the non-prefixed
/// counterpart.
fn sort_key(name: &str) -> String {
    match name.strip_prefix(DERIVED_PREFIX) {
        Some(base) => format!("{base}*"),
        None => name.to_string(),
    }
}

/// `%g`-style rendering: six significant digits, trailing zeros trimmed,
/// exponent notation outside `1e-4..1e6`.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let exp = value.abs().log10().floor() as i32;
    if (-4..6).contains(&exp) {
        let decimals = (5 - exp).max(0) as usize;
        trim_zeros(format!("{value:.decimals$}"))
    } else {
        let mantissa = trim_zeros(format!("{:.5}", value / 10f64.powi(exp)));
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
