//! CSV serialization of cell rows.

use std::borrow::Cow;

/// Field delimiter.
pub const DELIMITER: char = ',';

/// Quote a field when it contains the delimiter, a quote, or a line break.
pub fn quote_field(value: &str) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c == DELIMITER || c == '"' || c == '\n' || c == '\r');

    if needs_quotes {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Serialize one row of rendered cell values.
pub fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut row = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            row.push(DELIMITER);
        }
        row.push_str(&quote_field(cell.as_ref()));
    }
    row
}
