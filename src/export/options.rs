use std::collections::HashSet;

/// Per-request export settings. Fully determines the output together with
/// the form's schema and submissions.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Field separator. Callers taking free-form input should run it through
    /// [`normalize_separator`] first; the encoder rejects separators that do
    /// not fit in one byte.
    pub separator: char,
    /// Extra field types to exclude, merged into the built-in skip list.
    pub hidden_field_types: HashSet<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { separator: ',', hidden_field_types: HashSet::new() }
    }
}

/// Summary of a completed export.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub rows_written: u64,
    pub fields_exported: usize,
}

/// Caller-side fallback for user-supplied separator text: anything other
/// than exactly one character becomes the default comma.
#[must_use]
pub fn normalize_separator(input: &str) -> char {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => ',',
    }
}
