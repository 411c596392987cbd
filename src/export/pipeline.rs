use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::ExportError;
use crate::store::FormStore;
use crate::types::{FieldId, FormId};

use super::encode::TableEncoder;
use super::options::{ExportOptions, ExportReport};
use super::project::project;
use super::select::{column_label, select_and_order};

/// Fixed leading columns of every export.
const LEAD_HEADERS: [&str; 3] = ["Submission ID", "Date", "Seq #"];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Export a form's submissions to a file atomically via a temp file + persist.
///
/// # Errors
/// Returns an error if the form is unknown, the separator is invalid, or the
/// write/persist fails.
pub fn export_file<S: FormStore>(
    store: &S,
    form_id: FormId,
    path: impl AsRef<Path>,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    log::info!("export: form={}, path={}", form_id, path.as_ref().display());
    let dest = path.as_ref();
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    // Ensure parent directory exists
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }
    // Create a NamedTempFile in the same directory to ensure atomic replace
    let mut tmp = NamedTempFile::new_in(parent)?;
    let report = export_to_writer(store, form_id, &mut tmp, opts)?;
    // The previous export stays in place until the rename succeeds.
    // Windows cannot replace a destination that is still open, so on a
    // failed persist drop it and retry.
    let mut last_err: Option<io::Error> = None;
    for attempt in 0..5 {
        match tmp.persist(dest) {
            Ok(_f) => {
                return Ok(report);
            }
            Err(pe) => {
                last_err = Some(pe.error);
                tmp = pe.file; // recover temp file and retry
                if dest.exists()
                    && let Err(e) = std::fs::remove_file(dest)
                {
                    last_err = Some(e);
                }
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            }
        }
    }
    Err(ExportError::Io(
        last_err.unwrap_or_else(|| io::Error::other("failed to persist export file")),
    ))
}

/// Run the full pipeline against an arbitrary byte sink: select exportable
/// fields, emit the header, then project and stream one row per submission
/// in store order.
///
/// Bytes already flushed before a failure are considered delivered; a
/// partially written document is not rolled back.
///
/// # Errors
/// `FormNotFound` and `InvalidSeparator` before any byte is written; any
/// sink write failure afterwards, propagated unchanged.
pub fn export_to_writer<S: FormStore, W: Write>(
    store: &S,
    form_id: FormId,
    writer: W,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let Some(fields) = store.get_fields(form_id) else {
        return Err(ExportError::FormNotFound(form_id));
    };

    let export_fields = select_and_order(&fields, &opts.hidden_field_types);
    log::debug!(
        "export: form={}, selected {} of {} fields",
        form_id,
        export_fields.len(),
        fields.len()
    );

    let mut header: Vec<String> = LEAD_HEADERS.iter().map(|s| (*s).to_string()).collect();
    let mut field_ids: Vec<FieldId> = Vec::with_capacity(export_fields.len());
    for field in &export_fields {
        header.push(column_label(field));
        field_ids.push(field.id);
    }

    let mut enc = TableEncoder::new(writer, opts.separator)?;
    enc.write_header(&header)?;

    let mut report =
        ExportReport { fields_exported: field_ids.len(), ..ExportReport::default() };
    for sub in store.get_submissions(form_id) {
        let mut row = Vec::with_capacity(LEAD_HEADERS.len() + field_ids.len());
        row.push(sub.id.to_string());
        row.push(sub.submitted_at.format(DATE_FORMAT).to_string());
        row.push(sub.sequence_number.to_string());
        row.extend(project(&sub, &field_ids));
        enc.write_row(&row)?;
        report.rows_written += 1;
    }
    enc.finish()?;
    log::info!("export: form={}, wrote {} rows", form_id, report.rows_written);
    Ok(report)
}

/// Suggested download name, `export-<title-or-form-id>-<date>.csv`, with the
/// title reduced to filename-safe characters.
#[must_use]
pub fn suggested_filename(title: &str, form_id: FormId, date: NaiveDate) -> String {
    let stem = sanitize_filename(title);
    let stem = if stem.is_empty() { format!("form-{form_id}") } else { stem };
    format!("export-{}-{}.csv", stem, date.format("%Y-%m-%d"))
}

fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('-');
        }
    }
    out
}
