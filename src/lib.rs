//! Deterministic export of form submissions to delimited text.
//!
//! Given a form's field schema and its submission records, the pipeline
//! decides which fields are exportable, orders them, and streams a BOM-led
//! delimited document (header row plus one row per submission) to any
//! [`std::io::Write`] sink. Each export is a pure function of the form
//! schema, the submission set, and the chosen separator.

pub mod errors;
pub mod export;
pub mod logger;
pub mod model;
pub mod store;
pub mod types;

pub use crate::errors::ExportError;
pub use crate::export::{
    ExportOptions, ExportReport, export_file, export_to_writer, suggested_filename,
};
pub use crate::model::{Field, Submission};
pub use crate::store::{FormStore, MemoryFormStore};
