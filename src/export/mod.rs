mod encode;
mod options;
mod pipeline;
mod project;
mod select;

pub use encode::TableEncoder;
pub use options::{ExportOptions, ExportReport, normalize_separator};
pub use pipeline::{export_file, export_to_writer, suggested_filename};
pub use project::project;
pub use select::{SKIP_TYPES, column_label, select_and_order};
