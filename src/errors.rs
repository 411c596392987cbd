use crate::types::FormId;
use thiserror::Error;

/// Errors surfaced by the export pipeline.
///
/// Configuration problems (`InvalidSeparator`, `FormNotFound`) are detected
/// before any byte reaches the sink. Write failures are fatal and carry the
/// underlying error unchanged. Per-field data problems (missing values,
/// malformed composites) never appear here; they degrade to empty or opaque
/// text during projection.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid separator {0:?}: must be a single ASCII character")]
    InvalidSeparator(char),

    #[error("form not found: {0}")]
    FormNotFound(FormId),
}
