use crate::types::{FieldId, SubmissionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One form-defined input, flattened to the attributes the export pipeline
/// reads. Per-type behavior of the source form system is irrelevant here;
/// `field_type` is a plain string tag used only for filtering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub field_type: String,
    /// Position hint set by form design; not guaranteed unique or contiguous.
    pub order: i64,
    pub label: String,
    /// Preferred over `label` for export headers when non-empty.
    pub admin_label: String,
}

impl Field {
    #[must_use]
    pub fn new(
        id: FieldId,
        field_type: impl Into<String>,
        order: i64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            field_type: field_type.into(),
            order,
            label: label.into(),
            admin_label: String::new(),
        }
    }

    #[must_use]
    pub fn with_admin_label(mut self, admin_label: impl Into<String>) -> Self {
        self.admin_label = admin_label.into();
        self
    }
}

/// One completed form entry.
///
/// `values` is sparse: fields added after submission or hidden by
/// conditional logic may be absent, and absence resolves to an empty value
/// during projection. A stored value is either a scalar string or a
/// JSON-serialized list of selected choices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    /// Per-form ordinal assigned at submission time.
    pub sequence_number: u64,
    pub values: HashMap<FieldId, String>,
}

impl Submission {
    #[must_use]
    pub fn new(id: SubmissionId, submitted_at: DateTime<Utc>, sequence_number: u64) -> Self {
        Self { id, submitted_at, sequence_number, values: HashMap::new() }
    }

    #[must_use]
    pub fn with_value(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    #[must_use]
    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}
