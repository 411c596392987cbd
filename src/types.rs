/// Identifies a form within the storage collaborator.
pub type FormId = u64;

/// Identifies a field within a form; unique per form and stable across
/// submissions. Opaque to the pipeline beyond equality and lookup.
pub type FieldId = u64;

/// Identifies one completed form entry.
pub type SubmissionId = u64;
