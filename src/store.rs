use crate::model::{Field, Submission};
use crate::types::FormId;
use std::collections::HashMap;

/// Contract the pipeline needs from the form-storage collaborator.
///
/// Fields and submissions are owned and mutated elsewhere; the pipeline only
/// reads them for the duration of one export call.
pub trait FormStore {
    /// The form's full field schema, or `None` if the form does not exist.
    fn get_fields(&self, form_id: FormId) -> Option<Vec<Field>>;

    /// All submissions of the form, in the order the export should emit them
    /// (typically insertion order).
    fn get_submissions(&self, form_id: FormId) -> Vec<Submission>;

    /// The form's display title; may be empty.
    fn get_form_title(&self, form_id: FormId) -> String;
}

/// In-memory [`FormStore`] for tests and embedders without a backing
/// platform.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    forms: HashMap<FormId, StoredForm>,
}

#[derive(Debug, Default)]
struct StoredForm {
    title: String,
    fields: Vec<Field>,
    submissions: Vec<Submission>,
}

impl MemoryFormStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_form(&mut self, form_id: FormId, title: impl Into<String>, fields: Vec<Field>) {
        let form = self.forms.entry(form_id).or_default();
        form.title = title.into();
        form.fields = fields;
    }

    /// Appends a submission; creates the form entry if it does not exist yet.
    pub fn insert_submission(&mut self, form_id: FormId, submission: Submission) {
        self.forms.entry(form_id).or_default().submissions.push(submission);
    }
}

impl FormStore for MemoryFormStore {
    fn get_fields(&self, form_id: FormId) -> Option<Vec<Field>> {
        self.forms.get(&form_id).map(|f| f.fields.clone())
    }

    fn get_submissions(&self, form_id: FormId) -> Vec<Submission> {
        self.forms.get(&form_id).map(|f| f.submissions.clone()).unwrap_or_default()
    }

    fn get_form_title(&self, form_id: FormId) -> String {
        self.forms.get(&form_id).map(|f| f.title.clone()).unwrap_or_default()
    }
}
