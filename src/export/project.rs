use crate::model::Submission;
use crate::types::FieldId;
use serde_json::Value;

/// Maps a submission to one value per requested field id, in the same order.
/// Ids absent from the submission's value map become empty strings, so the
/// output always aligns structurally with a header built from the same ids.
#[must_use]
pub fn project(submission: &Submission, ordered_field_ids: &[FieldId]) -> Vec<String> {
    ordered_field_ids
        .iter()
        .map(|id| submission.value(*id).map_or_else(String::new, normalize))
        .collect()
}

/// Flattens a JSON-encoded list of scalars (a stored multi-choice value)
/// into `", "`-joined display text. Plain scalars, malformed encodings, and
/// non-list composites pass through as opaque text.
fn normalize(raw: &str) -> String {
    if !raw.trim_start().starts_with('[') {
        return raw.to_string();
    }
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };
    let mut parts = Vec::with_capacity(items.len());
    for item in &items {
        match item {
            Value::String(s) => parts.push(s.clone()),
            Value::Number(n) => parts.push(n.to_string()),
            Value::Bool(b) => parts.push(b.to_string()),
            Value::Null => parts.push(String::new()),
            // No recursive flattening rule is defined for nested structures.
            Value::Array(_) | Value::Object(_) => return raw.to_string(),
        }
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sub_with(field: FieldId, raw: &str) -> Submission {
        Submission::new(1, Utc::now(), 1).with_value(field, raw)
    }

    #[test]
    fn list_joins_with_comma_space() {
        assert_eq!(project(&sub_with(5, r#"["red","blue"]"#), &[5]), vec!["red, blue"]);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(project(&sub_with(5, "plain text"), &[5]), vec!["plain text"]);
        assert_eq!(project(&sub_with(5, "42"), &[5]), vec!["42"]);
    }

    #[test]
    fn absent_field_is_empty() {
        assert_eq!(project(&sub_with(5, "x"), &[5, 6]), vec!["x", ""]);
    }

    #[test]
    fn malformed_and_nested_composites_stay_opaque() {
        assert_eq!(project(&sub_with(5, "[not json"), &[5]), vec!["[not json"]);
        assert_eq!(project(&sub_with(5, r#"{"a":1}"#), &[5]), vec![r#"{"a":1}"#]);
        assert_eq!(project(&sub_with(5, r#"[["a"],"b"]"#), &[5]), vec![r#"[["a"],"b"]"#]);
    }

    #[test]
    fn mixed_scalar_list_stringifies_elements() {
        assert_eq!(project(&sub_with(5, r#"["a",2,true,null]"#), &[5]), vec!["a, 2, true, "]);
    }
}
