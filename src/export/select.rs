use crate::model::Field;
use std::collections::HashSet;

/// Field types that never export: layout-only elements, buttons, anti-spam
/// widgets, payment-card subfields, confirmation/password inputs, notes.
pub const SKIP_TYPES: &[&str] = &[
    "submit",
    "html",
    "hr",
    "recaptcha",
    "spam",
    "unknown",
    "note",
    "confirm",
    "password",
    "passwordconfirm",
    "creditcard",
    "creditcardcvc",
    "creditcardexpiration",
    "creditcardfullname",
    "creditcardnumber",
    "creditcardzip",
    "hcaptcha",
    "turnstile",
];

/// Filters a form's field list down to the exportable subset and orders it
/// by the form-design `order` hint, ascending. The exclusion set is
/// [`SKIP_TYPES`] merged with `hidden_types`. The sort is stable, so fields
/// with equal `order` keep their input order.
#[must_use]
pub fn select_and_order(fields: &[Field], hidden_types: &HashSet<String>) -> Vec<Field> {
    let mut selected: Vec<Field> = fields
        .iter()
        .filter(|f| {
            !SKIP_TYPES.contains(&f.field_type.as_str()) && !hidden_types.contains(&f.field_type)
        })
        .cloned()
        .collect();
    selected.sort_by_key(|f| f.order);
    selected
}

/// Export column header for a field: `admin_label` when non-empty, else
/// `label`, else the field id rendered as text.
#[must_use]
pub fn column_label(field: &Field) -> String {
    if !field.admin_label.is_empty() {
        field.admin_label.clone()
    } else if !field.label.is_empty() {
        field.label.clone()
    } else {
        field.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_types_merge_with_skip_list() {
        let fields = vec![
            Field::new(1, "text", 0, "A"),
            Field::new(2, "submit", 1, "Go"),
            Field::new(3, "secret", 2, "B"),
        ];
        let hidden: HashSet<String> = ["secret".to_string()].into();
        let out = select_and_order(&fields, &hidden);
        assert_eq!(out.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn equal_order_keeps_input_order() {
        let fields = vec![
            Field::new(7, "text", 5, "a"),
            Field::new(8, "text", 5, "b"),
            Field::new(9, "text", 1, "c"),
        ];
        let out = select_and_order(&fields, &HashSet::new());
        assert_eq!(out.iter().map(|f| f.id).collect::<Vec<_>>(), vec![9, 7, 8]);
    }

    #[test]
    fn label_fallback_chain() {
        let f = Field::new(42, "text", 0, "Visible").with_admin_label("Admin");
        assert_eq!(column_label(&f), "Admin");
        let f = Field::new(42, "text", 0, "Visible");
        assert_eq!(column_label(&f), "Visible");
        let f = Field::new(42, "text", 0, "");
        assert_eq!(column_label(&f), "42");
    }
}
