//! Per-field validation errors

use std::collections::BTreeMap;

use serde::Serialize;

use super::field::FieldName;

/// Invalid fields mapped to their violation message, in form order
///
/// Fields that passed every check are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<FieldName, String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    /// Aggregated `"<Label>: <message>"` lines for every failing field
    pub fn summary(&self) -> Vec<String> {
        self.iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_form_order() {
        let mut errors = ErrorSet::new();
        errors.insert(FieldName::Aadhar, "Aadhar must be 12 digits");
        errors.insert(FieldName::FirstName, "This field is required");
        errors.insert(FieldName::Email, "Invalid email format");

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![FieldName::FirstName, FieldName::Email, FieldName::Aadhar]
        );
    }

    #[test]
    fn test_insert_replaces_message() {
        let mut errors = ErrorSet::new();
        errors.insert(FieldName::Email, "This field is required");
        errors.insert(FieldName::Email, "Invalid email format");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Email), Some("Invalid email format"));
    }

    #[test]
    fn test_summary_uses_labels() {
        let mut errors = ErrorSet::new();
        errors.insert(FieldName::PhoneNumber, "Must be a 10-digit number");
        errors.insert(FieldName::Pan, "Invalid PAN format (e.g., ABCDE1234F)");

        assert_eq!(
            errors.summary(),
            vec![
                "Phone Number: Must be a 10-digit number".to_string(),
                "PAN: Invalid PAN format (e.g., ABCDE1234F)".to_string(),
            ]
        );
    }

    #[test]
    fn test_serializes_as_object_keyed_by_field() {
        let mut errors = ErrorSet::new();
        errors.insert(FieldName::City, "This field is required");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"city":"This field is required"}"#);
    }
}
