//! Registration form snapshot

use serde::{Deserialize, Serialize};

use super::field::FieldName;

/// Complete set of field values at a point in time
///
/// Serialized with camelCase keys in form order. Keys missing from a stored
/// snapshot come back as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl RegistrationForm {
    /// Create an all-empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PhoneCode => &self.phone_code,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Country => &self.country,
            FieldName::City => &self.city,
            FieldName::Pan => &self.pan,
            FieldName::Aadhar => &self.aadhar,
        }
    }

    pub(crate) fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::PhoneCode => &mut self.phone_code,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Country => &mut self.country,
            FieldName::City => &mut self.city,
            FieldName::Pan => &mut self.pan,
            FieldName::Aadhar => &mut self.aadhar,
        }
    }

    /// Iterate over `(field, value)` pairs in form order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blank() {
        let form = RegistrationForm::new();
        assert!(form.is_blank());
        assert_eq!(form.fields().count(), 11);
    }

    #[test]
    fn test_get_mut_targets_named_field() {
        let mut form = RegistrationForm::new();
        *form.get_mut(FieldName::Pan) = "ABCDE1234F".to_string();

        assert_eq!(form.pan, "ABCDE1234F");
        assert_eq!(form.get(FieldName::Pan), "ABCDE1234F");
        assert!(!form.is_blank());
    }

    #[test]
    fn test_serializes_camel_case_in_form_order() {
        let form = RegistrationForm {
            first_name: "Asha".to_string(),
            phone_code: "+91".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();

        assert!(json.starts_with("{\"firstName\":\"Asha\",\"lastName\":\"\""));
        assert!(json.contains("\"phoneCode\":\"+91\""));
        assert!(json.ends_with("\"aadhar\":\"\"}"));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let form: RegistrationForm =
            serde_json::from_str(r#"{"firstName":"Asha","country":"India"}"#).unwrap();

        assert_eq!(form.first_name, "Asha");
        assert_eq!(form.country, "India");
        assert_eq!(form.city, "");
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let result = serde_json::from_str::<RegistrationForm>(r#"{"phoneNumber":12345}"#);
        assert!(result.is_err());
    }
}
