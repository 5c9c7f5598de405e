//! Registration form validation rules
//!
//! Every field is required. Fields with a syntactic format (email, phone
//! number, PAN, Aadhar) are checked against it only once they are non-empty,
//! so an empty value always reports the required-field message.

use super::error_set::ErrorSet;
use super::field::FieldName;
use super::form::RegistrationForm;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const INVALID_PHONE_NUMBER_MESSAGE: &str = "Must be a 10-digit number";
pub const INVALID_PAN_MESSAGE: &str = "Invalid PAN format (e.g., ABCDE1234F)";
pub const INVALID_AADHAR_MESSAGE: &str = "Aadhar must be 12 digits";

const PHONE_NUMBER_DIGITS: usize = 10;
const AADHAR_DIGITS: usize = 12;
const PAN_LENGTH: usize = 10;

/// Validate a whole snapshot
///
/// Pure: the same snapshot always yields the same error set.
pub fn validate(form: &RegistrationForm) -> ErrorSet {
    let mut errors = ErrorSet::new();

    for (field, value) in form.fields() {
        if let Some(message) = validate_field(field, value) {
            errors.insert(field, message);
        }
    }

    errors
}

/// Validate a single field value, returning the violation message if any
pub fn validate_field(field: FieldName, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE);
    }

    match field {
        FieldName::Email if !is_valid_email(value) => Some(INVALID_EMAIL_MESSAGE),
        FieldName::PhoneNumber if !is_valid_phone_number(value) => {
            Some(INVALID_PHONE_NUMBER_MESSAGE)
        }
        FieldName::Pan if !is_valid_pan(value) => Some(INVALID_PAN_MESSAGE),
        FieldName::Aadhar if !is_valid_aadhar(value) => Some(INVALID_AADHAR_MESSAGE),
        _ => None,
    }
}

/// `local@domain.tld` shape
///
/// Rules:
/// - No whitespace anywhere, using the HTML form pattern whitespace set
/// - Exactly one `@`, with a non-empty local part
/// - The domain holds a `.` with at least one character on each side
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_form_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();

    chars
        .iter()
        .enumerate()
        .any(|(i, c)| *c == '.' && i > 0 && i + 1 < chars.len())
}

/// Whitespace as browsers match it in form patterns
///
/// Differs from `char::is_whitespace`: U+FEFF counts, U+0085 does not.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Exactly ten ASCII digits
pub fn is_valid_phone_number(value: &str) -> bool {
    is_exact_digits(value, PHONE_NUMBER_DIGITS)
}

/// Five uppercase letters, four digits, one uppercase letter
pub fn is_valid_pan(value: &str) -> bool {
    let bytes = value.as_bytes();

    if bytes.len() != PAN_LENGTH {
        return false;
    }

    bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

/// Exactly twelve ASCII digits
pub fn is_valid_aadhar(value: &str) -> bool {
    is_exact_digits(value, AADHAR_DIGITS)
}

fn is_exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            username: "asha_rao".to_string(),
            email: "asha@example.in".to_string(),
            password: "s3cret-pass".to_string(),
            phone_code: "+91".to_string(),
            phone_number: "9876543210".to_string(),
            country: "India".to_string(),
            city: "Mumbai".to_string(),
            pan: "ABCDE1234F".to_string(),
            aadhar: "123456789012".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_blank_form_reports_every_field_required() {
        let errors = validate(&RegistrationForm::new());

        assert_eq!(errors.len(), 11);
        for field in FieldName::ALL {
            assert_eq!(errors.get(field), Some(REQUIRED_MESSAGE), "{field}");
        }
    }

    #[test]
    fn test_single_empty_field_is_the_only_error() {
        for field in FieldName::ALL {
            let mut form = valid_form();
            form.get_mut(field).clear();

            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "{field}");
            assert_eq!(errors.get(field), Some(REQUIRED_MESSAGE), "{field}");
        }
    }

    #[test]
    fn test_phone_code_is_required_even_though_derived() {
        let mut form = valid_form();
        form.phone_code.clear();

        assert_eq!(
            validate(&form).get(FieldName::PhoneCode),
            Some(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_empty_email_reports_required_only() {
        assert_eq!(
            validate_field(FieldName::Email, ""),
            Some(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(is_valid_email("a@b..c"));

        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@c.d\n"));
        assert!(!is_valid_email("a\u{A0}b@c.d"));
        assert!(!is_valid_email("a@b\u{3000}.c"));

        assert_eq!(
            validate_field(FieldName::Email, "abc"),
            Some(INVALID_EMAIL_MESSAGE)
        );
    }

    #[test]
    fn test_email_whitespace_follows_form_pattern_rules() {
        assert!(!is_valid_email("a\u{FEFF}b@c.d"));
        assert!(!is_valid_email("a@b.c\u{0B}"));
        assert!(!is_valid_email("a@b\u{2009}x.c"));

        assert!(is_valid_email("a\u{85}b@c.d"));
        assert!(is_valid_email("a@b.c\u{200B}"));
    }

    #[test]
    fn test_phone_number_format() {
        assert!(is_valid_phone_number("1234567890"));
        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("12345678901"));
        assert!(!is_valid_phone_number("12345abcde"));
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));

        assert_eq!(
            validate_field(FieldName::PhoneNumber, "12345"),
            Some(INVALID_PHONE_NUMBER_MESSAGE)
        );
    }

    #[test]
    fn test_pan_format() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("abcde1234f"));
        assert!(!is_valid_pan("ABCDE123F"));
        assert!(!is_valid_pan("ABCD12345F"));
        assert!(!is_valid_pan("ABCDE12345"));
        assert!(!is_valid_pan("ABCDE1234FG"));
        assert!(!is_valid_pan("ÄBCDE1234F"));

        assert_eq!(
            validate_field(FieldName::Pan, "abcde1234f"),
            Some(INVALID_PAN_MESSAGE)
        );
    }

    #[test]
    fn test_aadhar_format() {
        assert!(is_valid_aadhar("123456789012"));
        assert!(!is_valid_aadhar("12345"));
        assert!(!is_valid_aadhar("1234 5678 9012"));

        assert_eq!(
            validate_field(FieldName::Aadhar, "12345"),
            Some(INVALID_AADHAR_MESSAGE)
        );
    }

    #[test]
    fn test_unformatted_fields_accept_any_non_empty_value() {
        assert_eq!(validate_field(FieldName::Password, "x"), None);
        assert_eq!(validate_field(FieldName::PhoneCode, "anything"), None);
        assert_eq!(validate_field(FieldName::City, "Atlantis"), None);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut form = valid_form();
        form.email = "broken".to_string();
        form.city.clear();

        let first = validate(&form);
        let second = validate(&form);

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
