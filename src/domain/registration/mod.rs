//! Registration domain
//!
//! This module provides the registration form snapshot, the field catalogue
//! and the pure validation rules applied on submit.

mod error_set;
mod field;
mod form;
mod validation;

pub use error_set::ErrorSet;
pub use field::{FieldName, UnknownFieldError};
pub use form::RegistrationForm;
pub use validation::{
    is_valid_aadhar, is_valid_email, is_valid_pan, is_valid_phone_number, validate,
    validate_field, INVALID_AADHAR_MESSAGE, INVALID_EMAIL_MESSAGE, INVALID_PAN_MESSAGE,
    INVALID_PHONE_NUMBER_MESSAGE, REQUIRED_MESSAGE,
};
