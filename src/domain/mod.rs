//! Domain layer - Form snapshot, validation rules and port traits

pub mod error;
pub mod reference;
pub mod registration;
pub mod storage;

pub use error::DomainError;
pub use reference::{Country, ReferenceData};
pub use registration::{
    validate, validate_field, ErrorSet, FieldName, RegistrationForm, UnknownFieldError,
};
pub use storage::KeyValueStore;
