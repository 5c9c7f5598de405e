//! Registration form field catalogue

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when user text does not name one of the registration fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown form field: '{0}'")]
pub struct UnknownFieldError(pub String);

/// One of the eleven registration fields, ordered as they appear on the form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::PhoneCode,
        Self::PhoneNumber,
        Self::Country,
        Self::City,
        Self::Pan,
        Self::Aadhar,
    ];

    /// Key used for this field in the persisted snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneCode => "phoneCode",
            Self::PhoneNumber => "phoneNumber",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PhoneCode => "Phone Code",
            Self::PhoneNumber => "Phone Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::Pan => "PAN",
            Self::Aadhar => "Aadhar",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    /// Accepts camelCase, snake_case and kebab-case spellings in any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|field| field.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}
