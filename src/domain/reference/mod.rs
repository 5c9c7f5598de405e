//! Reference data domain - country calling codes and city lists

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A country offered on the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// International calling code, e.g. `+91`
    pub code: String,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        cities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}

/// Read-only lookup of countries by name
///
/// Unknown names are not an error: they resolve to no country, an empty
/// calling code and an empty city list.
pub trait ReferenceData: Send + Sync + Debug {
    /// Looks up a country by exact name
    fn country(&self, name: &str) -> Option<&Country>;

    /// All countries in display order
    fn countries(&self) -> &[Country];

    /// Calling code for a country, empty when unknown
    fn calling_code(&self, name: &str) -> &str {
        self.country(name).map(|c| c.code.as_str()).unwrap_or("")
    }

    /// Cities for a country, empty when unknown
    fn cities(&self, name: &str) -> &[String] {
        self.country(name).map(|c| c.cities.as_slice()).unwrap_or(&[])
    }
}
