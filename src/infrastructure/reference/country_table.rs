//! Country table - built-in or loaded from TOML/JSON
//!
//! File layout (TOML):
//!
//! ```toml
//! [[countries]]
//! name = "India"
//! code = "+91"
//! cities = ["Mumbai", "Delhi", "Bangalore"]
//! ```
//!
//! JSON files hold either a bare array of country objects,
//! `[{"name": ..., "code": ..., "cities": [...]}]`, or the same array under a
//! `countries` key.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::reference::{Country, ReferenceData};

static BUILTIN_COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    vec![
        Country::new("India", "+91", ["Mumbai", "Delhi", "Bangalore"]),
        Country::new("USA", "+1", ["New York", "Los Angeles", "Chicago"]),
        Country::new("UK", "+44", ["London", "Manchester", "Birmingham"]),
    ]
});

/// Error type for loading a country table
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid reference data: {0}")]
    ValidationError(String),
}

#[derive(Debug, Deserialize)]
struct CountryFile {
    #[serde(default)]
    countries: Vec<Country>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCountryFile {
    List(Vec<Country>),
    Table(CountryFile),
}

impl From<JsonCountryFile> for Vec<Country> {
    fn from(file: JsonCountryFile) -> Self {
        match file {
            JsonCountryFile::List(countries) => countries,
            JsonCountryFile::Table(file) => file.countries,
        }
    }
}

/// Ordered country table with name lookup
#[derive(Debug, Clone)]
pub struct CountryTable {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryTable {
    /// The built-in India / USA / UK table
    pub fn builtin() -> Self {
        Self::build(BUILTIN_COUNTRIES.clone())
    }

    /// Creates a table from countries, keeping their order
    pub fn new(countries: Vec<Country>) -> Result<Self, ReferenceDataError> {
        Self::check(&countries)?;
        Ok(Self::build(countries))
    }

    /// Load a table from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading reference data");

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let table = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!(countries = table.countries.len(), "Reference data loaded");
        Ok(table)
    }

    /// Load a table from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ReferenceDataError> {
        let file: CountryFile = toml::from_str(content)?;
        Self::new(file.countries)
    }

    /// Load a table from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ReferenceDataError> {
        let file: JsonCountryFile = serde_json::from_str(content)?;
        Self::new(file.into())
    }

    /// Load from `path` when given and readable, otherwise use the built-in table
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::from_file(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load reference data, using built-in table"
                );
                Self::builtin()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    fn check(countries: &[Country]) -> Result<(), ReferenceDataError> {
        let mut seen = HashSet::new();

        for country in countries {
            if country.name.trim().is_empty() {
                return Err(ReferenceDataError::ValidationError(
                    "country name cannot be empty".into(),
                ));
            }

            if !seen.insert(country.name.as_str()) {
                return Err(ReferenceDataError::ValidationError(format!(
                    "duplicate country '{}'",
                    country.name
                )));
            }
        }

        Ok(())
    }

    fn build(countries: Vec<Country>) -> Self {
        let index = countries
            .iter()
            .enumerate()
            .map(|(i, country)| (country.name.clone(), i))
            .collect();

        Self { countries, index }
    }
}

impl ReferenceData for CountryTable {
    fn country(&self, name: &str) -> Option<&Country> {
        self.index.get(name).map(|&i| &self.countries[i])
    }

    fn countries(&self) -> &[Country] {
        &self.countries
    }
}
