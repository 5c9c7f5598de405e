//! Form state store - current field values kept in sync with durable storage

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{DomainError, FieldName, KeyValueStore, ReferenceData, RegistrationForm};

/// Storage slot holding the in-progress snapshot
pub const FORM_STORAGE_KEY: &str = "formData";

/// Single source of truth for the registration fields
///
/// Every mutation is written through to storage before it returns.
pub struct FormStateStore {
    form: RegistrationForm,
    storage: Arc<dyn KeyValueStore>,
    reference: Arc<dyn ReferenceData>,
}

impl fmt::Debug for FormStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStateStore")
            .field("form", &self.form)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

impl FormStateStore {
    /// Restore the saved snapshot, or start from an empty form
    ///
    /// An absent, unreadable or malformed entry yields the empty form.
    /// Loading never writes to storage.
    pub fn load(storage: Arc<dyn KeyValueStore>, reference: Arc<dyn ReferenceData>) -> Self {
        let form = match storage.get(FORM_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<RegistrationForm>(&raw) {
                Ok(form) => {
                    debug!("Restored saved registration form");
                    form
                }
                Err(e) => {
                    warn!(error = %e, "Discarding malformed saved form");
                    RegistrationForm::default()
                }
            },
            Ok(None) => RegistrationForm::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read saved form, starting empty");
                RegistrationForm::default()
            }
        };

        Self {
            form,
            storage,
            reference,
        }
    }

    pub fn snapshot(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.form.get(field)
    }

    pub fn reference(&self) -> &dyn ReferenceData {
        self.reference.as_ref()
    }

    /// Cities offered for the current country
    pub fn available_cities(&self) -> &[String] {
        self.reference.cities(&self.form.country)
    }

    /// Set one field and persist
    ///
    /// Setting `country` performs the compound country update.
    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        if field == FieldName::Country {
            return self.set_country(value);
        }

        *self.form.get_mut(field) = value.into();
        debug!(field = %field, "Field updated");

        self.persist()
    }

    /// Select a country: clears the city and derives the phone code, then persists
    pub fn set_country(&mut self, country: impl Into<String>) -> Result<(), DomainError> {
        let country = country.into();
        let phone_code = self.reference.calling_code(&country).to_string();

        if phone_code.is_empty() {
            debug!(country = %country, "Country not in reference data");
        }

        self.form.country = country;
        self.form.city.clear();
        self.form.phone_code = phone_code;
        debug!(country = %self.form.country, phone_code = %self.form.phone_code, "Country updated");

        self.persist()
    }

    /// Restore the empty form and persist it
    pub fn reset(&mut self) -> Result<(), DomainError> {
        self.form = RegistrationForm::default();
        debug!("Form reset");

        self.persist()
    }

    /// Overwrite the storage slot with the current snapshot
    pub fn persist(&self) -> Result<(), DomainError> {
        let json = serde_json::to_string(&self.form)
            .map_err(|e| DomainError::internal(format!("Failed to serialize form: {}", e)))?;

        self.storage.set(FORM_STORAGE_KEY, &json)
    }

    /// Remove the storage slot, returns true if an entry was present
    pub fn clear(&self) -> Result<bool, DomainError> {
        let removed = self.storage.remove(FORM_STORAGE_KEY)?;
        debug!(removed, "Cleared saved form");
        Ok(removed)
    }
}
