//! Submission controller - validate, then clear storage and hand off the snapshot
//!
//! States: `Editing -> Validating -> {Rejected, Accepted}`. A rejection keeps
//! the form editable and may be resubmitted any number of times; acceptance is
//! terminal for this form instance.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{validate, DomainError, ErrorSet, FieldName, RegistrationForm};

use super::form_store::FormStateStore;

/// Where the controller is in the submit flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submit attempted yet
    Editing,
    /// Validator running
    Validating,
    /// Last submit failed; the form stays editable
    Rejected { errors: ErrorSet },
    /// Submitted; no further edits
    Accepted,
}

impl SubmissionState {
    pub fn is_editable(&self) -> bool {
        !matches!(self, Self::Accepted | Self::Validating)
    }
}

/// Final snapshot handed to the success view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuccessPayload(RegistrationForm);

impl SuccessPayload {
    pub fn form(&self) -> &RegistrationForm {
        &self.0
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(&self.0)
            .map_err(|e| DomainError::internal(format!("Failed to render payload: {}", e)))
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Rejected(ErrorSet),
    Accepted(SuccessPayload),
}

/// Owns the form state and drives it through submission
#[derive(Debug)]
pub struct SubmissionController {
    store: FormStateStore,
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new(store: FormStateStore) -> Self {
        Self {
            store,
            state: SubmissionState::Editing,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn store(&self) -> &FormStateStore {
        &self.store
    }

    pub fn snapshot(&self) -> &RegistrationForm {
        self.store.snapshot()
    }

    /// Errors from the last rejected submit
    pub fn errors(&self) -> Option<&ErrorSet> {
        match &self.state {
            SubmissionState::Rejected { errors } => Some(errors),
            _ => None,
        }
    }

    /// Validate the current snapshot without changing state
    pub fn preview_errors(&self) -> ErrorSet {
        validate(self.store.snapshot())
    }

    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.store.set_field(field, value)
    }

    pub fn set_country(&mut self, country: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.store.set_country(country)
    }

    pub fn reset(&mut self) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.store.reset()?;
        self.state = SubmissionState::Editing;
        Ok(())
    }

    /// Run the validator and either reject or accept the form
    ///
    /// On acceptance the storage slot is removed before the payload is
    /// returned. If that removal fails the controller goes back to `Editing`.
    pub fn submit(&mut self) -> Result<SubmissionOutcome, DomainError> {
        self.ensure_editable()?;

        let previous = std::mem::replace(&mut self.state, SubmissionState::Validating);
        debug!("Validating registration form");

        let errors = validate(self.store.snapshot());

        if !errors.is_empty() {
            info!(invalid_fields = errors.len(), "Submission rejected");
            self.state = SubmissionState::Rejected {
                errors: errors.clone(),
            };
            return Ok(SubmissionOutcome::Rejected(errors));
        }

        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear saved form, submission not completed");
            self.state = match previous {
                SubmissionState::Rejected { .. } => SubmissionState::Editing,
                other => other,
            };
            return Err(e);
        }

        self.state = SubmissionState::Accepted;
        info!("Submission accepted");

        Ok(SubmissionOutcome::Accepted(SuccessPayload(
            self.store.snapshot().clone(),
        )))
    }

    fn ensure_editable(&self) -> Result<(), DomainError> {
        if self.state == SubmissionState::Accepted {
            return Err(DomainError::conflict("Form has already been submitted"));
        }

        Ok(())
    }
}
