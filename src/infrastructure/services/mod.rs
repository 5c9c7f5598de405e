//! Infrastructure services

mod form_store;
mod submission;

pub use form_store::{FormStateStore, FORM_STORAGE_KEY};
pub use submission::{SubmissionController, SubmissionOutcome, SubmissionState, SuccessPayload};
