//! Infrastructure layer - Storage, reference data and form services

pub mod logging;
pub mod reference;
pub mod services;
pub mod storage;
