//! Reference data infrastructure - Country table implementations

mod country_table;

pub use country_table::{CountryTable, ReferenceDataError};
