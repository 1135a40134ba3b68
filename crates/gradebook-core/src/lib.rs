//! gradebook-core — Student registry, course catalog, and grade ledger.
//!
//! This crate holds the in-memory data model and every operation the
//! gradebook front ends call. State lives for the lifetime of the process.

pub mod catalog;
pub mod config;
pub mod error;
pub mod gradebook;
pub mod ledger;
pub mod model;
pub mod registry;
pub mod report;

pub use catalog::CourseCatalog;
pub use config::{load_config_from, GradebookConfig};
pub use error::{CatalogError, RosterError};
pub use gradebook::Gradebook;
pub use ledger::Ledger;
pub use model::{Grade, Student, StudentHandle};
pub use registry::Registry;
