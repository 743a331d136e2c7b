//! Ports - Interfaces between the application core and infrastructure.
//!
//! - `RunStore` - Persistence for decision runs

mod run_store;

pub use run_store::{RunStore, RunStoreError};
