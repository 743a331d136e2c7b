//! Storage Adapters
//!
//! Implementations of the RunStore port.
//!
//! ## Available Adapters
//!
//! - **FileRunStore** - One YAML file per run on disk
//! - **InMemoryRunStore** - Runs kept in memory (default, testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRunStore, InMemoryRunStore};
//!
//! let store = FileRunStore::new("./data/runs");
//! let store = InMemoryRunStore::new();
//! ```

mod file_run_store;
mod in_memory_run_store;

pub use file_run_store::FileRunStore;
pub use in_memory_run_store::InMemoryRunStore;
