//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - RunStore implementations (in-memory, YAML files)
//! - `http` - axum REST API

pub mod http;
pub mod storage;

pub use http::{build_router, RunHandlers};
pub use storage::{FileRunStore, InMemoryRunStore};
