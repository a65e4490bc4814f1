//! In-memory adapters for tests and local runs.

mod in_memory_catalog;

pub use in_memory_catalog::InMemoryCatalog;
