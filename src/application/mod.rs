//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers read through `StoryReader`; command handlers write through
//! the repositories.

pub mod handlers;

pub use handlers::*;
