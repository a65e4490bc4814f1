//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, pagination, errors)
//! - `catalog` - Stories, genres and the story query model
//! - `rating` - Per-user scores and the rating aggregate

pub mod catalog;
pub mod foundation;
pub mod rating;
