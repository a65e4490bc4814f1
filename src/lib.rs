//! Story Catalog - Query and rating aggregation engine for serialized stories
//!
//! This crate answers filtered, sorted and paginated story queries, manages
//! genre associations, and keeps each story's cached rating in step with
//! per-user ratings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
