//! Catalog query configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Paging limits applied by the catalog handlers
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CatalogConfig {
    /// Page size used when the caller supplies none
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Requested page sizes above this are clamped down to it
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Limit for latest/hot listings when the caller supplies none
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,

    /// Recompute every cached rating aggregate when the binary starts
    #[serde(default = "default_repair_on_start")]
    pub repair_on_start: bool,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.featured_limit == 0 || self.featured_limit > self.max_page_size {
            return Err(ValidationError::InvalidFeaturedLimit);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            featured_limit: default_featured_limit(),
            repair_on_start: default_repair_on_start(),
        }
    }
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    100
}

fn default_featured_limit() -> u32 {
    10
}

fn default_repair_on_start() -> bool {
    true
}
