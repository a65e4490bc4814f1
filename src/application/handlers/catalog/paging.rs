//! Page resolution shared by the story listing handlers.

use crate::config::CatalogConfig;
use crate::domain::foundation::{PageRequest, ValidationError};

/// Default and maximum page sizes applied to caller-supplied paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub featured_limit: u32,
}

impl PagingPolicy {
    /// Resolves optional paging input into a page request.
    ///
    /// Missing values take the defaults; an explicit zero is rejected and
    /// an oversized page is clamped to `max_page_size`.
    pub fn resolve(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<PageRequest, ValidationError> {
        let request = PageRequest::new(
            page.unwrap_or(1),
            page_size.unwrap_or(self.default_page_size),
        )?;
        Ok(request.clamped(self.max_page_size))
    }

    /// Resolves the single page used by latest/hot listings.
    pub fn featured(&self, limit: Option<u32>) -> Result<PageRequest, ValidationError> {
        let request = PageRequest::first(limit.unwrap_or(self.featured_limit))?;
        Ok(request.clamped(self.max_page_size))
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}

impl From<&CatalogConfig> for PagingPolicy {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            featured_limit: config.featured_limit,
        }
    }
}
