//! Page-based pagination value object.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A validated 1-based page request.
///
/// Offset is `(page - 1) * page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Creates a page request, rejecting a zero page or page size.
    pub fn new(page: u32, page_size: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::out_of_range("page", 1, u32::MAX as i64, 0));
        }
        if page_size == 0 {
            return Err(ValidationError::out_of_range(
                "page_size",
                1,
                u32::MAX as i64,
                0,
            ));
        }
        Ok(Self { page, page_size })
    }

    /// The first page holding at most `limit` rows.
    pub fn first(limit: u32) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::out_of_range("limit", 1, u32::MAX as i64, 0));
        }
        Ok(Self {
            page: 1,
            page_size: limit,
        })
    }

    /// Caps the page size at `max`.
    pub fn clamped(self, max: u32) -> Self {
        Self {
            page: self.page,
            page_size: self.page_size.min(max.max(1)),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }
}
