//! Paginated story results.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PageRequest;

use super::Story;

/// One page of stories plus the size of the whole matching set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryList {
    /// Stories in this page.
    pub items: Vec<Story>,

    /// Total number of matching stories before pagination.
    pub total: u64,

    pub page: u32,

    pub page_size: u32,

    /// Whether there are more results after this page.
    pub has_more: bool,
}

impl StoryList {
    pub fn new(items: Vec<Story>, total: u64, page: &PageRequest) -> Self {
        let has_more = page.offset() + (items.len() as u64) < total;
        Self {
            items,
            total,
            page: page.page(),
            page_size: page.page_size(),
            has_more,
        }
    }

    pub fn empty(page: &PageRequest) -> Self {
        Self::new(Vec::new(), 0, page)
    }
}
