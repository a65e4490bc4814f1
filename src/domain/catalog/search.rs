//! Search input normalization and substring escaping.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StoryStatus;

/// Escape character used in `LIKE`/`ILIKE` patterns built by [`contains_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Neutralizes `LIKE` metacharacters so user text matches literally.
///
/// The escape character is doubled first so the escapes added for `%` and
/// `_` are not escaped a second time.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Builds a substring pattern (`%text%`) with the text escaped.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}

/// Result ordering for story queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently updated first.
    #[default]
    Latest,
    /// Highest view count first.
    Popular,
    /// Title ascending.
    Name,
    /// Highest cached rating first, unrated stories last.
    Rating,
    /// Oldest creation time first.
    Oldest,
}

impl SortOrder {
    /// Parses a sort key, falling back to [`SortOrder::Latest`] for anything
    /// unrecognized.
    pub fn parse_or_default(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "popular" => SortOrder::Popular,
            "name" => SortOrder::Name,
            "rating" => SortOrder::Rating,
            "oldest" => SortOrder::Oldest,
            _ => SortOrder::Latest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Popular => "popular",
            SortOrder::Name => "name",
            SortOrder::Rating => "rating",
            SortOrder::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advanced search filters as received from callers.
///
/// Every field is optional; blank strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSearchFilters {
    pub query: Option<String>,
    pub status: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub genre_slugs: Vec<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub sort_by: Option<String>,
}

/// Normalized advanced search filters.
///
/// `None` (or an empty slug list) always means "do not constrain".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub text: Option<String>,
    pub status: Option<StoryStatus>,
    pub country: Option<String>,
    pub genre_slugs: Vec<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub sort: SortOrder,
}

impl SearchFilters {
    /// Normalizes raw filters.
    ///
    /// Returns `None` when a specified value can match no story: a non-blank
    /// `status` that is not a known status constrains the search to nothing.
    pub fn normalize(raw: RawSearchFilters) -> Option<Self> {
        let status = match non_blank(raw.status) {
            Some(s) => Some(s.parse::<StoryStatus>().ok()?),
            None => None,
        };

        let mut genre_slugs: Vec<String> = Vec::new();
        for slug in raw.genre_slugs {
            let slug = slug.trim();
            if !slug.is_empty() && !genre_slugs.iter().any(|s| s == slug) {
                genre_slugs.push(slug.to_string());
            }
        }

        Some(Self {
            text: search_text(raw.query),
            status,
            country: non_blank(raw.country),
            genre_slugs,
            year_from: raw.year_from,
            year_to: raw.year_to,
            sort: raw
                .sort_by
                .as_deref()
                .map(SortOrder::parse_or_default)
                .unwrap_or_default(),
        })
    }
}

/// Keeps search text exactly as given unless it is blank.
pub(crate) fn search_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Trims a value, treating blank input as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
