//! Query vocabulary shared by the store port and its callers.
//!
//! [`FilterText`] is the normalized free-text filter and [`Sort`] is a
//! closed sort specification. Neither carries SQL; adapters translate them.

use serde::{Deserialize, Serialize};

/// Minimum number of characters (after trimming) for a filter to apply.
pub const MIN_FILTER_LENGTH: usize = 2;

/// A case-insensitive substring filter over model name and description.
///
/// Construct with [`FilterText::parse`]; shorter input means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterText(String);

impl FilterText {
    /// Normalize raw user input.
    ///
    /// Returns `None` when the trimmed input is shorter than
    /// [`MIN_FILTER_LENGTH`] characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_FILTER_LENGTH {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    /// The lowercased, trimmed filter text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring match against name or description, folding Unicode case.
    pub fn matches(&self, name: &str, description: Option<&str>) -> bool {
        name.to_lowercase().contains(&self.0)
            || description.is_some_and(|d| d.to_lowercase().contains(&self.0))
    }
}

/// Column a query may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    Description,
    CreatedBy,
    Created,
    LastUpdated,
    ModelType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Ordering requested from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Sort {
    pub const fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub const fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::asc(SortField::Name)
    }
}
