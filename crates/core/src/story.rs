//! The story content model.
//!
//! A [`Story`] is one authored article record. Stories are immutable once created:
//! the collection only ever grows by prepending, so every field here is fixed at
//! publication time.
//!
//! ## Serialisation contract
//!
//! The persisted collection is a JSON array of story records with camelCase field
//! names (`imageUrl`, `readTime`) and the human-facing category labels
//! (`"Chronic Care"`, `"Mental Health"`). This layout is part of the stored-data
//! contract and must not change without invalidating existing collections.

use crate::error::{StoryError, StoryResult};
use std::fmt;
use std::str::FromStr;

/// Opaque unique story identifier.
///
/// Ids are assigned by the publication flow (see [`crate::author::StoryIdGenerator`])
/// and round-tripped verbatim through persistence: ids loaded from a stored
/// collection are never re-validated or re-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    /// Wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of story categories.
///
/// This enum is deliberately *closed*: category values are typed, never free
/// text, so filtering is an exact match with no normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Prevention,
    #[serde(rename = "Chronic Care")]
    ChronicCare,
    Nutrition,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    MedTech,
    Research,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Prevention,
        Category::ChronicCare,
        Category::Nutrition,
        Category::MentalHealth,
        Category::MedTech,
        Category::Research,
    ];

    /// Returns the human-facing label, which is also the serialised form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Prevention => "Prevention",
            Category::ChronicCare => "Chronic Care",
            Category::Nutrition => "Nutrition",
            Category::MentalHealth => "Mental Health",
            Category::MedTech => "MedTech",
            Category::Research => "Research",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = StoryError;

    /// Parses a category from its exact label. Case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::UnknownCategory`] if `s` is not one of the closed
    /// set of labels.
    fn from_str(s: &str) -> StoryResult<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| StoryError::UnknownCategory(s.to_string()))
    }
}

/// A category filter for the reading surface.
///
/// `All` is the "no filter" sentinel; `Only` selects the subsequence of stories
/// with an exactly equal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = StoryError;

    /// Parses `"All"` or an exact category label. Case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::UnknownCategory`] if `s` is neither `"All"` nor a
    /// category label.
    fn from_str(s: &str) -> StoryResult<Self> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(s.parse()?))
    }
}

/// One authored article record.
///
/// `content` is free text that may contain zero or more embed tokens
/// (`[[IMG:url]]` / `[[VID:url]]`); see [`crate::markup`]. `date` is a
/// human-readable formatted string, not a sortable timestamp — collection order
/// carries the newest-first semantics, not this field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub author: String,
    pub date: String,
    pub image_url: String,
    pub read_time: String,
}
