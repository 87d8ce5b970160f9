//! Search API payload types
//!
//! These mirror the JSON returned by `GET /api/v1/search`. Fields the live API
//! is known to send as `null` (url, title, points, comment count) are optional
//! so that one odd record never fails the decode of a whole page.

use crate::HN_ITEM_URL;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Full search response
///
/// Only `hits` is used by the application; the remaining fields are kept so
/// the payload can be logged and inspected as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
    #[serde(rename = "nbHits", default)]
    pub nb_hits: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(rename = "nbPages", default)]
    pub nb_pages: Option<u64>,
    #[serde(rename = "hitsPerPage", default)]
    pub hits_per_page: Option<u64>,
    #[serde(rename = "exhaustiveNbHits", default)]
    pub exhaustive_nb_hits: Option<bool>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub params: Option<String>,
    #[serde(rename = "processingTimeMS", default)]
    pub processing_time_ms: Option<u64>,
}

/// A single search result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Opaque identifier, the only field used for identity
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default)]
    pub num_comments: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at_i: i64,
    #[serde(default)]
    pub story_text: Option<String>,
    #[serde(default)]
    pub comment_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub story_id: Option<String>,
    #[serde(default)]
    pub story_title: Option<String>,
    #[serde(default)]
    pub story_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub relevancy_score: Option<i64>,
    #[serde(rename = "_tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "_highlightResult", default)]
    pub highlight_result: Option<HighlightResult>,
}

/// Highlight metadata for the matched fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightResult {
    #[serde(default)]
    pub title: Option<HighlightField>,
    #[serde(default)]
    pub url: Option<HighlightField>,
    #[serde(default)]
    pub author: Option<HighlightField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightField {
    pub value: String,
    #[serde(rename = "matchLevel")]
    pub match_level: MatchLevel,
    #[serde(rename = "fullyHighlighted", default)]
    pub fully_highlighted: Option<bool>,
    #[serde(rename = "matchedWords", alias = "matchWords", default)]
    pub matched_words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    None,
    Partial,
    Full,
    #[serde(other)]
    Unknown,
}

impl Hit {
    /// Create a hit with only an id and a title set
    pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Title to display, falling back to the parent story's title
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.story_title.as_deref()))
            .unwrap_or("(untitled)")
    }

    /// Link target for the title
    ///
    /// Self posts (Ask HN etc.) carry no url, so the HN item page is used.
    pub fn link(&self) -> String {
        non_empty(self.url.as_deref())
            .or_else(|| non_empty(self.story_url.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}{}", HN_ITEM_URL, self.object_id))
    }

    pub fn point_count(&self) -> u64 {
        self.points.unwrap_or(0)
    }

    pub fn comment_count(&self) -> u64 {
        self.num_comments.unwrap_or(0)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// The API sends story/parent ids as numbers, older payloads as strings
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    }))
}
