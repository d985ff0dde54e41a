//! Article records for kin.
//!
//! An article is one entry of the content directory's JSON feed. The similarity
//! engine reads articles but never mutates them; tag assignment and subcategory
//! classification happen before the corpus is handed to the engine.
//!
//! Fields the engine does not use (dates, links, attachments, ...) are kept in
//! [`Article::extra`] so that a load/save cycle preserves them verbatim.

#![warn(missing_docs)]

mod error;
mod load;

pub use error::ArticleError;
pub use load::{load_articles, parse_articles, save_articles};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnNull, serde_as};

/// A single article from the feed.
///
/// Missing and `null` values default to empty, so a sparse record still
/// participates in similarity scoring with lower-quality signals.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Article {
    /// Unique, stable identifier.
    pub id: String,
    /// Article title.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Subtitle shown under the title; used when there is no summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dek: Option<String>,
    /// Body markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Body markup from feeds that name it `body`; saved back under that key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Free-form topic tags.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
    /// Subcategory label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// All other fields, preserved in their original order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// Creates an article with the given id and title and no other content.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the dek.
    pub fn with_dek(mut self, dek: impl Into<String>) -> Self {
        self.dek = Some(dek.into());
        self
    }

    /// Sets the body markup.
    pub fn with_body(mut self, body_html: impl Into<String>) -> Self {
        self.body_html = Some(body_html.into());
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the subcategory.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Returns the summary if non-empty, otherwise the dek, otherwise "".
    pub fn summary_text(&self) -> &str {
        [&self.summary, &self.dek]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    /// Returns the body markup, or "" when absent.
    ///
    /// `body_html` wins when a record carries both keys.
    pub fn body(&self) -> &str {
        self.body_html
            .as_deref()
            .or(self.body.as_deref())
            .unwrap_or("")
    }

    /// Returns the subcategory for category matching.
    ///
    /// An empty subcategory is treated as missing: "no category" is never a
    /// shared category.
    pub fn category(&self) -> Option<&str> {
        self.subcategory.as_deref().filter(|s| !s.is_empty())
    }
}
