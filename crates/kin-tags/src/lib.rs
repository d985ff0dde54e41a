//! Tag assignment and subcategory classification.
//!
//! Both run before the similarity engine sees a corpus: tags feed the Jaccard
//! term of the relatedness score and subcategories feed the category bonus.
//! The [`Tagger`] matches keywords as whole words; the [`Classifier`] counts
//! keyword substrings and picks the category with the most hits.

#![warn(missing_docs)]

mod builtin;
mod classify;
mod error;
mod rule;
mod tagger;

pub use builtin::{BUILTIN_CATEGORIES, BUILTIN_TAGS, DEFAULT_FALLBACK, DEFAULT_REPLACE};
pub use classify::{ClassifyReport, Classifier};
pub use error::TagError;
pub use rule::KeywordRule;
pub use tagger::{TagReport, Tagger};
