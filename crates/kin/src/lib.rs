//! kin: related articles for a static article site.
//!
//! kin reads the site's article feed, a JSON array of article records, and answers one
//! question well: which other articles is this one most related to? Relatedness blends
//! TF-IDF cosine similarity over titles, summaries and body prefixes with tag overlap
//! and a small same-subcategory bonus. The same binary maintains the feed's metadata by
//! assigning keyword tags and filling in missing subcategories.

#![warn(missing_docs)]

pub mod cli;
