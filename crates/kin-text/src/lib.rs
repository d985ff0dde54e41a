//! Text normalization for the kin similarity engine.
//!
//! Article text passes through three stages before it becomes vocabulary:
//!
//! 1. **Markup stripping**: tags are replaced by a separating space and common
//!    character entities are decoded ([`strip_markup`])
//! 2. **Normalization**: lowercasing, punctuation removal, whitespace collapsing,
//!    and token filtering against a fixed English stopword set ([`normalize`])
//! 3. **N-gram extraction**: contiguous token windows joined by a single space
//!    ([`ngrams`], [`terms`])
//!
//! Every function here is total: empty or degenerate input produces empty output.

#![warn(missing_docs)]

mod markup;
mod ngram;
mod normalize;
mod stopwords;

pub use markup::strip_markup;
pub use ngram::{ngrams, terms};
pub use normalize::{MIN_TOKEN_CHARS, Normalizer, normalize};
pub use stopwords::Stopwords;
