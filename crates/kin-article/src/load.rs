//! Loading and saving the article feed.
//!
//! The feed is a single JSON array of article objects. Anything else at the top
//! level is a broken loader contract and fails immediately.

use std::{fs, path::Path};

use serde_json::Value;

use crate::{Article, ArticleError};

/// Loads articles from a JSON file.
pub fn load_articles(path: &Path) -> Result<Vec<Article>, ArticleError> {
    let contents = fs::read_to_string(path).map_err(|source| ArticleError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_articles(&contents, path)
}

/// Parses articles from a JSON string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_articles(contents: &str, path: &Path) -> Result<Vec<Article>, ArticleError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| ArticleError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_array() {
        return Err(ArticleError::NotASequence {
            path: path.to_path_buf(),
            found: json_kind(&value),
        });
    }

    serde_json::from_value(value).map_err(|source| ArticleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes articles to a JSON file as a pretty-printed array.
pub fn save_articles(path: &Path, articles: &[Article]) -> Result<(), ArticleError> {
    let mut json = serde_json::to_string_pretty(articles)
        .map_err(|source| ArticleError::Serialize { source })?;
    json.push('\n');

    fs::write(path, json).map_err(|source| ArticleError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Names the kind of a JSON value for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let json = r#"[{"id": "a", "title": "One"}, {"id": "b", "title": "Two"}]"#;
        let articles = parse_articles(json, Path::new("articles.json")).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "a");
        assert_eq!(articles[1].title, "Two");
    }

    #[test]
    fn test_parse_empty_array() {
        let articles = parse_articles("[]", Path::new("articles.json")).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_object_fails_fast() {
        let err = parse_articles(r#"{"id": "a"}"#, Path::new("articles.json")).unwrap_err();
        assert!(matches!(
            err,
            ArticleError::NotASequence {
                found: "an object",
                ..
            }
        ));
    }

    #[test]
    fn test_null_fails_fast() {
        let err = parse_articles("null", Path::new("articles.json")).unwrap_err();
        assert!(matches!(err, ArticleError::NotASequence { found: "null", .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_articles("[{", Path::new("articles.json")).unwrap_err();
        assert!(matches!(err, ArticleError::Parse { .. }));
    }

    #[test]
    fn test_invalid_element() {
        let err = parse_articles(r#"[{"id": 7}]"#, Path::new("articles.json")).unwrap_err();
        assert!(matches!(err, ArticleError::Parse { .. }));
    }

    #[test]
    fn test_error_mentions_path() {
        let err = parse_articles("42", Path::new("data/articles.json")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("data/articles.json"));
        assert!(message.contains("a number"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_articles(Path::new("/nonexistent/articles.json")).unwrap_err();
        assert!(matches!(err, ArticleError::ReadFile { .. }));
    }
}
