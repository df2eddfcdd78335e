//! Design token tree
//!
//! Ingests a design-token JSON document into a typed tree and flattens it
//! into an ordered list of slash-joined keys and leaf tokens.
//! Document key order is preserved through both steps.
//!
//! # Example
//!
//! ```
//! use tokencss_tree::{flatten, TokensFile};
//!
//! let tree = TokensFile::from_json(r#"{"Space": {"S": {"$value": 4}}}"#).unwrap();
//! let flat = flatten(&tree);
//! assert_eq!(flat[0].0, "Space/S");
//! ```

pub mod flatten;
pub mod tree;

pub use flatten::flatten;
pub use tree::{Token, TokenValue, TokensFile};

/// Error raised while ingesting a token document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// The input text is not valid JSON.
    #[error("JSON error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// The document root is not a JSON object.
    #[error("token document root must be an object, found {found}")]
    RootNotObject { found: &'static str },

    /// A group member is neither a token nor a nested group.
    #[error("expected a token or group at `{path}`, found {found}")]
    UnexpectedValue { path: String, found: &'static str },
}

impl From<serde_json::Error> for TreeError {
    fn from(err: serde_json::Error) -> Self {
        TreeError::Syntax {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
