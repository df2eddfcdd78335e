//! Token tree model and JSON ingestion.
//!
//! The document is parsed once into `serde_json::Value` (with key order
//! preserved) and then converted into [`TokensFile`], so the rest of the
//! pipeline works on an exhaustive tagged union instead of raw JSON.

use crate::TreeError;
use serde_json::{Map, Value};

/// A node of the token tree: either a leaf token or a group of named children.
#[derive(Debug, Clone, PartialEq)]
pub enum TokensFile {
    /// A leaf carrying `$value`.
    Token(Token),

    /// A group whose children keep document order.
    Group(Vec<(String, TokensFile)>),
}

/// A leaf design token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    /// `$type`, either declared on the token or inherited from a parent group.
    pub token_type: Option<String>,
}

/// The shape of a token's `$value`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Objects, arrays and `null`. Not supported by the generator.
    Composite(Value),
}

impl Token {
    pub fn new(value: TokenValue) -> Self {
        Self {
            value,
            token_type: None,
        }
    }

    pub fn with_type(mut self, token_type: &str) -> Self {
        self.token_type = Some(token_type.to_string());
        self
    }

    /// Whether `$type` is `"color"`.
    pub fn is_color(&self) -> bool {
        self.token_type.as_deref() == Some("color")
    }
}

impl TokenValue {
    pub fn is_composite(&self) -> bool {
        matches!(self, TokenValue::Composite(_))
    }
}

impl From<Value> for TokenValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => TokenValue::String(s),
            Value::Bool(b) => TokenValue::Boolean(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => TokenValue::Number(f),
                None => TokenValue::Composite(Value::Number(n)),
            },
            other => TokenValue::Composite(other),
        }
    }
}

impl TokensFile {
    /// Parse a token document from JSON text.
    pub fn from_json(source: &str) -> Result<TokensFile, TreeError> {
        let value: Value = serde_json::from_str(source)?;
        TokensFile::from_value(value)
    }

    /// Convert an already-parsed JSON value into a token tree.
    pub fn from_value(value: Value) -> Result<TokensFile, TreeError> {
        match value {
            Value::Object(map) => build_node(map, "", None),
            other => Err(TreeError::RootNotObject {
                found: kind_name(&other),
            }),
        }
    }

    /// Number of leaf tokens below this node.
    pub fn token_count(&self) -> usize {
        match self {
            TokensFile::Token(_) => 1,
            TokensFile::Group(children) => {
                children.iter().map(|(_, child)| child.token_count()).sum()
            }
        }
    }
}

fn build_node(
    mut map: Map<String, Value>,
    path: &str,
    inherited_type: Option<&str>,
) -> Result<TokensFile, TreeError> {
    let declared_type = match map.get("$type") {
        Some(Value::String(t)) => Some(t.clone()),
        _ => None,
    };
    let token_type = declared_type.or_else(|| inherited_type.map(str::to_string));

    if let Some(value) = map.remove("$value") {
        return Ok(TokensFile::Token(Token {
            value: TokenValue::from(value),
            token_type,
        }));
    }

    let mut children = Vec::with_capacity(map.len());
    for (key, child) in map {
        // Group metadata such as `$type` and `$description`.
        if key.starts_with('$') {
            continue;
        }
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}/{key}")
        };
        match child {
            Value::Object(child_map) => {
                let node = build_node(child_map, &child_path, token_type.as_deref())?;
                children.push((key, node));
            }
            other => {
                return Err(TreeError::UnexpectedValue {
                    path: child_path,
                    found: kind_name(&other),
                })
            }
        }
    }

    Ok(TokensFile::Group(children))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
