//! Design token → CSS custom-property generator
//!
//! Compiles a flattened token tree into one selector block of custom-property
//! declarations, with a comment heading each group of sibling tokens.
//!
//! ```text
//! TokensFile → flatten() → (key, token)* → compile() → CompilerOutput { css, .. }
//! ```

pub mod alias;
pub mod color;
pub mod comments;
pub mod css;
pub mod value;

use serde::Deserialize;
use std::fmt;
use tokencss_tree::{flatten, TokensFile, TreeError};

pub use alias::{custom_property_name, is_alias};
pub use comments::GroupState;
pub use value::{stringify, COMPOSITE_SENTINEL};

/// The compiled output for one token document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub css: String,
    pub token_count: usize,
    /// Flattened keys of tokens whose composite value was replaced by the sentinel.
    pub unsupported: Vec<String>,
}

/// Error raised by [`compile_str`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Selector wrapping the generated declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Selector {
    /// `:root`
    #[default]
    Root,
    /// An SCSS placeholder, `%<name>`.
    Placeholder(String),
}

impl Selector {
    /// Placeholder selector named after a token file, e.g. `Color.Light.json` → `%color-light`.
    pub fn for_file(file_name: &str) -> Selector {
        let base = file_name
            .rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(file_name);
        let stem = base.strip_suffix(".json").unwrap_or(base);
        Selector::Placeholder(stem.to_lowercase().replace('.', "-"))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Root => f.write_str(":root"),
            Selector::Placeholder(name) => write!(f, "%{name}"),
        }
    }
}

impl TryFrom<String> for Selector {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == ":root" {
            Ok(Selector::Root)
        } else if let Some(name) = value.strip_prefix('%').filter(|n| !n.is_empty()) {
            Ok(Selector::Placeholder(name.to_string()))
        } else {
            Err(format!(
                "unsupported selector `{value}`, expected `:root` or `%name`"
            ))
        }
    }
}

/// How `$type: "color"` string values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// The source string, unchanged.
    #[default]
    Raw,
    /// Parsed and re-emitted as `rgb()` / `rgba()` with 0–255 channels.
    Rgb,
}

/// Options for a single compilation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub selector: Selector,
    /// Spaces per indentation level inside the selector block.
    pub indent: usize,
    pub color: ColorFormat,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            selector: Selector::Root,
            indent: 2,
            color: ColorFormat::Raw,
        }
    }
}

/// Compile a token tree into a CSS block.
pub fn compile(tree: &TokensFile, options: &CompileOptions) -> CompilerOutput {
    let flat = flatten(tree);

    let (_, comments) = flat.iter().fold(
        (GroupState::default(), Vec::with_capacity(flat.len())),
        |(state, mut comments), (key, _)| {
            let (state, comment) = state.advance(key);
            comments.push(comment);
            (state, comments)
        },
    );

    let mut unsupported = Vec::new();
    let units: Vec<String> = flat
        .iter()
        .zip(comments)
        .map(|((key, token), comment)| {
            if token.value.is_composite() {
                unsupported.push(key.clone());
            }
            let declaration = css::declaration(key, &stringify(key, token, options.color));
            match comment {
                Some(comment) => format!("{comment}\n{declaration}"),
                None => declaration,
            }
        })
        .collect();

    CompilerOutput {
        css: css::serialize(&units, &options.selector, options.indent),
        token_count: flat.len(),
        unsupported,
    }
}

/// Parse a JSON token document and compile it.
pub fn compile_str(
    source: &str,
    options: &CompileOptions,
) -> Result<CompilerOutput, CompileError> {
    let tree = TokensFile::from_json(source)?;
    Ok(compile(&tree, options))
}
