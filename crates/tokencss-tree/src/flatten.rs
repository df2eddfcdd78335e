//! Depth-first flattening of a token tree.

use crate::tree::{Token, TokensFile};

/// Flatten a token tree into `(key, token)` pairs in document order.
///
/// Keys join the path segments with `/`, e.g. `Color/Base/Red/Red-10`.
/// Top-level tokens are keyed by their bare name.
pub fn flatten(tree: &TokensFile) -> Vec<(String, &Token)> {
    let mut out = Vec::new();
    flatten_into(tree, "", &mut out);
    out
}

fn flatten_into<'a>(
    node: &'a TokensFile,
    path: &str,
    out: &mut Vec<(String, &'a Token)>,
) {
    match node {
        TokensFile::Token(token) => out.push((path.to_string(), token)),
        TokensFile::Group(children) => {
            for (key, child) in children {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}/{key}")
                };
                flatten_into(child, &child_path, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenValue;
    use pretty_assertions::assert_eq;

    fn keys(source: &str) -> Vec<String> {
        let tree = TokensFile::from_json(source).unwrap();
        flatten(&tree).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_empty_tree() {
        assert!(keys("{}").is_empty());
    }

    #[test]
    fn test_nested_keys_are_slash_joined() {
        assert_eq!(
            keys(r#"{"Color": {"Base": {"Red": {"Red-10": {"$value": 1}}}}}"#),
            vec!["Color/Base/Red/Red-10"]
        );
    }

    #[test]
    fn test_top_level_token_has_bare_key() {
        assert_eq!(keys(r#"{"Opacity": {"$value": 0.5}}"#), vec!["Opacity"]);
    }

    #[test]
    fn test_depth_first_document_order() {
        let source = r#"{
            "B": {"Two": {"$value": 2}, "One": {"$value": 1}},
            "A": {"$value": 0},
            "C": {"Inner": {"X": {"$value": 3}}, "Y": {"$value": 4}}
        }"#;
        assert_eq!(
            keys(source),
            vec!["B/Two", "B/One", "A", "C/Inner/X", "C/Y"]
        );
    }

    #[test]
    fn test_preserves_key_casing() {
        assert_eq!(
            keys(r#"{"Font Family": {"Body": {"$value": "Inter"}}}"#),
            vec!["Font Family/Body"]
        );
    }

    #[test]
    fn test_empty_groups_produce_nothing() {
        assert_eq!(
            keys(r#"{"Empty": {}, "Full": {"X": {"$value": 1}}}"#),
            vec!["Full/X"]
        );
    }

    #[test]
    fn test_tokens_are_borrowed_from_tree() {
        let tree = TokensFile::from_json(r#"{"A": {"$value": true}}"#).unwrap();
        let flat = flatten(&tree);
        assert_eq!(flat[0].1.value, TokenValue::Boolean(true));
    }

    #[test]
    fn test_deterministic() {
        let source = r#"{"X": {"b": {"$value": 1}, "a": {"$value": 2}}, "W": {"$value": 3}}"#;
        let first = TokensFile::from_json(source).unwrap();
        let second = first.clone();
        assert_eq!(flatten(&first), flatten(&second));
        assert_eq!(keys(source), keys(source));
    }

    #[test]
    fn test_count_matches_tree() {
        let tree = TokensFile::from_json(
            r#"{"A": {"B": {"$value": 1}, "C": {"D": {"$value": 2}}}, "E": {"$value": 3}}"#,
        )
        .unwrap();
        assert_eq!(flatten(&tree).len(), tree.token_count());
    }
}
