//! Group header comments.
//!
//! A fold over the flattened keys: whenever a key's parent group differs from
//! the previous key's, a `/* Group */` comment is emitted before it.

/// Fold state: the group of the previous key, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupState {
    previous: Option<String>,
}

impl GroupState {
    /// Advance over `key`, returning the new state and the text to emit before it.
    ///
    /// Every group after the first gets a leading blank line. Top-level keys
    /// belong to the empty group, which has no comment; returning to it after
    /// a named group still yields the blank separator line.
    pub fn advance(self, key: &str) -> (GroupState, Option<String>) {
        let next = group_of(key);
        if self.previous.as_deref() == Some(next) {
            return (self, None);
        }

        let comment = match (&self.previous, next.is_empty()) {
            (None, true) => None,
            (Some(_), true) => Some(String::new()),
            (None, false) => Some(group_comment(next)),
            (Some(_), false) => Some(format!("\n{}", group_comment(next))),
        };

        let state = GroupState {
            previous: Some(next.to_string()),
        };
        (state, comment)
    }
}

/// The group of a flattened key: every segment except the last.
pub fn group_of(key: &str) -> &str {
    key.rsplit_once('/').map_or("", |(group, _)| group)
}

/// `/* group */`, with any `*/` inside the name broken up so the comment stays closed.
fn group_comment(group: &str) -> String {
    format!("/* {} */", group.replace("*/", "* /"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comments(keys: &[&str]) -> Vec<Option<String>> {
        let (_, out) = keys.iter().fold(
            (GroupState::default(), Vec::new()),
            |(state, mut out), key| {
                let (state, comment) = state.advance(key);
                out.push(comment);
                (state, out)
            },
        );
        out
    }

    #[test]
    fn test_group_of() {
        assert_eq!(group_of("Color/Base/Red-10"), "Color/Base");
        assert_eq!(group_of("Color/Red"), "Color");
        assert_eq!(group_of("Opacity"), "");
    }

    #[test]
    fn test_first_group_has_no_blank_line() {
        assert_eq!(
            comments(&["Color/Base/Red"]),
            vec![Some("/* Color/Base */".to_string())]
        );
    }

    #[test]
    fn test_shared_group_comments_once() {
        assert_eq!(
            comments(&["Color/Red", "Color/Blue", "Color/Green"]),
            vec![Some("/* Color */".to_string()), None, None]
        );
    }

    #[test]
    fn test_group_change_adds_blank_line() {
        assert_eq!(
            comments(&["Color/Red", "Space/S", "Space/M"]),
            vec![
                Some("/* Color */".to_string()),
                Some("\n/* Space */".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_revisited_group_comments_again() {
        let out = comments(&["A/x", "B/y", "A/z"]);
        assert_eq!(out[2], Some("\n/* A */".to_string()));
    }

    #[test]
    fn test_nested_group_is_distinct_from_parent() {
        assert_eq!(
            comments(&["Color/Red", "Color/Base/Red"]),
            vec![
                Some("/* Color */".to_string()),
                Some("\n/* Color/Base */".to_string()),
            ]
        );
    }

    #[test]
    fn test_top_level_keys_have_no_comment() {
        assert_eq!(
            comments(&["Opacity", "Radius", "Space/S"]),
            vec![None, None, Some("\n/* Space */".to_string())]
        );
    }

    #[test]
    fn test_top_level_key_after_group_is_separated() {
        assert_eq!(
            comments(&["Space/S", "Opacity", "Radius"]),
            vec![Some("/* Space */".to_string()), Some(String::new()), None]
        );
    }

    #[test]
    fn test_comment_close_in_group_name_is_broken_up() {
        assert_eq!(
            comments(&["A */ .x{color:red} /*/y"]),
            vec![Some("/* A * / .x{color:red} /* */".to_string())]
        );
    }

    #[test]
    fn test_state_is_independent_per_fold() {
        let first = comments(&["A/x"]);
        let second = comments(&["A/x"]);
        assert_eq!(first, second);
    }
}
