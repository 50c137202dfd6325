//! Three-way resolution of versioned text
//!
//! The resolver compares whole texts, never their lines or fields. It is
//! currently fed the serialized commit records of the merge base and the two
//! tips, so differing metadata (date, author) on both sides is reported as a
//! conflict even when the snapshots agree.

pub const CURRENT_BRANCH_MARKER: &str = "<<<<<<< CURRENT BRANCH";
pub const SEPARATOR_MARKER: &str = "=======";
pub const SOURCE_BRANCH_MARKER: &str = ">>>>>>> SOURCE BRANCH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Ours,
    Theirs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One side's text is taken as is
    Clean { side: Side, content: String },
    /// Both sides changed differently, content holds conflict markers
    Conflict { content: String },
}

impl Resolution {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Resolution::Conflict { .. })
    }

    pub fn content(&self) -> &str {
        match self {
            Resolution::Clean { content, .. } | Resolution::Conflict { content } => content,
        }
    }
}

/// Resolve `ours` and `theirs` against their common `base`
///
/// Rules, first match wins: identical sides take ours; a side equal to the
/// base takes the other side; anything else is a conflict.
pub fn resolve(base: &str, ours: &str, theirs: &str) -> Resolution {
    if ours == theirs {
        Resolution::Clean {
            side: Side::Ours,
            content: ours.to_string(),
        }
    } else if base == ours {
        Resolution::Clean {
            side: Side::Theirs,
            content: theirs.to_string(),
        }
    } else if base == theirs {
        Resolution::Clean {
            side: Side::Ours,
            content: ours.to_string(),
        }
    } else {
        Resolution::Conflict {
            content: format!(
                "{CURRENT_BRANCH_MARKER}\n{ours}\n{SEPARATOR_MARKER}\n{theirs}\n{SOURCE_BRANCH_MARKER}\n"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::identical_sides("base", "same", "same", Side::Ours, "same")]
    #[case::identical_to_base("base", "base", "base", Side::Ours, "base")]
    #[case::only_theirs_changed("base", "base", "changed", Side::Theirs, "changed")]
    #[case::only_ours_changed("base", "changed", "base", Side::Ours, "changed")]
    fn clean_resolutions(
        #[case] base: &str,
        #[case] ours: &str,
        #[case] theirs: &str,
        #[case] side: Side,
        #[case] content: &str,
    ) {
        let resolution = resolve(base, ours, theirs);

        assert!(!resolution.is_conflict());
        assert_eq!(
            resolution,
            Resolution::Clean {
                side,
                content: content.to_string()
            }
        );
    }

    #[test]
    fn both_sides_changed_is_a_conflict_with_ordered_markers() {
        let resolution = resolve("base", "ours", "theirs");

        assert!(resolution.is_conflict());
        assert_eq!(
            resolution.content(),
            "<<<<<<< CURRENT BRANCH\nours\n=======\ntheirs\n>>>>>>> SOURCE BRANCH\n"
        );

        let content = resolution.content();
        let current = content.find(CURRENT_BRANCH_MARKER).unwrap();
        let separator = content.find(SEPARATOR_MARKER).unwrap();
        let source = content.find(SOURCE_BRANCH_MARKER).unwrap();
        assert!(current < separator && separator < source);
    }
}
