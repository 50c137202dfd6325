//! `.mygitignore` matching
//!
//! Each non-blank line that does not start with `#` is a pattern. `*` matches
//! any run of characters, `?` exactly one, everything else is literal. A
//! pattern has to match the whole filename it is tested against.

use anyhow::Context;
use regex::Regex;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".mygitignore";

#[derive(Debug, Default)]
pub struct IgnoreRules {
    patterns: Vec<Regex>,
}

impl IgnoreRules {
    /// Load the rules from the working directory, empty when the file is absent
    pub fn load(workspace_path: &Path) -> anyhow::Result<Self> {
        let path = workspace_path.join(IGNORE_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Unable to read ignore file {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Self::compile)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(IgnoreRules { patterns })
    }

    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(file_name))
    }

    fn compile(pattern: &str) -> anyhow::Result<Regex> {
        let mut regex = String::from("^");
        for c in pattern.chars() {
            match c {
                '*' => regex.push_str(".*"),
                '?' => regex.push('.'),
                c => regex.push_str(&regex::escape(&c.to_string())),
            }
        }
        regex.push('$');

        Regex::new(&regex).with_context(|| format!("invalid ignore pattern {pattern:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*.log", "debug.log", true)]
    #[case("*.log", "debug.log.txt", false)]
    #[case("file?.txt", "file1.txt", true)]
    #[case("file?.txt", "file10.txt", false)]
    #[case("build/*", "build/out.bin", true)]
    #[case("a.b", "axb", false)]
    #[case("[x]", "[x]", true)]
    fn matches_whole_names(#[case] pattern: &str, #[case] name: &str, #[case] expected: bool) {
        let rules = IgnoreRules::parse(pattern).unwrap();

        assert_eq!(rules.is_ignored(name), expected);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let rules = IgnoreRules::parse("# comment\n\n   \n*.tmp\n").unwrap();

        assert!(rules.is_ignored("x.tmp"));
        assert!(!rules.is_ignored("# comment"));
        assert!(!rules.is_ignored(""));
    }
}
