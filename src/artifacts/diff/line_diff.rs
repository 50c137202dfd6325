//! Positional line comparison
//!
//! Lines are compared index by index; this is not a minimal edit script. A
//! line inserted near the top of a file shifts every later comparison, so
//! the rest of the file shows up as changed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub index: usize,
    pub removed: String,
    pub added: String,
}

/// Compare `old` and `new` position by position
///
/// Positions past the end of the shorter side compare as empty lines.
pub fn compare_lines<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<LineChange> {
    let line_at = |lines: &[S], index: usize| {
        lines
            .get(index)
            .map(|line| line.as_ref().to_string())
            .unwrap_or_default()
    };

    (0..old.len().max(new.len()))
        .filter_map(|index| {
            let removed = line_at(old, index);
            let added = line_at(new, index);

            (removed != added).then_some(LineChange {
                index,
                removed,
                added,
            })
        })
        .collect()
}
