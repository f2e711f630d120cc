//! Line filters behind `head` and `uniq`.

use std::collections::HashSet;

/// Take the first `count` lines.
pub fn take_head(lines: &[String], count: usize) -> Vec<String> {
    lines.iter().take(count).cloned().collect()
}

/// Keep the first occurrence of every line, preserving order.
pub fn unique_lines(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|line| seen.insert(line.as_str()))
        .cloned()
        .collect()
}
