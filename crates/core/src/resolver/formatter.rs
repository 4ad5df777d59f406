// Class-name formatter - rewrites a symbolic handler name into a
// fully-qualified class name through the mapping rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::resolver::rules::{RuleTable, SEGMENT_SEPARATOR};

/// Shape of a well-formed symbolic name: a letter followed by letters,
/// digits, or segment separators.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9:]*$").expect("invalid name regex"));

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Derives the candidate class name for a symbolic name.
///
/// The first segment is consumed as a module key only when at least two
/// segments exist and the key has a registered rule; every remaining
/// non-final segment goes through the module template, the final segment
/// through the class template. Pure function of the name and the table.
pub fn format_class(name: &str, table: &RuleTable) -> String {
    let mut segments: Vec<&str> = name.split(SEGMENT_SEPARATOR).collect();

    let rule = if segments.len() >= 2 {
        match table.get(segments[0]) {
            Some(rule) => {
                segments.remove(0);
                rule
            }
            None => table.wildcard(),
        }
    } else {
        table.wildcard()
    };

    let mut class = rule.prefix.clone();
    if let Some((last, middle)) = segments.split_last() {
        for segment in middle {
            class.push_str(&rule.module_template.replacen('*', segment, 1));
        }
        class.push_str(&rule.class_template.replacen('*', last, 1));
    }
    class
}
