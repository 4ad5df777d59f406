// Symbolic-name reconstruction - maps a fully-qualified class name back to
// its canonical symbolic form, used to normalize caller-supplied casing.

use regex::Regex;

use crate::resolver::rules::{MappingRule, RuleTable, SEGMENT_SEPARATOR, WILDCARD_MODULE};

/// Reconstructs the canonical symbolic name for a class.
///
/// Rules are tried in registration order; the first whose pattern matches
/// wins. `None` means no rule produces this class, which callers may accept
/// as "no canonical alias" rather than an error.
pub fn unformat_class(class: &str, table: &RuleTable) -> Option<String> {
    table
        .iter()
        .find_map(|(module, rule)| try_rule(class, module, rule))
}

fn try_rule(class: &str, module: &str, rule: &MappingRule) -> Option<String> {
    let module_pattern = template_pattern(&rule.module_template);
    let class_pattern = template_pattern(&rule.class_template);
    // Capture groups: 1 = whole middle block, 2 = (unused) last module
    // segment, 3 = final segment.
    let full_pattern = format!(
        r"(?i)^\\?{}((?:{})*){}$",
        regex::escape(&rule.prefix),
        module_pattern,
        class_pattern,
    );
    let full = Regex::new(&full_pattern).expect("escaped template pattern always compiles");
    let captures = full.captures(class)?;

    let mut name = if module == WILDCARD_MODULE {
        String::new()
    } else {
        format!("{module}{SEGMENT_SEPARATOR}")
    };

    // Rewrite each module-template repetition in the middle block to its
    // captured segment, consuming anchored matches from the front.
    let anchored =
        Regex::new(&format!("(?i)^{module_pattern}")).expect("escaped template pattern always compiles");
    let mut middle = captures.get(1).map_or("", |m| m.as_str());
    while let Some(repeat) = anchored.captures(middle) {
        if let (Some(whole), Some(segment)) = (repeat.get(0), repeat.get(1)) {
            name.push_str(segment.as_str());
            name.push(SEGMENT_SEPARATOR);
            middle = &middle[whole.end()..];
        } else {
            break;
        }
    }

    name.push_str(captures.get(3).map_or("", |m| m.as_str()));
    Some(name)
}

/// Turns a template into a regex fragment: literals escaped, the single
/// placeholder replaced by a word-character capture group.
fn template_pattern(template: &str) -> String {
    match template.split_once('*') {
        Some((before, after)) => format!(
            r"{}(\w+){}",
            regex::escape(before),
            regex::escape(after)
        ),
        None => regex::escape(template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mapping::{MappingEntry, MappingSpec};
    use crate::resolver::formatter::format_class;

    #[test]
    fn test_single_segment_round_trip() {
        let table = RuleTable::new();
        assert_eq!(
            unformat_class("HomepageController", &table),
            Some("Homepage".to_string())
        );
    }

    #[test]
    fn test_module_path_round_trip() {
        let table = RuleTable::new();
        assert_eq!(
            unformat_class("AdminModule\\UsersController", &table),
            Some("Admin:Users".to_string())
        );
        assert_eq!(
            unformat_class("AdminModule\\SettingsModule\\UsersController", &table),
            Some("Admin:Settings:Users".to_string())
        );
    }

    #[test]
    fn test_registered_module_rule_reconstructs_module_prefix() {
        let mut table = RuleTable::new();
        table
            .set_mapping(vec![MappingEntry::new(
                "Shop",
                MappingSpec::parts(["ShopModule", "Presenters*", "*Controller"]),
            )])
            .unwrap();
        assert_eq!(
            unformat_class("ShopModule\\CartController", &table),
            Some("Shop:Cart".to_string())
        );
        assert_eq!(
            unformat_class("ShopModule\\PresentersCheckout\\PaymentController", &table),
            Some("Shop:Checkout:Payment".to_string())
        );
    }

    #[test]
    fn test_match_is_case_insensitive_but_keeps_class_casing() {
        let table = RuleTable::new();
        assert_eq!(
            unformat_class("AdminMODULE\\UsersCONTROLLER", &table),
            Some("Admin:Users".to_string())
        );
    }

    #[test]
    fn test_leading_separator_is_tolerated() {
        let table = RuleTable::new();
        assert_eq!(
            unformat_class("\\HomepageController", &table),
            Some("Homepage".to_string())
        );
    }

    #[test]
    fn test_foreign_class_has_no_canonical_form() {
        let table = RuleTable::new();
        assert_eq!(unformat_class("SomeService", &table), None);
        assert_eq!(unformat_class("Admin\\Users", &table), None);
    }

    #[test]
    fn test_first_registered_rule_wins() {
        let mut table = RuleTable::new();
        // Both rules can produce *Controller classes; the wildcard was
        // registered first and must win.
        table
            .set_mapping(vec![MappingEntry::new(
                "Legacy",
                MappingSpec::mask("*Controller"),
            )])
            .unwrap();
        assert_eq!(
            unformat_class("HomepageController", &table),
            Some("Homepage".to_string())
        );
    }

    #[test]
    fn test_round_trip_for_word_segments() {
        let mut table = RuleTable::new();
        table
            .set_mapping(vec![MappingEntry::new(
                "Shop",
                MappingSpec::parts(["ShopModule", "Presenters*", "*Controller"]),
            )])
            .unwrap();
        for name in [
            "Homepage",
            "Admin:Users",
            "Admin:Settings:Users",
            "Shop:Cart",
            "Shop:Checkout:Payment",
            "a1:b2:c3",
        ] {
            let class = format_class(name, &table);
            assert_eq!(
                unformat_class(&class, &table),
                Some(name.to_string()),
                "round trip failed for {name} via {class}"
            );
        }
    }
}
