//! Locale-aware string ordering for file names.
//!
//! Approximates the root collation browsers use for `localeCompare`:
//! names are compared ignoring accents and case first, then accents, then
//! case (lowercase first), and finally by code point so the order is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

fn base_letters(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn with_accents(s: &str) -> String {
    s.nfkd().flat_map(char::to_lowercase).collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfkd().zip(b.nfkd()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) if cb.is_uppercase() => return Ordering::Less,
            (false, true) if ca.is_uppercase() => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Compare two names the way a user-facing listing sorts them.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| with_accents(a).cmp(&with_accents(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| locale_compare(a, b));
        v
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(sorted(&["banana", "Apple", "cherry"]), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_compare("readme", "README"), Ordering::Less);
        assert_eq!(locale_compare("README", "readme"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_near_base_letter() {
        assert_eq!(sorted(&["zeta", "éclair", "eagle"]), vec!["eagle", "éclair", "zeta"]);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_total_order() {
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
        // canonically different encodings still get a deterministic order
        let composed = "\u{e9}";
        let decomposed = "e\u{301}";
        assert_ne!(locale_compare(composed, decomposed), Ordering::Equal);
        assert_eq!(
            locale_compare(composed, decomposed),
            locale_compare(decomposed, composed).reverse()
        );
    }
}
