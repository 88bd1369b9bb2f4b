//! Named character reference lookup.
//!
//! The data lives in [`super::entity_data`] as a static slice sorted by
//! name, so lookup is a binary search with no startup cost and the table is
//! freely shareable across threads.

use super::entity_data::NAMED_REFERENCES;

/// Case-sensitive lookup of a reference name, without its `&` and `;`.
pub(crate) fn lookup(name: &str) -> Option<&'static str> {
    NAMED_REFERENCES
        .binary_search_by_key(&name, |&(n, _)| n)
        .ok()
        .map(|idx| NAMED_REFERENCES[idx].1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::super::entity_data::NAMED_REFERENCES;
    use super::lookup;

    // Binary search relies on this; it guards regeneration of the data file.
    #[test]
    fn table_is_sorted_and_unique() {
        for pair in NAMED_REFERENCES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "out of order: {:?} before {:?}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    // Every name must be reachable by the parser: leading letter, then
    // alphanumerics, at most 31 bytes.
    #[test]
    fn names_fit_parser_bounds() {
        for &(name, value) in NAMED_REFERENCES {
            assert!(!name.is_empty() && name.len() <= 31, "bad name {name:?}");
            assert!(name.as_bytes()[0].is_ascii_alphabetic(), "bad name {name:?}");
            assert!(
                name.bytes().all(|b| b.is_ascii_alphanumeric()),
                "bad name {name:?}"
            );
            assert!(!value.is_empty(), "empty value for {name:?}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("amp"), Some("&"));
        assert_eq!(lookup("AMP"), Some("&"));
        assert_eq!(lookup("Amp"), None);
        assert_eq!(lookup("aelig"), Some("\u{e6}"));
        assert_eq!(lookup("AElig"), Some("\u{c6}"));
    }

    #[test]
    fn lookup_misses() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("MadeUpEntity"), None);
        assert_eq!(lookup("amp;"), None);
    }

    #[test]
    fn multi_codepoint_values_survive() {
        assert_eq!(lookup("fjlig"), Some("fj"));
        assert_eq!(lookup("NotEqualTilde"), Some("\u{2242}\u{338}"));
        assert_eq!(lookup("ThickSpace"), Some("\u{205f}\u{200a}"));
    }
}
