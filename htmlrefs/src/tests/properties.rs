#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use crate::{escape, parse_entity, replace_entities, REPLACEMENT};

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, string::String};
#[cfg(feature = "std")]
use std::borrow::Cow;

const SAMPLES: &[&str] = &[
    "",
    "plain ascii text with spaces",
    "caf\u{e9} na\u{ef}ve \u{1f600}",
    "&",
    "&&&&",
    "a&",
    "&a",
    "&amp;",
    "&amp",
    "&quot;quoted&quot;",
    "&#34;",
    "&#x22;",
    "&#x22",
    "&#;",
    "&bogus;",
    "&copy &copy;",
    "<b>&lt;b&gt;</b>",
    "x &#98765432; y",
    "&#x000000001;",
    "semi;colons; every;where;",
];

// A string with no ampersand is always returned untouched and unallocated.
#[test]
fn substitution_without_ampersand_is_identity() {
    for &input in SAMPLES.iter().filter(|s| !s.contains('&')) {
        assert!(
            matches!(replace_entities(input), Cow::Borrowed(s) if s == input),
            "replace_entities({input:?})"
        );
    }
}

// Consumed length stays within the input, and zero consumption coincides
// exactly with empty decoded text.
#[test]
fn parse_entity_invariants_hold_across_prefixes() {
    for &sample in SAMPLES {
        // Probe every `&`-anchored suffix, including truncated ones.
        for (start, _) in sample.match_indices('&') {
            for end in start..=sample.len() {
                let Some(candidate) = sample.get(start..end) else {
                    continue;
                };
                let (text, consumed) = parse_entity(candidate);
                assert!(consumed <= candidate.len(), "overran {candidate:?}");
                assert_eq!(
                    consumed == 0,
                    text.is_empty(),
                    "no-match must mean empty text for {candidate:?}"
                );
            }
        }
    }
}

#[test]
fn parse_entity_contract_samples() {
    assert_eq!(parse_entity("&quot;"), (Cow::Borrowed("\""), 6));
    assert_eq!(parse_entity("&amp;"), (Cow::Borrowed("&"), 5));
    assert_eq!(parse_entity("&#34;").0, "\"");
    assert_eq!(parse_entity("&#34;").1, 5);
    assert_eq!(parse_entity("&#9;"), (Cow::Owned(String::from("\t")), 4));
    assert_eq!(
        parse_entity("&#98765432;"),
        (Cow::Owned(String::from(REPLACEMENT)), 11)
    );
}

// Escaped output decodes back to the original: escaping introduces only
// `&amp;`-family references, and substitution undoes exactly those.
#[test]
fn substitution_inverts_escaping() {
    for &input in SAMPLES {
        let escaped = escape(input);
        assert_eq!(
            replace_entities(&escaped),
            input,
            "round trip through escape for {input:?}"
        );
    }
}

#[test]
fn escaping_is_not_idempotent_on_reserved_input() {
    for &input in SAMPLES.iter().filter(|s| s.contains(['&', '<', '>', '"'])) {
        let once = escape(input);
        let twice = escape(&once);
        assert_ne!(once, twice, "double escape must differ for {input:?}");
    }
}

// The decoded result of a full substitution pass is valid UTF-8 built only
// from literal input spans and decoded reference text.
#[test]
fn substitution_output_is_exact_trace() {
    // Hand-traced expectations over awkward span boundaries.
    let cases: &[(&str, &str)] = &[
        ("&amp;&bogus;&amp;", "&&bogus;&"),
        ("a&bogus;b&lt;c", "a&bogus;b<c"),
        ("&&amp;&", "&&&"),
        ("&#9;&#x9;&#09;", "\t\t\t"),
    ];
    for &(input, expected) in cases {
        assert_eq!(replace_entities(input), expected, "replace_entities({input:?})");
    }
}

#[cfg(feature = "std")]
#[test]
fn streaming_escape_agrees_with_value_escape_on_samples() {
    for &input in SAMPLES {
        let mut buf = Vec::new();
        crate::write_escaped(&mut buf, input).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), escape(input), "input {input:?}");
    }
}
