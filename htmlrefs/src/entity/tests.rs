#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use super::{parse_entity, replace_entities, REPLACEMENT};

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(feature = "std")]
use std::borrow::Cow;

fn assert_parses(cases: &[(&str, &str, usize)]) {
    for &(input, text, consumed) in cases {
        let (got_text, got_consumed) = parse_entity(input);
        assert_eq!(
            (got_text.as_ref(), got_consumed),
            (text, consumed),
            "parse_entity({input:?})"
        );
    }
}

#[test]
fn parses_named_references() {
    assert_parses(&[
        ("&quot;", "\"", 6),
        ("&amp;", "&", 5),
        ("&lt;", "<", 4),
        ("&nbsp;", "\u{a0}", 6),
        ("&copy;", "\u{a9}", 6),
        // Case matters: these are distinct entries.
        ("&AElig;", "\u{c6}", 7),
        ("&aelig;", "\u{e6}", 7),
        // The longest name in the table.
        ("&CounterClockwiseContourIntegral;", "\u{2233}", 33),
        // Trailing content is not consumed.
        ("&amp; more", "&", 5),
    ]);
}

#[test]
fn parses_decimal_references() {
    assert_parses(&[
        ("&#34;", "\"", 5),
        ("&#9;", "\t", 4),
        ("&#10;", "\n", 5),
        ("&#12;", "\u{c}", 5),
        ("&#13;", "\r", 5),
        ("&#992;", "\u{3e0}", 6),
        ("&#1234;", "\u{4d2}", 7),
        // Leading zeros are just digits; eight digits still fit the cap.
        ("&#00000034;", "\"", 11),
    ]);
}

#[test]
fn parses_hex_references() {
    assert_parses(&[
        ("&#x22;", "\"", 6),
        ("&#X22;", "\"", 6),
        ("&#x09;", "\t", 6),
        ("&#X09;", "\t", 6),
        ("&#x0a;", "\n", 6),
        ("&#x0A;", "\n", 6),
        ("&#X0a;", "\n", 6),
        ("&#X0A;", "\n", 6),
        ("&#xcab;", "\u{cab}", 7),
        ("&#XD06;", "\u{d06}", 7),
        ("&#x00000022;", "\"", 12),
        ("&#x1F600;", "\u{1f600}", 9),
    ]);
}

// Well-formed references to forbidden code points consume their full span
// and decode to the replacement character.
#[test]
fn invalid_code_points_soft_fail_to_replacement() {
    let fffd = "\u{fffd}";
    assert_eq!(REPLACEMENT, '\u{fffd}');
    assert_parses(&[
        // Out of Unicode range, but within the digit cap.
        ("&#98765432;", fffd, 11),
        ("&#x7fffffff;", fffd, 12),
        ("&#xffffffff;", fffd, 12),
        // Control codes.
        ("&#0;", fffd, 4),
        ("&#1;", fffd, 4),
        ("&#8;", fffd, 4),
        ("&#11;", fffd, 5),
        ("&#31;", fffd, 5),
        ("&#x7f;", fffd, 6),
        ("&#x9f;", fffd, 6),
        // Surrogates.
        ("&#xD800;", fffd, 8),
        ("&#xDFFF;", fffd, 8),
        // Noncharacters.
        ("&#xFDD0;", fffd, 8),
        ("&#xfdef;", fffd, 8),
        ("&#xFFFE;", fffd, 8),
        ("&#xFFFF;", fffd, 8),
        ("&#x1FFFE;", fffd, 9),
        ("&#x10FFFF;", fffd, 10),
    ]);
}

// The original regression table: every way a candidate can fail to be a
// reference, all yielding zero consumption.
#[test]
fn rejects_malformed_candidates() {
    let rejected = [
        "&;",
        "&",
        "&@;",
        "&@",
        "&#;",
        "&#",
        "&##;",
        "&##",
        "&#0",
        "&#09",
        "&#0a;",
        "&#0a",
        "&ffffffffffffffffuuuuuuuuuuuuuuuu;",
        "&ffffffffffffffffuuuuuuuuuuuuuuuu",
        "&q;",
        "&q",
        "&q#;",
        "&q#",
        "&Q",
        "&q0;",
        "&q0",
        "&qu;",
        "&qu",
        "&#x;",
        "&#x",
        "&#X;",
        "&#X",
        "&#x0",
        "&#x0@;",
        "&#x0@",
        "&#X0",
        "&#x000000001;",
        "&#x000000001",
        "&#x09",
        "&#xa",
        "&#xA",
        "&#Xa",
        "&#XA",
        "&#xffffffff",
        "&#xfffffffff",
        "&#xG;",
        "&#xG",
        "&#XG;",
        "&#XG",
    ];
    for input in rejected {
        let (text, consumed) = parse_entity(input);
        assert_eq!((text.as_ref(), consumed), ("", 0), "parse_entity({input:?})");
    }
}

// Exceeding the digit cap is a hard rejection, unlike an in-cap value that
// merely fails validation. Both behaviors have to hold at once.
#[test]
fn digit_cap_overflow_is_hard_not_soft() {
    // 8 digits, invalid value: soft failure.
    assert_eq!(parse_entity("&#xffffffff;").1, 12);
    assert_eq!(parse_entity("&#98765432;").1, 11);
    // 9 digits: the candidate is abandoned wholesale, even with zeros.
    assert_eq!(parse_entity("&#x000000001;").1, 0);
    assert_eq!(parse_entity("&#123456789;").1, 0);
}

#[test]
fn name_length_cap_is_exactly_31() {
    // 31 letters, unknown name: rejected at lookup, not at the cap.
    let at_cap = "&abcdefghijklmnopqrstuvwxyzabcde;";
    assert_eq!(at_cap.len(), 33);
    assert_eq!(parse_entity(at_cap).1, 0);
    // 32 letters: rejected at the cap before the `;` is ever seen.
    let over_cap = "&abcdefghijklmnopqrstuvwxyzabcdef;";
    assert_eq!(parse_entity(over_cap).1, 0);
}

#[test]
fn named_matches_borrow_from_the_table() {
    let (text, consumed) = parse_entity("&mdash;");
    assert_eq!(consumed, 7);
    assert!(matches!(text, Cow::Borrowed("\u{2014}")));

    let (text, consumed) = parse_entity("&#x2014;");
    assert_eq!(consumed, 8);
    assert!(matches!(text, Cow::Owned(_)));
}

#[test]
fn replaces_entities_in_mixed_text() {
    let cases: &[(&str, &str)] = &[
        ("&nbsp; &amp; &copy; &quot;", "\u{a0} & \u{a9} \""),
        ("&#x22; &#X22; &#34;", "\" \" \""),
        ("&lt;p&gt;x &amp;&amp; y&lt;/p&gt;", "<p>x && y</p>"),
        ("tail&amp;", "tail&"),
        ("&amp;head", "&head"),
        ("&NotEqualTilde;", "\u{2242}\u{338}"),
    ];
    for &(input, expected) in cases {
        assert_eq!(replace_entities(input), expected, "replace_entities({input:?})");
    }
}

#[test]
fn passes_through_undecodable_text_unchanged() {
    let unchanged = [
        "",
        "a b c d e f g h i j k l m n o p q r s t u v w x y z",
        "&",
        "a&",
        "&x; &#; &#x; &ThisIsWayTooLongToBeAnEntityIsntIt; &hi?; &copy &MadeUpEntity;",
    ];
    for input in unchanged {
        let got = replace_entities(input);
        assert_eq!(got, input);
        assert!(
            matches!(got, Cow::Borrowed(_)),
            "replace_entities({input:?}) should not allocate"
        );
    }
}

// The original's demo string, exercising named, numeric and rejected
// candidates side by side.
#[test]
fn replaces_entities_kitchen_sink() {
    let input = "&nbsp; &amp; &copy; &AElig; &Dcaron; &frac34; &HilbertSpace; \
                 &DifferentialD; &ClockwiseContourIntegral; &#35; &#1234; &#992; \
                 &#98765432; &#X22; &#XD06; &#xcab; \
                 &nbsp &x; &#; &#x; &ThisIsWayTooLongToBeAnEntityIsntIt; &hi?; &copy &MadeUpEntity;";
    let expected = "\u{a0} & \u{a9} \u{c6} \u{10e} \u{be} \u{210b} \
                    \u{2146} \u{2232} # \u{4d2} \u{3e0} \
                    \u{fffd} \" \u{d06} \u{cab} \
                    &nbsp &x; &#; &#x; &ThisIsWayTooLongToBeAnEntityIsntIt; &hi?; &copy &MadeUpEntity;";
    assert_eq!(replace_entities(input), expected);
}

#[test]
fn consumed_span_positions_are_exact() {
    // Decode positions interleave correctly when references abut.
    assert_eq!(replace_entities("&amp;&amp;&amp;"), "&&&");
    assert_eq!(replace_entities("&#65;&#66;&#67;"), "ABC");
    assert_eq!(replace_entities("&amp;#34;"), "&#34;");
    // A failed candidate's bytes can still feed the next candidate.
    assert_eq!(replace_entities("&&amp;"), "&&");
}

#[test]
fn multibyte_literals_survive_substitution() {
    let input = "\u{3b1}&beta;\u{3b3} \u{1f600}&#x1F601;";
    let expected = "\u{3b1}\u{3b2}\u{3b3} \u{1f600}\u{1f601}";
    assert_eq!(replace_entities(input), expected);
}
