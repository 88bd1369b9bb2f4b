//! Shared inputs for the htmlrefs benchmarks.

/// Escape-path inputs: empty, entity-free, and markup-heavy.
pub const ESCAPE_INPUTS: &[&str] = &[
    "",
    "a b c d e f g h i j k l m n o p q r s t u v w x y z ",
    "<a href=\"http://google.com?q=&\">google.com</a>",
];

/// Substitution-path inputs: no ampersand, failed candidates only, and
/// reference-dense text.
pub const DECODE_INPUTS: &[&str] = &[
    "a b c d e f g h i j k l m n o p q r s t u v w x y z ",
    "R&D is 50% & rising, AT&T filed &c.",
    "&lt;p&gt;Fish &amp; Chips &#8212; &pound;9&lt;/p&gt;",
    "&nbsp; &amp; &copy; &AElig; &Dcaron; &frac34; &HilbertSpace; &#35; &#1234; &#x22;",
];
