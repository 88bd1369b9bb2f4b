//! Whole-string entity substitution.

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, string::String};
#[cfg(feature = "std")]
use std::borrow::Cow;

use memchr::memchr;

use super::parser::parse_entity;

/// Replaces every recognized entity reference in `input` with its decoded
/// text.
///
/// Everything else passes through byte for byte: an `&` that does not start
/// a well-formed, known reference stays a literal `&`, and the scan resumes
/// right after it with no backtracking. Strings containing no decodable
/// reference at all are returned borrowed, without allocating.
///
/// # Examples
///
/// ```
/// use htmlrefs::replace_entities;
///
/// assert_eq!(replace_entities("&lt;b&gt;"), "<b>");
/// assert_eq!(replace_entities("Fish &amp; Chips"), "Fish & Chips");
/// // Unterminated and unknown candidates are untouched.
/// assert_eq!(replace_entities("&copy &MadeUpEntity; a&"), "&copy &MadeUpEntity; a&");
/// ```
pub fn replace_entities(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    // Fast path: no ampersand, nothing to decode.
    let Some(first) = memchr(b'&', bytes) else {
        return Cow::Borrowed(input);
    };

    // Probe each candidate until one decodes; if none does, the input is
    // returned as-is and nothing has been allocated yet.
    let mut i = first;
    let (mut decoded, mut consumed) = loop {
        let (text, len) = parse_entity(&input[i..]);
        if len > 0 {
            break (text, len);
        }
        match memchr(b'&', &bytes[i + 1..]) {
            Some(offset) => i += 1 + offset,
            None => return Cow::Borrowed(input),
        }
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..i]);

    loop {
        out.push_str(&decoded);
        i += consumed;

        // Copy literal text until the next decodable reference.
        loop {
            let Some(offset) = memchr(b'&', &bytes[i..]) else {
                out.push_str(&input[i..]);
                return Cow::Owned(out);
            };
            let amp = i + offset;

            let (text, len) = parse_entity(&input[amp..]);
            if len > 0 {
                out.push_str(&input[i..amp]);
                decoded = text;
                consumed = len;
                i = amp;
                break;
            }

            // Not a reference; keep the `&` literal and move on.
            out.push_str(&input[i..=amp]);
            i = amp + 1;
        }
    }
}
