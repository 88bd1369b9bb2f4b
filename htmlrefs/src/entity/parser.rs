//! The entity reference parser.
//!
//! A small state machine over the bytes after a `&`. Reference syntax is
//! ASCII-only, so the machine classifies raw bytes and every offset it
//! produces is a character boundary of the surrounding string.

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, string::String};
#[cfg(feature = "std")]
use std::borrow::Cow;

use super::table;

/// Unicode replacement character, substituted for well-formed numeric
/// references that name an invalid code point.
pub const REPLACEMENT: char = '\u{fffd}';

/// Longest name in the reference table (`CounterClockwiseContourIntegral`).
const MAX_NAME_LEN: usize = 31;

/// Numeric references keep at most this many digits; longer candidates are
/// rejected as a whole rather than decoded.
const MAX_NUMERIC_DIGITS: usize = 8;

/// Machine state between two bytes of a candidate reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Just past the `&`.
    Start,
    /// Inside a name, `len` bytes accumulated so far.
    Named { len: usize },
    /// Just past `&#`.
    NumericPrefix,
    /// Inside decimal digits.
    Decimal { digits: usize },
    /// Just past `&#x` or `&#X`.
    HexPrefix,
    /// Inside hexadecimal digits.
    Hex { digits: usize },
}

/// Outcome of feeding one byte to the machine.
enum Step {
    Continue(State),
    Match(Cow<'static, str>, usize),
    NoMatch,
}

/// Parses one entity reference at the start of `input`.
///
/// `input` must begin with `&` and may be as short as that single byte.
/// Returns the decoded text and the number of bytes consumed; a consumed
/// length of `0` means no reference was recognized and the caller should
/// treat the `&` as a literal character. Named matches borrow their text
/// from the reference table, so the common case does not allocate.
///
/// Numeric references that are syntactically complete but name a code point
/// HTML forbids (surrogates, noncharacters, most control codes, values past
/// U+10FFFF) still consume their full span and decode to [`REPLACEMENT`].
///
/// # Examples
///
/// ```
/// use htmlrefs::parse_entity;
///
/// assert_eq!(parse_entity("&amp;").1, 5);
/// assert_eq!(parse_entity("&#x22;").0, "\"");
/// assert_eq!(parse_entity("&bogus;").1, 0);
/// ```
pub fn parse_entity(input: &str) -> (Cow<'static, str>, usize) {
    let mut state = State::Start;

    for (i, &b) in input.as_bytes().iter().enumerate().skip(1) {
        let step = match state {
            State::Start => on_start(b),
            State::Named { len } => on_named(input, i, len, b),
            State::NumericPrefix => on_numeric_prefix(b),
            State::Decimal { digits } => on_decimal(input, i, digits, b),
            State::HexPrefix => on_hex_prefix(b),
            State::Hex { digits } => on_hex(input, i, digits, b),
        };

        match step {
            Step::Continue(next) => state = next,
            Step::Match(text, consumed) => return (text, consumed),
            Step::NoMatch => return no_match(),
        }
    }

    // Ran out of input mid-candidate.
    no_match()
}

fn no_match() -> (Cow<'static, str>, usize) {
    (Cow::Borrowed(""), 0)
}

fn on_start(b: u8) -> Step {
    match b {
        b'#' => Step::Continue(State::NumericPrefix),
        _ if b.is_ascii_alphabetic() => Step::Continue(State::Named { len: 1 }),
        _ => Step::NoMatch,
    }
}

fn on_named(input: &str, i: usize, len: usize, b: u8) -> Step {
    match b {
        b';' => match table::lookup(&input[i - len..i]) {
            Some(text) => Step::Match(Cow::Borrowed(text), i + 1),
            None => Step::NoMatch,
        },
        _ if b.is_ascii_alphanumeric() => {
            if len >= MAX_NAME_LEN {
                // Longer than any table entry could be.
                Step::NoMatch
            } else {
                Step::Continue(State::Named { len: len + 1 })
            }
        }
        _ => Step::NoMatch,
    }
}

fn on_numeric_prefix(b: u8) -> Step {
    match b {
        b'x' | b'X' => Step::Continue(State::HexPrefix),
        _ if b.is_ascii_digit() => Step::Continue(State::Decimal { digits: 1 }),
        _ => Step::NoMatch,
    }
}

fn on_decimal(input: &str, i: usize, digits: usize, b: u8) -> Step {
    match b {
        b';' => Step::Match(decode_code_point(&input[i - digits..i], 10), i + 1),
        _ if b.is_ascii_digit() => {
            if digits >= MAX_NUMERIC_DIGITS {
                Step::NoMatch
            } else {
                Step::Continue(State::Decimal { digits: digits + 1 })
            }
        }
        _ => Step::NoMatch,
    }
}

fn on_hex_prefix(b: u8) -> Step {
    if b.is_ascii_hexdigit() {
        Step::Continue(State::Hex { digits: 1 })
    } else {
        Step::NoMatch
    }
}

fn on_hex(input: &str, i: usize, digits: usize, b: u8) -> Step {
    match b {
        b';' => Step::Match(decode_code_point(&input[i - digits..i], 16), i + 1),
        _ if b.is_ascii_hexdigit() => {
            if digits >= MAX_NUMERIC_DIGITS {
                Step::NoMatch
            } else {
                Step::Continue(State::Hex { digits: digits + 1 })
            }
        }
        _ => Step::NoMatch,
    }
}

/// Decodes accumulated digits as a code point, degrading to [`REPLACEMENT`]
/// when the value does not parse or is not allowed in a reference.
fn decode_code_point(digits: &str, radix: u32) -> Cow<'static, str> {
    let decoded = u32::from_str_radix(digits, radix)
        .ok()
        .filter(|&code| is_valid_reference_code(code))
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT);

    Cow::Owned(String::from(decoded))
}

/// Whether a numeric reference may name this code point.
///
/// Surrogates and values past U+10FFFF are out, as are the permanently
/// reserved noncharacters and the C0/C1 control codes. Tab, LF, FF and CR
/// stay allowed.
fn is_valid_reference_code(code: u32) -> bool {
    if char::from_u32(code).is_none() {
        return false;
    }

    match code {
        // noncharacters
        0xfdd0..=0xfdef => false,
        c if c & 0xffff == 0xfffe || c & 0xffff == 0xffff => false,
        // control codes
        0x00..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f..=0x9f => false,
        _ => true,
    }
}
