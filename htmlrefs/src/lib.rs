#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## API Guide
//!
//! Most applications only need the whole-string operations:
//!
//! - [`replace_entities`] - decode every recognized character reference
//! - [`escape`] - escape `&`, `<`, `>`, `"` for inclusion in HTML
//! - [`write_escaped`] - streaming form of [`escape`] (requires `std`)
//!
//! Both whole-string operations return copy-on-write values that borrow the
//! input when there is nothing to do, so the common "no markup involved"
//! case costs a scan and no allocation.
//!
//! Tokenizers and other callers that sit on a `&` themselves can use
//! [`parse_entity`] to recognize a single reference and learn how many bytes
//! it spans.

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod entity;
pub mod escape;

#[cfg(test)]
mod tests;

// Re-export the public surface at the crate root
pub use entity::{parse_entity, replace_entities, REPLACEMENT};
pub use escape::escape;
#[cfg(feature = "std")]
pub use escape::write_escaped;

/// Returns the version of the htmlrefs library.
///
/// # Examples
///
/// ```
/// println!("htmlrefs version: {}", htmlrefs::version());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
