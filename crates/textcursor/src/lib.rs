//! Decoding and encoding iterators over code units with pluggable codecs.
//!
//! A [`TextIter`] walks the characters a [`Codec`](codec::Codec) decodes from
//! some storage of code units. How far it can move depends on both sides:
//! the storage cursor (single pass, multi pass, reversible, offsettable) and
//! the codec (forward decode, reverse decode, fixed width). Operators that the
//! pairing cannot support simply do not exist on the resulting type.
//!
//! ```rust
//! use textcursor::{TextIter, TextSentinel, codec::Utf8};
//!
//! let text = "a€b";
//! let mut iter = TextIter::<Utf8, str>::begin(text);
//! let end = TextSentinel::at_end(text);
//!
//! assert_eq!(iter.get(), Some('a'));
//! iter.advance();
//! assert_eq!(iter.get(), Some('€'));
//! assert_eq!(iter.base_range().as_slice(), "€".as_bytes());
//! iter.retreat();
//! assert_eq!(iter.get(), Some('a'));
//!
//! let decoded: String = iter.by_ref().collect();
//! assert_eq!(decoded, "a€b");
//! assert!(iter == end);
//! ```
//!
//! [`TextWriter`] is the write side: every character written is encoded and
//! pushed into a [`UnitSink`](sink::UnitSink) immediately.

#![no_std]
#![allow(missing_docs)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod capability;
pub mod codec;
mod decode;
mod encode;
mod error;
mod ops;
mod sentinel;
pub mod sink;
pub mod storage;

#[cfg(test)]
mod tests;

pub use capability::{Capabilities, DecodePower, Tier, Traversal};
pub use decode::TextIter;
pub use encode::TextWriter;
pub use error::EncodeError;
pub use sentinel::TextSentinel;
