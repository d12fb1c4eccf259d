#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::{Debug, Write};

use textcursor::{
    TextIter, TextWriter,
    codec::{Codec, Encode, ReverseDecode},
};

/// Mixed valid and malformed UTF-8: a truncated two-byte sequence before `(`
/// and a stray `0xFF` at the end.
pub const MIXED_UTF8: &[u8] = b"a\xF0\x9F\x98\x80\xC3(\xE2\x82\xACz\xFF";

/// `a`, U+1F600 as a pair, a lone high surrogate, `b`, a lone low surrogate.
pub const MIXED_UTF16: &[u16] = &[0x61, 0xD83D, 0xDE00, 0xD800, 0x62, 0xDC00];

/// One `first..last 'c'` line per character, walking forward.
pub fn render_forward<E>(units: &[E::Unit]) -> String
where
    E: Codec,
    E::State: Default,
    E::Character: Debug,
{
    let mut lines = Vec::new();
    let mut iter = TextIter::<E, [E::Unit]>::begin(units);
    while !iter.is_end() {
        lines.push(line(&iter));
        iter.advance();
    }
    lines.join("\n")
}

/// Same lines as [`render_forward`], but produced by retreating from the end.
pub fn render_backward<E>(units: &[E::Unit]) -> String
where
    E: ReverseDecode,
    E::State: Default,
    E::Character: Debug,
{
    let mut lines = Vec::new();
    let mut iter = TextIter::<E, [E::Unit]>::end(units);
    loop {
        let before = iter.base_range().clone();
        iter.retreat();
        if *iter.base_range() == before {
            break;
        }
        lines.push(line(&iter));
    }
    lines.reverse();
    lines.join("\n")
}

fn line<E>(iter: &TextIter<'_, E, [E::Unit]>) -> String
where
    E: Codec,
    E::Character: Debug,
{
    let range = iter.base_range();
    let mut out = String::new();
    write!(out, "{}..{} ", range.begin().position(), range.end().position()).unwrap();
    match iter.get() {
        Some(c) => write!(out, "{c:?}").unwrap(),
        None => out.push('-'),
    }
    out
}

/// Encode `text` and render the units as hex, or the error that stopped it.
pub fn render_encoded<E>(text: &str) -> String
where
    E: Encode<Character = char>,
    E::State: Default,
    E::Unit: core::fmt::UpperHex,
{
    let width = core::mem::size_of::<E::Unit>() * 2;
    let mut writer = TextWriter::<E, _>::new(Vec::new());
    let result = writer.write_all(text.chars());
    let mut out = writer
        .into_inner()
        .iter()
        .map(|unit| format!("{unit:0width$X}"))
        .collect::<Vec<_>>()
        .join(" ");
    if let Err(error) = result {
        write!(out, " <{error}>").unwrap();
    }
    out
}
