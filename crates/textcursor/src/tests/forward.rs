use alloc::{string::String, vec::Vec};

use super::support::{Stall, Utf8Forward};
use crate::{
    TextIter, TextSentinel, Tier,
    codec::{NoState, Utf8},
    storage::{CodeUnits, ForwardOnly, UnitStream},
};

#[test]
fn stream_with_forward_codec_meets_sentinel_after_last_character() {
    let stream = UnitStream::new([0x41_u8, 0xE2, 0x82, 0xAC]);
    let end = TextSentinel::at_end(&stream);
    let mut iter = TextIter::<Utf8Forward, _>::begin(&stream);

    assert_eq!(iter.tier(), Tier::Forward);
    assert!(!iter.capabilities().inspectable_range);

    assert_eq!(iter.get(), Some('A'));
    assert!(iter != end);
    iter.advance();
    assert_eq!(iter.get(), Some('€'));
    assert!(iter != end);
    iter.advance();
    assert!(iter == end);
    assert!(end == iter);
}

#[test]
fn single_pass_keeps_the_last_character() {
    let stream = UnitStream::new("héllo wörld".bytes());
    let decoded: String = TextIter::<Utf8, _>::begin(&stream).collect();
    assert_eq!(decoded, "héllo wörld");
}

#[test]
fn empty_stream_starts_at_the_end() {
    let stream = UnitStream::new(core::iter::empty::<u8>());
    let iter = TextIter::<Utf8, _>::begin(&stream);
    assert_eq!(iter.get(), None);
    assert!(iter.is_end());
    assert!(iter == TextSentinel::at_end(&stream));
}

#[test]
fn forward_multi_pass_exposes_unit_ranges() {
    let bytes = ForwardOnly("a€b".as_bytes());
    let mut iter = TextIter::<Utf8, _>::begin(&bytes);
    assert_eq!(iter.tier(), Tier::Forward);
    assert!(iter.capabilities().inspectable_range);

    let mut seen = Vec::new();
    while !iter.is_end() {
        let range = iter.base_range();
        seen.push((range.begin().position(), range.end().position(), iter.get()));
        iter.advance();
    }
    assert_eq!(seen, [(0, 1, Some('a')), (1, 4, Some('€')), (4, 5, Some('b'))]);
}

#[test]
fn multi_pass_copies_are_independent() {
    let bytes = ForwardOnly(b"xyz".as_slice());
    let first = TextIter::<Utf8, _>::begin(&bytes);

    let mut second = first.clone();
    second.advance();
    assert!(first != second);
    assert_eq!(first.get(), Some('x'));
    assert_eq!(second.get(), Some('y'));

    let mut third = first.clone();
    third.advance();
    assert!(second == third);
}

#[test]
fn equality_ignores_the_decoded_value() {
    let text = "xyz";
    let begun = TextIter::<Utf8, str>::begin(text);
    let built = TextIter::<Utf8, str>::new(NoState, text, text.cursor());
    assert!(begun == built);

    let mut advanced = begun.clone();
    advanced.advance();
    assert!(begun != advanced);
}

#[test]
fn malformed_units_are_skipped() {
    let decoded: String = TextIter::<Utf8, [u8]>::begin(b"a\xFFb\xC3(\xE2\x82").collect();
    assert_eq!(decoded, "ab(");
}

#[test]
fn codec_that_consumes_nothing_still_reaches_the_end() {
    let decoded: String = TextIter::<Stall, [u8]>::begin(b"ab!c!").collect();
    assert_eq!(decoded, "!!");

    let stream = UnitStream::new(*b"!xy");
    let decoded: String = TextIter::<Stall, _>::begin(&stream).collect();
    assert_eq!(decoded, "!");

    let nothing = TextIter::<Stall, [u8]>::begin(b"abc");
    assert!(nothing.is_end());
    assert_eq!(nothing.get(), None);
}

#[test]
fn sentinel_taken_from_an_iterator_marks_its_position() {
    let text = "abc";
    let mut mark_at = TextIter::<Utf8, str>::begin(text);
    mark_at.advance();
    let mark = TextSentinel::from(&mark_at);

    let mut walker = TextIter::<Utf8, str>::begin(text);
    assert!(walker != mark);
    assert!(walker < mark);
    walker.advance();
    assert!(walker == mark);
    assert!(mark == walker);
}

#[test]
fn iterator_orders_against_the_end_sentinel() {
    let text = "ab";
    let end = TextSentinel::at_end(text);
    let mut iter = TextIter::<Utf8, str>::begin(text);
    assert!(iter < end);
    assert!(end > iter);
    iter.advance();
    iter.advance();
    assert!(iter >= end);
    assert!(end <= iter);
}
