#![allow(missing_docs)]

mod common;

use common::{MIXED_UTF8, MIXED_UTF16, render_backward, render_forward};
use textcursor::codec::{Latin1, Utf8, Utf8Bom, Utf16, Utf32};

#[test]
fn snapshot_utf8_skips_malformed_units() {
    insta::assert_snapshot!(render_forward::<Utf8>(MIXED_UTF8), @r"
    0..1 'a'
    1..5 '😀'
    6..7 '('
    7..10 '€'
    10..11 'z'
    ");
}

#[test]
fn snapshot_utf8_backward_matches_forward() {
    assert_eq!(render_backward::<Utf8>(MIXED_UTF8), render_forward::<Utf8>(MIXED_UTF8));
}

#[test]
fn snapshot_utf16_skips_lone_surrogates() {
    insta::assert_snapshot!(render_forward::<Utf16>(MIXED_UTF16), @r"
    0..1 'a'
    1..3 '😀'
    4..5 'b'
    ");
    assert_eq!(render_backward::<Utf16>(MIXED_UTF16), render_forward::<Utf16>(MIXED_UTF16));
}

#[test]
fn snapshot_utf8_bom_is_dropped_both_ways() {
    let units = b"\xEF\xBB\xBFhi\xEF\xBB\xBF";
    insta::assert_snapshot!(render_forward::<Utf8Bom>(units), @r"
    3..4 'h'
    4..5 'i'
    5..8 '\u{feff}'
    ");
    assert_eq!(render_backward::<Utf8Bom>(units), render_forward::<Utf8Bom>(units));
}

#[test]
fn snapshot_fixed_width_codecs() {
    insta::assert_snapshot!(render_forward::<Latin1>(b"caf\xE9"), @r"
    0..1 'c'
    1..2 'a'
    2..3 'f'
    3..4 'é'
    ");
    insta::assert_snapshot!(render_forward::<Utf32>(&[0x41, 0xD800, 0x1F600, 0x11_0000]), @r"
    0..1 'A'
    1..2 '�'
    2..3 '😀'
    3..4 '�'
    ");
}
