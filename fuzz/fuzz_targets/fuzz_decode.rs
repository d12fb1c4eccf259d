#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcursor::{
    TextIter, TextSentinel,
    codec::{Utf8, Utf32},
    storage::{BidiOnly, ForwardOnly, UnitStream},
};

#[derive(Arbitrary, Debug)]
enum Step {
    Advance,
    Retreat,
    Jump(i8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    tiers_agree(&input.bytes);
    walk_utf8(&input.bytes, &input.steps);
    walk_utf32(&input.bytes, &input.steps);
});

/// Every tier decodes the same characters going forward.
fn tiers_agree(bytes: &[u8]) {
    let stream = UnitStream::new(bytes.iter().copied());
    let end = TextSentinel::at_end(&stream);
    let mut single = TextIter::<Utf8, _>::begin(&stream);
    let mut from_stream = Vec::new();
    for _ in 0..=bytes.len() {
        if single == end {
            break;
        }
        from_stream.extend(single.get());
        single.advance();
    }
    assert!(single == end, "single pass did not reach the end");

    let slice: Vec<char> = TextIter::<Utf8, [u8]>::begin(bytes).collect();
    let forward: Vec<char> = TextIter::<Utf8, _>::begin(&ForwardOnly(bytes)).collect();
    let bidi: Vec<char> = TextIter::<Utf8, _>::begin(&BidiOnly(bytes)).collect();
    assert_eq!(slice, from_stream);
    assert_eq!(slice, forward);
    assert_eq!(slice, bidi);
}

/// The range under a UTF-8 iterator always re-decodes to its character.
fn walk_utf8(bytes: &[u8], steps: &[Step]) {
    let mut iter = TextIter::<Utf8, [u8]>::begin(bytes);
    for step in steps {
        match step {
            Step::Advance => {
                iter.advance();
            }
            Step::Retreat | Step::Jump(_) => {
                iter.retreat();
            }
        }
        if iter.is_end() {
            assert!(iter.base_range().as_slice().is_empty());
            continue;
        }
        let units = iter.base_range().as_slice();
        let mut again = TextIter::<Utf8, [u8]>::begin(units);
        assert_eq!(again.next(), iter.get());
        assert!(again.is_end(), "range holds more than one character: {units:?}");
    }
}

/// Jumps over UTF-32 keep the character distance equal to the unit position,
/// valid scalars or not.
fn walk_utf32(bytes: &[u8], steps: &[Step]) {
    let units: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    let begin = TextIter::<Utf32, [u32]>::begin(&units);
    let end = TextSentinel::at_end(units.as_slice());
    let mut iter = begin.clone();
    for step in steps {
        match step {
            Step::Advance => {
                iter.advance();
            }
            Step::Retreat => {
                iter.retreat();
            }
            Step::Jump(n) => {
                iter += isize::from(*n);
            }
        }
        let position = iter.base().position();
        assert!(position <= units.len());
        assert_eq!(iter.distance_from(&begin), position as isize);
        assert_eq!(iter == end, iter.is_end());
    }
}
