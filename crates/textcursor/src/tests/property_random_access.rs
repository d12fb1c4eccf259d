use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::support::quickcheck_tests;
use crate::{
    TextIter,
    codec::{Latin1, Utf32},
};

fn index(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Property: `(it + n) - n == it` whenever both positions are in range, and
/// the jump lands on the character a forward walk would reach.
#[test]
fn offset_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(chars: Vec<char>, from: usize, to: usize) -> bool {
        let scalars: Vec<u32> = chars.iter().copied().map(u32::from).collect();
        let len = chars.len();
        let (i, j) = (from % (len + 1), to % (len + 1));
        let n = index(j) - index(i);

        let begin = TextIter::<Utf32, [u32]>::begin(&scalars);
        let it = begin.clone() + index(i);
        let moved = it.clone() + n;

        let lands = if j == len {
            moved.is_end()
        } else {
            moved.get() == Some(chars[j])
        };
        lands && (moved.clone() - n) == it && &moved - &begin == index(j)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<char>, usize, usize) -> bool);
}

/// Property: Distance between two jumped-to iterators is the difference of
/// their indices, and ordering agrees with it.
#[test]
fn distance_matches_indices() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, a: usize, b: usize) -> bool {
        let len = bytes.len();
        let (a, b) = (a % (len + 1), b % (len + 1));
        let begin = TextIter::<Latin1, [u8]>::begin(&bytes);
        let at_a = begin.clone() + index(a);
        let at_b = begin + index(b);

        at_a.distance_from(&at_b) == index(a) - index(b) && (at_a < at_b) == (a < b)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>, usize, usize) -> bool);
}

/// Property: Over arbitrary UTF-32 units, valid scalars or not, the character
/// distance reached by a jump equals its unit position.
#[test]
fn utf32_distance_is_unit_position() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<u32>, to: usize) -> bool {
        let j = to % (units.len() + 1);
        let begin = TextIter::<Utf32, [u32]>::begin(&units);
        let moved = begin.clone() + index(j);
        moved.base().position() == j && &moved - &begin == index(j) && begin.count() == units.len()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u32>, usize) -> bool);
}
