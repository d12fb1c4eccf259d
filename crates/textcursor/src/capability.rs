//! Static classification of cursors and codecs into traversal tiers.
//!
//! The operators a [`TextIter`](crate::TextIter) offers are gated by trait
//! bounds; the values here describe the same resolution as data so callers can
//! inspect it (and so the table below has one authoritative home).
//!
//! | Cursor        | Codec power  | Tier          |
//! |---------------|--------------|---------------|
//! | `SinglePass`  | any          | Forward       |
//! | `MultiPass`   | any          | Forward       |
//! | `Reversible`  | `Forward`    | Forward       |
//! | `Reversible`  | `Reverse`+   | Bidirectional |
//! | `Offsettable` | `Forward`    | Forward       |
//! | `Offsettable` | `Reverse`    | Bidirectional |
//! | `Offsettable` | `FixedWidth` | RandomAccess  |

/// What a storage cursor can do on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// Read once; copies are not independent.
    SinglePass,
    /// Copyable and comparable; re-traversable.
    MultiPass,
    /// Multi-pass and steppable backward.
    Reversible,
    /// Reversible and steppable by an integer distance in O(1).
    Offsettable,
}

impl Traversal {
    /// Whether a decoding iterator over this cursor can hand out the code
    /// units it consumed for the current character.
    #[must_use]
    pub const fn is_multi_pass(self) -> bool {
        !matches!(self, Traversal::SinglePass)
    }
}

/// What a codec declares about its decoding entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodePower {
    /// Forward decode only.
    Forward,
    /// Forward and reverse decode.
    Reverse,
    /// Reverse decode, and every character occupies exactly
    /// `MAX_CODE_UNITS` code units.
    FixedWidth,
}

/// The traversal power a decoding iterator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Increment only.
    Forward,
    /// Increment and decrement.
    Bidirectional,
    /// Full arithmetic, distance and ordering.
    RandomAccess,
}

/// The resolved capability set of a cursor/codec pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    pub tier: Tier,
    /// `true` when `base_range()` is available.
    pub inspectable_range: bool,
}

impl Capabilities {
    #[must_use]
    pub const fn of(traversal: Traversal, power: DecodePower) -> Self {
        Capabilities {
            tier: resolve(traversal, power),
            inspectable_range: traversal.is_multi_pass(),
        }
    }
}

/// Resolve the tier of a cursor/codec pairing.
///
/// An offsettable cursor alone does not make an iterator random access: the
/// codec must also guarantee a fixed width, otherwise a jump could land in the
/// middle of a character.
#[must_use]
pub const fn resolve(traversal: Traversal, power: DecodePower) -> Tier {
    match (traversal, power) {
        (Traversal::SinglePass | Traversal::MultiPass, _)
        | (Traversal::Reversible | Traversal::Offsettable, DecodePower::Forward) => Tier::Forward,
        (Traversal::Reversible, DecodePower::Reverse | DecodePower::FixedWidth)
        | (Traversal::Offsettable, DecodePower::Reverse) => Tier::Bidirectional,
        (Traversal::Offsettable, DecodePower::FixedWidth) => Tier::RandomAccess,
    }
}
