//! Defines the twelve equal-tempered pitch classes and their arithmetic.
//!
//! ```
//! use pcset::pitch::{Numbering, PitchClass};
//!
//! let g = PitchClass::C.next_fifth();
//! assert_eq!(g, PitchClass::G);
//! assert_eq!(g.number(Numbering::Descending), 16);
//! assert_eq!(g.number(Numbering::Ascending), 128);
//! ```
//!
//! Every operation is total. An out-of-range value becomes
//! `PitchClass::Invalid`, which transposes to itself and numbers to zero.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A single chroma value, octave-invariant.
///
/// The declaration order gives the 1-based ordinal used by both numbering
/// conventions, with `Invalid` occupying ordinal zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchClass {
    Invalid,
    C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B
}

/// The total number of valid `PitchClass` elements.
pub const PITCH_CLASS_COUNT: usize = 12;

const SHARP_NAMES: [&str; PITCH_CLASS_COUNT] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; PITCH_CLASS_COUNT] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

// Equal-tempered octave starting at middle C.
const FREQUENCIES: [f64; PITCH_CLASS_COUNT] = [
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23,
    369.99, 392.00, 415.30, 440.00, 466.16, 493.88,
];

impl PitchClass {
    /// Every valid pitch class in ascending order from C.
    pub const ALL: [PitchClass; PITCH_CLASS_COUNT] = [
        PitchClass::C, PitchClass::CSharp, PitchClass::D, PitchClass::DSharp,
        PitchClass::E, PitchClass::F, PitchClass::FSharp, PitchClass::G,
        PitchClass::GSharp, PitchClass::A, PitchClass::ASharp, PitchClass::B,
    ];

    /// Construct a `PitchClass` from its 1-based ordinal (C = 1, B = 12).
    pub fn from_ordinal(ordinal: i32) -> PitchClass {
        match ordinal {
            1..=12 => PitchClass::ALL[(ordinal - 1) as usize],
            _ => PitchClass::Invalid,
        }
    }

    /// Construct a `PitchClass` from its zero-based residue (C = 0, B = 11).
    pub fn from_residue(residue: i32) -> PitchClass {
        PitchClass::from_ordinal(residue + 1)
    }

    /// Returns the 1-based ordinal, or 0 for `Invalid`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based residue, or `None` for `Invalid`.
    pub fn residue(self) -> Option<u8> {
        match self {
            PitchClass::Invalid => None,
            p => Some(p.ordinal() - 1),
        }
    }

    /// False only for the `Invalid` sentinel.
    pub fn is_valid(self) -> bool {
        self != PitchClass::Invalid
    }

    /// Shift this pitch class by `amount` semitones, wrapping at the octave.
    ///
    /// Negative amounts transpose downwards. `Invalid` is returned unchanged
    /// whatever the amount.
    pub fn transpose(self, amount: i32) -> PitchClass {
        if !self.is_valid() || amount == 0 {
            return self;
        }

        let p = self.ordinal() as i32;
        PitchClass::from_ordinal(((p - 1) + amount.rem_euclid(12)).rem_euclid(12) + 1)
    }

    /// The pitch class a perfect fifth above.
    pub fn next_fifth(self) -> PitchClass {
        self.transpose(7)
    }

    /// The pitch class a perfect fifth below.
    pub fn previous_fifth(self) -> PitchClass {
        self.transpose(-7)
    }

    /// Six semitones away, the same in either direction.
    pub fn tritone(self) -> PitchClass {
        self.transpose(6)
    }

    /// Frequency in Hz of this pitch class in the octave above middle C.
    ///
    /// Returns `0.0` for `Invalid`.
    pub fn frequency(self) -> f64 {
        match self.residue() {
            Some(r) => FREQUENCIES[r as usize],
            None => 0.0,
        }
    }

    /// Returns the single bit this pitch class occupies under `numbering`.
    pub fn number(self, numbering: Numbering) -> u16 {
        numbering.bit(self)
    }

    /// Spelling using sharps, e.g. `"F#"`.
    pub fn sharp_name(self) -> &'static str {
        self.residue().map_or("?", |r| SHARP_NAMES[r as usize])
    }

    /// Spelling using flats, e.g. `"Gb"`.
    pub fn flat_name(self) -> &'static str {
        self.residue().map_or("?", |r| FLAT_NAMES[r as usize])
    }
}

impl Default for PitchClass {
    fn default() -> PitchClass {
        PitchClass::Invalid
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

impl FromStr for PitchClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<PitchClass, ParseError> {
        crate::parser::parse_pitch_class(s)
    }
}

/// The two published conventions for mapping a pitch class to a bit.
///
/// Both are bijections from the twelve pitch classes onto the low twelve
/// bits of a `u16`, so any set of pitch classes has exactly one number under
/// each. The two must never be mixed inside one number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Numbering {
    /// C is the most significant bit: `1 << (12 - p)` for ordinal `p`.
    ///
    /// Catalog signatures are published in this numbering.
    Descending,

    /// C is the least significant bit: `1 << (p - 1)` for ordinal `p`.
    Ascending,
}

impl Numbering {
    /// Returns the bit for `pitch`, or 0 for `Invalid`.
    ///
    /// This is the only place the numbering conventions are defined; pitch
    /// sets and catalog entries all encode through it.
    pub fn bit(self, pitch: PitchClass) -> u16 {
        let p = pitch.ordinal();
        if p == 0 {
            return 0;
        }

        match self {
            Numbering::Descending => 1 << (12 - p),
            Numbering::Ascending => 1 << (p - 1),
        }
    }
}
