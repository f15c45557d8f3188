//! Ordered collections of pitch classes and their order-free identity.
//!
//! A `PitchSet` keeps the sequence it was built from, duplicates and all,
//! but two sets are equal exactly when their `Signature`s are.
//!
//! ```
//! use pcset::pitch::{Numbering, PitchClass::*};
//! use pcset::pitch_set::PitchSet;
//!
//! let a: PitchSet = vec![C, E, G, C].into();
//! let b: PitchSet = vec![G, E, C].into();
//!
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 4);
//! assert_eq!(a.number(Numbering::Descending), 2192);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::slice;

use crate::error::ParseError;
use crate::pitch::{Numbering, PitchClass, PITCH_CLASS_COUNT};

/// The set of distinct pitch classes present, independent of order.
///
/// Stored in the `Descending` numbering, the one catalog numbers are
/// published in. Re-encode with `number`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16"))]
pub struct Signature(u16);

impl Signature {
    /// No pitch classes.
    pub const EMPTY: Signature = Signature(0);

    /// Every pitch class.
    pub const CHROMATIC: Signature = Signature(0xfff);

    /// Decode a published number. Bits above the twelfth are discarded.
    pub fn from_number(number: u16, numbering: Numbering) -> Signature {
        PitchClass::ALL.iter()
            .filter(|&&p| number & numbering.bit(p) != 0)
            .cloned()
            .collect()
    }

    /// Encode this signature under `numbering`.
    pub fn number(self, numbering: Numbering) -> u16 {
        match numbering {
            Numbering::Descending => self.0,
            _ => self.pitches().fold(0, |acc, p| acc | numbering.bit(p)),
        }
    }

    /// Whether `pitch` is a member. `Invalid` never is.
    pub fn contains(self, pitch: PitchClass) -> bool {
        let bit = Numbering::Descending.bit(pitch);
        bit != 0 && self.0 & bit == bit
    }

    /// Returns a copy with `pitch` added. `Invalid` adds nothing.
    pub fn with(self, pitch: PitchClass) -> Signature {
        Signature(self.0 | Numbering::Descending.bit(pitch))
    }

    /// The number of distinct pitch classes.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no pitch class is present.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order from C.
    pub fn pitches(self) -> impl Iterator<Item = PitchClass> {
        PitchClass::ALL.into_iter().filter(move |&p| self.contains(p))
    }

    /// Presence of each residue, indexed 0 (C) to 11 (B).
    pub fn presence(self) -> [bool; PITCH_CLASS_COUNT] {
        let mut presence = [false; PITCH_CLASS_COUNT];
        for (i, &p) in PitchClass::ALL.iter().enumerate() {
            presence[i] = self.contains(p);
        }
        presence
    }

    /// Rotates every member by `amount` semitones.
    pub fn transpose(self, amount: i32) -> Signature {
        self.pitches().map(|p| p.transpose(amount)).collect()
    }
}

/// Accepts a `Descending` number, rejecting any bit above the twelfth.
impl TryFrom<u16> for Signature {
    type Error = ParseError;

    fn try_from(number: u16) -> Result<Signature, ParseError> {
        if number > Signature::CHROMATIC.0 {
            return Err(ParseError::SignatureOutOfRange(number));
        }
        Ok(Signature(number))
    }
}

impl FromIterator<PitchClass> for Signature {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Signature {
        iter.into_iter().fold(Signature::EMPTY, Signature::with)
    }
}

/// An ordered sequence of pitch classes.
///
/// Duplicates are kept in the sequence. Equality and hashing go through the
/// signature only.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchSet(Vec<PitchClass>);

impl PitchSet {
    /// Construct and return an empty `PitchSet`.
    pub fn new() -> PitchSet {
        PitchSet(Vec::new())
    }

    /// Appends `pitch`, keeping any duplicate.
    pub fn push(&mut self, pitch: PitchClass) {
        self.0.push(pitch);
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> slice::Iter<PitchClass> {
        self.0.iter()
    }

    /// The entries in insertion order.
    pub fn as_slice(&self) -> &[PitchClass] {
        &self.0
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<PitchClass> {
        self.0.get(index).cloned()
    }

    /// Whether `pitch` occurs anywhere in the sequence.
    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.0.contains(&pitch)
    }

    /// Returns the members with repeats removed, keeping first occurrences
    /// in their original order.
    pub fn unique(&self) -> PitchSet {
        let mut out = PitchSet::new();
        for &p in &self.0 {
            if !out.contains(p) {
                out.push(p);
            }
        }
        out
    }

    /// The distinct valid members, ignoring order.
    pub fn signature(&self) -> Signature {
        self.0.iter().cloned().collect()
    }

    /// Union of the members' bits under `numbering`.
    pub fn number(&self, numbering: Numbering) -> u16 {
        self.signature().number(numbering)
    }

    /// Transposes every member, keeping length, order and repeats.
    pub fn transpose(&self, amount: i32) -> PitchSet {
        self.0.iter().map(|p| p.transpose(amount)).collect()
    }

    /// Zero-based residues of the valid members, in sequence order.
    pub fn residues(&self) -> Vec<u8> {
        self.0.iter().filter_map(|p| p.residue()).collect()
    }

    /// Unwraps the underlying sequence.
    pub fn into_vec(self) -> Vec<PitchClass> {
        self.0
    }
}

impl PartialEq for PitchSet {
    fn eq(&self, other: &PitchSet) -> bool {
        self.signature() == other.signature()
    }
}

impl Eq for PitchSet {}

impl Hash for PitchSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature().hash(state);
    }
}

impl From<Vec<PitchClass>> for PitchSet {
    fn from(pitches: Vec<PitchClass>) -> PitchSet {
        PitchSet(pitches)
    }
}

impl<'a> From<&'a [PitchClass]> for PitchSet {
    fn from(pitches: &'a [PitchClass]) -> PitchSet {
        PitchSet(pitches.to_vec())
    }
}

impl FromIterator<PitchClass> for PitchSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> PitchSet {
        PitchSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PitchSet {
    type Item = &'a PitchClass;
    type IntoIter = slice::Iter<'a, PitchClass>;

    fn into_iter(self) -> slice::Iter<'a, PitchClass> {
        self.0.iter()
    }
}

impl IntoIterator for PitchSet {
    type Item = PitchClass;
    type IntoIter = ::std::vec::IntoIter<PitchClass>;

    fn into_iter(self) -> ::std::vec::IntoIter<PitchClass> {
        self.0.into_iter()
    }
}

impl fmt::Display for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
