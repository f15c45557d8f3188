//! Chords and scales as one catalog of set classes.
//!
//! A `SetClass` only ever stores its prototype at tonic C. Pitches at any
//! other tonic are produced on demand by transposing that prototype.
//!
//! ```
//! use pcset::pitch::PitchClass::*;
//! use pcset::scale::Scale;
//! use pcset::set_class::SetClass;
//!
//! let augmented = SetClass::from(Scale::AugmentedTriad);
//!
//! assert_eq!(augmented.pitches(C).as_slice(), &[C, E, GSharp]);
//! assert_eq!(augmented.pitches(CSharp).as_slice(), &[CSharp, F, A]);
//! ```

use std::fmt;

use crate::chord::ChordQuality;
use crate::pitch::{Numbering, PitchClass};
use crate::pitch_set::{PitchSet, Signature};
use crate::scale::Scale;

/// Whether a set class is a chord quality or a scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Chord,
    Scale,
}

/// A named chord quality or scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetClass {
    Chord(ChordQuality),
    Scale(Scale),
}

impl SetClass {
    /// Every chord quality followed by every scale, in catalog order.
    pub fn all() -> impl Iterator<Item = SetClass> {
        ChordQuality::ALL.into_iter().map(SetClass::Chord)
            .chain(Scale::ALL.into_iter().map(SetClass::Scale))
    }

    /// Whether this is a chord or a scale.
    pub fn kind(self) -> Kind {
        match self {
            SetClass::Chord(_) => Kind::Chord,
            SetClass::Scale(_) => Kind::Scale,
        }
    }

    /// Shorthand for `kind() == Kind::Scale`.
    pub fn is_scale(self) -> bool {
        self.kind() == Kind::Scale
    }

    /// The underlying chord or scale name.
    pub fn name(self) -> &'static str {
        match self {
            SetClass::Chord(q) => q.name(),
            SetClass::Scale(s) => s.name(),
        }
    }

    /// The canonical signature with the tonic fixed at C.
    pub fn signature(self) -> Signature {
        match self {
            SetClass::Chord(q) => q.signature(),
            SetClass::Scale(s) => s.signature(),
        }
    }

    /// The catalog number under `numbering`.
    pub fn number(self, numbering: Numbering) -> u16 {
        self.signature().number(numbering)
    }

    /// The members of this set class built on `tonic`.
    ///
    /// Members are produced in ascending semitone distance from C before
    /// transposition, so index `i` is always degree `i + 1` whatever the
    /// tonic. The result is never re-sorted after transposing. An `Invalid`
    /// tonic produces an empty set.
    pub fn pitches(self, tonic: PitchClass) -> PitchSet {
        let offset = match tonic.residue() {
            Some(r) => r as i32,
            None => return PitchSet::new(),
        };

        self.signature().pitches().map(|p| p.transpose(offset)).collect()
    }

    /// Zero-based residues of the prototype at C, ascending.
    pub fn pitch_classes(self) -> Vec<u8> {
        self.pitches(PitchClass::C).residues()
    }

    /// Semitone steps between consecutive members.
    ///
    /// Scales close the octave with a step back to the tonic, so the steps
    /// of a scale always sum to 12. Chords do not.
    pub fn interval_pattern(self) -> Vec<u8> {
        let mut classes = self.pitch_classes();
        if self.is_scale() {
            classes.push(12);
        }

        classes.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// The number of distinct pitch classes.
    pub fn cardinality(self) -> usize {
        self.signature().len()
    }
}

impl From<ChordQuality> for SetClass {
    fn from(quality: ChordQuality) -> SetClass {
        SetClass::Chord(quality)
    }
}

impl From<Scale> for SetClass {
    fn from(scale: Scale) -> SetClass {
        SetClass::Scale(scale)
    }
}

impl fmt::Display for SetClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SetClass::Chord(q) => write!(f, "{} chord", q),
            SetClass::Scale(s) => write!(f, "{} scale", s),
        }
    }
}
