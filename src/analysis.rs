//! Derived properties of a set class: fifths-relatedness, symmetry, balance
//! and the fifths-generator root.
//!
//! Every function here is a pure derivation from the set class's prototype,
//! bounded by the twelve pitch classes.
//!
//! ```
//! use pcset::analysis;
//! use pcset::pitch::PitchClass;
//! use pcset::scale::Scale;
//!
//! let whole_tone = Scale::WholeTone.into();
//!
//! assert_eq!(analysis::perfection(whole_tone).imperfection, 6);
//! assert_eq!(analysis::rotational_symmetry_level(whole_tone), 2);
//! assert!(analysis::is_balanced(whole_tone));
//! assert_eq!(analysis::fifth_generator_root(whole_tone, PitchClass::C), None);
//! ```

use log::trace;

use crate::pitch::{Numbering, PitchClass, PITCH_CLASS_COUNT};
use crate::pitch_set::Signature;
use crate::set_class::{Kind, SetClass};

/// Members whose perfect fifth above is, or is not, also a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerfectionProfile {
    pub perfection: usize,
    pub imperfection: usize,
}

/// Counts the prototype's members by whether their next fifth is present.
///
/// `perfection + imperfection` is always the cardinality.
pub fn perfection(set_class: SetClass) -> PerfectionProfile {
    let pitches = set_class.pitches(PitchClass::C);
    let signature = pitches.signature();

    let perfection = pitches.iter()
        .filter(|p| signature.contains(p.next_fifth()))
        .count();

    PerfectionProfile {
        perfection,
        imperfection: pitches.len() - perfection,
    }
}

/// The smallest transposition in `1..12` mapping the prototype onto itself,
/// or 0 when there is none.
pub fn rotational_symmetry_level(set_class: SetClass) -> u8 {
    let prototype = set_class.pitches(PitchClass::C);
    let signature = prototype.signature();

    (1..PITCH_CLASS_COUNT as u8)
        .find(|&k| prototype.transpose(k as i32).signature() == signature)
        .unwrap_or(0)
}

/// Whether some transposition other than the identity maps the set onto itself.
pub fn is_rotationally_symmetric(set_class: SetClass) -> bool {
    rotational_symmetry_level(set_class) > 0
}

/// Whether `presence` reads the same in both directions around `axis`.
///
/// The vector is rotated left by `axis` and positions `(1, 11)`, `(2, 10)`,
/// `(3, 9)`, `(4, 8)` and `(5, 7)` compared. Position 0 is the axis and 6
/// its tritone; both lie on the mirror and are not compared.
pub fn is_palindrome_at(presence: &[bool; PITCH_CLASS_COUNT], axis: usize) -> bool {
    let n = PITCH_CLASS_COUNT;
    let axis = axis % n;
    (1..n / 2).all(|i| presence[(axis + i) % n] == presence[(axis + n - i) % n])
}

/// Mirror symmetry about C.
pub fn is_palindromic(set_class: SetClass) -> bool {
    is_palindrome_at(&set_class.signature().presence(), 0)
}

/// Every residue `0..12` about which the prototype is a mirror palindrome.
pub fn reflective_symmetry_axes(set_class: SetClass) -> Vec<u8> {
    let presence = set_class.signature().presence();

    (0..PITCH_CLASS_COUNT)
        .filter(|&axis| is_palindrome_at(&presence, axis))
        .map(|axis| axis as u8)
        .collect()
}

/// Whether the set mirrors onto itself about at least one axis.
pub fn is_reflectively_symmetric(set_class: SetClass) -> bool {
    let presence = set_class.signature().presence();
    (0..PITCH_CLASS_COUNT).any(|axis| is_palindrome_at(&presence, axis))
}

const HALF: f64 = 0.5;
const ROOT3_2: f64 = 0.866_025_403_784_438_6;

// Twelve points on the unit circle, residue 0 at the top, 30 degrees apart
// clockwise.
const CIRCLE: [(f64, f64); PITCH_CLASS_COUNT] = [
    (0.0, 1.0),
    (HALF, ROOT3_2),
    (ROOT3_2, HALF),
    (1.0, 0.0),
    (ROOT3_2, -HALF),
    (HALF, -ROOT3_2),
    (0.0, -1.0),
    (-HALF, -ROOT3_2),
    (-ROOT3_2, -HALF),
    (-1.0, 0.0),
    (-ROOT3_2, HALF),
    (-HALF, ROOT3_2),
];

/// A point in the plane of the pitch-class circle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    /// Whether both coordinates are exactly zero after rounding.
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

fn round4(v: f64) -> f64 {
    // Adding zero folds -0.0 into 0.0.
    (v * 10_000.0).round() / 10_000.0 + 0.0
}

/// Sum of the circle points of every member at `tonic`, each axis rounded
/// to four decimal places.
pub fn center_of_gravity(set_class: SetClass, tonic: PitchClass) -> Centroid {
    let (x, y) = set_class.pitches(tonic).iter()
        .filter_map(|p| p.residue())
        .map(|r| CIRCLE[r as usize])
        .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy));

    Centroid { x: round4(x), y: round4(y) }
}

/// Whether the members at C sum to the centre of the circle.
pub fn is_balanced(set_class: SetClass) -> bool {
    center_of_gravity(set_class, PitchClass::C).is_origin()
}

/// Rotational and reflective symmetry together with balance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymmetryProfile {
    pub rotational_level: u8,
    pub reflective_axes: Vec<u8>,
    pub balanced: bool,
}

impl SymmetryProfile {
    /// Whether some non-trivial transposition preserves the set.
    pub fn is_rotationally_symmetric(&self) -> bool {
        self.rotational_level > 0
    }

    /// Whether any mirror axis exists.
    pub fn is_reflectively_symmetric(&self) -> bool {
        !self.reflective_axes.is_empty()
    }

    /// Whether residue 0 is among the mirror axes.
    pub fn is_palindromic(&self) -> bool {
        self.reflective_axes.first() == Some(&0)
    }
}

/// Collects every symmetry query for `set_class` into one profile.
pub fn symmetry(set_class: SetClass) -> SymmetryProfile {
    SymmetryProfile {
        rotational_level: rotational_symmetry_level(set_class),
        reflective_axes: reflective_symmetry_axes(set_class),
        balanced: is_balanced(set_class),
    }
}

/// Where a member sits in the chain of fifths formed by its set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FifthRole {
    /// Neither neighbouring fifth is present.
    Orphan,
    /// Both neighbouring fifths are present.
    Center,
    /// Only the fifth below is present; the chain ends here.
    RightEdge,
    /// Only the fifth above is present; the chain starts here.
    LeftEdge,
}

impl FifthRole {
    /// Classify `pitch` against the members of `within`.
    pub fn of(pitch: PitchClass, within: Signature) -> FifthRole {
        let previous = within.contains(pitch.previous_fifth());
        let next = within.contains(pitch.next_fifth());

        match (previous, next) {
            (false, false) => FifthRole::Orphan,
            (true, true) => FifthRole::Center,
            (true, false) => FifthRole::RightEdge,
            (false, true) => FifthRole::LeftEdge,
        }
    }
}

/// Each member at `tonic` in degree order, paired with its role.
pub fn fifth_roles(set_class: SetClass, tonic: PitchClass) -> Vec<(PitchClass, FifthRole)> {
    let pitches = set_class.pitches(tonic);
    let signature = pitches.signature();

    pitches.iter().map(|&p| (p, FifthRole::of(p, signature))).collect()
}

/// The member a chain of fifths generating the set would begin from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FifthRoot {
    pub pitch: PitchClass,
    /// 1-based position in `SetClass::pitches`.
    pub degree: usize,
}

/// Finds the single left-edge member of the set at `tonic`.
///
/// Returns `None` when no member, or more than one member, is a left edge.
pub fn fifth_generator_root(set_class: SetClass, tonic: PitchClass) -> Option<FifthRoot> {
    let mut edges = fifth_roles(set_class, tonic).into_iter()
        .enumerate()
        .filter(|&(_, (_, role))| role == FifthRole::LeftEdge)
        .map(|(i, (pitch, _))| FifthRoot { pitch, degree: i + 1 });

    match (edges.next(), edges.next()) {
        (Some(root), None) => Some(root),
        (first, _) => {
            trace!("{} at {}: no unique fifths root (found any: {})",
                set_class, tonic, first.is_some());
            None
        }
    }
}

/// Every query the catalog answers for one set class at one tonic.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Profile {
    pub set_class: SetClass,
    pub name: &'static str,
    pub kind: Kind,
    pub tonic: PitchClass,
    pub pitches: Vec<PitchClass>,
    pub pitch_classes: Vec<u8>,
    pub interval_pattern: Vec<u8>,
    pub cardinality: usize,
    pub descending_number: u16,
    pub ascending_number: u16,
    pub perfection: PerfectionProfile,
    pub symmetry: SymmetryProfile,
    pub center_of_gravity: Centroid,
    pub fifth_root: Option<FifthRoot>,
}

impl Profile {
    /// Evaluates every query for `set_class` at `tonic`.
    pub fn new(set_class: SetClass, tonic: PitchClass) -> Profile {
        Profile {
            set_class,
            name: set_class.name(),
            kind: set_class.kind(),
            tonic,
            pitches: set_class.pitches(tonic).into_vec(),
            pitch_classes: set_class.pitch_classes(),
            interval_pattern: set_class.interval_pattern(),
            cardinality: set_class.cardinality(),
            descending_number: set_class.number(Numbering::Descending),
            ascending_number: set_class.number(Numbering::Ascending),
            perfection: perfection(set_class),
            symmetry: symmetry(set_class),
            center_of_gravity: center_of_gravity(set_class, tonic),
            fifth_root: fifth_generator_root(set_class, tonic),
        }
    }

    /// Profiles of every set class at every tonic.
    pub fn catalog() -> impl Iterator<Item = Profile> {
        SetClass::all().flat_map(|s| {
            PitchClass::ALL.into_iter().map(move |t| Profile::new(s, t))
        })
    }
}
