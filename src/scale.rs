//! Named scales and their canonical signatures.
//!
//! Like chord qualities, every scale is one published number in the
//! `Descending` numbering with its tonic on C. Modes of one another are
//! distinct entries since their tonic differs.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::pitch::Numbering;
use crate::pitch_set::Signature;

/// A scale from the catalog, identified by its prototype at C.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    Chromatic,
    Major, Dorian, Phrygian, Lydian, Mixolydian, NaturalMinor, Locrian,
    HarmonicMinor, MelodicMinor,
    MajorPentatonic, MinorPentatonic, Blues,
    WholeTone, AugmentedTriad, DiminishedSeventh, Tritone,
    HalfWholeDiminished, WholeHalfDiminished, Augmented,
    Prometheus, TritoneScale, Hirajoshi, InSen, Iwato,
    LydianDominant, Altered, PhrygianDominant, HungarianMinor,
    DoubleHarmonic, NeapolitanMajor, NeapolitanMinor, Enigmatic, Persian,
    BebopDominant, BebopMajor,
}

/// The total number of `Scale` elements.
pub const SCALE_COUNT: usize = 36;

impl Scale {
    /// Every scale in catalog order.
    pub const ALL: [Scale; SCALE_COUNT] = {
        use self::Scale::*;
        [
            Chromatic, Major, Dorian, Phrygian, Lydian, Mixolydian,
            NaturalMinor, Locrian, HarmonicMinor, MelodicMinor,
            MajorPentatonic, MinorPentatonic, Blues, WholeTone,
            AugmentedTriad, DiminishedSeventh, Tritone, HalfWholeDiminished,
            WholeHalfDiminished, Augmented, Prometheus, TritoneScale,
            Hirajoshi, InSen, Iwato, LydianDominant, Altered,
            PhrygianDominant, HungarianMinor, DoubleHarmonic, NeapolitanMajor,
            NeapolitanMinor, Enigmatic, Persian, BebopDominant, BebopMajor,
        ]
    };

    fn published(self) -> u16 {
        use self::Scale::*;

        match self {
            Chromatic           => 4095,
            Major               => 2773,
            Dorian              => 2902,
            Phrygian            => 3418,
            Lydian              => 2741,
            Mixolydian          => 2774,
            NaturalMinor        => 2906,
            Locrian             => 3434,
            HarmonicMinor       => 2905,
            MelodicMinor        => 2901,
            MajorPentatonic     => 2708,
            MinorPentatonic     => 2386,
            Blues               => 2418,
            WholeTone           => 2730,
            AugmentedTriad      => 2184,
            DiminishedSeventh   => 2340,
            Tritone             => 2080,
            HalfWholeDiminished => 3510,
            WholeHalfDiminished => 2925,
            Augmented           => 2457,
            Prometheus          => 2726,
            TritoneScale        => 3250,
            Hirajoshi           => 2840,
            InSen               => 3154,
            Iwato               => 3170,
            LydianDominant      => 2742,
            Altered             => 3498,
            PhrygianDominant    => 3290,
            HungarianMinor      => 2873,
            DoubleHarmonic      => 3289,
            NeapolitanMajor     => 3413,
            NeapolitanMinor     => 3417,
            Enigmatic           => 3243,
            Persian             => 3305,
            BebopDominant       => 2775,
            BebopMajor          => 2781,
        }
    }

    /// The pitch classes of this scale with its tonic on C.
    pub fn signature(self) -> Signature {
        Signature::from_number(self.published(), Numbering::Descending)
    }

    /// The catalog number under `numbering`.
    pub fn number(self, numbering: Numbering) -> u16 {
        self.signature().number(numbering)
    }

    /// Lower-case display name, e.g. `"harmonic minor"`.
    pub fn name(self) -> &'static str {
        use self::Scale::*;

        match self {
            Chromatic           => "chromatic",
            Major               => "major",
            Dorian              => "dorian",
            Phrygian            => "phrygian",
            Lydian              => "lydian",
            Mixolydian          => "mixolydian",
            NaturalMinor        => "natural minor",
            Locrian             => "locrian",
            HarmonicMinor       => "harmonic minor",
            MelodicMinor        => "melodic minor",
            MajorPentatonic     => "major pentatonic",
            MinorPentatonic     => "minor pentatonic",
            Blues               => "blues",
            WholeTone           => "whole tone",
            AugmentedTriad      => "augmented triad",
            DiminishedSeventh   => "diminished seventh",
            Tritone             => "tritone",
            HalfWholeDiminished => "half-whole diminished",
            WholeHalfDiminished => "whole-half diminished",
            Augmented           => "augmented",
            Prometheus          => "prometheus",
            TritoneScale        => "tritone scale",
            Hirajoshi           => "hirajoshi",
            InSen               => "in sen",
            Iwato               => "iwato",
            LydianDominant      => "lydian dominant",
            Altered             => "altered",
            PhrygianDominant    => "phrygian dominant",
            HungarianMinor      => "hungarian minor",
            DoubleHarmonic      => "double harmonic",
            NeapolitanMajor     => "neapolitan major",
            NeapolitanMinor     => "neapolitan minor",
            Enigmatic           => "enigmatic",
            Persian             => "persian",
            BebopDominant       => "bebop dominant",
            BebopMajor          => "bebop major",
        }
    }

    /// Look up a scale by name.
    ///
    /// Case, spaces, `-` and `_` are ignored, so `"Whole-Tone"`,
    /// `"whole tone"` and `"WHOLETONE"` are all the same scale. A handful of
    /// traditional aliases (`ionian`, `aeolian`, `octatonic`, ...) are
    /// recognized too.
    pub fn from_name(name: &str) -> Option<Scale> {
        use self::Scale::*;

        let key = normalize(name);

        if let Some(s) = Scale::ALL.iter().find(|s| normalize(s.name()) == key) {
            return Some(*s);
        }

        let scale = match key.as_str() {
            "ionian"                          => Major,
            "aeolian" | "minor"               => NaturalMinor,
            "octatonic" | "diminished"        => HalfWholeDiminished,
            "superlocrian"                    => Altered,
            "mixolydianb2b6" | "spanish"      => PhrygianDominant,
            "gypsy" | "byzantine"             => DoubleHarmonic,
            "pentatonic"                      => MajorPentatonic,
            "lydianb7" | "overtone"           => LydianDominant,
            _ => return None,
        };

        Some(scale)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Scale, ParseError> {
        Scale::from_name(s).ok_or_else(|| ParseError::UnknownScale(s.to_owned()))
    }
}
