//! Named chord qualities and their canonical signatures.
//!
//! Each quality is bound to a single published number, computed in the
//! `Descending` numbering with the chord rooted on C. Voicing and inversion
//! play no part: a quality is the set of pitch classes only.
//!
//! ```
//! use pcset::chord::ChordQuality;
//! use pcset::pitch::Numbering;
//!
//! let q: ChordQuality = "m7".parse().unwrap();
//! assert_eq!(q, ChordQuality::MinorSeventh);
//! assert_eq!(q.number(Numbering::Descending), 2322);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::pitch::Numbering;
use crate::pitch_set::Signature;

/// A chord quality, independent of its root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordQuality {
    Major, Minor, Diminished, Augmented, SuspendedSecond, SuspendedFourth,
    Power,
    MajorSixth, MinorSixth,
    DominantSeventh, MajorSeventh, MinorSeventh, MinorMajorSeventh,
    HalfDiminishedSeventh, DiminishedSeventh, AugmentedSeventh,
    AugmentedMajorSeventh, SeventhSuspendedFourth, SeventhFlatFive,
    AddNinth, MinorAddNinth, SixNine,
    DominantNinth, MajorNinth, MinorNinth, SeventhFlatNinth, SeventhSharpNinth,
    DominantEleventh, MinorEleventh,
    DominantThirteenth, MajorThirteenth,
}

/// The total number of `ChordQuality` elements.
pub const CHORD_QUALITY_COUNT: usize = 31;

impl ChordQuality {
    /// Every chord quality in catalog order.
    pub const ALL: [ChordQuality; CHORD_QUALITY_COUNT] = {
        use self::ChordQuality::*;
        [
            Major, Minor, Diminished, Augmented, SuspendedSecond,
            SuspendedFourth, Power, MajorSixth, MinorSixth, DominantSeventh,
            MajorSeventh, MinorSeventh, MinorMajorSeventh,
            HalfDiminishedSeventh, DiminishedSeventh, AugmentedSeventh,
            AugmentedMajorSeventh, SeventhSuspendedFourth, SeventhFlatFive,
            AddNinth, MinorAddNinth, SixNine, DominantNinth, MajorNinth,
            MinorNinth, SeventhFlatNinth, SeventhSharpNinth, DominantEleventh,
            MinorEleventh, DominantThirteenth, MajorThirteenth,
        ]
    };

    /// The published number of this quality in the `Descending` numbering.
    fn published(self) -> u16 {
        use self::ChordQuality::*;

        match self {
            Major                  => 2192,
            Minor                  => 2320,
            Diminished             => 2336,
            Augmented              => 2184,
            SuspendedSecond        => 2576,
            SuspendedFourth        => 2128,
            Power                  => 2064,
            MajorSixth             => 2196,
            MinorSixth             => 2324,
            DominantSeventh        => 2194,
            MajorSeventh           => 2193,
            MinorSeventh           => 2322,
            MinorMajorSeventh      => 2321,
            HalfDiminishedSeventh  => 2338,
            DiminishedSeventh      => 2340,
            AugmentedSeventh       => 2186,
            AugmentedMajorSeventh  => 2185,
            SeventhSuspendedFourth => 2130,
            SeventhFlatFive        => 2210,
            AddNinth               => 2704,
            MinorAddNinth          => 2832,
            SixNine                => 2708,
            DominantNinth          => 2706,
            MajorNinth             => 2705,
            MinorNinth             => 2834,
            SeventhFlatNinth       => 3218,
            SeventhSharpNinth      => 2450,
            DominantEleventh       => 2770,
            MinorEleventh          => 2898,
            DominantThirteenth     => 2710,
            MajorThirteenth        => 2709,
        }
    }

    /// The pitch classes of this quality rooted on C.
    pub fn signature(self) -> Signature {
        Signature::from_number(self.published(), Numbering::Descending)
    }

    /// This quality's number under either convention.
    pub fn number(self, numbering: Numbering) -> u16 {
        self.signature().number(numbering)
    }

    /// Human readable name, e.g. `"half-diminished seventh"`.
    pub fn name(self) -> &'static str {
        use self::ChordQuality::*;

        match self {
            Major                  => "major",
            Minor                  => "minor",
            Diminished             => "diminished",
            Augmented              => "augmented",
            SuspendedSecond        => "suspended second",
            SuspendedFourth        => "suspended fourth",
            Power                  => "power",
            MajorSixth             => "major sixth",
            MinorSixth             => "minor sixth",
            DominantSeventh        => "dominant seventh",
            MajorSeventh           => "major seventh",
            MinorSeventh           => "minor seventh",
            MinorMajorSeventh      => "minor major seventh",
            HalfDiminishedSeventh  => "half-diminished seventh",
            DiminishedSeventh      => "diminished seventh",
            AugmentedSeventh       => "augmented seventh",
            AugmentedMajorSeventh  => "augmented major seventh",
            SeventhSuspendedFourth => "seventh suspended fourth",
            SeventhFlatFive        => "seventh flat five",
            AddNinth               => "added ninth",
            MinorAddNinth          => "minor added ninth",
            SixNine                => "six nine",
            DominantNinth          => "dominant ninth",
            MajorNinth             => "major ninth",
            MinorNinth             => "minor ninth",
            SeventhFlatNinth       => "seventh flat ninth",
            SeventhSharpNinth      => "seventh sharp ninth",
            DominantEleventh       => "dominant eleventh",
            MinorEleventh          => "minor eleventh",
            DominantThirteenth     => "dominant thirteenth",
            MajorThirteenth        => "major thirteenth",
        }
    }

    /// The preferred chord-symbol suffix, e.g. `"m7b5"`. Empty for a major
    /// triad.
    pub fn symbol(self) -> &'static str {
        use self::ChordQuality::*;

        match self {
            Major                  => "",
            Minor                  => "m",
            Diminished             => "dim",
            Augmented              => "aug",
            SuspendedSecond        => "sus2",
            SuspendedFourth        => "sus4",
            Power                  => "5",
            MajorSixth             => "6",
            MinorSixth             => "m6",
            DominantSeventh        => "7",
            MajorSeventh           => "maj7",
            MinorSeventh           => "m7",
            MinorMajorSeventh      => "mMaj7",
            HalfDiminishedSeventh  => "m7b5",
            DiminishedSeventh      => "dim7",
            AugmentedSeventh       => "aug7",
            AugmentedMajorSeventh  => "augMaj7",
            SeventhSuspendedFourth => "7sus4",
            SeventhFlatFive        => "7b5",
            AddNinth               => "add9",
            MinorAddNinth          => "madd9",
            SixNine                => "6/9",
            DominantNinth          => "9",
            MajorNinth             => "maj9",
            MinorNinth             => "m9",
            SeventhFlatNinth       => "7b9",
            SeventhSharpNinth      => "7#9",
            DominantEleventh       => "11",
            MinorEleventh          => "m11",
            DominantThirteenth     => "13",
            MajorThirteenth        => "maj13",
        }
    }

    /// Recognize a chord-symbol suffix, including common alternate
    /// spellings.
    ///
    /// Matching is case-sensitive since `M` and `m` differ in meaning.
    ///
    /// ```text
    /// Third   : 'm' | 'min' | '-'
    /// Major   : 'M' | 'maj' | 'Maj' | 'Δ'
    /// Reduced : 'dim' | '°' | 'ø'
    /// Raised  : 'aug' | '+'
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<ChordQuality> {
        use self::ChordQuality::*;

        if let Some(q) = ChordQuality::ALL.iter().find(|q| q.symbol() == symbol) {
            return Some(*q);
        }

        let quality = match symbol {
            "M" | "maj" | "Maj"                     => Major,
            "min" | "-"                             => Minor,
            "°" | "o"                               => Diminished,
            "+"                                     => Augmented,
            "sus"                                   => SuspendedFourth,
            "min6" | "-6"                           => MinorSixth,
            "dom7"                                  => DominantSeventh,
            "M7" | "Maj7" | "Δ7" | "Δ"              => MajorSeventh,
            "min7" | "-7"                           => MinorSeventh,
            "mM7" | "m(maj7)" | "minMaj7" | "-Δ7"   => MinorMajorSeventh,
            "ø" | "ø7" | "min7b5" | "-7b5"          => HalfDiminishedSeventh,
            "°7" | "o7"                             => DiminishedSeventh,
            "+7" | "7#5"                            => AugmentedSeventh,
            "+M7" | "+maj7" | "maj7#5"              => AugmentedMajorSeventh,
            "7sus"                                  => SeventhSuspendedFourth,
            "m(add9)" | "-add9"                     => MinorAddNinth,
            "69" | "6add9"                          => SixNine,
            "M9" | "Maj9" | "Δ9"                    => MajorNinth,
            "min9" | "-9"                           => MinorNinth,
            "min11" | "-11"                         => MinorEleventh,
            "M13" | "Maj13" | "Δ13"                 => MajorThirteenth,
            _ => return None,
        };

        Some(quality)
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<ChordQuality, ParseError> {
        ChordQuality::from_symbol(s.trim())
            .ok_or_else(|| ParseError::UnknownChord(s.to_owned()))
    }
}
