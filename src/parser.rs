//! Handles parsing of pitch names, chord symbols and scale specifications.
//!
//! ```
//! use pcset::chord::ChordQuality;
//! use pcset::parser::{parse_chord, parse_scale};
//! use pcset::pitch::PitchClass;
//! use pcset::scale::Scale;
//!
//! assert_eq!(parse_chord("F#m7"), Ok((PitchClass::FSharp, ChordQuality::MinorSeventh)));
//! assert_eq!(parse_scale("Eb harmonic minor"), Ok((PitchClass::DSharp, Scale::HarmonicMinor)));
//! ```

use combine::parser::char::spaces;
use combine::{any, eof, many, one_of, ParseError as CombineError, Parser, Stream};
use log::trace;

use crate::chord::ChordQuality;
use crate::error::ParseError;
use crate::pitch::PitchClass;
use crate::scale::Scale;

/// Parses a single accidental.
///
/// ```text
/// Accidental : 'b' '#' '♭' '♯'
///            ;
/// ```
fn accidental<I>() -> impl Parser<I, Output = i32>
where
    I: Stream<Token = char>,
    I::Error: CombineError<I::Token, I::Range, I::Position>,
{
    one_of("b#♭♯".chars()).map(|x| match x {
        '#' | '♯' => 1,
        _ => -1,
    })
}

/// Parses a note letter plus its accidentals into a pitch class.
///
/// Accidentals accumulate and wrap, so `Cb` is B and `B##` is C#.
///
/// ```text
/// Note : [A-G] Accidental*
///      ;
/// ```
fn note<I>() -> impl Parser<I, Output = PitchClass>
where
    I: Stream<Token = char>,
    I::Error: CombineError<I::Token, I::Range, I::Position>,
{
    let letter = one_of("ABCDEFG".chars()).map(|x| match x {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        _ => 11,
    });

    (letter, many::<Vec<i32>, _, _>(accidental()))
        .map(|(residue, offsets)| {
            PitchClass::from_residue(residue).transpose(offsets.iter().sum())
        })
}

/// Parses a note followed by free text, such as a chord suffix or a scale
/// name.
///
/// ```text
/// Qualified : Note Space* Any*
///           ;
/// ```
fn qualified<I>() -> impl Parser<I, Output = (PitchClass, String)>
where
    I: Stream<Token = char>,
    I::Error: CombineError<I::Token, I::Range, I::Position>,
{
    (note(), spaces(), many::<String, _, _>(any()))
        .map(|(root, _, rest)| (root, rest))
}

/// Reads a single pitch class such as `"C"`, `"F#"` or `"B♭"`.
pub fn parse_pitch_class(input: &str) -> Result<PitchClass, ParseError> {
    (note(), eof())
        .map(|(pitch, _)| pitch)
        .parse(input.trim())
        .map(|(pitch, _)| pitch)
        .map_err(|e| {
            trace!("rejected pitch {:?}: {}", input, e);
            ParseError::UnknownPitch(input.to_owned())
        })
}

/// Reads a chord symbol into its root and quality.
///
/// The suffix after the root is looked up with `ChordQuality::from_symbol`;
/// a bare root is a major triad.
pub fn parse_chord(input: &str) -> Result<(PitchClass, ChordQuality), ParseError> {
    let (root, suffix) = split(input)?;

    match ChordQuality::from_symbol(suffix.trim_end()) {
        Some(quality) => Ok((root, quality)),
        None => {
            trace!("rejected chord suffix {:?} in {:?}", suffix, input);
            Err(ParseError::UnknownChord(input.to_owned()))
        }
    }
}

/// Reads a tonic and scale name, e.g. `"D dorian"` or `"Bb whole-tone"`.
pub fn parse_scale(input: &str) -> Result<(PitchClass, Scale), ParseError> {
    let (tonic, name) = split(input)?;

    match Scale::from_name(&name) {
        Some(scale) => Ok((tonic, scale)),
        None => {
            trace!("rejected scale name {:?} in {:?}", name, input);
            Err(ParseError::UnknownScale(input.to_owned()))
        }
    }
}

fn split(input: &str) -> Result<(PitchClass, String), ParseError> {
    qualified()
        .parse(input.trim())
        .map(|(parsed, _)| parsed)
        .map_err(|e| {
            trace!("no root note in {:?}: {}", input, e);
            ParseError::UnknownPitch(input.to_owned())
        })
}
