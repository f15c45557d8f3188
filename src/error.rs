//! Errors produced while reading pitch, chord and scale names, and while
//! decoding signatures.
//!
//! The pitch-class algebra itself never fails; only text input does.

use thiserror::Error;

/// Failure to read a pitch, chord or scale, or to decode a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a note letter optionally followed by accidentals
    #[error("unknown pitch class: {0:?}")]
    UnknownPitch(String),

    /// A recognizable root followed by an unknown quality suffix
    #[error("unknown chord symbol: {0:?}")]
    UnknownChord(String),

    #[error("unknown scale: {0:?}")]
    UnknownScale(String),

    /// A signature number with bits set above the twelfth
    #[error("signature out of range: {0}")]
    SignatureOutOfRange(u16),
}
