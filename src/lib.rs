//! # pcset
//!
//! A crate for the algebra of twelve-tone pitch-class sets and the
//! properties of the chords and scales built from them.
//!
//! The `pitch` and `pitch_set` modules contain the arithmetic: transposition,
//! the two published numbering conventions, and signature-based set
//! identity. The `chord`, `scale` and `set_class` modules form a catalog of
//! named set classes, and `analysis` derives their perfection, symmetry,
//! balance and fifths-generator root.
//!
//! ```
//! use pcset::analysis;
//! use pcset::parser::parse_scale;
//! use pcset::set_class::SetClass;
//!
//! let (tonic, scale) = parse_scale("D dorian").unwrap();
//! let dorian = SetClass::from(scale);
//!
//! assert_eq!(dorian.pitches(tonic).to_string(), "D E F G A B C");
//! assert_eq!(dorian.interval_pattern(), vec![2, 1, 2, 2, 2, 1, 2]);
//! assert!(analysis::is_palindromic(dorian));
//! ```

pub mod analysis;
pub mod chord;
pub mod error;
pub mod parser;
pub mod pitch;
pub mod pitch_set;
pub mod scale;
pub mod set_class;

pub use crate::error::ParseError;
