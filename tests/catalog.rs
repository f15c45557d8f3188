// Invariants that must hold for every set class in the catalog, at every
// tonic. These are checked exhaustively since the catalog is small.

use pcset::analysis::{self, Profile};
use pcset::chord::ChordQuality;
use pcset::pitch::{Numbering, PitchClass};
use pcset::pitch_set::{PitchSet, Signature};
use pcset::scale::Scale;
use pcset::set_class::SetClass;

#[test]
fn perfection_partitions_cardinality() {
    for set_class in SetClass::all() {
        let p = analysis::perfection(set_class);
        assert_eq!(p.perfection + p.imperfection, set_class.cardinality(), "{}", set_class);
    }
}

#[test]
fn cardinality_agrees_everywhere() {
    for set_class in SetClass::all() {
        let popcount = set_class.number(Numbering::Descending).count_ones() as usize;

        assert_eq!(set_class.cardinality(), popcount);
        assert_eq!(set_class.cardinality(), set_class.pitch_classes().len());
        assert_eq!(set_class.cardinality(), set_class.number(Numbering::Ascending).count_ones() as usize);
    }
}

#[test]
fn numberings_are_interchangeable() {
    for set_class in SetClass::all() {
        let signature = set_class.signature();

        for &numbering in &[Numbering::Descending, Numbering::Ascending] {
            let number = set_class.number(numbering);
            let bits = set_class.pitches(PitchClass::C).iter()
                .fold(0, |acc, &p| acc | p.number(numbering));

            assert_eq!(number, bits, "{}", set_class);
            assert_eq!(Signature::from_number(number, numbering), signature);
        }
    }
}

#[test]
fn pitches_transpose_with_tonic() {
    for set_class in SetClass::all() {
        let at_c = set_class.pitches(PitchClass::C);

        for (offset, &tonic) in PitchClass::ALL.iter().enumerate() {
            let at_tonic = set_class.pitches(tonic);

            // Position by position, not just as sets.
            assert_eq!(at_tonic.as_slice(), at_c.transpose(offset as i32).as_slice());
            assert_eq!(at_tonic.get(0), Some(tonic));
        }
    }
}

#[test]
fn scale_steps_fill_the_octave() {
    for set_class in SetClass::all() {
        let steps = set_class.interval_pattern();
        let sum: u32 = steps.iter().map(|&s| s as u32).sum();

        if set_class.is_scale() {
            assert_eq!(steps.len(), set_class.cardinality());
            assert_eq!(sum, 12, "{}", set_class);
        } else {
            assert_eq!(steps.len(), set_class.cardinality() - 1);
            assert!(sum < 12, "{}", set_class);
        }
    }
}

#[test]
fn rotational_level_preserves_signature() {
    for set_class in SetClass::all() {
        let level = analysis::rotational_symmetry_level(set_class);
        let prototype = set_class.pitches(PitchClass::C);

        if level > 0 {
            assert_eq!(prototype.transpose(level as i32), prototype);
            assert_eq!(12 % level, 0, "{}", set_class);
        }
        for k in 1..level {
            assert!(prototype.transpose(k as i32) != prototype);
        }
    }
}

#[test]
fn palindrome_is_axis_zero() {
    for set_class in SetClass::all() {
        let presence = set_class.signature().presence();

        assert_eq!(analysis::is_palindromic(set_class), analysis::is_palindrome_at(&presence, 0));
        assert_eq!(
            analysis::is_reflectively_symmetric(set_class),
            !analysis::reflective_symmetry_axes(set_class).is_empty()
        );
    }
}

#[test]
fn balance_matches_centroid() {
    for set_class in SetClass::all() {
        let centroid = analysis::center_of_gravity(set_class, PitchClass::C);
        assert_eq!(analysis::is_balanced(set_class), centroid.x == 0.0 && centroid.y == 0.0);

        // Rotating a balanced set keeps it balanced.
        if analysis::is_balanced(set_class) {
            for &tonic in PitchClass::ALL.iter() {
                assert!(analysis::center_of_gravity(set_class, tonic).is_origin());
            }
        }
    }
}

#[test]
fn fifth_root_is_a_left_edge_member() {
    for set_class in SetClass::all() {
        for &tonic in PitchClass::ALL.iter() {
            let pitches = set_class.pitches(tonic);

            if let Some(root) = analysis::fifth_generator_root(set_class, tonic) {
                assert_eq!(pitches.get(root.degree - 1), Some(root.pitch));
                assert!(pitches.contains(root.pitch.next_fifth()));
                assert!(!pitches.contains(root.pitch.previous_fifth()));
            }
        }
    }
}

#[test]
fn unique_preserves_signature() {
    let sets: Vec<PitchSet> = vec![
        PitchSet::new(),
        vec![PitchClass::C, PitchClass::C].into(),
        vec![PitchClass::B, PitchClass::Invalid, PitchClass::B, PitchClass::E].into(),
        PitchClass::ALL.iter().chain(PitchClass::ALL.iter()).cloned().collect(),
    ];

    for set in &sets {
        assert_eq!(set.unique().signature(), set.signature());
    }
}

// Interval content of every catalog entry, written out from the chord and
// scale spellings rather than from the published numbers.
const CHORD_RESIDUES: &[(ChordQuality, &[u8])] = &[
    (ChordQuality::Major, &[0, 4, 7]),
    (ChordQuality::Minor, &[0, 3, 7]),
    (ChordQuality::Diminished, &[0, 3, 6]),
    (ChordQuality::Augmented, &[0, 4, 8]),
    (ChordQuality::SuspendedSecond, &[0, 2, 7]),
    (ChordQuality::SuspendedFourth, &[0, 5, 7]),
    (ChordQuality::Power, &[0, 7]),
    (ChordQuality::MajorSixth, &[0, 4, 7, 9]),
    (ChordQuality::MinorSixth, &[0, 3, 7, 9]),
    (ChordQuality::DominantSeventh, &[0, 4, 7, 10]),
    (ChordQuality::MajorSeventh, &[0, 4, 7, 11]),
    (ChordQuality::MinorSeventh, &[0, 3, 7, 10]),
    (ChordQuality::MinorMajorSeventh, &[0, 3, 7, 11]),
    (ChordQuality::HalfDiminishedSeventh, &[0, 3, 6, 10]),
    (ChordQuality::DiminishedSeventh, &[0, 3, 6, 9]),
    (ChordQuality::AugmentedSeventh, &[0, 4, 8, 10]),
    (ChordQuality::AugmentedMajorSeventh, &[0, 4, 8, 11]),
    (ChordQuality::SeventhSuspendedFourth, &[0, 5, 7, 10]),
    (ChordQuality::SeventhFlatFive, &[0, 4, 6, 10]),
    (ChordQuality::AddNinth, &[0, 2, 4, 7]),
    (ChordQuality::MinorAddNinth, &[0, 2, 3, 7]),
    (ChordQuality::SixNine, &[0, 2, 4, 7, 9]),
    (ChordQuality::DominantNinth, &[0, 2, 4, 7, 10]),
    (ChordQuality::MajorNinth, &[0, 2, 4, 7, 11]),
    (ChordQuality::MinorNinth, &[0, 2, 3, 7, 10]),
    (ChordQuality::SeventhFlatNinth, &[0, 1, 4, 7, 10]),
    (ChordQuality::SeventhSharpNinth, &[0, 3, 4, 7, 10]),
    (ChordQuality::DominantEleventh, &[0, 2, 4, 5, 7, 10]),
    (ChordQuality::MinorEleventh, &[0, 2, 3, 5, 7, 10]),
    (ChordQuality::DominantThirteenth, &[0, 2, 4, 7, 9, 10]),
    (ChordQuality::MajorThirteenth, &[0, 2, 4, 7, 9, 11]),
];

const SCALE_RESIDUES: &[(Scale, &[u8])] = &[
    (Scale::Chromatic, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    (Scale::Major, &[0, 2, 4, 5, 7, 9, 11]),
    (Scale::Dorian, &[0, 2, 3, 5, 7, 9, 10]),
    (Scale::Phrygian, &[0, 1, 3, 5, 7, 8, 10]),
    (Scale::Lydian, &[0, 2, 4, 6, 7, 9, 11]),
    (Scale::Mixolydian, &[0, 2, 4, 5, 7, 9, 10]),
    (Scale::NaturalMinor, &[0, 2, 3, 5, 7, 8, 10]),
    (Scale::Locrian, &[0, 1, 3, 5, 6, 8, 10]),
    (Scale::HarmonicMinor, &[0, 2, 3, 5, 7, 8, 11]),
    (Scale::MelodicMinor, &[0, 2, 3, 5, 7, 9, 11]),
    (Scale::MajorPentatonic, &[0, 2, 4, 7, 9]),
    (Scale::MinorPentatonic, &[0, 3, 5, 7, 10]),
    (Scale::Blues, &[0, 3, 5, 6, 7, 10]),
    (Scale::WholeTone, &[0, 2, 4, 6, 8, 10]),
    (Scale::AugmentedTriad, &[0, 4, 8]),
    (Scale::DiminishedSeventh, &[0, 3, 6, 9]),
    (Scale::Tritone, &[0, 6]),
    (Scale::HalfWholeDiminished, &[0, 1, 3, 4, 6, 7, 9, 10]),
    (Scale::WholeHalfDiminished, &[0, 2, 3, 5, 6, 8, 9, 11]),
    (Scale::Augmented, &[0, 3, 4, 7, 8, 11]),
    (Scale::Prometheus, &[0, 2, 4, 6, 9, 10]),
    (Scale::TritoneScale, &[0, 1, 4, 6, 7, 10]),
    (Scale::Hirajoshi, &[0, 2, 3, 7, 8]),
    (Scale::InSen, &[0, 1, 5, 7, 10]),
    (Scale::Iwato, &[0, 1, 5, 6, 10]),
    (Scale::LydianDominant, &[0, 2, 4, 6, 7, 9, 10]),
    (Scale::Altered, &[0, 1, 3, 4, 6, 8, 10]),
    (Scale::PhrygianDominant, &[0, 1, 4, 5, 7, 8, 10]),
    (Scale::HungarianMinor, &[0, 2, 3, 6, 7, 8, 11]),
    (Scale::DoubleHarmonic, &[0, 1, 4, 5, 7, 8, 11]),
    (Scale::NeapolitanMajor, &[0, 1, 3, 5, 7, 9, 11]),
    (Scale::NeapolitanMinor, &[0, 1, 3, 5, 7, 8, 11]),
    (Scale::Enigmatic, &[0, 1, 4, 6, 8, 10, 11]),
    (Scale::Persian, &[0, 1, 4, 5, 6, 8, 11]),
    (Scale::BebopDominant, &[0, 2, 4, 5, 7, 9, 10, 11]),
    (Scale::BebopMajor, &[0, 2, 4, 5, 7, 8, 9, 11]),
];

fn check_spelling(set_class: SetClass, expected: &[u8]) {
    let residues = set_class.pitches(PitchClass::C).residues();
    let descending = expected.iter().fold(0u16, |acc, &r| acc | 1 << (11 - r));
    let ascending = expected.iter().fold(0u16, |acc, &r| acc | 1 << r);

    assert_eq!(residues, expected, "{}", set_class);
    assert_eq!(set_class.number(Numbering::Descending), descending, "{}", set_class);
    assert_eq!(set_class.number(Numbering::Ascending), ascending, "{}", set_class);
}

#[test]
fn chord_numbers_match_spelling() {
    assert_eq!(CHORD_RESIDUES.len(), ChordQuality::ALL.len());
    for &(quality, expected) in CHORD_RESIDUES {
        check_spelling(quality.into(), expected);
    }
}

#[test]
fn scale_numbers_match_spelling() {
    assert_eq!(SCALE_RESIDUES.len(), Scale::ALL.len());
    for &(scale, expected) in SCALE_RESIDUES {
        check_spelling(scale.into(), expected);
    }
}

#[test]
fn augmented_triad_scenario() {
    let augmented = SetClass::from(Scale::AugmentedTriad);

    assert_eq!(augmented.number(Numbering::Descending), 2184);
    assert_eq!(augmented.cardinality(), 3);
    assert_eq!(augmented.pitches(PitchClass::C).as_slice(),
        &[PitchClass::C, PitchClass::E, PitchClass::GSharp]);
    assert_eq!(augmented.pitches(PitchClass::CSharp).as_slice(),
        &[PitchClass::CSharp, PitchClass::F, PitchClass::A]);
}

#[test]
fn whole_tone_scenario() {
    let whole_tone = SetClass::from(Scale::WholeTone);
    let p = analysis::perfection(whole_tone);

    assert_eq!(whole_tone.number(Numbering::Descending), 2730);
    assert_eq!(whole_tone.cardinality(), 6);
    assert_eq!((p.perfection, p.imperfection), (0, 6));
}

#[test]
fn chromatic_scenario() {
    let chromatic = SetClass::from(Scale::Chromatic);
    let p = analysis::perfection(chromatic);

    assert_eq!(chromatic.number(Numbering::Descending), 4095);
    assert_eq!((p.perfection, p.imperfection), (12, 0));
    assert_eq!(analysis::rotational_symmetry_level(chromatic), 1);
}

#[test]
fn profiles_are_consistent_with_queries() {
    for profile in Profile::catalog() {
        let set_class = profile.set_class;

        assert_eq!(profile.pitches, set_class.pitches(profile.tonic).into_vec());
        assert_eq!(profile.cardinality, profile.pitches.len());
        assert_eq!(analysis::is_palindromic(set_class), profile.symmetry.is_palindromic());
    }
}

#[cfg(feature = "serde")]
#[test]
fn profile_serializes() {
    let profile = Profile::new(SetClass::from(Scale::Major), PitchClass::G);
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["name"], "major");
    assert_eq!(json["tonic"], "G");
    assert_eq!(json["descending_number"], 2773);
    assert_eq!(json["ascending_number"], 2741);
    assert_eq!(json["fifth_root"]["pitch"], "C");
    assert_eq!(json["fifth_root"]["degree"], 4);
}
