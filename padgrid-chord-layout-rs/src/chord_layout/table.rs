//! Built-in chord table.
//!
//! Ordered roughly from simple to extended so that the first page of the
//! grid holds the chords used most. Every chord's first voicing is in root
//! position and defines its interval set.

use super::chords::{ChordDefinition, ChordQuality, Voicing};

use ChordQuality::{Augmented, Diminished, Dominant, Major, Minor, Other};

const fn v(offsets: &[i8]) -> Voicing {
    Voicing::new(offsets)
}

/// Default chord table for the chord layout.
pub static DEFAULT_CHORDS: [ChordDefinition; 33] = [
    ChordDefinition::new(
        "",
        Major,
        &[
            v(&[0, 4, 7]),
            v(&[0, 7, 16]).named("Open"),
            v(&[-12, 0, 4, 7, 12]).named("Full"),
        ],
    ),
    ChordDefinition::new(
        "m",
        Minor,
        &[
            v(&[0, 3, 7]),
            v(&[0, 7, 15]).named("Open"),
            v(&[-12, 0, 3, 7, 12]).named("Full"),
        ],
    ),
    ChordDefinition::new("6", Major, &[v(&[0, 4, 7, 9]), v(&[0, 9, 16, 19]).named("Open")]),
    ChordDefinition::new("2", Major, &[v(&[0, 2, 4, 7]), v(&[0, 7, 14, 16]).named("Open")]),
    ChordDefinition::new("69", Major, &[v(&[0, 4, 7, 9, 14]), v(&[0, 9, 14, 16, 19]).named("Open")]),
    ChordDefinition::new("sus2", Other, &[v(&[0, 2, 7]), v(&[0, 7, 14]).named("Open")]),
    ChordDefinition::new("sus4", Other, &[v(&[0, 5, 7]), v(&[0, 7, 17]).named("Open")]),
    ChordDefinition::new(
        "7",
        Dominant,
        &[
            v(&[0, 4, 7, 10]),
            v(&[0, 10, 16, 19]).named("Drop 3"),
            v(&[0, 7, 10, 16]).named("Drop 2"),
        ],
    ),
    ChordDefinition::new("7sus4", Other, &[v(&[0, 5, 7, 10]), v(&[0, 10, 17, 19]).named("Open")]),
    ChordDefinition::new("7sus2", Other, &[v(&[0, 2, 7, 10]), v(&[0, 10, 14, 19]).named("Open")]),
    ChordDefinition::new(
        "M7",
        Major,
        &[
            v(&[0, 4, 7, 11]),
            v(&[0, 11, 16, 19]).named("Drop 3"),
            v(&[0, 7, 11, 16]).named("Drop 2"),
        ],
    ),
    ChordDefinition::new(
        "m7",
        Minor,
        &[
            v(&[0, 3, 7, 10]),
            v(&[0, 10, 15, 19]).named("Drop 3"),
            v(&[0, 7, 10, 15]).named("Drop 2"),
        ],
    ),
    ChordDefinition::new("m2", Minor, &[v(&[0, 2, 3, 7]), v(&[0, 7, 14, 15]).named("Open")]),
    ChordDefinition::new("m4", Minor, &[v(&[0, 3, 5, 7]), v(&[0, 7, 15, 17]).named("Open")]),
    ChordDefinition::new("dim", Diminished, &[v(&[0, 3, 6]), v(&[0, 6, 15]).named("Open")]),
    ChordDefinition::new(
        "dim7",
        Diminished,
        &[v(&[0, 3, 6, 9]), v(&[0, 9, 15, 18]).named("Drop 3")],
    ),
    ChordDefinition::new("aug", Augmented, &[v(&[0, 4, 8]), v(&[0, 8, 16]).named("Open")]),
    ChordDefinition::new("m6", Minor, &[v(&[0, 3, 7, 9]), v(&[0, 9, 15, 19]).named("Open")]),
    ChordDefinition::new(
        "mM7",
        Minor,
        &[v(&[0, 3, 7, 11]), v(&[0, 11, 15, 19]).named("Drop 3")],
    ),
    ChordDefinition::new(
        "m7b5",
        Diminished,
        &[v(&[0, 3, 6, 10]), v(&[0, 10, 15, 18]).named("Drop 3")],
    ),
    ChordDefinition::new(
        "m9b5",
        Diminished,
        &[v(&[0, 3, 6, 10, 14]), v(&[0, 10, 14, 15, 18]).named("Open")],
    ),
    ChordDefinition::new(
        "m7b5b9",
        Diminished,
        &[v(&[0, 3, 6, 10, 13]), v(&[0, 10, 13, 15, 18]).named("Open")],
    ),
    ChordDefinition::new(
        "9",
        Dominant,
        &[v(&[0, 4, 7, 10, 14]), v(&[0, 10, 14, 16, 19]).named("Open")],
    ),
    ChordDefinition::new(
        "M9",
        Major,
        &[v(&[0, 4, 7, 11, 14]), v(&[0, 11, 14, 16, 19]).named("Open")],
    ),
    ChordDefinition::new(
        "m9",
        Minor,
        &[v(&[0, 3, 7, 10, 14]), v(&[0, 10, 14, 15, 19]).named("Open")],
    ),
    ChordDefinition::new(
        "11",
        Dominant,
        &[v(&[0, 4, 7, 10, 14, 17]), v(&[0, 10, 14, 17, 19]).named("No 3")],
    ),
    ChordDefinition::new(
        "M11",
        Major,
        &[v(&[0, 4, 7, 11, 14, 17]), v(&[0, 11, 14, 17, 19]).named("No 3")],
    ),
    ChordDefinition::new(
        "m11",
        Minor,
        &[v(&[0, 3, 7, 10, 14, 17]), v(&[0, 10, 15, 17, 26]).named("Open")],
    ),
    ChordDefinition::new(
        "13",
        Dominant,
        &[
            v(&[0, 4, 7, 10, 14, 17, 21]),
            v(&[0, 10, 16, 21]).named("Shell"),
        ],
    ),
    ChordDefinition::new(
        "M13",
        Major,
        &[
            v(&[0, 4, 7, 11, 14, 17, 21]),
            v(&[0, 11, 16, 21]).named("Shell"),
        ],
    ),
    ChordDefinition::new(
        "M13#11",
        Major,
        &[
            v(&[0, 4, 7, 11, 14, 18, 21]),
            v(&[0, 11, 16, 18, 21]).named("Shell"),
        ],
    ),
    ChordDefinition::new(
        "m13",
        Minor,
        &[
            v(&[0, 3, 7, 10, 14, 17, 21]),
            v(&[0, 10, 15, 21]).named("Shell"),
        ],
    ),
    ChordDefinition::new(
        "aug7",
        Augmented,
        &[v(&[0, 4, 8, 10]), v(&[0, 10, 16, 20]).named("Drop 3")],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord_layout::{NoteSet, GRID_HEIGHT, MAX_CHORDS, MAX_PAGES};

    #[test]
    fn table_fits_storage() {
        assert!(DEFAULT_CHORDS.len() >= GRID_HEIGHT);
        assert!(DEFAULT_CHORDS.len() <= MAX_CHORDS);
        assert!(DEFAULT_CHORDS.len().div_ceil(GRID_HEIGHT) <= MAX_PAGES);
    }

    #[test]
    fn every_chord_has_root_position_voicing() {
        for chord in DEFAULT_CHORDS.iter() {
            let first = chord.voicings[0];
            assert_eq!(first.offsets[0], Some(0), "chord {:?} not in root position", chord.name);
            assert!(chord.intervals.has(0));
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in DEFAULT_CHORDS.iter().enumerate() {
            for b in DEFAULT_CHORDS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn qualities_match_third() {
        for chord in DEFAULT_CHORDS.iter() {
            match chord.quality {
                ChordQuality::Major | ChordQuality::Dominant | ChordQuality::Augmented => {
                    assert!(chord.intervals.has(4), "{:?}", chord.name)
                }
                ChordQuality::Minor | ChordQuality::Diminished => {
                    assert!(chord.intervals.has(3), "{:?}", chord.name)
                }
                ChordQuality::Other => {}
            }
        }
    }

    #[test]
    fn major_and_minor_triads_first() {
        assert_eq!(DEFAULT_CHORDS[0].intervals, NoteSet::from_offsets(&[0, 4, 7]));
        assert_eq!(DEFAULT_CHORDS[1].intervals, NoteSet::from_offsets(&[0, 3, 7]));
    }
}
