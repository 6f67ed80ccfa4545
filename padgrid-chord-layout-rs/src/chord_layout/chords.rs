use super::note_set::NoteSet;
use super::{MAX_CHORD_NOTES, UNIQUE_VOICINGS};

/// Harmonic category of a chord, used as a colour key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChordQuality {
    Major = 0,
    Minor,
    Diminished,
    Augmented,
    Dominant,
    Other,
}

impl ChordQuality {
    pub const COUNT: usize = 6;
}

/// The concrete notes sounded for a chord, as semitone offsets from the
/// pressed root pitch.
///
/// Slots are filled front to back by the constructors, but consumers must
/// not rely on that: any slot may be `None` and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Voicing {
    /// Semitone offsets; `None` marks an unused slot.
    pub offsets: [Option<i8>; MAX_CHORD_NOTES],
    /// Extra text shown after the chord name, e.g. `"Drop 2"`.
    pub supplemental_name: Option<&'static str>,
}

impl Voicing {
    /// A voicing with no notes. Marks an unused voicing slot in a chord
    /// definition.
    pub const EMPTY: Voicing = Voicing {
        offsets: [None; MAX_CHORD_NOTES],
        supplemental_name: None,
    };

    /// The bare root, used for root-row presses.
    pub const ROOT: Voicing = Voicing::new(&[0]);

    /// Build a voicing from up to [`MAX_CHORD_NOTES`] offsets.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if more than
    /// [`MAX_CHORD_NOTES`] offsets are given.
    pub const fn new(offsets: &[i8]) -> Self {
        assert!(offsets.len() <= MAX_CHORD_NOTES, "too many notes in voicing");
        let mut slots = [None; MAX_CHORD_NOTES];
        let mut i = 0;
        while i < offsets.len() {
            slots[i] = Some(offsets[i]);
            i += 1;
        }
        Self {
            offsets: slots,
            supplemental_name: None,
        }
    }

    /// Attach a supplemental display name.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.supplemental_name = Some(name);
        self
    }

    /// Returns `true` if no slot holds a note.
    pub fn is_empty(&self) -> bool {
        self.offsets.iter().all(Option::is_none)
    }

    /// The offsets actually sounded, in slot order.
    pub fn notes(&self) -> impl Iterator<Item = i8> + '_ {
        self.offsets.iter().filter_map(|o| *o)
    }

    /// Supplemental name, treating an empty string as absent.
    pub fn display_name(&self) -> Option<&'static str> {
        self.supplemental_name.filter(|name| !name.is_empty())
    }
}

/// One entry of the chord table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordDefinition {
    /// Short name appended to the root note name, e.g. `"m7"`.
    pub name: &'static str,
    pub quality: ChordQuality,
    /// Pitch classes of the chord relative to its root.
    pub intervals: NoteSet,
    /// Voicing slots; later slots may be [`Voicing::EMPTY`].
    pub voicings: [Voicing; UNIQUE_VOICINGS],
}

impl ChordDefinition {
    /// Define a chord from its voicings. The interval set is derived from
    /// the first voicing.
    ///
    /// # Panics
    ///
    /// Panics if `voicings` is empty or longer than [`UNIQUE_VOICINGS`].
    pub const fn new(name: &'static str, quality: ChordQuality, voicings: &[Voicing]) -> Self {
        assert!(!voicings.is_empty(), "chord needs at least one voicing");
        assert!(voicings.len() <= UNIQUE_VOICINGS, "too many voicings");

        let mut slots = [Voicing::EMPTY; UNIQUE_VOICINGS];
        let mut i = 0;
        while i < voicings.len() {
            slots[i] = voicings[i];
            i += 1;
        }

        let mut bits = [0i8; MAX_CHORD_NOTES];
        let mut count = 0;
        let mut j = 0;
        while j < MAX_CHORD_NOTES {
            if let Some(offset) = voicings[0].offsets[j] {
                bits[count] = offset;
                count += 1;
            }
            j += 1;
        }
        let (used, _) = bits.split_at(count);

        Self {
            name,
            quality,
            intervals: NoteSet::from_offsets(used),
            voicings: slots,
        }
    }

    /// Resolve the voicing for a stored voicing offset.
    ///
    /// Walks down from `offset` to the first non-empty slot. A chord whose
    /// slots are all empty falls back to its interval set in ascending
    /// order.
    pub fn voicing(&self, offset: usize) -> Voicing {
        let top = offset.min(UNIQUE_VOICINGS - 1);
        if let Some(v) = self.voicings[..=top].iter().rev().find(|v| !v.is_empty()) {
            return *v;
        }

        let mut fallback = Voicing::EMPTY;
        for (slot, pc) in fallback.offsets.iter_mut().zip(self.intervals.iter()) {
            *slot = Some(pc as i8);
        }
        fallback
    }

    /// Number of non-empty voicing slots.
    pub fn voicing_count(&self) -> usize {
        self.voicings.iter().filter(|v| !v.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIAD: ChordDefinition = ChordDefinition::new(
        "",
        ChordQuality::Major,
        &[
            Voicing::new(&[0, 4, 7]),
            Voicing::new(&[0, 7, 16]).named("Open"),
        ],
    );

    #[test]
    fn voicing_new_fills_front_slots() {
        let v = Voicing::new(&[0, 4, 7]);
        assert_eq!(v.offsets[0], Some(0));
        assert_eq!(v.offsets[2], Some(7));
        assert_eq!(v.offsets[3], None);
        assert_eq!(v.notes().count(), 3);
    }

    #[test]
    fn notes_skip_unused_slots_anywhere() {
        let v = Voicing {
            offsets: [Some(0), None, Some(4), None, Some(7), None, None],
            supplemental_name: None,
        };
        let mut notes = v.notes();
        assert_eq!(notes.next(), Some(0));
        assert_eq!(notes.next(), Some(4));
        assert_eq!(notes.next(), Some(7));
        assert_eq!(notes.next(), None);
    }

    #[test]
    fn empty_display_name_is_absent() {
        assert_eq!(Voicing::new(&[0]).named("").display_name(), None);
        assert_eq!(Voicing::new(&[0]).named("Wide").display_name(), Some("Wide"));
    }

    #[test]
    fn intervals_derived_from_first_voicing() {
        assert_eq!(TRIAD.intervals, NoteSet::from_offsets(&[0, 4, 7]));
        assert_eq!(TRIAD.voicing_count(), 2);
    }

    #[test]
    fn voicing_selects_slot() {
        assert_eq!(TRIAD.voicing(0), Voicing::new(&[0, 4, 7]));
        assert_eq!(TRIAD.voicing(1).display_name(), Some("Open"));
    }

    #[test]
    fn voicing_falls_back_to_last_defined_slot() {
        assert_eq!(TRIAD.voicing(2), TRIAD.voicing(1));
        assert_eq!(TRIAD.voicing(99), TRIAD.voicing(1));
    }

    #[test]
    fn voicing_falls_back_to_interval_set() {
        let bare = ChordDefinition {
            name: "x",
            quality: ChordQuality::Other,
            intervals: NoteSet::from_offsets(&[0, 5, 7]),
            voicings: [Voicing::EMPTY; UNIQUE_VOICINGS],
        };
        let v = bare.voicing(0);
        let mut notes = v.notes();
        assert_eq!(notes.next(), Some(0));
        assert_eq!(notes.next(), Some(5));
        assert_eq!(notes.next(), Some(7));
        assert_eq!(notes.next(), None);
    }
}
