use super::note_set::NoteSet;

/// Read-only view of the current key and scale.
///
/// Implemented by whatever owns the song's key; the chord layout only
/// queries it.
pub trait ScaleContext {
    /// Root pitch of the key (any octave; only its pitch class matters for
    /// shading).
    fn root_note(&self) -> i32;

    /// Whether scale shading is active.
    fn scale_mode_enabled(&self) -> bool;

    /// Members of the active scale, relative to [`root_note`](Self::root_note).
    fn scale_notes(&self) -> NoteSet;

    /// Returns `true` if `pitch_class` (relative to the root) is in the scale.
    fn is_member_of_scale(&self, pitch_class: u8) -> bool {
        self.scale_notes().has(pitch_class)
    }
}

/// Plain-value [`ScaleContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleState {
    pub root_note: i32,
    pub enabled: bool,
    pub notes: NoteSet,
}

impl Default for ScaleState {
    /// C major, scale mode on.
    fn default() -> Self {
        Self {
            root_note: 0,
            enabled: true,
            notes: scales::MAJOR,
        }
    }
}

impl ScaleContext for ScaleState {
    fn root_note(&self) -> i32 {
        self.root_note
    }

    fn scale_mode_enabled(&self) -> bool {
        self.enabled
    }

    fn scale_notes(&self) -> NoteSet {
        self.notes
    }
}

/// Scales the chord layout shades against.
pub mod scales {
    use super::NoteSet;

    pub const MAJOR: NoteSet = NoteSet::from_offsets(&[0, 2, 4, 5, 7, 9, 11]);
    pub const MINOR: NoteSet = NoteSet::from_offsets(&[0, 2, 3, 5, 7, 8, 10]);
    pub const DORIAN: NoteSet = NoteSet::from_offsets(&[0, 2, 3, 5, 7, 9, 10]);
    pub const PHRYGIAN: NoteSet = NoteSet::from_offsets(&[0, 1, 3, 5, 7, 8, 10]);
    pub const LYDIAN: NoteSet = NoteSet::from_offsets(&[0, 2, 4, 6, 7, 9, 11]);
    pub const MIXOLYDIAN: NoteSet = NoteSet::from_offsets(&[0, 2, 4, 5, 7, 9, 10]);
    pub const LOCRIAN: NoteSet = NoteSet::from_offsets(&[0, 1, 3, 5, 6, 8, 10]);
    pub const MELODIC_MINOR: NoteSet = NoteSet::from_offsets(&[0, 2, 3, 5, 7, 9, 11]);
    pub const HARMONIC_MINOR: NoteSet = NoteSet::from_offsets(&[0, 2, 3, 5, 7, 8, 11]);

    /// All accepted scales with display names.
    pub const ALL: [(&str, NoteSet); 9] = [
        ("Major", MAJOR),
        ("Minor", MINOR),
        ("Dorian", DORIAN),
        ("Phrygian", PHRYGIAN),
        ("Lydian", LYDIAN),
        ("Mixolydian", MIXOLYDIAN),
        ("Locrian", LOCRIAN),
        ("Melodic Minor", MELODIC_MINOR),
        ("Harmonic Minor", HARMONIC_MINOR),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scales_are_heptatonic_and_rooted() {
        for (name, notes) in scales::ALL.iter() {
            assert_eq!(notes.count(), 7, "{}", name);
            assert!(notes.has(0), "{}", name);
        }
    }

    #[test]
    fn default_membership() {
        let scale = ScaleState::default();
        assert!(scale.scale_mode_enabled());
        assert!(scale.is_member_of_scale(4));
        assert!(!scale.is_member_of_scale(3));
    }
}
