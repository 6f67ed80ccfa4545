use core::fmt::Write;

use heapless::String;

use super::OCTAVE_SIZE;

/// Maximum length of a formatted chord label in bytes.
pub const LABEL_CAPACITY: usize = 32;

const NOTE_NAMES: [&str; OCTAVE_SIZE as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Name of a pitch without octave number, and whether it is a natural.
///
/// ```
/// use padgrid::chord_layout::note_name;
///
/// assert_eq!(note_name(60), ("C", true));
/// assert_eq!(note_name(-11), ("C#", false));
/// ```
pub fn note_name(note_code: i32) -> (&'static str, bool) {
    let name = NOTE_NAMES[note_code.rem_euclid(OCTAVE_SIZE) as usize];
    (name, name.len() == 1)
}

/// Display text for a pressed chord, e.g. `"F#m7 - Drop 2"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChordLabel {
    text: String<LABEL_CAPACITY>,
    is_natural: bool,
}

impl ChordLabel {
    /// Format a label from the root pitch, the chord name and an optional
    /// voicing name.
    ///
    /// Empty voicing names are ignored. If the voicing part does not fit in
    /// [`LABEL_CAPACITY`] it is dropped whole; the chord name is cut at the
    /// capacity only if it is itself too long.
    pub fn new(note_code: i32, chord_name: &str, voicing_name: Option<&str>) -> Self {
        let (root, is_natural) = note_name(note_code);
        let mut text: String<LABEL_CAPACITY> = String::new();
        // Root names are at most two bytes; cannot overflow.
        let _ = text.push_str(root);
        for ch in chord_name.chars() {
            if text.push(ch).is_err() {
                break;
            }
        }

        if let Some(voicing) = voicing_name.filter(|v| !v.is_empty()) {
            let base_len = text.len();
            if write!(text, " - {}", voicing).is_err() {
                text.truncate(base_len);
            }
        }

        Self { text, is_natural }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// `false` when the root is a sharp; segment displays light a dot.
    pub fn is_natural(&self) -> bool {
        self.is_natural
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChordLabel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.text.as_str())
    }
}
