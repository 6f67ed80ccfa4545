use super::OCTAVE_SIZE;

/// A set of pitch classes (0–11), stored as a 12-bit mask.
///
/// Used both for chord interval sets and for scale membership. Pitch
/// classes are relative to whatever root the caller has in mind: a chord's
/// root for interval sets, the key's root for scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteSet(u16);

const ALL_BITS: u16 = (1 << OCTAVE_SIZE) - 1;

impl NoteSet {
    /// The empty set.
    pub const EMPTY: NoteSet = NoteSet(0);

    /// All twelve pitch classes.
    pub const CHROMATIC: NoteSet = NoteSet(ALL_BITS);

    /// Build a set from semitone offsets. Offsets outside one octave
    /// (including negative ones) are folded into it.
    ///
    /// ```
    /// use padgrid::chord_layout::NoteSet;
    ///
    /// let triad = NoteSet::from_offsets(&[0, 16, 7]);
    /// assert!(triad.has(4));
    /// assert_eq!(triad.count(), 3);
    /// ```
    pub const fn from_offsets(offsets: &[i8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < offsets.len() {
            let pc = (offsets[i] as i32).rem_euclid(OCTAVE_SIZE);
            bits |= 1 << pc;
            i += 1;
        }
        NoteSet(bits)
    }

    /// Raw bit mask, bit `n` set when pitch class `n` is a member.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Insert a pitch class, folding it into one octave first.
    pub fn add(&mut self, note: i32) {
        self.0 |= 1 << note.rem_euclid(OCTAVE_SIZE);
    }

    /// Returns `true` if `pitch_class` (0–11) is a member.
    pub fn has(self, pitch_class: u8) -> bool {
        (pitch_class as i32) < OCTAVE_SIZE && self.0 & (1 << pitch_class) != 0
    }

    /// Number of members.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every member of `self` is also in `other`.
    pub fn is_subset_of(self, other: NoteSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Rotate every member up by `offset` semitones, wrapping at the octave.
    ///
    /// ```
    /// use padgrid::chord_layout::NoteSet;
    ///
    /// let c_major = NoteSet::from_offsets(&[0, 4, 7]);
    /// assert_eq!(c_major.to_offset(11), NoteSet::from_offsets(&[11, 3, 6]));
    /// ```
    pub fn to_offset(self, offset: i32) -> NoteSet {
        let shift = offset.rem_euclid(OCTAVE_SIZE) as u32;
        let wide = (self.0 as u32) << shift;
        let folded = (wide | (wide >> OCTAVE_SIZE)) as u16;
        NoteSet(folded & ALL_BITS)
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..OCTAVE_SIZE as u8).filter(move |&pc| self.has(pc))
    }
}
