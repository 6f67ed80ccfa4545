use super::chords::{ChordDefinition, Voicing};
use super::error::LayoutError;
use super::{
    GRID_HEIGHT, MAX_CHORDS, MAX_NOTE_OFFSET, MAX_PAGES, MAX_ROOT_ROWS, MIN_NOTE_OFFSET,
    UNIQUE_VOICINGS,
};

/// The chord table plus the navigation and voicing state attached to it.
#[derive(Debug, Clone)]
pub struct ChordList {
    chords: &'static [ChordDefinition],
    /// Index of the chord on the lowest chord row.
    chord_row_offset: usize,
    /// Per-chord voicing selection, indexed like `chords`.
    voicing_offsets: [u8; MAX_CHORDS],
}

impl ChordList {
    /// Wrap a chord table.
    ///
    /// Returns an error if the table cannot fill the grid or is larger than
    /// [`MAX_CHORDS`].
    pub fn new(chords: &'static [ChordDefinition]) -> Result<Self, LayoutError> {
        if chords.is_empty() {
            return Err(LayoutError::EmptyChordTable);
        }
        if chords.len() < GRID_HEIGHT {
            return Err(LayoutError::ChordTableTooShort {
                len: chords.len(),
                required: GRID_HEIGHT,
            });
        }
        if chords.len() > MAX_CHORDS {
            return Err(LayoutError::ChordTableTooLong {
                len: chords.len(),
                max: MAX_CHORDS,
            });
        }
        Ok(Self {
            chords,
            chord_row_offset: 0,
            voicing_offsets: [0; MAX_CHORDS],
        })
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn chord_row_offset(&self) -> usize {
        self.chord_row_offset
    }

    /// Largest row offset that keeps `chord_rows` rows inside the table.
    pub fn max_chord_row_offset(&self, chord_rows: usize) -> usize {
        self.chords.len().saturating_sub(chord_rows)
    }

    /// Scroll by `offset` chords, clamped so `chord_rows` rows stay inside
    /// the table.
    pub fn adjust_chord_row_offset(&mut self, offset: i32, chord_rows: usize) {
        let max = self.max_chord_row_offset(chord_rows) as i64;
        let target = (self.chord_row_offset as i64 + offset as i64).clamp(0, max);
        self.chord_row_offset = target as usize;
    }

    /// Chord definition at `index`.
    ///
    /// An out-of-range index is a caller bug: it fails the debug assertion,
    /// and release builds clamp to the last chord.
    pub fn chord(&self, index: usize) -> &ChordDefinition {
        debug_assert!(
            index < self.chords.len(),
            "chord index {} out of range",
            index
        );
        if index >= self.chords.len() {
            #[cfg(feature = "defmt")]
            defmt::warn!("chord index {} out of range, clamping", index);
            return &self.chords[self.chords.len() - 1];
        }
        &self.chords[index]
    }

    /// Stored voicing offset for `index` (0 if never adjusted).
    pub fn voicing_offset(&self, index: usize) -> u8 {
        self.voicing_offsets.get(index).copied().unwrap_or(0)
    }

    /// Step the voicing selection of one chord, clamped to the voicing
    /// slots.
    pub fn adjust_voicing_offset(&mut self, index: usize, offset: i32) {
        if index >= self.chords.len() {
            #[cfg(feature = "defmt")]
            defmt::warn!("adjust_voicing_offset: chord index {} out of range", index);
            return;
        }
        let current = self.voicing_offsets[index] as i32;
        let next = current
            .saturating_add(offset)
            .clamp(0, UNIQUE_VOICINGS as i32 - 1);
        self.voicing_offsets[index] = next as u8;

        #[cfg(feature = "defmt")]
        defmt::debug!("voicing offset of chord {} -> {}", index, next);
    }

    /// Resolved voicing of chord `index` under its stored voicing offset.
    pub fn voicing(&self, index: usize) -> Voicing {
        self.chord(index).voicing(self.voicing_offset(index) as usize)
    }

    /// Number of navigation pages, one per grid height of chords, capped at
    /// [`MAX_PAGES`].
    pub fn page_count(&self) -> usize {
        self.chords.len().div_ceil(GRID_HEIGHT).clamp(1, MAX_PAGES)
    }

    /// Page that chord `index` belongs to. Chords past the last page share
    /// it.
    pub fn page_of(&self, index: usize) -> usize {
        (index / GRID_HEIGHT).min(self.page_count() - 1)
    }

    /// Returns `true` if chord `index` opens or closes a page, or is the
    /// last chord in the table.
    pub fn is_page_boundary(&self, index: usize) -> bool {
        let within = index % GRID_HEIGHT;
        within == 0 || within == GRID_HEIGHT - 1 || index + 1 == self.chords.len()
    }
}

/// Mutable state of the chord layout for one session.
#[derive(Debug, Clone)]
pub struct LayoutState {
    note_offset: i32,
    root_rows: u8,
    chord_list: ChordList,
}

impl LayoutState {
    /// State with no root rows. `note_offset` is clamped to
    /// `[MIN_NOTE_OFFSET, MAX_NOTE_OFFSET]`.
    pub fn new(chord_list: ChordList, note_offset: i32) -> Self {
        Self {
            note_offset: note_offset.clamp(MIN_NOTE_OFFSET, MAX_NOTE_OFFSET),
            root_rows: 0,
            chord_list,
        }
    }

    /// Set the initial root row count.
    ///
    /// Returns [`LayoutError::InvalidRootRows`] if `rows > MAX_ROOT_ROWS`.
    pub fn with_root_rows(mut self, rows: u8) -> Result<Self, LayoutError> {
        if rows > MAX_ROOT_ROWS {
            return Err(LayoutError::InvalidRootRows(rows));
        }
        self.root_rows = rows;
        self.clamp_chord_row_offset();
        Ok(self)
    }

    /// Semitone shift applied to every pad pitch.
    pub fn note_offset(&self) -> i32 {
        self.note_offset
    }

    /// Number of bottom rows playing bare roots.
    pub fn root_rows(&self) -> u8 {
        self.root_rows
    }

    pub fn chord_list(&self) -> &ChordList {
        &self.chord_list
    }

    pub fn chord_row_offset(&self) -> usize {
        self.chord_list.chord_row_offset()
    }

    /// Number of rows showing chords.
    pub fn chord_rows(&self) -> usize {
        GRID_HEIGHT - self.root_rows as usize
    }

    /// Transpose by `offset` semitones, clamped to
    /// `[MIN_NOTE_OFFSET, MAX_NOTE_OFFSET]`.
    pub fn adjust_note_offset(&mut self, offset: i32) {
        self.note_offset = self
            .note_offset
            .saturating_add(offset)
            .clamp(MIN_NOTE_OFFSET, MAX_NOTE_OFFSET);

        #[cfg(feature = "defmt")]
        defmt::debug!("note offset -> {}", self.note_offset);
    }

    /// Change the root row count, clamped to `[0, MAX_ROOT_ROWS]`.
    ///
    /// Fewer root rows means more chord rows, so the row offset is
    /// re-clamped to keep every chord row inside the table.
    pub fn adjust_root_rows(&mut self, offset: i32) {
        let rows = (self.root_rows as i32)
            .saturating_add(offset)
            .clamp(0, MAX_ROOT_ROWS as i32);
        self.root_rows = rows as u8;
        self.clamp_chord_row_offset();

        #[cfg(feature = "defmt")]
        defmt::debug!("root rows -> {}", self.root_rows);
    }

    pub fn adjust_chord_row_offset(&mut self, offset: i32) {
        let chord_rows = self.chord_rows();
        self.chord_list.adjust_chord_row_offset(offset, chord_rows);

        #[cfg(feature = "defmt")]
        defmt::debug!("chord row offset -> {}", self.chord_list.chord_row_offset());
    }

    pub fn adjust_voicing_offset(&mut self, chord_index: usize, offset: i32) {
        self.chord_list.adjust_voicing_offset(chord_index, offset);
    }

    fn clamp_chord_row_offset(&mut self) {
        let chord_rows = self.chord_rows();
        self.chord_list.adjust_chord_row_offset(0, chord_rows);
    }
}
