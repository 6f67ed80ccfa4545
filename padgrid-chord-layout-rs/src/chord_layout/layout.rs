use super::cache::ColourCache;
use super::chords::{ChordDefinition, Voicing};
use super::config::ChordLayoutConfig;
use super::error::LayoutError;
use super::keyboard::{ChordLabelSink, KeyboardLayout, NoteSink, PressedPad};
use super::label::ChordLabel;
use super::render;
use super::scale::ScaleContext;
use super::state::{ChordList, LayoutState};
use super::{PadImage, GRID_HEIGHT, GRID_WIDTH, MAX_PAD_PRESSES};

/// Chord keyboard: root rows at the bottom, one chord per row above.
///
/// Create one when the layout becomes active and call
/// [`precalculate`](KeyboardLayout::precalculate) once before the first
/// frame. That first call folds the key's root note into the note offset.
#[derive(Debug, Clone)]
pub struct ChordLayout {
    state: LayoutState,
    cache: ColourCache,
    config: ChordLayoutConfig,
    initialized_note_offset: bool,
}

impl ChordLayout {
    /// Build a layout over `chords`.
    ///
    /// Fails if the table cannot fill the grid, does not fit the voicing
    /// storage, or if the configured root row count is out of range.
    pub fn new(
        chords: &'static [ChordDefinition],
        config: ChordLayoutConfig,
    ) -> Result<Self, LayoutError> {
        let list = ChordList::new(chords)?;
        let state = LayoutState::new(list, config.initial_note_offset)
            .with_root_rows(config.initial_root_rows)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "chord layout: {} chords, {} root rows",
            chords.len(),
            config.initial_root_rows
        );

        Ok(Self {
            state,
            cache: ColourCache::default(),
            config,
            initialized_note_offset: false,
        })
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn cache(&self) -> &ColourCache {
        &self.cache
    }

    pub fn config(&self) -> &ChordLayoutConfig {
        &self.config
    }

    /// Pitch of pad `(x, y)`.
    pub fn note_from_coords(&self, x: i32, y: i32) -> i32 {
        render::note_from_coords(&self.state, &self.config, x, y)
    }

    /// Chord table index played by row `y`, or `None` for root rows and
    /// rows outside the grid.
    pub fn chord_index_from_row(&self, y: usize) -> Option<usize> {
        let root_rows = self.state.root_rows() as usize;
        if y < root_rows || y >= GRID_HEIGHT {
            return None;
        }
        Some(self.state.chord_row_offset() + (y - root_rows))
    }

    /// Voicing of chord `chord_index` under its stored voicing offset.
    pub fn resolve_voicing(&self, chord_index: usize) -> Voicing {
        self.state.chord_list().voicing(chord_index)
    }

    fn on_grid(press: &PressedPad) -> bool {
        press.active && (press.x as usize) < GRID_WIDTH && (press.y as usize) < GRID_HEIGHT
    }
}

impl KeyboardLayout for ChordLayout {
    fn name(&self) -> &'static str {
        "Chord"
    }

    fn supports_instrument(&self) -> bool {
        true
    }

    fn supports_kit(&self) -> bool {
        false
    }

    fn evaluate_pads(
        &mut self,
        presses: &[PressedPad; MAX_PAD_PRESSES],
        notes: &mut dyn NoteSink,
        labels: &mut dyn ChordLabelSink,
    ) {
        // Scanned from the back: the label ends up naming the lowest-index
        // press.
        let mut last: Option<(i32, &'static str, Option<&'static str>)> = None;

        for press in presses.iter().rev().filter(|p| Self::on_grid(p)) {
            let root = self.note_from_coords(press.x as i32, press.y as i32);
            let (name, voicing) = match self.chord_index_from_row(press.y as usize) {
                Some(index) => (
                    self.state.chord_list().chord(index).name,
                    self.resolve_voicing(index),
                ),
                None => ("", Voicing::ROOT),
            };

            for offset in voicing.notes() {
                notes.enable_note(root + offset as i32, self.config.velocity);
            }
            last = Some((root, name, voicing.display_name()));
        }

        if let Some((root, name, voicing_name)) = last {
            let label = ChordLabel::new(root, name, voicing_name);

            #[cfg(feature = "defmt")]
            defmt::debug!("chord label: {}", label);

            labels.show_chord_label(&label);
        }
    }

    fn handle_vertical_encoder(&mut self, offset: i32, scale: &dyn ScaleContext) {
        self.state.adjust_chord_row_offset(offset);
        self.precalculate(scale);
    }

    fn handle_horizontal_encoder(
        &mut self,
        offset: i32,
        shift: bool,
        presses: &[PressedPad; MAX_PAD_PRESSES],
        encoder_pressed: bool,
        scale: &dyn ScaleContext,
    ) {
        if shift {
            self.state.adjust_root_rows(offset);
        } else if encoder_pressed {
            for press in presses.iter().filter(|p| Self::on_grid(p)) {
                if let Some(index) = self.chord_index_from_row(press.y as usize) {
                    self.state.adjust_voicing_offset(index, offset);
                }
            }
        } else {
            self.state.adjust_note_offset(offset);
        }
        self.precalculate(scale);
    }

    fn precalculate(&mut self, scale: &dyn ScaleContext) {
        if !self.initialized_note_offset {
            self.initialized_note_offset = true;
            self.state.adjust_note_offset(scale.root_note());
        }
        self.cache.recompute(&self.state, &self.config);
    }

    fn render_pads(&self, image: &mut PadImage, scale: &dyn ScaleContext) {
        render::render_pads(&self.state, &self.cache, &self.config, image, scale);
    }
}
