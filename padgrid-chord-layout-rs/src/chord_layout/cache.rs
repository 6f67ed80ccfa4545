use smart_leds::colors::BLACK;
use smart_leds::RGB8;

use super::colour::{hue_colour, PAGE_HUE_SPAN};
use super::config::ChordLayoutConfig;
use super::state::LayoutState;
use super::{GRID_HEIGHT, MAX_PAGES, NOTE_RAMP_SIZE};

/// Colours derived from [`LayoutState`], refreshed after every navigation
/// change and read by every frame.
///
/// Always recomputed in full; the cost is bounded by the grid size, not by
/// the chord table length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourCache {
    /// Quality colour of the chord on each row; black on root rows.
    pub pad_quality: [RGB8; GRID_HEIGHT],
    /// Note colour ramp for the root rows.
    pub notes: [RGB8; NOTE_RAMP_SIZE],
    /// One rainbow colour per navigation page; unused entries are black.
    pub pages: [RGB8; MAX_PAGES],
}

impl Default for ColourCache {
    fn default() -> Self {
        Self {
            pad_quality: [BLACK; GRID_HEIGHT],
            notes: [BLACK; NOTE_RAMP_SIZE],
            pages: [BLACK; MAX_PAGES],
        }
    }
}

impl ColourCache {
    /// Rebuild every entry from `state`.
    pub fn recompute(&mut self, state: &LayoutState, config: &ChordLayoutConfig) {
        let list = state.chord_list();
        let root_rows = state.root_rows() as usize;

        for (y, colour) in self.pad_quality.iter_mut().enumerate() {
            *colour = if y < root_rows {
                BLACK
            } else {
                let chord = list.chord(state.chord_row_offset() + (y - root_rows));
                config.qualities.colour(chord.quality)
            };
        }

        let interval = config.hue_interval.max(1);
        for (i, colour) in self.notes.iter_mut().enumerate() {
            let step = (state.note_offset() + i as i32).rem_euclid(interval);
            *colour = hue_colour(step * config.hue_multiplier);
        }

        let page_count = list.page_count();
        let hue_step = if page_count > 1 {
            PAGE_HUE_SPAN / (page_count as i32 - 1)
        } else {
            0
        };
        for (i, colour) in self.pages.iter_mut().enumerate() {
            *colour = if i < page_count {
                hue_colour(i as i32 * hue_step)
            } else {
                BLACK
            };
        }
    }
}
