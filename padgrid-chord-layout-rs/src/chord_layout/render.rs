//! Per-frame pad image for the chord layout.
//!
//! [`render_pads`] is a pure function of the layout state, the colour cache
//! and the scale context. It runs every frame and writes each grid cell
//! once, then paints the navigation overlays over the shading.

use smart_leds::colors::BLACK;

use super::cache::ColourCache;
use super::colour::Dim;
use super::config::ChordLayoutConfig;
use super::scale::ScaleContext;
use super::state::LayoutState;
use super::{PadImage, GRID_HEIGHT, GRID_WIDTH, OCTAVE_SIZE, NOTE_RAMP_SIZE};

/// Dimming of the tonic on root rows.
const ROOT_DIM: u8 = 1;
/// Dimming of chords whose root is in the scale but whose notes are not.
const PARTIAL_DIM: u8 = 2;
/// Dimming of chords whose root is outside the scale.
const FOREIGN_DIM: u8 = 4;
/// Dimming of the page colour across page-boundary rows. Sits between the
/// partial and foreign tiers so a boundary row reads as neither.
const MARKER_DIM: u8 = 3;

/// Column carrying the per-row quality colour.
const QUALITY_COLUMN: usize = GRID_WIDTH - 1;

/// Pitch of pad `(x, y)`. Shared by rendering and note triggering.
pub(super) fn note_from_coords(state: &LayoutState, config: &ChordLayoutConfig, x: i32, y: i32) -> i32 {
    let root_rows = state.root_rows() as i32;
    let pitch = state.note_offset() + x;
    if y < root_rows {
        pitch - (root_rows - 1 - y) * config.row_interval
    } else {
        pitch
    }
}

/// Pitch class of `note` relative to the key's root.
pub(super) fn pitch_within_scale(note: i32, scale: &dyn ScaleContext) -> u8 {
    note.wrapping_sub(scale.root_note()).rem_euclid(OCTAVE_SIZE) as u8
}

/// Draw the main grid into `image`. Sidebar columns are left untouched.
///
/// Root rows show the note ramp colour on tonic pads and black elsewhere.
/// Chord rows are shaded against the scale. Page-boundary rows are then
/// filled with the dimmed page colour, and the quality column is drawn over
/// everything.
pub fn render_pads(
    state: &LayoutState,
    cache: &ColourCache,
    config: &ChordLayoutConfig,
    image: &mut PadImage,
    scale: &dyn ScaleContext,
) {
    let root_rows = state.root_rows() as usize;
    let list = state.chord_list();
    let in_scale_mode = scale.scale_mode_enabled();
    let scale_notes = scale.scale_notes();

    for (y, row) in image.iter_mut().enumerate().take(GRID_HEIGHT) {
        if y < root_rows {
            for (x, cell) in row.iter_mut().enumerate().take(GRID_WIDTH) {
                let note = note_from_coords(state, config, x as i32, y as i32);
                *cell = if pitch_within_scale(note, scale) == 0 {
                    let ramp = NOTE_RAMP_SIZE as i32;
                    let idx = (x as i32
                        - (root_rows as i32 + ramp - y as i32) * config.row_interval)
                        .rem_euclid(ramp);
                    cache.notes[idx as usize].dim(ROOT_DIM)
                } else {
                    BLACK
                };
            }
            continue;
        }

        let chord_index = state.chord_row_offset() + (y - root_rows);
        let chord = list.chord(chord_index);
        let quality_colour = cache.pad_quality[y];
        let page_colour = cache.pages[list.page_of(chord_index)];
        let boundary = list.is_page_boundary(chord_index);

        for (x, cell) in row.iter_mut().enumerate().take(GRID_WIDTH) {
            *cell = if in_scale_mode {
                let note = note_from_coords(state, config, x as i32, y as i32);
                let within = pitch_within_scale(note, scale);
                if chord.intervals.to_offset(within as i32).is_subset_of(scale_notes) {
                    quality_colour
                } else if scale.is_member_of_scale(within) {
                    quality_colour.dim(PARTIAL_DIM)
                } else {
                    page_colour.dim(FOREIGN_DIM)
                }
            } else {
                quality_colour
            };

            // Navigation overlays go last so they win over scale shading.
            if x == QUALITY_COLUMN {
                *cell = quality_colour;
            } else if boundary {
                *cell = page_colour.dim(MARKER_DIM);
            }
        }
    }
}
