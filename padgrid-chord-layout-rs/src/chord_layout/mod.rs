//! Chord keyboard layout for the pad grid.
//!
//! This module maps the pad grid to chords, tracks the encoder-driven
//! navigation state and computes the LED image shown on the grid every frame.
//!
//! # Architecture
//!
//! ```text
//!  encoder turn ─► ChordLayout::handle_*_encoder ─► LayoutState mutation
//!                                                        │
//!                                              precalculate() ─► ColourCache
//!                                                        │
//!  frame tick ──► ChordLayout::render_pads ◄─────────────┘  (read only)
//!
//!  pad press ───► ChordLayout::evaluate_pads ─► NoteSink + ChordLabelSink
//! ```
//!
//! The bottom [`LayoutState::root_rows`] rows of the grid play bare root
//! pitches laid out isomorphically; every row above them plays one chord
//! from the chord table, with the column selecting the chord root.
//!
//! # External context
//!
//! Nothing is read from ambient globals. The scale/key context, the
//! note-trigger target and the chord-name display are passed into each
//! call as [`ScaleContext`], [`NoteSink`] and [`ChordLabelSink`].
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. All storage is fixed-size arrays sized by the
//! constants below. The optional `defmt` feature enables structured logging
//! for embedded targets.

use smart_leds::RGB8;

mod cache;
mod chords;
mod colour;
mod config;
mod encoder;
mod error;
mod keyboard;
mod label;
mod layout;
mod note_set;
mod render;
mod scale;
mod state;
mod table;

pub use cache::ColourCache;
pub use chords::{ChordDefinition, ChordQuality, Voicing};
pub use colour::{hue_colour, Dim, QualityPalette, HUE_RANGE, PAGE_HUE_SPAN};
pub use config::ChordLayoutConfig;
pub use encoder::{EncoderBindings, EncoderDeltas};
pub use error::LayoutError;
pub use keyboard::{ChordLabelSink, KeyboardLayout, NoteSink, PressedPad};
pub use label::{note_name, ChordLabel, LABEL_CAPACITY};
pub use layout::ChordLayout;
pub use note_set::NoteSet;
pub use scale::{scales, ScaleContext, ScaleState};
pub use state::{ChordList, LayoutState};
pub use table::DEFAULT_CHORDS;

/// Number of pad columns in the main grid.
pub const GRID_WIDTH: usize = 16;

/// Number of pad rows in the grid.
pub const GRID_HEIGHT: usize = 8;

/// Number of sidebar columns to the right of the main grid. The chord layout
/// never writes them, but the image buffer spans them.
pub const SIDEBAR_WIDTH: usize = 2;

/// Semitones per octave.
pub const OCTAVE_SIZE: i32 = 12;

/// Maximum number of simultaneously tracked pad presses.
pub const MAX_PAD_PRESSES: usize = 10;

/// Maximum number of notes in one chord voicing.
pub const MAX_CHORD_NOTES: usize = 7;

/// Number of voicing slots per chord definition.
pub const UNIQUE_VOICINGS: usize = 4;

/// Upper bound for [`LayoutState::root_rows`].
pub const MAX_ROOT_ROWS: u8 = 4;

/// Upper bound for the number of navigation pages.
pub const MAX_PAGES: usize = 8;

/// Capacity of the per-chord voicing offset storage, and therefore the
/// largest chord table a [`ChordList`] accepts.
pub const MAX_CHORDS: usize = 64;

/// Lowest note offset reachable by transposing.
pub const MIN_NOTE_OFFSET: i32 = -128;

/// Highest note offset reachable by transposing.
pub const MAX_NOTE_OFFSET: i32 = 127;

/// Size of the note colour ramp used by the root rows.
pub const NOTE_RAMP_SIZE: usize = OCTAVE_SIZE as usize + GRID_HEIGHT + GRID_WIDTH;

/// Caller-owned LED frame buffer, indexed `image[y][x]`.
pub type PadImage = [[RGB8; GRID_WIDTH + SIDEBAR_WIDTH]; GRID_HEIGHT];
