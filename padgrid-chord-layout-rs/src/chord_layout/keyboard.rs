use super::label::ChordLabel;
use super::scale::ScaleContext;
use super::{PadImage, MAX_PAD_PRESSES};

/// One tracked pad press, as reported by the pad matrix scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressedPad {
    /// Column; values at or beyond the grid width belong to the sidebar.
    pub x: u8,
    /// Row, 0 at the bottom.
    pub y: u8,
    /// `false` for released or unused slots.
    pub active: bool,
}

impl PressedPad {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y, active: true }
    }
}

/// Note-trigger target (the synth or MIDI voice allocator).
pub trait NoteSink {
    /// Start a note. Fire and forget.
    fn enable_note(&mut self, note: i32, velocity: u8);
}

/// Chord-name display. The implementor decides how to present it (popup,
/// scrolling text, ...).
pub trait ChordLabelSink {
    fn show_chord_label(&mut self, label: &ChordLabel);
}

/// Capabilities shared by every pad layout.
///
/// Object safe, so a host can switch layouts at runtime through
/// `&mut dyn KeyboardLayout`. Every navigation handler leaves the layout's
/// colour cache up to date before returning.
pub trait KeyboardLayout {
    /// Short display name of the layout.
    fn name(&self) -> &'static str;

    fn supports_instrument(&self) -> bool;

    fn supports_kit(&self) -> bool;

    /// Resolve all active presses to notes and update the chord label.
    fn evaluate_pads(
        &mut self,
        presses: &[PressedPad; MAX_PAD_PRESSES],
        notes: &mut dyn NoteSink,
        labels: &mut dyn ChordLabelSink,
    );

    fn handle_vertical_encoder(&mut self, offset: i32, scale: &dyn ScaleContext);

    /// `shift` and `encoder_pressed` select between alternative actions;
    /// `presses` is consulted when the action targets held pads.
    fn handle_horizontal_encoder(
        &mut self,
        offset: i32,
        shift: bool,
        presses: &[PressedPad; MAX_PAD_PRESSES],
        encoder_pressed: bool,
        scale: &dyn ScaleContext,
    );

    /// Refresh derived caches after a state change.
    fn precalculate(&mut self, scale: &dyn ScaleContext);

    /// Draw the grid into `image`. Must not mutate layout state.
    fn render_pads(&self, image: &mut PadImage, scale: &dyn ScaleContext);
}
