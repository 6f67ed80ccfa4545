//! The layout together with its scale context.
//!
//! Input handlers and the frame task share one [`PadSurface`] behind a
//! single mutex. Every navigation change recomputes the colour cache before
//! the lock is released, so a frame never sees a half-applied change.

use padgrid::chord_layout::{
    ChordLabelSink, ChordLayout, EncoderBindings, KeyboardLayout, NoteSink, PadImage,
    PressedPad, ScaleState, MAX_PAD_PRESSES,
};

#[derive(Debug, Clone)]
pub struct PadSurface {
    pub layout: ChordLayout,
    pub scale: ScaleState,
}

impl PadSurface {
    /// Wrap a freshly built layout and run its first precalculate pass.
    pub fn new(mut layout: ChordLayout, scale: ScaleState) -> Self {
        layout.precalculate(&scale);
        Self { layout, scale }
    }

    /// Replace the scale context and refresh the layout's caches.
    pub fn set_scale(&mut self, scale: ScaleState) {
        self.scale = scale;
        self.layout.precalculate(&self.scale);
    }

    pub fn render(&self, image: &mut PadImage) {
        self.layout.render_pads(image, &self.scale);
    }

    pub fn evaluate_pads(
        &mut self,
        presses: &[PressedPad; MAX_PAD_PRESSES],
        notes: &mut dyn NoteSink,
        labels: &mut dyn ChordLabelSink,
    ) {
        self.layout.evaluate_pads(presses, notes, labels);
    }

    /// Route one batch of encoder deltas through `bindings`.
    pub fn dispatch_encoders(
        &mut self,
        bindings: &EncoderBindings,
        deltas: &[i32],
        shift: bool,
        encoder_pressed: bool,
        presses: &[PressedPad; MAX_PAD_PRESSES],
    ) {
        bindings.dispatch(
            &mut self.layout,
            deltas,
            shift,
            encoder_pressed,
            presses,
            &self.scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padgrid::chord_layout::{
        scales, ChordLayoutConfig, DEFAULT_CHORDS, GRID_HEIGHT, GRID_WIDTH, SIDEBAR_WIDTH,
    };
    use smart_leds::colors::BLACK;

    use crate::presenter::{ChordLabelPresenter, DisplayKind};
    use crate::LabelConfig;

    struct Silent;

    impl NoteSink for Silent {
        fn enable_note(&mut self, _note: i32, _velocity: u8) {}
    }

    fn make_surface(root_note: i32) -> PadSurface {
        let config = ChordLayoutConfig {
            initial_note_offset: 0,
            ..ChordLayoutConfig::default()
        };
        let layout = ChordLayout::new(&DEFAULT_CHORDS, config).unwrap();
        PadSurface::new(
            layout,
            ScaleState {
                root_note,
                enabled: true,
                notes: scales::MAJOR,
            },
        )
    }

    fn blank() -> PadImage {
        [[BLACK; GRID_WIDTH + SIDEBAR_WIDTH]; GRID_HEIGHT]
    }

    #[test]
    fn new_folds_key_root() {
        let surface = make_surface(7);
        assert_eq!(surface.layout.state().note_offset(), 7);
    }

    #[test]
    fn set_scale_keeps_note_offset() {
        let mut surface = make_surface(7);
        let scale = ScaleState {
            root_note: 2,
            ..surface.scale
        };
        surface.set_scale(scale);
        assert_eq!(surface.layout.state().note_offset(), 7);
        assert_eq!(surface.scale.root_note, 2);
    }

    #[test]
    fn encoder_scroll_changes_rendered_frame() {
        let mut surface = make_surface(0);
        let mut before = blank();
        surface.render(&mut before);

        let none = [PressedPad::default(); MAX_PAD_PRESSES];
        surface.dispatch_encoders(&EncoderBindings::default(), &[1, 0], false, false, &none);

        let mut after = blank();
        surface.render(&mut after);
        assert_ne!(before, after);
    }

    #[test]
    fn press_reaches_presenter() {
        let mut surface = make_surface(0);
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Oled, LabelConfig::default());
        let mut presses = [PressedPad::default(); MAX_PAD_PRESSES];
        presses[0] = PressedPad::new(0, 2);

        surface.evaluate_pads(&presses, &mut Silent, &mut presenter);
        assert_eq!(presenter.state().text.as_str(), "Cm");
    }
}
