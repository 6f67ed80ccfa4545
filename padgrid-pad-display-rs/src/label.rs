//! Chord label geometry, snapshot and popup rendering.
//!
//! This module defines the [`LabelConfig`] geometry, the immutable
//! [`LabelState`] snapshot handed from the presenter to the renderer, and
//! [`render_label`], which draws the popup using `embedded-graphics`.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

use padgrid::chord_layout::LABEL_CAPACITY;

// ── LabelConfig ──────────────────────────────────────────────────────────

/// Geometry and timing of the chord label.
///
/// All popup geometry lives here; there are no module-level layout
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelConfig {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Popup box width in pixels. Default: 112.
    pub popup_width: u32,
    /// Popup box height in pixels. Default: 16.
    pub popup_height: u32,
    /// Ticks a popup stays up after the last chord press. Default: 60.
    pub popup_frames: u16,
    /// Characters visible at once on a segment display. Default: 4.
    pub segment_width: usize,
    /// Ticks per marquee step on a segment display. Default: 8.
    pub scroll_frames: u16,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 64,
            popup_width: 112,
            popup_height: 16,
            popup_frames: 60,
            segment_width: 4,
            scroll_frames: 8,
        }
    }
}

impl LabelConfig {
    /// Bounding box of the popup, centred on the display.
    pub fn popup_area(&self) -> Rectangle {
        let width = self.popup_width.min(self.display_width);
        let height = self.popup_height.min(self.display_height);
        let left = (self.display_width - width) / 2;
        let top = (self.display_height - height) / 2;
        Rectangle::new(
            Point::new(left as i32, top as i32),
            Size::new(width, height),
        )
    }
}

// ── LabelState ───────────────────────────────────────────────────────────

/// What the label area should show for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelState {
    /// Visible text; empty when no label is up.
    pub text: String<LABEL_CAPACITY>,
    /// Decimal point lit (segment displays mark sharps this way).
    pub dot: bool,
}

impl LabelState {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Draw the label popup: an outlined box with the text centred inside.
///
/// Nothing is drawn for an empty state.
///
/// ```no_run
/// # use padgrid_pad_display::{render_label, LabelConfig, LabelState};
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let mut state = LabelState::default();
/// state.text.push_str("Cm7").ok();
/// render_label(display, &state, &LabelConfig::default()).ok();
/// # }
/// ```
pub fn render_label<D>(
    display: &mut D,
    state: &LabelState,
    config: &LabelConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if state.is_empty() {
        return Ok(());
    }

    let area = config.popup_area();
    let box_style = PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .fill_color(BinaryColor::Off)
        .build();
    area.into_styled(box_style).draw(display)?;

    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(state.text.as_str(), area.center(), text_style, layout)
        .draw(display)?;

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn small_config() -> LabelConfig {
        LabelConfig {
            display_width: 64,
            display_height: 64,
            popup_width: 60,
            popup_height: 16,
            ..LabelConfig::default()
        }
    }

    fn state(text: &str) -> LabelState {
        let mut state = LabelState::default();
        state.text.push_str(text).unwrap();
        state
    }

    #[test]
    fn default_config_values() {
        let c = LabelConfig::default();
        assert_eq!(c.display_width, 128);
        assert_eq!(c.display_height, 64);
        assert_eq!(c.popup_frames, 60);
        assert_eq!(c.segment_width, 4);
        assert_eq!(c.scroll_frames, 8);
    }

    #[test]
    fn popup_is_centred() {
        let area = small_config().popup_area();
        assert_eq!(area.top_left, Point::new(2, 24));
        assert_eq!(area.size, Size::new(60, 16));
    }

    #[test]
    fn oversized_popup_clamped_to_display() {
        let config = LabelConfig {
            popup_width: 500,
            ..LabelConfig::default()
        };
        let area = config.popup_area();
        assert_eq!(area.top_left.x, 0);
        assert_eq!(area.size.width, 128);
    }

    #[test]
    fn empty_state_draws_nothing() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        render_label(&mut display, &LabelState::default(), &small_config()).unwrap();
        assert_eq!(display.affected_area(), Rectangle::zero());
    }

    #[test]
    fn popup_has_border_and_text() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let config = small_config();
        render_label(&mut display, &state("C#m7"), &config).unwrap();

        let area = config.popup_area();
        assert_eq!(display.affected_area(), area);
        // Corner is border, just inside is background.
        assert_eq!(display.get_pixel(Point::new(2, 24)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 25)), Some(BinaryColor::Off));

        // Some glyph pixel lit on the centre row of the box.
        let y = area.center().y;
        let lit = (4..60).any(|x| display.get_pixel(Point::new(x, y)) == Some(BinaryColor::On));
        assert!(lit);
    }
}
