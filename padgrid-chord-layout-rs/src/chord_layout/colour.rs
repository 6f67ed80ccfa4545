use smart_leds::colors::BLACK;
use smart_leds::hsv::{hsv2rgb, Hsv};
use smart_leds::RGB8;

use super::chords::ChordQuality;

/// Number of hue steps in a full colour circle.
pub const HUE_RANGE: i32 = 256;

/// Part of the hue circle spread across navigation pages. Kept short of
/// [`HUE_RANGE`] so the last page does not wrap back to the first page's
/// colour.
pub const PAGE_HUE_SPAN: i32 = 192;

/// Brightness reduction by right-shifting every channel.
pub trait Dim {
    /// Halve every channel `level` times. Level 8 and above is black.
    fn dim(self, level: u8) -> Self;
}

impl Dim for RGB8 {
    fn dim(self, level: u8) -> Self {
        if level >= 8 {
            return BLACK;
        }
        RGB8::new(self.r >> level, self.g >> level, self.b >> level)
    }
}

/// Fully saturated colour at `hue` on a [`HUE_RANGE`]-step circle.
/// Values outside the circle wrap.
///
/// ```
/// use padgrid::chord_layout::hue_colour;
/// use smart_leds::RGB8;
///
/// assert_eq!(hue_colour(0), RGB8::new(255, 0, 0));
/// assert_eq!(hue_colour(-64), hue_colour(192));
/// ```
pub fn hue_colour(hue: i32) -> RGB8 {
    hsv2rgb(Hsv {
        hue: hue.rem_euclid(HUE_RANGE) as u8,
        sat: 255,
        val: 255,
    })
}

/// Colour per [`ChordQuality`], used for chord rows and the quality column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPalette {
    colours: [RGB8; ChordQuality::COUNT],
}

impl Default for QualityPalette {
    fn default() -> Self {
        Self {
            colours: [
                RGB8::new(0, 170, 255),  // Major
                RGB8::new(160, 0, 255),  // Minor
                RGB8::new(255, 40, 0),   // Diminished
                RGB8::new(255, 200, 0),  // Augmented
                RGB8::new(0, 255, 60),   // Dominant
                RGB8::new(255, 90, 150), // Other
            ],
        }
    }
}

impl QualityPalette {
    pub const fn new(colours: [RGB8; ChordQuality::COUNT]) -> Self {
        Self { colours }
    }

    pub fn colour(&self, quality: ChordQuality) -> RGB8 {
        self.colours[quality as usize]
    }

    pub fn set_colour(&mut self, quality: ChordQuality, colour: RGB8) {
        self.colours[quality as usize] = colour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_halves_per_level() {
        let c = RGB8::new(200, 100, 8);
        assert_eq!(c.dim(0), c);
        assert_eq!(c.dim(1), RGB8::new(100, 50, 4));
        assert_eq!(c.dim(4), RGB8::new(12, 6, 0));
        assert_eq!(c.dim(8), BLACK);
        assert_eq!(c.dim(200), BLACK);
    }

    #[test]
    fn hue_zero_is_red() {
        assert_eq!(hue_colour(0), RGB8::new(255, 0, 0));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hue_colour(HUE_RANGE), hue_colour(0));
        assert_eq!(hue_colour(-1), hue_colour(255));
        assert_eq!(hue_colour(600), hue_colour(88));
    }

    #[test]
    fn page_span_stays_clear_of_start() {
        assert_ne!(hue_colour(PAGE_HUE_SPAN), hue_colour(0));
    }

    #[test]
    fn palette_lookup_and_override() {
        let mut palette = QualityPalette::default();
        assert_ne!(
            palette.colour(ChordQuality::Major),
            palette.colour(ChordQuality::Minor)
        );
        palette.set_colour(ChordQuality::Other, RGB8::new(1, 2, 3));
        assert_eq!(palette.colour(ChordQuality::Other), RGB8::new(1, 2, 3));
    }
}
