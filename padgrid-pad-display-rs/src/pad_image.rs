//! Drawing a pad image onto an RGB draw target.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

use padgrid::chord_layout::{PadImage, GRID_HEIGHT};

/// Frame timing and cell geometry for pad image output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameConfig {
    /// Pad refresh rate in Hz. Default: 60.
    pub frame_rate_hz: u32,
    /// Edge length of one pad cell in pixels. Default: 4.
    pub cell_size: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: 60,
            cell_size: 4,
        }
    }
}

impl FrameConfig {
    /// Frame period in milliseconds: `1000 / frame_rate_hz`.
    pub fn period_ms(&self) -> u64 {
        1000 / self.frame_rate_hz.max(1) as u64
    }
}

/// Paint every pad of `image`, sidebar included, as a square cell.
///
/// Pad row 0 is the bottom of the grid, so it lands on the last pixel row
/// band of the target.
pub fn draw_pad_image<D>(
    target: &mut D,
    image: &PadImage,
    config: &FrameConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let cell = config.cell_size as i32;
    for (y, row) in image.iter().enumerate() {
        let top = (GRID_HEIGHT - 1 - y) as i32 * cell;
        for (x, colour) in row.iter().enumerate() {
            let area = Rectangle::new(
                Point::new(x as i32 * cell, top),
                Size::new_equal(config.cell_size),
            );
            target.fill_solid(&area, Rgb888::new(colour.r, colour.g, colour.b))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use padgrid::chord_layout::{GRID_WIDTH, SIDEBAR_WIDTH};
    use smart_leds::colors::BLACK;
    use smart_leds::RGB8;

    fn image_with(x: usize, y: usize, colour: RGB8) -> PadImage {
        let mut image = [[BLACK; GRID_WIDTH + SIDEBAR_WIDTH]; GRID_HEIGHT];
        image[y][x] = colour;
        image
    }

    #[test]
    fn default_config_values() {
        let c = FrameConfig::default();
        assert_eq!(c.frame_rate_hz, 60);
        assert_eq!(c.cell_size, 4);
        assert_eq!(c.period_ms(), 16);
    }

    #[test]
    fn period_30hz() {
        let c = FrameConfig {
            frame_rate_hz: 30,
            ..FrameConfig::default()
        };
        assert_eq!(c.period_ms(), 33);
    }

    #[test]
    fn zero_frame_rate_does_not_divide_by_zero() {
        let c = FrameConfig {
            frame_rate_hz: 0,
            ..FrameConfig::default()
        };
        assert_eq!(c.period_ms(), 1000);
    }

    #[test]
    fn cell_keeps_led_channels() {
        let image = image_with(0, GRID_HEIGHT - 1, RGB8::new(1, 2, 3));
        let config = FrameConfig {
            cell_size: 1,
            ..FrameConfig::default()
        };
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        draw_pad_image(&mut display, &image, &config).unwrap();
        assert_eq!(display.get_pixel(Point::zero()), Some(Rgb888::new(1, 2, 3)));
    }

    #[test]
    fn bottom_row_drawn_at_bottom() {
        let red = RGB8::new(255, 0, 0);
        let image = image_with(3, 0, red);
        let config = FrameConfig {
            cell_size: 2,
            ..FrameConfig::default()
        };
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        draw_pad_image(&mut display, &image, &config).unwrap();

        // Cell (3, 0) spans x 6..8, y 14..16.
        for (px, py) in [(6, 14), (7, 14), (6, 15), (7, 15)] {
            assert_eq!(display.get_pixel(Point::new(px, py)), Some(Rgb888::RED));
        }
        assert_eq!(display.get_pixel(Point::new(6, 0)), Some(Rgb888::BLACK));
    }

    #[test]
    fn whole_image_covered() {
        let image = image_with(0, 0, BLACK);
        let config = FrameConfig {
            cell_size: 3,
            ..FrameConfig::default()
        };
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        draw_pad_image(&mut display, &image, &config).unwrap();

        let width = (GRID_WIDTH + SIDEBAR_WIDTH) as u32 * 3;
        let height = GRID_HEIGHT as u32 * 3;
        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::zero(), Size::new(width, height))
        );
    }
}
