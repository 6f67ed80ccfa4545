use super::keyboard::{KeyboardLayout, PressedPad};
use super::scale::ScaleContext;
use super::MAX_PAD_PRESSES;

/// Turns absolute encoder positions into per-read deltas.
///
/// Encoder boards report running positions. The layout wants relative
/// steps, so the previous reading is kept as a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderDeltas<const N: usize> {
    previous: [i32; N],
}

impl<const N: usize> Default for EncoderDeltas<N> {
    fn default() -> Self {
        Self::new([0; N])
    }
}

impl<const N: usize> EncoderDeltas<N> {
    /// Start from a known hardware reading. Use [`Default`] when the
    /// initial read failed; the first update may then report a spurious
    /// delta.
    pub const fn new(baseline: [i32; N]) -> Self {
        Self { previous: baseline }
    }

    /// Feed a new reading. Returns `None` when nothing moved.
    ///
    /// The baseline follows the hardware on every call, including calls
    /// that report no movement.
    pub fn update(&mut self, positions: [i32; N]) -> Option<[i32; N]> {
        let deltas: [i32; N] =
            core::array::from_fn(|i| positions[i].wrapping_sub(self.previous[i]));
        self.previous = positions;

        if deltas.iter().all(|&d| d == 0) {
            None
        } else {
            Some(deltas)
        }
    }
}

/// Which physical encoder drives which layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderBindings {
    /// Encoder index scrolling through the chord table. Default: 0.
    pub vertical: usize,
    /// Encoder index for transpose, root rows and voicings. Default: 1.
    pub horizontal: usize,
}

impl Default for EncoderBindings {
    fn default() -> Self {
        Self {
            vertical: 0,
            horizontal: 1,
        }
    }
}

impl EncoderBindings {
    /// Route one batch of deltas to `layout`.
    ///
    /// Zero deltas and indices missing from `deltas` are skipped. The
    /// vertical axis is handled before the horizontal one.
    pub fn dispatch(
        &self,
        layout: &mut dyn KeyboardLayout,
        deltas: &[i32],
        shift: bool,
        encoder_pressed: bool,
        presses: &[PressedPad; MAX_PAD_PRESSES],
        scale: &dyn ScaleContext,
    ) {
        if let Some(&delta) = deltas.get(self.vertical).filter(|d| **d != 0) {
            #[cfg(feature = "defmt")]
            defmt::debug!("vertical encoder: delta={}", delta);
            layout.handle_vertical_encoder(delta, scale);
        }

        if let Some(&delta) = deltas.get(self.horizontal).filter(|d| **d != 0) {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "horizontal encoder: delta={}, shift={}, pressed={}",
                delta,
                shift,
                encoder_pressed
            );
            layout.handle_horizontal_encoder(delta, shift, presses, encoder_pressed, scale);
        }
    }
}
