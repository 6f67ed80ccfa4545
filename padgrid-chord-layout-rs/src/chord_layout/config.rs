use super::colour::QualityPalette;

/// Runtime tunables for the chord layout.
///
/// Array sizes are crate constants; everything that can change without
/// resizing storage lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordLayoutConfig {
    /// Semitones between two adjacent root rows (isomorphic row step).
    /// Default: 5.
    pub row_interval: i32,
    /// Period, in semitones, of the note colour ramp. Default: 12.
    pub hue_interval: i32,
    /// Hue steps per semitone along the note colour ramp. Default: 21, so
    /// one octave spans the hue circle without wrapping.
    pub hue_multiplier: i32,
    /// Velocity passed to the note sink. Default: 64.
    pub velocity: u8,
    /// Note offset before the key's root is folded in. Default: 48.
    pub initial_note_offset: i32,
    /// Root rows at activation. Default: 1.
    pub initial_root_rows: u8,
    /// Colours per chord quality.
    pub qualities: QualityPalette,
}

impl Default for ChordLayoutConfig {
    fn default() -> Self {
        Self {
            row_interval: 5,
            hue_interval: 12,
            hue_multiplier: 21,
            velocity: 64,
            initial_note_offset: 48,
            initial_root_rows: 1,
            qualities: QualityPalette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord_layout::HUE_RANGE;

    #[test]
    fn default_config_values() {
        let c = ChordLayoutConfig::default();
        assert_eq!(c.row_interval, 5);
        assert_eq!(c.hue_interval, 12);
        assert_eq!(c.hue_multiplier, 21);
        assert_eq!(c.velocity, 64);
        assert_eq!(c.initial_note_offset, 48);
        assert_eq!(c.initial_root_rows, 1);
    }

    #[test]
    fn default_ramp_spans_hue_circle() {
        let c = ChordLayoutConfig::default();
        let span = c.hue_interval * c.hue_multiplier;
        assert!(span <= HUE_RANGE);
        assert!(span > HUE_RANGE - c.hue_multiplier);
    }
}
