//! Chord label presentation.
//!
//! [`ChordLabelPresenter`] is the [`ChordLabelSink`] handed to the layout.
//! It keeps the latest label and advances its popup timer or marquee on
//! every [`tick`](ChordLabelPresenter::tick).

use heapless::String;

use padgrid::chord_layout::{ChordLabel, ChordLabelSink, LABEL_CAPACITY};

use crate::label::{LabelConfig, LabelState};

/// Kind of screen the label is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayKind {
    /// Pixel display: the label pops up and expires after
    /// [`LabelConfig::popup_frames`] ticks.
    Oled,
    /// Few-character display: the label stays up and scrolls through a
    /// [`LabelConfig::segment_width`] window when it does not fit.
    Segment,
}

#[derive(Debug, Clone)]
pub struct ChordLabelPresenter {
    kind: DisplayKind,
    config: LabelConfig,
    label: Option<ChordLabel>,
    frames_left: u16,
    scroll_pos: usize,
    scroll_tick: u16,
}

impl ChordLabelPresenter {
    pub fn new(kind: DisplayKind, config: LabelConfig) -> Self {
        Self {
            kind,
            config,
            label: None,
            frames_left: 0,
            scroll_pos: 0,
            scroll_tick: 0,
        }
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.label.is_some()
    }

    /// Advance by one frame.
    pub fn tick(&mut self) {
        let Some(label) = &self.label else {
            return;
        };

        match self.kind {
            DisplayKind::Oled => {
                self.frames_left = self.frames_left.saturating_sub(1);
                if self.frames_left == 0 {
                    self.label = None;
                }
            }
            DisplayKind::Segment => {
                let len = label.as_str().chars().count();
                let width = self.config.segment_width.max(1);
                if len <= width {
                    return;
                }
                self.scroll_tick += 1;
                if self.scroll_tick >= self.config.scroll_frames.max(1) {
                    self.scroll_tick = 0;
                    // Positions 0..=len-width, then back to the start.
                    self.scroll_pos = (self.scroll_pos + 1) % (len - width + 1);
                }
            }
        }
    }

    /// Snapshot of what the label area shows this frame.
    pub fn state(&self) -> LabelState {
        let Some(label) = &self.label else {
            return LabelState::default();
        };

        match self.kind {
            DisplayKind::Oled => LabelState {
                text: copy_text(label.as_str().chars()),
                dot: false,
            },
            DisplayKind::Segment => LabelState {
                text: copy_text(
                    label
                        .as_str()
                        .chars()
                        .skip(self.scroll_pos)
                        .take(self.config.segment_width),
                ),
                dot: !label.is_natural(),
            },
        }
    }
}

impl ChordLabelSink for ChordLabelPresenter {
    fn show_chord_label(&mut self, label: &ChordLabel) {
        self.label = Some(label.clone());
        self.frames_left = self.config.popup_frames;
        self.scroll_pos = 0;
        self.scroll_tick = 0;
    }
}

// Source is a ChordLabel, which already fits LABEL_CAPACITY.
fn copy_text(chars: impl Iterator<Item = char>) -> String<LABEL_CAPACITY> {
    let mut text = String::new();
    for ch in chars {
        if text.push(ch).is_err() {
            break;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LabelConfig {
        LabelConfig {
            popup_frames: 3,
            segment_width: 4,
            scroll_frames: 2,
            ..LabelConfig::default()
        }
    }

    fn text(presenter: &ChordLabelPresenter) -> String<LABEL_CAPACITY> {
        presenter.state().text
    }

    // ── Oled popup ───────────────────────────────────────────────────

    #[test]
    fn nothing_shown_initially() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Oled, config());
        presenter.tick();
        assert!(!presenter.is_visible());
        assert!(presenter.state().is_empty());
    }

    #[test]
    fn popup_expires_after_configured_frames() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Oled, config());
        presenter.show_chord_label(&ChordLabel::new(0, "m7", Some("Drop 2")));
        assert_eq!(text(&presenter).as_str(), "Cm7 - Drop 2");

        presenter.tick();
        presenter.tick();
        assert!(presenter.is_visible());
        presenter.tick();
        assert!(!presenter.is_visible());
        assert!(presenter.state().is_empty());
    }

    #[test]
    fn new_label_restarts_popup() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Oled, config());
        presenter.show_chord_label(&ChordLabel::new(0, "", None));
        presenter.tick();
        presenter.tick();
        presenter.show_chord_label(&ChordLabel::new(2, "m", None));
        presenter.tick();
        presenter.tick();
        assert_eq!(text(&presenter).as_str(), "Dm");
    }

    #[test]
    fn popup_never_lights_dot() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Oled, config());
        presenter.show_chord_label(&ChordLabel::new(1, "", None));
        assert!(!presenter.state().dot);
    }

    // ── Segment marquee ──────────────────────────────────────────────

    #[test]
    fn short_label_does_not_scroll() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Segment, config());
        presenter.show_chord_label(&ChordLabel::new(0, "m7", None));
        for _ in 0..10 {
            presenter.tick();
        }
        assert_eq!(text(&presenter).as_str(), "Cm7");
        assert!(presenter.is_visible());
    }

    #[test]
    fn long_label_scrolls_and_wraps() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Segment, config());
        // "Cm7b5" = 5 chars, window 4: two positions.
        presenter.show_chord_label(&ChordLabel::new(0, "m7b5", None));
        assert_eq!(text(&presenter).as_str(), "Cm7b");

        presenter.tick();
        assert_eq!(text(&presenter).as_str(), "Cm7b");
        presenter.tick();
        assert_eq!(text(&presenter).as_str(), "m7b5");

        presenter.tick();
        presenter.tick();
        assert_eq!(text(&presenter).as_str(), "Cm7b");
    }

    #[test]
    fn sharp_root_lights_dot() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Segment, config());
        presenter.show_chord_label(&ChordLabel::new(6, "", None));
        let state = presenter.state();
        assert_eq!(state.text.as_str(), "F#");
        assert!(state.dot);

        presenter.show_chord_label(&ChordLabel::new(7, "", None));
        assert!(!presenter.state().dot);
    }

    #[test]
    fn new_label_resets_marquee() {
        let mut presenter = ChordLabelPresenter::new(DisplayKind::Segment, config());
        presenter.show_chord_label(&ChordLabel::new(0, "m7b5", None));
        presenter.tick();
        presenter.tick();
        presenter.show_chord_label(&ChordLabel::new(0, "m7b5", None));
        assert_eq!(text(&presenter).as_str(), "Cm7b");
    }
}
