//! Display-side collaborators for the padgrid chord layout.
//!
//! The layout engine in [`padgrid::chord_layout`] only produces a pad image
//! and chord labels. This crate turns them into pixels:
//!
//! - [`ChordLabelPresenter`] receives chord labels and decides how they are
//!   shown: a timed popup on an OLED, or a scrolling window on a segment
//!   display. [`render_label`] draws the popup with `embedded-graphics`.
//! - [`draw_pad_image`] paints a [`PadImage`] onto any RGB draw target,
//!   e.g. a simulator window or a preview screen.
//! - [`PadSurface`] bundles the layout with its scale context so both can
//!   live behind one mutex.
//! - [`pad_render_task`] (feature `task`) renders the surface at a fixed
//!   frame rate and hands changed frames to a [`PadFrameSink`].
//!
//! # Quick Start
//!
//! ```ignore
//! use padgrid::chord_layout::{ChordLayout, ChordLayoutConfig, ScaleState, DEFAULT_CHORDS};
//! use padgrid_pad_display::{pad_render_task, FrameConfig, PadSurface};
//!
//! let layout = ChordLayout::new(&DEFAULT_CHORDS, ChordLayoutConfig::default()).unwrap();
//! let surface = SURFACE.init(Mutex::new(PadSurface::new(layout, ScaleState::default())));
//! spawner.spawn(pads_task(surface, led_driver, FrameConfig::default())).unwrap();
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn pads_task(
//!     surface: &'static Mutex<CriticalSectionRawMutex, PadSurface>,
//!     sink: MyLedDriver,
//!     config: FrameConfig,
//! ) {
//!     pad_render_task(surface, sink, config).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`], forwarded to `padgrid`.
//! - **`task`**: the async frame task, pulling in `embassy-sync` and
//!   `embassy-time`.
//!
//! [`PadImage`]: padgrid::chord_layout::PadImage

#![no_std]

pub mod label;
pub mod pad_image;
pub mod presenter;
#[cfg(feature = "task")]
pub mod render_task;
pub mod surface;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use label::{render_label, LabelConfig, LabelState};
pub use pad_image::{draw_pad_image, FrameConfig};
pub use presenter::{ChordLabelPresenter, DisplayKind};
#[cfg(feature = "task")]
pub use render_task::{pad_render_task, PadFrameSink};
pub use surface::PadSurface;
