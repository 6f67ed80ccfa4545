//! Periodic pad frame task.
//!
//! [`pad_render_task`] renders the shared [`PadSurface`] at
//! [`FrameConfig::frame_rate_hz`] and writes changed frames to a
//! [`PadFrameSink`], typically the LED driver of the pad matrix.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use smart_leds::colors::BLACK;

use padgrid::chord_layout::{PadImage, GRID_HEIGHT, GRID_WIDTH, SIDEBAR_WIDTH};

use crate::pad_image::FrameConfig;
use crate::surface::PadSurface;

/// Destination of rendered pad frames.
#[allow(async_fn_in_trait)]
pub trait PadFrameSink {
    type Error;

    async fn write_frame(&mut self, image: &PadImage) -> Result<(), Self::Error>;
}

// ── Frame task ───────────────────────────────────────────────────────────

/// Periodic pad render loop.
///
/// This is a regular `async fn`, not an Embassy `#[task]`. Callers wrap it
/// in a thin concrete task, since Embassy tasks cannot be generic.
///
/// # Control flow
///
/// 1. Wait one frame period.
/// 2. Lock `surface`, render into a private buffer, release the lock.
/// 3. Skip the write if the frame equals the last one written.
/// 4. Write the frame to `sink` (no lock held).
///
/// # Errors
///
/// A failed write is logged and retried with the next frame.
pub async fn pad_render_task<S>(
    surface: &'static Mutex<CriticalSectionRawMutex, PadSurface>,
    mut sink: S,
    config: FrameConfig,
) where
    S: PadFrameSink,
{
    #[cfg(feature = "defmt")]
    defmt::info!("pad render task started, period {} ms", config.period_ms());

    let period = embassy_time::Duration::from_millis(config.period_ms());
    let mut image: PadImage = [[BLACK; GRID_WIDTH + SIDEBAR_WIDTH]; GRID_HEIGHT];
    let mut last_written: Option<PadImage> = None;

    loop {
        embassy_time::Timer::after(period).await;

        {
            let surface = surface.lock().await;
            surface.render(&mut image);
        } // mutex released before any output

        if last_written.as_ref() == Some(&image) {
            continue;
        }

        if sink.write_frame(&image).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("pad frame write failed");
            continue;
        }

        last_written = Some(image);
    }
}
