//! Retro-TV post-processing passes.
//!
//! Each pass mutates a [`Canvas`] in place and sees the output of the passes applied before it.
//! Passes that need randomness take the generator as an argument so callers decide seeding.

use rand::Rng;

use crate::foundation::core::{PixelRect, Rgba8};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::render::canvas::Canvas;

/// Rows between the starts of two scan-line bands.
pub const SCAN_LINE_PERIOD: u32 = 4;
/// Opacity of the black scan-line bands.
pub const SCAN_LINE_ALPHA: u8 = 50;
/// Tint blended over a glitched band.
pub const GLITCH_TINT: Rgba8 = Rgba8::rgba(255, 0, 255, 30);

const NOISE_GRAY_MIN: u8 = 200;
const GLITCH_START_MARGIN: u32 = 50;
const GLITCH_MAX_SHIFT: i32 = 50;

/// Scatter `round(w * h * intensity)` opaque light-gray pixels over the canvas.
///
/// Coordinates are drawn independently with replacement, so fewer distinct pixels may change.
pub fn static_noise<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    intensity: f64,
    rng: &mut R,
) -> FramecastResult<()> {
    if !intensity.is_finite() || !(0.0..=1.0).contains(&intensity) {
        return Err(FramecastError::validation(format!(
            "noise intensity must be in [0, 1], got {intensity}"
        )));
    }
    let (w, h) = (canvas.width(), canvas.height());
    let writes = (f64::from(w) * f64::from(h) * intensity).round() as u64;
    tracing::debug!(intensity, writes, "static noise");

    for _ in 0..writes {
        let x = rng.random_range(0..w) as i32;
        let y = rng.random_range(0..h) as i32;
        let gray = rng.random_range(NOISE_GRAY_MIN..=u8::MAX);
        canvas.put_pixel(x, y, Rgba8::rgb(gray, gray, gray));
    }
    Ok(())
}

/// Darken two-row bands starting every [`SCAN_LINE_PERIOD`] rows.
pub fn scan_lines(canvas: &mut Canvas) {
    let (w, h) = (canvas.width() as i32, canvas.height());
    let shade = Rgba8::BLACK.with_alpha(SCAN_LINE_ALPHA);
    let mut bands = 0u32;
    for y in (0..h).step_by(SCAN_LINE_PERIOD as usize) {
        let y = y as i32;
        canvas.fill_rect(PixelRect::new(0, y, w - 1, y + 1), shade);
        bands += 1;
    }
    tracing::debug!(bands, "scan lines");
}

/// Shift `iterations` random horizontal bands sideways, tinting about half of them.
///
/// Every iteration reads the canvas as left by the previous one.
pub fn vhs_glitch<R: Rng + ?Sized>(canvas: &mut Canvas, iterations: u32, rng: &mut R) {
    let (w, h) = (canvas.width() as i32, canvas.height());
    for _ in 0..iterations {
        let y = if h > GLITCH_START_MARGIN {
            rng.random_range(0..h - GLITCH_START_MARGIN)
        } else {
            0
        };
        let band = rng.random_range(5..20u32);
        let dx = rng.random_range(-GLITCH_MAX_SHIFT..=GLITCH_MAX_SHIFT);
        canvas.shift_rows(y, band, dx);

        let tinted = rng.random_bool(0.5);
        if tinted {
            let y0 = y as i32;
            canvas.fill_rect(PixelRect::new(0, y0, w - 1, y0 + band as i32 - 1), GLITCH_TINT);
        }
        tracing::debug!(y, band, dx, tinted, "vhs glitch band");
    }
}

/// Color of row `y` in a `height`-row vertical gradient from `top` to `bottom`.
pub fn gradient_row(top: Rgba8, bottom: Rgba8, y: u32, height: u32) -> Rgba8 {
    let t = f64::from(y) / f64::from(height.max(1));
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
    Rgba8::rgb(
        lerp(top.r, bottom.r),
        lerp(top.g, bottom.g),
        lerp(top.b, bottom.b),
    )
}

/// Overwrite the canvas with an opaque top-to-bottom gradient.
pub fn gradient_fill(canvas: &mut Canvas, top: Rgba8, bottom: Rgba8) {
    let (w, h) = (canvas.width() as i32, canvas.height());
    for y in 0..h {
        let c = gradient_row(top, bottom, y, h);
        canvas.fill_rect(PixelRect::new(0, y as i32, w - 1, y as i32), c);
    }
    tracing::debug!(?top, ?bottom, "gradient fill");
}

#[cfg(test)]
#[path = "../tests/unit/effects/effects.rs"]
mod tests;
