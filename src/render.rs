//! Raster canvas, compositing and text layout.

/// Frame buffer and drawing primitives.
pub mod canvas;
pub(crate) mod composite;
/// Text styles and Parley-backed shaping.
pub mod text;
