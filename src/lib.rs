//! Framecast renders procedural promo frames: a landscape slide deck and the scenes of a
//! vertical retro-TV short.
//!
//! A run is built from three pieces:
//!
//! - A [`RenderConfig`] with canvas geometry, fonts, palette overrides and the RNG seed
//! - A [`Studio`] that resolves fonts once and owns the seeded RNG
//! - A [`FrameSink`] that persists each finished [`Canvas`]
//!
//! [`run_deck`] and [`run_short`] drive the built-in content tables through a sink.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub mod config;
pub mod driver;
pub mod effects;
pub mod encode;
pub mod render;
pub mod scene;

pub use crate::assets::color::{Palette, parse_hex, to_hex};
pub use crate::assets::fonts::{FontConfig, FontFace, FontRole, FontSet, FontSource};
pub use crate::foundation::core::{ColorMode, PixelRect, Point, Rgba8, Size, pt};
pub use crate::foundation::error::{FramecastError, FramecastResult};

pub use crate::config::RenderConfig;
pub use crate::driver::{FrameDone, RunReport, run_deck, run_short};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngDirSink, SinkConfig};
pub use crate::render::canvas::{Canvas, FrameRgba, OUTLINE_OFFSET};
pub use crate::render::text::{Anchor, TextStyle, Typesetter};
pub use crate::scene::studio::Studio;
