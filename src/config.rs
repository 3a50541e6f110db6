//! Run configuration shared by the deck and short generators.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::color::Palette;
use crate::assets::fonts::FontConfig;
use crate::foundation::core::{ColorMode, Size};
use crate::foundation::error::{FramecastError, FramecastResult};

/// Everything a generator run needs besides its content tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory frames are written to. Created if missing.
    pub out_dir: PathBuf,
    /// Canvas dimensions for every frame of the run.
    pub size: Size,
    /// Pixel layout frames are persisted with.
    pub mode: ColorMode,
    /// Preferred font files per role.
    pub fonts: FontConfig,
    /// Named colors layered over the built-in TV palette.
    pub palette: Palette,
    /// Seed for the effect RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How many times each rendered path appears in the expanded frame list.
    pub repeats_per_frame: u32,
    /// Playback rate the expanded list assumes.
    pub fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::deck()
    }
}

impl RenderConfig {
    /// Landscape RGB slideshow frames.
    pub fn deck() -> Self {
        Self {
            out_dir: PathBuf::from("deck-frames"),
            size: Size::LANDSCAPE_HD,
            mode: ColorMode::Rgb,
            fonts: FontConfig::default(),
            palette: Palette::default(),
            seed: None,
            repeats_per_frame: 1,
            fps: 1,
        }
    }

    /// Vertical RGBA short-video frames, each held for three seconds.
    pub fn short() -> Self {
        Self {
            out_dir: PathBuf::from("short-frames"),
            size: Size::PORTRAIT_HD,
            mode: ColorMode::Rgba,
            repeats_per_frame: 3,
            ..Self::deck()
        }
    }

    /// Load a JSON config. Missing fields keep [`RenderConfig::default`] values.
    pub fn from_path(path: &Path) -> FramecastResult<Self> {
        Self::default().with_overrides_from(path)
    }

    /// Patch this config with the JSON object in `path`.
    ///
    /// Objects merge key by key, so a file naming one font role or one palette color leaves the
    /// rest of `self` intact. Any other value replaces the field.
    pub fn with_overrides_from(self, path: &Path) -> FramecastResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| FramecastError::io(path, e))?;
        let invalid = |e: serde_json::Error| {
            FramecastError::validation(format!("config '{}': {e}", path.display()))
        };
        let patch: serde_json::Value = serde_json::from_slice(&bytes).map_err(invalid)?;
        let mut value = serde_json::to_value(&self).map_err(invalid)?;
        merge_json(&mut value, patch);
        let cfg: Self = serde_json::from_value(value).map_err(invalid)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations no generator can run with.
    pub fn validate(&self) -> FramecastResult<()> {
        self.size.as_u16()?;
        if self.repeats_per_frame == 0 {
            return Err(FramecastError::validation("repeats_per_frame must be >= 1"));
        }
        if self.fps == 0 {
            return Err(FramecastError::validation("fps must be >= 1"));
        }
        Ok(())
    }
}

fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    use serde_json::Value;

    match (base, patch) {
        (Value::Object(b), Value::Object(p)) => {
            for (k, v) in p {
                match b.get_mut(&k) {
                    Some(slot) => merge_json(slot, v),
                    None => {
                        b.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
