use std::path::PathBuf;

use crate::foundation::core::{ColorMode, Size};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::render::canvas::FrameRgba;

/// Configuration provided to a [`FrameSink`] before the first frame of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Dimensions shared by every frame of the run.
    pub size: Size,
    /// Pixel layout frames are persisted with.
    pub mode: ColorMode,
}

/// Sink contract for consuming finished frames.
///
/// `push_frame` is called once per unique frame, in render order. A frame name is unique within
/// a run; pushing an existing name overwrites it.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()>;
    /// Persist one frame under `name` and return where it was stored.
    fn push_frame(&mut self, name: &str, frame: &FrameRgba) -> FramecastResult<PathBuf>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FramecastResult<()>;
}

/// Writes each frame as `<dir>/<name>.png`.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
}

impl PngDirSink {
    /// Sink rooted at `dir`. The directory is created by [`FrameSink::begin`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
        }
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| FramecastError::io(&self.dir, e))?;
        tracing::debug!(dir = %self.dir.display(), ?cfg, "png sink ready");
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, name: &str, frame: &FrameRgba) -> FramecastResult<PathBuf> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| FramecastError::encode("png sink used before begin()"))?;
        if Size::new(frame.width, frame.height) != cfg.size {
            return Err(FramecastError::encode(format!(
                "frame '{name}' is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.size.width, cfg.size.height
            )));
        }

        let path = self.dir.join(format!("{name}.png"));
        let img = image::DynamicImage::try_from(frame)?;
        img.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => FramecastError::io(&path, io),
                other => FramecastError::encode(format!("write png '{}': {other}", path.display())),
            })?;
        Ok(path)
    }

    fn end(&mut self) -> FramecastResult<()> {
        self.cfg = None;
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(String, FrameRgba)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames in push order.
    pub fn frames(&self) -> &[(String, FrameRgba)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, name: &str, frame: &FrameRgba) -> FramecastResult<PathBuf> {
        self.frames.push((name.to_owned(), frame.clone()));
        Ok(PathBuf::from(name))
    }

    fn end(&mut self) -> FramecastResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
