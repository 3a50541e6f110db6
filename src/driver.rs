//! Sequential generator runs: render each frame, persist it, report progress.

use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::FramecastResult;
use crate::render::canvas::Canvas;
use crate::scene::deck::{DECK, create_frame};
use crate::scene::short::SCENES;
use crate::scene::studio::Studio;

/// One persisted frame, reported to the progress callback.
#[derive(Clone, Copy, Debug)]
pub struct FrameDone<'a> {
    /// 1-based position in the run.
    pub index: usize,
    /// Number of unique frames in the run.
    pub total: usize,
    /// Deck title or scene slug.
    pub label: &'a str,
    /// Where the sink stored the frame.
    pub path: &'a Path,
}

/// Outcome of a generator run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    /// Output directory of the run.
    pub out_dir: PathBuf,
    /// One path per rendered frame, in render order.
    pub unique: Vec<PathBuf>,
    /// Every unique path repeated `repeats_per_frame` times, the playback list.
    pub expanded: Vec<PathBuf>,
    /// Seconds each entry of `expanded` stays on screen.
    pub seconds_per_entry: f64,
}

impl RunReport {
    fn new(studio: &Studio) -> Self {
        let cfg = studio.config();
        Self {
            out_dir: cfg.out_dir.clone(),
            unique: Vec::new(),
            expanded: Vec::new(),
            seconds_per_entry: 1.0 / f64::from(cfg.fps),
        }
    }

    fn record(&mut self, path: PathBuf, repeats: u32) {
        for _ in 0..repeats {
            self.expanded.push(path.clone());
        }
        self.unique.push(path);
    }

    /// Playback length of the expanded list in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.expanded.len() as f64 * self.seconds_per_entry
    }
}

fn sink_config(studio: &Studio) -> SinkConfig {
    let cfg = studio.config();
    SinkConfig {
        size: cfg.size,
        mode: cfg.mode,
    }
}

fn persist<S: FrameSink + ?Sized>(
    sink: &mut S,
    name: &str,
    canvas: Canvas,
) -> FramecastResult<PathBuf> {
    let frame = canvas.into_frame();
    sink.push_frame(name, &frame)
}

/// Render the sixteen deck frames as `frame_NNN`.
#[tracing::instrument(skip_all, fields(out_dir = %studio.config().out_dir.display()))]
pub fn run_deck<S, F>(
    studio: &mut Studio,
    sink: &mut S,
    mut progress: F,
) -> FramecastResult<RunReport>
where
    S: FrameSink + ?Sized,
    F: FnMut(FrameDone<'_>),
{
    let mut report = RunReport::new(studio);
    let repeats = studio.config().repeats_per_frame;
    sink.begin(sink_config(studio))?;

    for (i, slide) in DECK.iter().enumerate() {
        let num = i as u32 + 1;
        let canvas = create_frame(studio, num, slide.title, slide.lines, slide.code)?;
        let path = persist(sink, &format!("frame_{num:03}"), canvas)?;
        tracing::debug!(frame = num, path = %path.display(), "deck frame written");
        progress(FrameDone {
            index: i + 1,
            total: DECK.len(),
            label: slide.title,
            path: &path,
        });
        report.record(path, repeats);
    }

    sink.end()?;
    Ok(report)
}

/// Render the ten short scenes as `frame_<slug>` and expand each path for its screen time.
#[tracing::instrument(skip_all, fields(out_dir = %studio.config().out_dir.display()))]
pub fn run_short<S, F>(
    studio: &mut Studio,
    sink: &mut S,
    mut progress: F,
) -> FramecastResult<RunReport>
where
    S: FrameSink + ?Sized,
    F: FnMut(FrameDone<'_>),
{
    let mut report = RunReport::new(studio);
    let repeats = studio.config().repeats_per_frame;
    sink.begin(sink_config(studio))?;

    for (i, &(slug, build)) in SCENES.iter().enumerate() {
        let canvas = build(studio)?;
        let path = persist(sink, &format!("frame_{slug}"), canvas)?;
        tracing::debug!(scene = slug, path = %path.display(), "short scene written");
        progress(FrameDone {
            index: i + 1,
            total: SCENES.len(),
            label: slug,
            path: &path,
        });
        report.record(path, repeats);
    }

    sink.end()?;
    Ok(report)
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
