//! Per-run state shared by every scene.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::color::Palette;
use crate::assets::fonts::FontSet;
use crate::config::RenderConfig;
use crate::foundation::core::Rgba8;
use crate::foundation::error::FramecastResult;
use crate::render::canvas::Canvas;
use crate::render::text::Typesetter;

/// Per-run drawing state handed to every scene builder.
///
/// Fonts and the palette are resolved once and only read afterwards. The RNG is the single
/// source of randomness for effects and randomized scene details.
pub struct Studio {
    cfg: RenderConfig,
    /// Text shaper over the resolved fonts.
    pub typesetter: Typesetter,
    /// Built-in TV colors overlaid with configured overrides.
    pub palette: Palette,
    /// Effect and layout randomness.
    pub rng: StdRng,
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("cfg", &self.cfg)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

impl Studio {
    /// Validate `cfg`, resolve its fonts and seed the RNG.
    pub fn new(cfg: RenderConfig) -> FramecastResult<Self> {
        cfg.validate()?;
        let fonts = FontSet::resolve(&cfg.fonts)?;
        Ok(Self::with_fonts(cfg, fonts))
    }

    /// Build a studio around already-resolved fonts.
    pub fn with_fonts(cfg: RenderConfig, fonts: FontSet) -> Self {
        let mut palette = Palette::tv();
        palette.merge(&cfg.palette);
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            cfg,
            typesetter: Typesetter::new(fonts),
            palette,
            rng,
        }
    }

    /// Configuration this studio renders with.
    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    /// Fresh canvas of the configured size and mode.
    pub fn canvas(&self, fill: Rgba8) -> FramecastResult<Canvas> {
        Canvas::new(self.cfg.size, self.cfg.mode, fill)
    }

    /// Palette color by name.
    pub fn color(&self, name: &str) -> FramecastResult<Rgba8> {
        self.palette.get(name)
    }
}
