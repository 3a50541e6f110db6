use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::assets::fonts::{FontRole, FontSet};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{FramecastError, FramecastResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// How a text position maps onto the laid-out line box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the top-left corner of the line box.
    #[default]
    LeftAscender,
    /// Position is the horizontal center of the top edge.
    MiddleTop,
    /// Position is the center of the line box.
    MiddleMiddle,
}

impl Anchor {
    /// Top-left origin of a `width x height` box anchored at `(x, y)`.
    pub fn origin(self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
        match self {
            Anchor::LeftAscender => (x, y),
            Anchor::MiddleTop => (x - width / 2.0, y),
            Anchor::MiddleMiddle => (x - width / 2.0, y - height / 2.0),
        }
    }
}

/// Font role, size and anchor for a text draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Face to draw with.
    pub role: FontRole,
    /// Font size in pixels.
    pub size_px: f32,
    /// Anchor policy for the target position.
    pub anchor: Anchor,
}

impl TextStyle {
    /// Top-left anchored style.
    pub fn new(role: FontRole, size_px: f32) -> Self {
        Self {
            role,
            size_px,
            anchor: Anchor::LeftAscender,
        }
    }

    /// Same style with a different anchor.
    pub fn anchored(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }
}

/// A shaped single-paragraph layout ready for rasterization.
pub(crate) struct LaidOutText {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl LaidOutText {
    pub(crate) fn width(&self) -> f32 {
        self.layout.width()
    }

    pub(crate) fn height(&self) -> f32 {
        self.layout.height()
    }
}

#[derive(Clone)]
struct RegisteredFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// Shapes text with Parley against the faces of a [`FontSet`].
///
/// Each role's face is registered once, on first use.
pub struct Typesetter {
    fonts: FontSet,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    registered: BTreeMap<FontRole, RegisteredFace>,
}

impl Typesetter {
    /// Construct a typesetter with fresh Parley contexts.
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: BTreeMap::new(),
        }
    }

    /// Faces this typesetter draws with.
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Family name Parley registered for `role`.
    pub fn family_name(&mut self, role: FontRole) -> FramecastResult<String> {
        Ok(self.register(role)?.family)
    }

    /// Width and height of `text` laid out with `style`.
    pub fn measure(&mut self, text: &str, style: &TextStyle) -> FramecastResult<(f32, f32)> {
        let laid = self.layout(text, style, Rgba8::WHITE)?;
        Ok((laid.width(), laid.height()))
    }

    fn register(&mut self, role: FontRole) -> FramecastResult<RegisteredFace> {
        if let Some(face) = self.registered.get(&role) {
            return Ok(face.clone());
        }

        let face = self.fonts.face(role)?;
        let bytes = face.bytes().to_vec();
        let index = face.index();

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            FramecastError::font(format!("no font families registered for {role:?}"))
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FramecastError::font("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index);
        let out = RegisteredFace { family, font };
        self.registered.insert(role, out.clone());
        Ok(out)
    }

    /// Shape `text` as a single unwrapped line.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        style: &TextStyle,
        color: Rgba8,
    ) -> FramecastResult<LaidOutText> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(FramecastError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let face = self.register(style.role)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        if matches!(style.role, FontRole::Title | FontRole::Display) {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            color,
        )));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(LaidOutText {
            layout,
            font: face.font,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
