//! Pixel canvas and drawing primitives.
//!
//! Pixels are stored as premultiplied RGBA8. Axis-aligned rectangles, single pixels and row
//! copies are written directly into the buffer. Ellipses, polygons, lines and text are
//! rasterized by `vello_cpu`: those draws accumulate in a pending batch that is composited
//! source-over onto the buffer before any direct write or readback, so every operation still
//! observes the result of the ones issued before it.

use crate::foundation::core::{ColorMode, PixelRect, Point, Rgba8, Size};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::render::composite::over;
use crate::render::text::{LaidOutText, TextStyle, Typesetter};

/// Offset, in pixels, of the eight halo passes drawn by [`Canvas::text_outlined`].
pub const OUTLINE_OFFSET: i32 = 3;

/// A finished frame as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Layout the frame is persisted with.
    pub mode: ColorMode,
    /// Straight RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[i..i + 4];
        Some(Rgba8::rgba(px[0], px[1], px[2], px[3]))
    }
}

struct VectorBatch {
    ctx: vello_cpu::RenderContext,
    scratch: vello_cpu::Pixmap,
    pending: bool,
}

/// Fixed-size frame buffer mutated in place by primitives and effects.
pub struct Canvas {
    size: Size,
    size_u16: (u16, u16),
    mode: ColorMode,
    data: Vec<u8>,
    vector: Option<VectorBatch>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Allocate a canvas filled with `fill`. RGB canvases ignore the fill alpha.
    pub fn new(size: Size, mode: ColorMode, fill: Rgba8) -> FramecastResult<Self> {
        let size_u16 = size.as_u16()?;
        let fill = match mode {
            ColorMode::Rgb => fill.with_alpha(255),
            ColorMode::Rgba => fill,
        };
        let px = fill.to_premul();
        let len = (size.width as usize) * (size.height as usize);
        Ok(Self {
            size,
            size_u16,
            mode,
            data: px.repeat(len),
            vector: None,
        })
    }

    /// Canvas dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Color mode the canvas is persisted with.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Straight-alpha pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.flush();
        let i = self.index(x as usize, y as usize);
        let px = &self.data[i..i + 4];
        Some(Rgba8::from_premul([px[0], px[1], px[2], px[3]]))
    }

    /// Premultiplied RGBA8 bytes with all pending draws applied.
    pub fn premul_bytes(&mut self) -> &[u8] {
        self.flush();
        &self.data
    }

    /// Consume the canvas into straight-alpha bytes.
    pub fn into_frame(mut self) -> FrameRgba {
        self.flush();
        let mut data = std::mem::take(&mut self.data);
        for px in data.chunks_exact_mut(4) {
            let c = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        FrameRgba {
            width: self.size.width,
            height: self.size.height,
            mode: self.mode,
            data,
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * (self.size.width as usize) + x) * 4
    }

    // Direct pixel writes.

    /// Replace the pixel at `(x, y)` with `color`. Out-of-bounds writes are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return;
        }
        self.flush();
        let i = self.index(x as usize, y as usize);
        self.data[i..i + 4].copy_from_slice(&color.to_premul());
    }

    /// Fill `rect`; opaque colors replace pixels, translucent colors blend source-over.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba8) {
        if color.a == 255 {
            self.replace_rect(rect, color);
        } else {
            self.blend_rect(rect, color);
        }
    }

    /// Draw a `width`-pixel border growing inward from the edges of `rect`.
    pub fn outline_rect(&mut self, rect: PixelRect, color: Rgba8, width: u32) {
        let w = width as i32;
        if w <= 0 || rect.is_empty() {
            return;
        }
        if rect.inset(w).is_empty() {
            self.fill_rect(rect, color);
            return;
        }
        let PixelRect { x0, y0, x1, y1 } = rect;
        self.fill_rect(PixelRect::new(x0, y0, x1, y0 + w - 1), color);
        self.fill_rect(PixelRect::new(x0, y1 - w + 1, x1, y1), color);
        self.fill_rect(PixelRect::new(x0, y0 + w, x0 + w - 1, y1 - w), color);
        self.fill_rect(PixelRect::new(x1 - w + 1, y0 + w, x1, y1 - w), color);
    }

    /// Fill `rect` then draw its border, the order a filled-and-outlined box is drawn in.
    pub fn rect_with_outline(
        &mut self,
        rect: PixelRect,
        fill: Rgba8,
        outline: Rgba8,
        width: u32,
    ) {
        self.fill_rect(rect, fill);
        self.outline_rect(rect, outline, width);
    }

    fn replace_rect(&mut self, rect: PixelRect, color: Rgba8) {
        let Some((xs, ys)) = rect.clip(self.size) else {
            return;
        };
        self.flush();
        let px = color.to_premul();
        for y in ys {
            let start = self.index(xs.start, y);
            let end = self.index(xs.end, y);
            for d in self.data[start..end].chunks_exact_mut(4) {
                d.copy_from_slice(&px);
            }
        }
    }

    fn blend_rect(&mut self, rect: PixelRect, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let Some((xs, ys)) = rect.clip(self.size) else {
            return;
        };
        self.flush();
        let src = color.to_premul();
        for y in ys {
            let start = self.index(xs.start, y);
            let end = self.index(xs.end, y);
            for d in self.data[start..end].chunks_exact_mut(4) {
                let out = over([d[0], d[1], d[2], d[3]], src, 1.0);
                d.copy_from_slice(&out);
            }
        }
    }

    /// Copy rows `[y, y + height)` to horizontal offset `dx`, reading a snapshot of the band.
    ///
    /// Pixels shifted past either edge are dropped; destination pixels not covered by the shifted
    /// band keep their current value.
    pub fn shift_rows(&mut self, y: u32, height: u32, dx: i32) {
        let h = self.size.height;
        if y >= h || height == 0 {
            return;
        }
        let y_end = y.saturating_add(height).min(h) as usize;
        let w = self.size.width as i64;
        let dx = i64::from(dx);
        if dx.abs() >= w {
            return;
        }
        self.flush();

        let start = self.index(0, y as usize);
        let end = self.index(0, y_end);
        let band = self.data[start..end].to_vec();

        let (src_x0, dst_x0, len) = if dx >= 0 {
            (0usize, dx as usize, (w - dx) as usize)
        } else {
            ((-dx) as usize, 0usize, (w + dx) as usize)
        };
        let row_bytes = (w as usize) * 4;
        for (row, src_row) in band.chunks_exact(row_bytes).enumerate() {
            let dst = self.index(dst_x0, y as usize + row);
            self.data[dst..dst + len * 4]
                .copy_from_slice(&src_row[src_x0 * 4..(src_x0 + len) * 4]);
        }
    }

    // Vector draws.

    fn vector_ctx(&mut self) -> &mut vello_cpu::RenderContext {
        let (w, h) = self.size_u16;
        let batch = self.vector.get_or_insert_with(|| VectorBatch {
            ctx: vello_cpu::RenderContext::new(w, h),
            scratch: vello_cpu::Pixmap::new(w, h),
            pending: false,
        });
        batch.pending = true;
        &mut batch.ctx
    }

    /// Composite pending vector draws onto the buffer.
    pub fn flush(&mut self) {
        let Some(batch) = self.vector.as_mut() else {
            return;
        };
        if !batch.pending {
            return;
        }
        batch.ctx.flush();
        batch.scratch.data_as_u8_slice_mut().fill(0);
        batch.ctx.render_to_pixmap(&mut batch.scratch);
        for (d, s) in self
            .data
            .chunks_exact_mut(4)
            .zip(batch.scratch.data_as_u8_slice().chunks_exact(4))
        {
            if s[3] == 0 {
                continue;
            }
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
            d.copy_from_slice(&out);
        }
        batch.ctx.reset();
        batch.pending = false;
    }

    fn fill_shape(&mut self, shape: &impl kurbo::Shape, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let path = shape_to_cpu(shape);
        let ctx = self.vector_ctx();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint(color));
        ctx.fill_path(&path);
    }

    fn stroke_shape(&mut self, shape: &impl kurbo::Shape, color: Rgba8, width: f64) {
        if color.a == 0 || width <= 0.0 {
            return;
        }
        let path = shape_to_cpu(shape);
        let ctx = self.vector_ctx();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint(color));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        ctx.stroke_path(&path);
    }

    /// Fill the ellipse inscribed in `bbox`.
    pub fn fill_ellipse(&mut self, bbox: PixelRect, color: Rgba8) {
        if bbox.is_empty() {
            return;
        }
        self.fill_shape(&kurbo::Ellipse::from_rect(bbox.to_kurbo()), color);
    }

    /// Outline the ellipse inscribed in `bbox` with a ring growing inward.
    pub fn outline_ellipse(&mut self, bbox: PixelRect, color: Rgba8, width: u32) {
        if bbox.is_empty() || width == 0 {
            return;
        }
        let half = f64::from(width) / 2.0;
        let b = bbox.to_kurbo();
        let r = kurbo::Rect::new(b.x0 + half, b.y0 + half, b.x1 - half, b.y1 - half);
        if r.width() <= 0.0 || r.height() <= 0.0 {
            self.fill_ellipse(bbox, color);
            return;
        }
        self.stroke_shape(&kurbo::Ellipse::from_rect(r), color, f64::from(width));
    }

    /// Fill the closed polygon through `points`.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = kurbo::BezPath::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
        self.fill_shape(&path, color);
    }

    /// Straight line between pixel centers of `from` and `to`.
    pub fn line(&mut self, from: Point, to: Point, color: Rgba8, width: u32) {
        let center = kurbo::Vec2::new(0.5, 0.5);
        let line = kurbo::Line::new(from + center, to + center);
        self.stroke_shape(&line, color, f64::from(width.max(1)));
    }

    // Text.

    fn draw_laid_text(&mut self, laid: &LaidOutText, x: f32, y: f32, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let ctx = self.vector_ctx();
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(x),
            f64::from(y),
        )));
        ctx.set_paint(paint(color));
        for line in laid.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Line-relative x and baseline y.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&laid.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Draw `text` at `at` using the anchor policy of `style`.
    pub fn text(
        &mut self,
        ts: &mut Typesetter,
        at: (i32, i32),
        text: &str,
        style: &TextStyle,
        color: Rgba8,
    ) -> FramecastResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let laid = ts.layout(text, style, color)?;
        let (x, y) = style
            .anchor
            .origin(at.0 as f32, at.1 as f32, laid.width(), laid.height());
        self.draw_laid_text(&laid, x, y, color);
        Ok(())
    }

    /// Draw `text` with a halo: eight passes in `outline` at `±OUTLINE_OFFSET`, then the fill.
    ///
    /// With `outline = None` only the fill pass is drawn.
    pub fn text_outlined(
        &mut self,
        ts: &mut Typesetter,
        at: (i32, i32),
        text: &str,
        style: &TextStyle,
        fill: Rgba8,
        outline: Option<Rgba8>,
    ) -> FramecastResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let laid = ts.layout(text, style, fill)?;
        let (x, y) = style
            .anchor
            .origin(at.0 as f32, at.1 as f32, laid.width(), laid.height());

        if let Some(outline) = outline {
            let k = OUTLINE_OFFSET as f32;
            for dx in [-k, 0.0, k] {
                for dy in [-k, 0.0, k] {
                    if dx == 0.0 && dy == 0.0 {
                        continue;
                    }
                    self.draw_laid_text(&laid, x + dx, y + dy, outline);
                }
            }
        }
        self.draw_laid_text(&laid, x, y, fill);
        Ok(())
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn shape_to_cpu(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

impl TryFrom<&FrameRgba> for image::DynamicImage {
    type Error = FramecastError;

    fn try_from(f: &FrameRgba) -> FramecastResult<Self> {
        let rgba = image::RgbaImage::from_raw(f.width, f.height, f.data.clone())
            .ok_or_else(|| FramecastError::encode("frame byte len mismatch"))?;
        Ok(match f.mode {
            ColorMode::Rgba => image::DynamicImage::ImageRgba8(rgba),
            ColorMode::Rgb => {
                image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(rgba).to_rgb8())
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
