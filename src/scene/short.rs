//! Vertical retro-TV short: ten independent scenes drawn with outlined captions and TV
//! effects.
//!
//! Positions are absolute offsets derived from the canvas size, so smaller canvases render the
//! same layout with more of it clipped.

use rand::Rng;

use crate::assets::color::Palette;
use crate::assets::fonts::FontRole;
use crate::effects::{gradient_fill, scan_lines, static_noise, vhs_glitch};
use crate::foundation::core::{PixelRect, Point, Rgba8, pt};
use crate::foundation::error::FramecastResult;
use crate::render::canvas::Canvas;
use crate::render::text::{TextStyle, Typesetter};
use crate::scene::studio::Studio;

/// Builds one finished scene.
pub type SceneFn = fn(&mut Studio) -> FramecastResult<Canvas>;

/// Scenes in playback order, keyed by the slug used in their file names.
pub const SCENES: [(&str, SceneFn); 10] = [
    ("001_tv_logo", tv_logo),
    ("002_news_desk", news_desk),
    ("003_explosion", explosion),
    ("004_npm_install", npm_install),
    ("005_split_screen", split_screen),
    ("006_collaboration", collaboration),
    ("007_features", features),
    ("008_battle_mode", battle_mode),
    ("009_download_counter", download_counter),
    ("010_cta", cta),
];

/// Palette colors the scenes draw with.
#[derive(Clone, Copy, Debug)]
struct Tv {
    neko_purple: Rgba8,
    mario_gold: Rgba8,
    noel_blue: Rgba8,
    glam_red: Rgba8,
    hannibal_gray: Rgba8,
    tetora_green: Rgba8,
    emergency_red: Rgba8,
    electric_blue: Rgba8,
    hot_pink: Rgba8,
    lime_green: Rgba8,
    black: Rgba8,
    white: Rgba8,
}

impl Tv {
    fn from_palette(p: &Palette) -> FramecastResult<Self> {
        Ok(Self {
            neko_purple: p.get("neko_purple")?,
            mario_gold: p.get("mario_gold")?,
            noel_blue: p.get("noel_blue")?,
            glam_red: p.get("glam_red")?,
            hannibal_gray: p.get("hannibal_gray")?,
            tetora_green: p.get("tetora_green")?,
            emergency_red: p.get("emergency_red")?,
            electric_blue: p.get("electric_blue")?,
            hot_pink: p.get("hot_pink")?,
            lime_green: p.get("lime_green")?,
            black: p.get("black")?,
            white: p.get("white")?,
        })
    }
}

const MATRIX_GLYPHS: [&str; 5] = ["0", "1", "ネ", "コ", "猫"];
const MATRIX_GLYPH_PX: f32 = 12.0;

fn dims(c: &Canvas) -> (i32, i32) {
    (c.width() as i32, c.height() as i32)
}

/// Outlined display caption anchored at its top-left corner.
fn say(
    c: &mut Canvas,
    ts: &mut Typesetter,
    at: (i32, i32),
    text: &str,
    fill: Rgba8,
    outline: Option<Rgba8>,
    size_px: f32,
) -> FramecastResult<()> {
    let style = TextStyle::new(FontRole::Display, size_px);
    c.text_outlined(ts, at, text, &style, fill, outline)
}

/// Point at `degrees` on the ellipse with radii `(rx, ry)` around `(cx, cy)`, truncated.
fn polar(cx: i32, cy: i32, rx: f64, ry: f64, degrees: i32) -> (i32, i32) {
    let a = f64::from(degrees).to_radians();
    (cx + (rx * a.cos()) as i32, cy + (ry * a.sin()) as i32)
}

/// Static, the channel logo and a breaking-news banner.
pub fn tv_logo(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.black)?;
    let (w, h) = dims(&c);

    static_noise(&mut c, 0.5, &mut s.rng)?;

    let ts = &mut s.typesetter;
    let ink = Some(tv.black);
    say(&mut c, ts, (w / 2 - 300, h / 2 - 100), "NEKO-ARC", tv.hot_pink, ink, 120.0)?;
    say(&mut c, ts, (w / 2 - 100, h / 2 + 50), "TV", tv.electric_blue, ink, 150.0)?;

    c.fill_rect(PixelRect::new(0, h - 300, w, h - 100), tv.emergency_red);
    say(&mut c, ts, (50, h - 250), "BREAKING NEWS!", tv.white, ink, 80.0)?;

    scan_lines(&mut c);
    vhs_glitch(&mut c, 3, &mut s.rng);
    Ok(c)
}

/// Anchor cat behind a desk between two banners.
pub fn news_desk(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.neko_purple)?;
    let (w, h) = dims(&c);
    gradient_fill(&mut c, tv.neko_purple, tv.mario_gold);

    c.fill_rect(PixelRect::new(0, h - 600, w, h), tv.hannibal_gray);

    let cx = w / 2;
    c.fill_ellipse(PixelRect::new(cx - 150, h - 900, cx + 150, h - 600), tv.neko_purple);
    c.fill_polygon(
        &[pt(cx - 150, h - 850), pt(cx - 100, h - 950), pt(cx - 50, h - 850)],
        tv.neko_purple,
    );
    c.fill_polygon(
        &[pt(cx + 50, h - 850), pt(cx + 100, h - 950), pt(cx + 150, h - 850)],
        tv.neko_purple,
    );

    let ts = &mut s.typesetter;
    let ink = Some(tv.black);
    c.fill_rect(PixelRect::new(0, 100, w, 300), tv.emergency_red);
    say(&mut c, ts, (50, 150), "🚨 BREAKING 🚨", tv.white, ink, 80.0)?;

    c.fill_rect(PixelRect::new(0, h - 200, w, h), tv.black);
    say(&mut c, ts, (50, h - 150), "NEW AI REVOLUTION", tv.lime_green, ink, 60.0)?;

    scan_lines(&mut c);
    Ok(c)
}

/// Gold rays and concentric rings behind a BOOM caption.
pub fn explosion(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.emergency_red)?;
    let (w, h) = dims(&c);
    let (cx, cy) = (w / 2, h / 2);

    for angle in (0..360).step_by(15) {
        let (ex, ey) = polar(cx, cy, 1000.0, 1000.0, angle);
        c.fill_polygon(
            &[pt(cx, cy), pt(ex - 50, ey - 50), pt(ex + 50, ey + 50)],
            tv.mario_gold,
        );
    }

    for r in (1..=10).rev().map(|k| k * 50) {
        let color = if r % 100 == 0 {
            tv.mario_gold
        } else {
            tv.emergency_red
        };
        c.fill_ellipse(PixelRect::around(cx, cy, r), color);
    }

    let ts = &mut s.typesetter;
    say(&mut c, ts, (cx - 200, cy - 100), "💥BOOM!💥", tv.white, Some(tv.black), 120.0)?;

    vhs_glitch(&mut c, 10, &mut s.rng);
    Ok(c)
}

/// Matrix rain behind a terminal typing the install command.
pub fn npm_install(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.black)?;
    let (w, h) = dims(&c);
    let ts = &mut s.typesetter;

    let rain = TextStyle::new(FontRole::Small, MATRIX_GLYPH_PX);
    for x in (0..w).step_by(30) {
        for y in (0..h).step_by(40) {
            if !s.rng.random_bool(0.7) {
                continue;
            }
            let glyph = MATRIX_GLYPHS[s.rng.random_range(0..MATRIX_GLYPHS.len())];
            let fade = (255.0 * (1.0 - f64::from(y) / f64::from(h))) as u8;
            c.text(ts, (x, y), glyph, &rain, Rgba8::rgba(0, 255, 0, fade))?;
        }
    }

    let mid = h / 2;
    c.fill_rect(PixelRect::new(50, mid - 200, w - 50, mid + 200), Rgba8::rgba(20, 20, 20, 200));
    c.fill_rect(PixelRect::new(50, mid - 200, w - 50, mid - 150), tv.hannibal_gray);

    let ink = Some(tv.black);
    say(&mut c, ts, (100, mid - 100), "$ npm install -g", tv.lime_green, ink, 50.0)?;
    say(&mut c, ts, (100, mid), "mcp-six-personalities", tv.electric_blue, ink, 50.0)?;

    if s.rng.random_bool(0.5) {
        c.fill_rect(PixelRect::new(w - 150, mid, w - 130, mid + 50), tv.lime_green);
    }

    scan_lines(&mut c);
    Ok(c)
}

/// Six personalities in a 2x3 grid with their catchphrases.
pub fn split_screen(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.black)?;
    let (w, h) = dims(&c);
    let ts = &mut s.typesetter;

    let cast = [
        ("NEKO", tv.neko_purple, "I code!"),
        ("MARIO", tv.mario_gold, "I create!"),
        ("NOEL", tv.noel_blue, "I debug!"),
        ("GLAM", tv.glam_red, "¡Yo rockeo!"),
        ("HANNIBAL", tv.hannibal_gray, "I analyze..."),
        ("TETORA", tv.tetora_green, "[We multiply!]"),
    ];
    let (cw, ch) = (w / 2, h / 3);
    let ink = Some(tv.black);

    for (i, (name, color, quote)) in cast.into_iter().enumerate() {
        let x = (i as i32 % 2) * cw;
        let y = (i as i32 / 2) * ch;
        let cell = PixelRect::new(x + 5, y + 5, x + cw - 5, y + ch - 5);
        c.rect_with_outline(cell, color, tv.white, 3);
        say(&mut c, ts, (x + 50, y + 50), name, tv.white, ink, 40.0)?;
        say(&mut c, ts, (x + 50, y + ch - 100), quote, tv.white, ink, 30.0)?;
    }

    c.line(pt(w / 2, 0), pt(w / 2, h), tv.white, 5);
    c.line(pt(0, h / 3), pt(w, h / 3), tv.white, 5);
    c.line(pt(0, 2 * h / 3), pt(w, 2 * h / 3), tv.white, 5);

    vhs_glitch(&mut c, 2, &mut s.rng);
    Ok(c)
}

/// Fading energy rings around a merge point and a full power bar.
pub fn collaboration(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.electric_blue)?;
    let (w, h) = dims(&c);
    gradient_fill(&mut c, tv.electric_blue, tv.hot_pink);
    let (cx, cy) = (w / 2, h / 2);

    for r in (50..500).step_by(50) {
        let fade = (255.0 * (1.0 - f64::from(r) / 500.0)) as u8;
        c.outline_ellipse(PixelRect::around(cx, cy, r), tv.white.with_alpha(fade), 10);
    }
    c.fill_ellipse(PixelRect::around(cx, cy, 100), tv.white);

    let ts = &mut s.typesetter;
    let halo = Some(tv.white);
    say(&mut c, ts, (cx - 400, 200), "ULTIMATE", tv.emergency_red, halo, 100.0)?;
    say(&mut c, ts, (cx - 450, 350), "COLLABORATION", tv.emergency_red, halo, 80.0)?;

    let bar = PixelRect::new(100, h - 400, w - 100, h - 300);
    c.outline_rect(bar, tv.white, 5);
    c.fill_rect(bar, tv.lime_green);
    say(&mut c, ts, (cx - 200, h - 380), "POWER: 9999", tv.white, Some(tv.black), 50.0)?;

    scan_lines(&mut c);
    vhs_glitch(&mut c, 5, &mut s.rng);
    Ok(c)
}

/// Arcade cabinet feature list with a blinking INSERT COIN.
pub fn features(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.hannibal_gray)?;
    let (w, h) = dims(&c);
    gradient_fill(&mut c, tv.hannibal_gray, tv.neko_purple);
    let ts = &mut s.typesetter;
    let ink = Some(tv.black);

    c.outline_rect(PixelRect::new(50, 50, w - 50, h - 50), tv.mario_gold, 10);
    say(&mut c, ts, (w / 2 - 250, 150), "FEATURES", tv.mario_gold, ink, 100.0)?;

    let items = [
        "✅ 6 UNIQUE AIs",
        "✅ INSTANT SETUP",
        "✅ 100% FREE",
        "✅ OPEN SOURCE",
        "✅ PRODUCTION READY",
    ];
    let mut y = 400;
    for item in items {
        c.fill_ellipse(PixelRect::new(150, y, 230, y + 80), tv.mario_gold);
        say(&mut c, ts, (300, y + 10), item, tv.white, ink, 60.0)?;
        y += 150;
    }

    if s.rng.random_bool(0.5) {
        say(&mut c, ts, (w / 2 - 200, h - 200), "INSERT COIN", tv.emergency_red, ink, 60.0)?;
    }

    scan_lines(&mut c);
    Ok(c)
}

/// Fighting-game versus screen over random lightning.
pub fn battle_mode(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.black)?;
    let (w, h) = dims(&c);

    for _ in 0..20 {
        let top = s.rng.random_range(0..=w);
        let bottom = s.rng.random_range(0..=w);
        let width = s.rng.random_range(1..=5u32);
        c.line(pt(top, 0), pt(bottom, h), tv.electric_blue, width);
    }

    let ts = &mut s.typesetter;
    let (ink, halo) = (Some(tv.black), Some(tv.white));
    let (cx, cy) = (w / 2, h / 2);
    say(&mut c, ts, (cx - 100, cy - 100), "VS", tv.emergency_red, halo, 200.0)?;

    c.fill_rect(PixelRect::new(50, cy - 400, 450, cy - 100), tv.noel_blue);
    say(&mut c, ts, (100, cy - 350), "NOEL", tv.white, ink, 60.0)?;

    c.fill_rect(PixelRect::new(w - 450, cy + 100, w - 50, cy + 400), tv.glam_red);
    say(&mut c, ts, (w - 400, cy + 150), "GLAM", tv.white, ink, 60.0)?;

    say(&mut c, ts, (50, cy + 500), "\"Predictable...\"", tv.noel_blue, halo, 50.0)?;
    say(&mut c, ts, (w - 500, cy - 500), "\"¡Cállate weon!\"", tv.glam_red, halo, 50.0)?;

    say(&mut c, ts, (cx - 150, h - 300), "FIGHT!", tv.mario_gold, ink, 120.0)?;

    vhs_glitch(&mut c, 8, &mut s.rng);
    Ok(c)
}

/// Download counter with a rising arrow.
pub fn download_counter(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.black)?;
    let (w, h) = dims(&c);
    gradient_fill(&mut c, tv.black, tv.tetora_green);
    let ts = &mut s.typesetter;
    let ink = Some(tv.black);
    let (cx, cy) = (w / 2, h / 2);

    c.fill_rect(PixelRect::new(cx - 200, 200, cx + 200, 400), tv.emergency_red);
    say(&mut c, ts, (cx - 100, 250), "npm", tv.white, ink, 100.0)?;

    let counter = PixelRect::new(100, cy - 150, w - 100, cy + 150);
    c.rect_with_outline(counter, tv.black, tv.lime_green, 5);
    say(&mut c, ts, (cx - 300, cy - 50), "999,999,999", tv.lime_green, ink, 80.0)?;
    say(&mut c, ts, (cx - 200, cy - 250), "DOWNLOADS", tv.white, ink, 60.0)?;

    let arrow: [Point; 7] = [
        pt(w - 200, cy),
        pt(w - 150, cy - 100),
        pt(w - 180, cy - 80),
        pt(w - 160, cy - 150),
        pt(w - 140, cy - 80),
        pt(w - 170, cy - 100),
        pt(w - 120, cy),
    ];
    c.fill_polygon(&arrow, tv.lime_green);

    say(&mut c, ts, (cx - 250, h - 400), "GOING VIRAL!", tv.emergency_red, Some(tv.white), 80.0)?;

    scan_lines(&mut c);
    Ok(c)
}

/// Glowing INSTALL NOW call to action with arrows pointing at the command box.
pub fn cta(s: &mut Studio) -> FramecastResult<Canvas> {
    let tv = Tv::from_palette(&s.palette)?;
    let mut c = s.canvas(tv.hot_pink)?;
    let (w, h) = dims(&c);
    gradient_fill(&mut c, tv.hot_pink, tv.electric_blue);
    let (cx, cy) = (w / 2, h / 2);

    for r in (100..1000).step_by(100) {
        let fade = (100.0 * (1.0 - f64::from(r) / 1000.0)) as u8;
        c.outline_ellipse(PixelRect::around(cx, cy, r), tv.white.with_alpha(fade), 20);
    }

    let ts = &mut s.typesetter;
    let (ink, halo) = (Some(tv.black), Some(tv.white));

    for glow in [20, 15, 10, 5] {
        let alpha = (255 * glow / 20) as u8;
        let at = (cx - 300 - glow / 2, 300 - glow / 2);
        let yellow = Rgba8::rgba(255, 255, 0, alpha);
        say(&mut c, ts, at, "INSTALL", yellow, None, (120 + glow) as f32)?;
    }
    say(&mut c, ts, (cx - 300, 300), "INSTALL", tv.emergency_red, halo, 120.0)?;
    say(&mut c, ts, (cx - 150, 500), "NOW!", tv.emergency_red, halo, 120.0)?;

    c.rect_with_outline(PixelRect::new(50, cy - 100, w - 50, cy + 200), tv.black, tv.white, 10);
    say(&mut c, ts, (100, cy - 50), "npm install -g", tv.lime_green, ink, 60.0)?;
    say(&mut c, ts, (100, cy + 50), "mcp-six-personalities", tv.electric_blue, ink, 55.0)?;

    for angle in (0..360).step_by(45) {
        let (x, y) = polar(cx, cy + 50, 600.0, 300.0, angle);
        c.fill_polygon(&[pt(x, y), pt(x - 30, y - 30), pt(x - 30, y + 30)], tv.mario_gold);
    }

    say(&mut c, ts, (cx - 400, h - 300), "LIKE & SUBSCRIBE!", tv.emergency_red, halo, 70.0)?;
    say(&mut c, ts, (cx - 250, h - 150), "Nyaa~! 🐾", tv.neko_purple, halo, 80.0)?;

    scan_lines(&mut c);
    vhs_glitch(&mut c, 10, &mut s.rng);
    Ok(c)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/short.rs"]
mod tests;
