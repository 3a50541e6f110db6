//! Landscape slideshow frames: a title, a row of personality icons, body lines, an optional
//! command panel and a frame-number watermark.

use crate::assets::fonts::FontRole;
use crate::foundation::core::{PixelRect, Rgba8};
use crate::foundation::error::FramecastResult;
use crate::render::canvas::Canvas;
use crate::render::text::{Anchor, TextStyle};
use crate::scene::studio::Studio;

/// Frame background.
pub const BG: Rgba8 = Rgba8::rgb(20, 20, 30);
/// Title color.
pub const ACCENT: Rgba8 = Rgba8::rgb(100, 150, 255);
/// Body and icon color.
pub const TEXT: Rgba8 = Rgba8::WHITE;
/// Command panel background.
pub const CODE_BG: Rgba8 = Rgba8::rgb(30, 30, 40);
/// Command text color.
pub const CODE_TEXT: Rgba8 = Rgba8::rgb(100, 255, 100);
/// Watermark color.
pub const WATERMARK: Rgba8 = Rgba8::rgb(100, 100, 100);

/// Glyphs drawn in the icon row of every frame.
pub const ICONS: [&str; 6] = ["🐾", "🎭", "🗡️", "🎸", "🧠", "🧠"];

const TITLE_Y: i32 = 100;
const ICON_X0: i32 = 200;
const ICON_STEP: i32 = 250;
const ICON_Y: i32 = 200;
const LINES_Y0: i32 = 350;
const LINE_STEP: i32 = 60;
const PANEL_INSET_X: i32 = 300;
const PANEL_Y: i32 = 600;
const PANEL_HEIGHT: i32 = 200;
const WATERMARK_X: i32 = 50;
const WATERMARK_FROM_BOTTOM: i32 = 50;

/// Bounds of the command panel on a canvas `width` pixels wide.
pub fn code_panel(width: u32) -> PixelRect {
    PixelRect::new(
        PANEL_INSET_X,
        PANEL_Y,
        width as i32 - PANEL_INSET_X,
        PANEL_Y + PANEL_HEIGHT,
    )
}

/// Compose one deck frame. An empty `code` string draws no panel.
#[tracing::instrument(level = "debug", skip(studio, lines, code))]
pub fn create_frame(
    studio: &mut Studio,
    frame_num: u32,
    title: &str,
    lines: &[&str],
    code: Option<&str>,
) -> FramecastResult<Canvas> {
    let mut canvas = studio.canvas(BG)?;
    let ts = &mut studio.typesetter;
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    let title_style = TextStyle::new(FontRole::Title, 80.0).anchored(Anchor::MiddleTop);
    canvas.text(ts, (w / 2, TITLE_Y), title, &title_style, ACCENT)?;

    let icon_style = TextStyle::new(FontRole::Main, 48.0);
    for (i, icon) in ICONS.iter().enumerate() {
        let x = ICON_X0 + ICON_STEP * i as i32;
        canvas.text(ts, (x, ICON_Y), icon, &icon_style, TEXT)?;
    }

    let line_style = TextStyle::new(FontRole::Main, 48.0).anchored(Anchor::MiddleTop);
    let mut y = LINES_Y0;
    for line in lines {
        canvas.text(ts, (w / 2, y), line, &line_style, TEXT)?;
        y += LINE_STEP;
    }

    if let Some(code) = code.filter(|c| !c.is_empty()) {
        canvas.fill_rect(code_panel(canvas.width()), CODE_BG);
        let code_style = TextStyle::new(FontRole::Code, 36.0).anchored(Anchor::MiddleMiddle);
        let at = (w / 2, PANEL_Y + PANEL_HEIGHT / 2);
        canvas.text(ts, at, code, &code_style, CODE_TEXT)?;
    }

    let mark_style = TextStyle::new(FontRole::Small, 32.0);
    let at = (WATERMARK_X, h - WATERMARK_FROM_BOTTOM);
    canvas.text(ts, at, &format!("Frame {frame_num}"), &mark_style, WATERMARK)?;

    Ok(canvas)
}

/// One row of the deck table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Title drawn at the top.
    pub title: &'static str,
    /// Body lines, top to bottom. Empty strings leave a gap.
    pub lines: &'static [&'static str],
    /// Optional command shown in the panel.
    pub code: Option<&'static str>,
}

const INSTALL: &str = "npm install -g mcp-six-personalities";

/// The sixteen deck frames in presentation order. Frame numbers start at 1.
pub const DECK: [Slide; 16] = [
    Slide {
        title: "MCP Six Personalities",
        lines: &[
            "Transform Your Claude Desktop Experience",
            "Six Unique AI Perspectives",
            "One Powerful Collaboration Tool",
        ],
        code: None,
    },
    Slide {
        title: "Why Six Personalities?",
        lines: &[
            "❌ Single perspective = Limited solutions",
            "❌ One viewpoint = Blind spots",
            "✅ Six perspectives = Comprehensive analysis",
            "✅ Multiple viewpoints = Creative solutions",
        ],
        code: None,
    },
    Slide {
        title: "Easy Installation",
        lines: &[
            "Install globally with NPM:",
            "",
            "One simple command to get started!",
        ],
        code: Some(INSTALL),
    },
    Slide {
        title: "Simple Configuration",
        lines: &[
            "Add to Claude Desktop config:",
            "",
            "Just restart Claude and you're ready!",
        ],
        code: Some(r#"{"mcpServers": {"six-personalities": {...}}}"#),
    },
    Slide {
        title: "🐾 Meet Neko-Arc",
        lines: &[
            "Technical Implementation Expert",
            "Handles core development tasks",
            "Speaks: 'Nyaa~!', 'desu~', '*purrs*'",
            "Your kawaii coding companion!",
        ],
        code: None,
    },
    Slide {
        title: "🎭 Meet Mario Gallo Bestino",
        lines: &[
            "Creative Direction & UI/UX",
            "Theatrical approach to design",
            "Speaks: 'Magnifique!', 'Bravissimo!'",
            "Makes every interface a masterpiece!",
        ],
        code: None,
    },
    Slide {
        title: "🗡️ Meet Noel",
        lines: &[
            "Quality Assurance & Testing",
            "Critical analysis and debugging",
            "Speaks: '*smirks*', 'Predictable...'",
            "Ensures code quality and reliability!",
        ],
        code: None,
    },
    Slide {
        title: "🎸 Meet Glam Americano",
        lines: &[
            "Security & Ethics (Spanish)",
            "Street-smart problem solving",
            "Speaks: '¡Oye, weon!', '¡Increíble!'",
            "Keeps your code secure and ethical!",
        ],
        code: None,
    },
    Slide {
        title: "🧠 Meet Dr. Hannibal Lecter",
        lines: &[
            "Deep Forensic Analysis",
            "Pattern recognition expert",
            "Speaks: 'Quid pro quo...', 'Fascinating...'",
            "Analyzes complex architectures!",
        ],
        code: None,
    },
    Slide {
        title: "🧠 Meet Tetora",
        lines: &[
            "Multi-Perspective Integration",
            "Handles identity management",
            "Speaks: '[Fragment]:', 'Multiple views...'",
            "Synthesizes different viewpoints!",
        ],
        code: None,
    },
    Slide {
        title: "Use Case: Code Review",
        lines: &[
            "All six personalities analyze your code:",
            "🐾 Technical optimization",
            "🎭 User experience improvements",
            "🗡️ Quality and testing gaps",
            "🎸 Security vulnerabilities",
            "🧠 Architecture patterns",
        ],
        code: None,
    },
    Slide {
        title: "Use Case: Creative Problem Solving",
        lines: &[
            "Six unique approaches to every challenge:",
            "Technical + Creative + Critical",
            "Security + Analysis + Integration",
            "Get comprehensive solutions!",
        ],
        code: None,
    },
    Slide {
        title: "Key Benefits",
        lines: &[
            "✨ 6 unique perspectives on every problem",
            "✨ Comprehensive analysis and solutions",
            "✨ Built-in quality assurance",
            "✨ Entertainment while coding",
            "✨ Never miss important considerations",
        ],
        code: None,
    },
    Slide {
        title: "Join the Community",
        lines: &[
            "📦 NPM: mcp-six-personalities",
            "🐙 GitHub: Open source & contributions welcome",
            "💬 Issues & feedback appreciated",
            "⭐ Star the repo if you like it!",
        ],
        code: None,
    },
    Slide {
        title: "Install Now!",
        lines: &[
            "Transform your Claude Desktop today!",
            "",
            "Get six AI personalities working for you!",
        ],
        code: Some(INSTALL),
    },
    Slide {
        title: "Thanks for Watching!",
        lines: &[
            "Like 👍 Subscribe 🔔 Share 📤",
            "",
            "See you in the next video!",
            "🐾🎭🗡️🎸🧠🧠",
        ],
        code: None,
    },
];

#[cfg(test)]
#[path = "../../tests/unit/scene/deck.rs"]
mod tests;
