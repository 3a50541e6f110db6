//! Font resolution for the text roles used by frame layouts.
//!
//! Each role has an ordered list of preferred font files. When none of them can be read, the
//! role falls back to a face picked from the system font database, so a missing asset never
//! reaches the caller as an error unless the host has no fonts at all.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FramecastError, FramecastResult};

/// Typographic role a piece of text is drawn with.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Bold sans used for deck titles.
    Title,
    /// Regular sans used for body lines and icons.
    Main,
    /// Monospace used for command panels.
    Code,
    /// Regular sans used for watermarks.
    Small,
    /// Bold sans used for outlined TV captions.
    Display,
}

impl FontRole {
    /// Every role, in resolution order.
    pub const ALL: [FontRole; 5] = [
        FontRole::Title,
        FontRole::Main,
        FontRole::Code,
        FontRole::Small,
        FontRole::Display,
    ];

    fn is_bold(self) -> bool {
        matches!(self, FontRole::Title | FontRole::Display)
    }

    fn fallback_families(self) -> &'static [&'static str] {
        match self {
            FontRole::Code => &["DejaVu Sans Mono", "Liberation Mono", "Noto Sans Mono"],
            _ => &["DejaVu Sans", "Liberation Sans", "Noto Sans", "Arial"],
        }
    }
}

/// Preferred font files per role plus extra directories searched by the fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Candidates for [`FontRole::Title`].
    pub title: Vec<PathBuf>,
    /// Candidates for [`FontRole::Main`].
    pub main: Vec<PathBuf>,
    /// Candidates for [`FontRole::Code`].
    pub code: Vec<PathBuf>,
    /// Candidates for [`FontRole::Small`].
    pub small: Vec<PathBuf>,
    /// Candidates for [`FontRole::Display`].
    pub display: Vec<PathBuf>,
    /// Directories loaded into the fallback database in addition to system fonts.
    pub extra_dirs: Vec<PathBuf>,
}

const LIBERATION: &str = "/usr/share/fonts/truetype/liberation";
const DEJAVU: &str = "/usr/share/fonts/truetype/dejavu";

impl Default for FontConfig {
    fn default() -> Self {
        let lib = |f: &str| Path::new(LIBERATION).join(f);
        let dejavu = |f: &str| Path::new(DEJAVU).join(f);
        Self {
            title: vec![lib("LiberationSans-Bold.ttf")],
            main: vec![lib("LiberationSans-Regular.ttf")],
            code: vec![lib("LiberationMono-Regular.ttf")],
            small: vec![lib("LiberationSans-Regular.ttf")],
            display: vec![dejavu("DejaVuSans-Bold.ttf")],
            extra_dirs: Vec::new(),
        }
    }
}

impl FontConfig {
    /// Preferred candidate files for `role`.
    pub fn candidates(&self, role: FontRole) -> &[PathBuf] {
        match role {
            FontRole::Title => &self.title,
            FontRole::Main => &self.main,
            FontRole::Code => &self.code,
            FontRole::Small => &self.small,
            FontRole::Display => &self.display,
        }
    }
}

/// Where a resolved face came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// One of the configured candidate files.
    Preferred(PathBuf),
    /// A face chosen from the system font database.
    Fallback {
        /// Family name reported by the database.
        family: String,
    },
}

/// Raw font bytes for one role.
#[derive(Clone, Debug)]
pub struct FontFace {
    pub(crate) bytes: Arc<Vec<u8>>,
    pub(crate) index: u32,
    source: FontSource,
}

impl FontFace {
    /// Font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Face index inside a collection file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Where the face was resolved from.
    pub fn source(&self) -> &FontSource {
        &self.source
    }
}

/// One resolved face per [`FontRole`]. Read-only once built.
#[derive(Clone, Debug)]
pub struct FontSet {
    faces: BTreeMap<FontRole, FontFace>,
}

impl FontSet {
    /// Resolve every role, falling back to system faces for missing files.
    pub fn resolve(cfg: &FontConfig) -> FramecastResult<Self> {
        let mut fallback: Option<usvg::fontdb::Database> = None;
        let mut faces = BTreeMap::new();

        for role in FontRole::ALL {
            let face = match read_first(cfg.candidates(role)) {
                Some((path, bytes)) => {
                    tracing::debug!(?role, path = %path.display(), "font resolved");
                    FontFace {
                        bytes: Arc::new(bytes),
                        index: 0,
                        source: FontSource::Preferred(path),
                    }
                }
                None => {
                    let db = fallback.get_or_insert_with(|| system_db(&cfg.extra_dirs));
                    let face = fallback_face(db, role)?;
                    tracing::warn!(?role, source = ?face.source, "preferred font missing, using fallback");
                    face
                }
            };
            faces.insert(role, face);
        }

        Ok(Self { faces })
    }

    /// Face for `role`.
    pub fn face(&self, role: FontRole) -> FramecastResult<&FontFace> {
        self.faces
            .get(&role)
            .ok_or_else(|| FramecastError::font(format!("no face resolved for {role:?}")))
    }

    /// Iterate resolved faces in role order.
    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &FontFace)> {
        self.faces.iter().map(|(r, f)| (*r, f))
    }
}

fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, Vec<u8>)> {
    candidates
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (p.clone(), bytes)))
}

fn system_db(extra_dirs: &[PathBuf]) -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    for dir in extra_dirs {
        db.load_fonts_dir(dir);
    }
    tracing::debug!(faces = db.len(), "loaded fallback font database");
    db
}

fn fallback_face(db: &usvg::fontdb::Database, role: FontRole) -> FramecastResult<FontFace> {
    use usvg::fontdb::{Family, Query, Weight};

    let mut families: Vec<Family<'_>> = role
        .fallback_families()
        .iter()
        .map(|name| Family::Name(*name))
        .collect();
    families.push(if role == FontRole::Code {
        Family::Monospace
    } else {
        Family::SansSerif
    });

    let query = Query {
        families: &families,
        weight: if role.is_bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        },
        ..Query::default()
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| FramecastError::font(format!("no system font available for {role:?}")))?;

    let family = db
        .face(id)
        .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_default();

    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| FramecastError::font(format!("failed to read fallback face for {role:?}")))?;

    Ok(FontFace {
        bytes: Arc::new(bytes),
        index,
        source: FontSource::Fallback { family },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
