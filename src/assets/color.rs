use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{FramecastError, FramecastResult};

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(from_unit(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(from_unit(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(from_unit(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&to_hex(*self))
    }
}

/// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
pub fn to_hex(c: Rgba8) -> String {
    if c.a == 255 {
        format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a)
    }
}

fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Rgba8 {
    fn to_u8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }
    Rgba8::rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
pub fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Name-to-color table used by scene builders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(BTreeMap<String, Rgba8>);

const TV_COLORS: [(&str, &str); 13] = [
    ("neko_purple", "#9B59B6"),
    ("mario_gold", "#F1C40F"),
    ("noel_blue", "#2980B9"),
    ("glam_red", "#E74C3C"),
    ("hannibal_gray", "#34495E"),
    ("tetora_green", "#27AE60"),
    ("tv_static", "#ECF0F1"),
    ("emergency_red", "#FF0000"),
    ("electric_blue", "#00FFFF"),
    ("hot_pink", "#FF1493"),
    ("lime_green", "#32CD32"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
];

impl Palette {
    /// The retro-TV palette used by the vertical short.
    pub fn tv() -> Self {
        let mut map = BTreeMap::new();
        for (name, hex) in TV_COLORS {
            if let Ok(c) = parse_hex(hex) {
                map.insert(name.to_owned(), c);
            }
        }
        Self(map)
    }

    /// Look up a color by name.
    pub fn get(&self, name: &str) -> FramecastResult<Rgba8> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| FramecastError::validation(format!("unknown palette color '{name}'")))
    }

    /// Insert or replace a named color.
    pub fn set(&mut self, name: impl Into<String>, color: Rgba8) {
        self.0.insert(name.into(), color);
    }

    /// Overlay `other` on top of this palette; entries in `other` win.
    pub fn merge(&mut self, other: &Palette) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), *v);
        }
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
