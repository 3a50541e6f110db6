use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!("0000ff80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.5, "b": 0.0})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 128, 0));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 0, 0));
}

#[test]
fn rejects_bad_hex_and_short_arrays() {
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#zz0000").is_err());
    assert!(serde_json::from_value::<Rgba8>(json!([0.1, 0.2])).is_err());
}

#[test]
fn tv_palette_has_all_named_colors() {
    let p = Palette::tv();
    assert_eq!(p.len(), 13);
    assert_eq!(p.get("hot_pink").unwrap(), Rgba8::rgb(0xFF, 0x14, 0x93));
    assert_eq!(p.get("neko_purple").unwrap(), Rgba8::rgb(0x9B, 0x59, 0xB6));
    assert!(p.get("chartreuse").is_err());
}

#[test]
fn merge_overrides_existing_entries() {
    let mut p = Palette::tv();
    let overrides: Palette = serde_json::from_value(json!({"hot_pink": "#000001"})).unwrap();
    p.merge(&overrides);
    assert_eq!(p.get("hot_pink").unwrap(), Rgba8::rgb(0, 0, 1));
    assert_eq!(p.len(), 13);
}

#[test]
fn serializes_as_hex_that_parses_back() {
    assert_eq!(to_hex(Rgba8::rgb(20, 20, 30)), "#14141E");
    let v = serde_json::to_value(Rgba8::rgba(255, 0, 255, 30)).unwrap();
    assert_eq!(v, json!("#FF00FF1E"));
    let back: Rgba8 = serde_json::from_value(v).unwrap();
    assert_eq!(back, Rgba8::rgba(255, 0, 255, 30));
}
