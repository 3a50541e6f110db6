use super::*;
use crate::assets::fonts::FontConfig;

fn typesetter() -> Option<Typesetter> {
    match FontSet::resolve(&FontConfig::default()) {
        Ok(fonts) => Some(Typesetter::new(fonts)),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

#[test]
fn anchor_origins() {
    assert_eq!(Anchor::LeftAscender.origin(10.0, 20.0, 100.0, 40.0), (10.0, 20.0));
    assert_eq!(Anchor::MiddleTop.origin(10.0, 20.0, 100.0, 40.0), (-40.0, 20.0));
    assert_eq!(Anchor::MiddleMiddle.origin(10.0, 20.0, 100.0, 40.0), (-40.0, 0.0));
}

#[test]
fn rejects_non_positive_sizes() {
    let Some(mut ts) = typesetter() else { return };
    let style = TextStyle::new(FontRole::Main, 0.0);
    assert!(matches!(
        ts.layout("x", &style, Rgba8::WHITE),
        Err(FramecastError::Validation(_))
    ));
}

#[test]
fn measure_grows_with_size_and_length() {
    let Some(mut ts) = typesetter() else { return };
    let (w_small, h_small) = ts
        .measure("framecast", &TextStyle::new(FontRole::Main, 20.0))
        .unwrap();
    let (w_big, h_big) = ts
        .measure("framecast", &TextStyle::new(FontRole::Main, 60.0))
        .unwrap();
    let (w_long, _) = ts
        .measure("framecast framecast", &TextStyle::new(FontRole::Main, 20.0))
        .unwrap();
    assert!(w_small > 0.0 && h_small > 0.0);
    assert!(w_big > w_small && h_big > h_small);
    assert!(w_long > w_small);
}

#[test]
fn family_names_are_registered_once() {
    let Some(mut ts) = typesetter() else { return };
    let a = ts.family_name(FontRole::Code).unwrap();
    let b = ts.family_name(FontRole::Code).unwrap();
    assert_eq!(a, b);
    assert!(!a.trim().is_empty());
}
