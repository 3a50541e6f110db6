use super::*;

#[test]
fn size_presets_and_u16_bounds() {
    assert_eq!(Size::LANDSCAPE_HD.pixel_count(), 1920 * 1080);
    assert_eq!(Size::PORTRAIT_HD.as_u16().unwrap(), (1080, 1920));
    assert!(Size::new(0, 10).as_u16().is_err());
    assert!(Size::new(70_000, 10).as_u16().is_err());
}

#[test]
fn premul_round_trips_opaque_and_transparent() {
    let c = Rgba8::rgb(12, 34, 56);
    assert_eq!(c.to_premul(), [12, 34, 56, 255]);
    assert_eq!(Rgba8::from_premul(c.to_premul()), c);
    assert_eq!(Rgba8::from_premul([9, 9, 9, 0]), Rgba8::rgba(0, 0, 0, 0));
}

#[test]
fn premul_scales_by_alpha() {
    let c = Rgba8::rgba(255, 0, 255, 30);
    assert_eq!(c.to_premul(), [30, 0, 30, 30]);
}

#[test]
fn pixel_rect_clip_is_inclusive_and_clamped() {
    let size = Size::new(10, 5);
    let (xs, ys) = PixelRect::new(0, 0, 9, 0).clip(size).unwrap();
    assert_eq!((xs, ys), (0..10, 0..1));

    let (xs, ys) = PixelRect::new(-5, 3, 100, 100).clip(size).unwrap();
    assert_eq!((xs, ys), (0..10, 3..5));

    assert!(PixelRect::new(20, 0, 30, 4).clip(size).is_none());
    assert!(PixelRect::new(5, 5, 4, 4).clip(size).is_none());
}

#[test]
fn pixel_rect_helpers() {
    assert_eq!(PixelRect::around(10, 20, 5), PixelRect::new(5, 15, 15, 25));
    assert_eq!(PixelRect::new(0, 0, 10, 10).inset(2), PixelRect::new(2, 2, 8, 8));
    let r = PixelRect::new(0, 0, 9, 4).to_kurbo();
    assert_eq!((r.width(), r.height()), (10.0, 5.0));
}
