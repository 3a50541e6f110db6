use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn translucent_black_darkens_opaque_dst() {
    let dst = [200, 100, 50, 255];
    let out = over(dst, [0, 0, 0, 50], 1.0);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], mul_div255_u8(200, 205));
    assert!(out[1] < 100 && out[2] < 50);
}
