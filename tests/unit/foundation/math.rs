use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn mul_div255_identity_and_zero() {
    assert_eq!(mul_div255_u8(200, 255), 200);
    assert_eq!(mul_div255_u8(200, 0), 0);
}

#[test]
fn unmul_inverts_opaque_and_half() {
    assert_eq!(unmul_div_u8(123, 255), 123);
    let back = unmul_div_u8(mul_div255_u8(200, 128), 128);
    assert!((i32::from(back) - 200).abs() <= 1);
    assert_eq!(unmul_div_u8(255, 10), 255);
}
