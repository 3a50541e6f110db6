use super::*;
use crate::foundation::core::{ColorMode, Size};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn canvas(w: u32, h: u32, fill: Rgba8) -> Canvas {
    Canvas::new(Size::new(w, h), ColorMode::Rgb, fill).unwrap()
}

fn striped(w: u32, h: u32) -> Canvas {
    let mut c = canvas(w, h, Rgba8::BLACK);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            c.put_pixel(x, y, Rgba8::rgb((x * 7 % 256) as u8, (y * 3 % 256) as u8, 90));
        }
    }
    c
}

#[test]
fn noise_stays_within_count_and_gray_range() {
    let mut c = canvas(20, 10, Rgba8::BLACK);
    let mut rng = StdRng::seed_from_u64(7);
    static_noise(&mut c, 0.25, &mut rng).unwrap();

    let mut changed = 0;
    for y in 0..10 {
        for x in 0..20 {
            let p = c.pixel(x, y).unwrap();
            if p != Rgba8::BLACK {
                changed += 1;
                assert!(p.r >= 200 && p.r == p.g && p.g == p.b && p.a == 255);
            }
        }
    }
    assert!(changed > 0);
    assert!(changed <= 50);
}

#[test]
fn noise_intensity_zero_is_noop_and_out_of_range_rejected() {
    let mut c = canvas(8, 8, Rgba8::BLACK);
    let before = c.premul_bytes().to_vec();
    let mut rng = StdRng::seed_from_u64(1);
    static_noise(&mut c, 0.0, &mut rng).unwrap();
    assert_eq!(c.premul_bytes(), &before[..]);

    assert!(static_noise(&mut c, 1.5, &mut rng).is_err());
    assert!(static_noise(&mut c, f64::NAN, &mut rng).is_err());
}

#[test]
fn scan_lines_darken_two_rows_every_four() {
    let mut c = canvas(6, 10, Rgba8::WHITE);
    scan_lines(&mut c);

    let dark: Vec<u32> = (0..10)
        .filter(|&y| c.pixel(3, y).unwrap().r < 255)
        .collect();
    assert_eq!(dark, vec![0, 1, 4, 5, 8, 9]);
    let starts = dark.iter().filter(|&&y| y % SCAN_LINE_PERIOD == 0).count();
    assert_eq!(starts, 10usize.div_ceil(4));
    assert_eq!(c.pixel(0, 0), c.pixel(5, 1));
}

#[test]
fn scan_lines_clip_last_band() {
    let mut c = canvas(4, 9, Rgba8::WHITE);
    scan_lines(&mut c);
    assert!(c.pixel(0, 8).unwrap().r < 255);
    assert_eq!(c.pixel(0, 7), Some(Rgba8::WHITE));
}

#[test]
fn glitch_with_zero_iterations_is_noop() {
    let mut c = striped(64, 80);
    let before = c.premul_bytes().to_vec();
    let mut rng = StdRng::seed_from_u64(3);
    vhs_glitch(&mut c, 0, &mut rng);
    assert_eq!(c.premul_bytes(), &before[..]);
}

#[test]
fn glitch_is_deterministic_for_a_seed() {
    let mut a = striped(64, 80);
    let mut b = striped(64, 80);
    vhs_glitch(&mut a, 5, &mut StdRng::seed_from_u64(42));
    vhs_glitch(&mut b, 5, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.premul_bytes(), b.premul_bytes());
}

#[test]
fn glitch_on_short_canvas_starts_at_top() {
    let mut c = striped(64, 30);
    let before = c.premul_bytes().to_vec();
    vhs_glitch(&mut c, 1, &mut StdRng::seed_from_u64(9));
    let after = c.premul_bytes();
    let row = 64 * 4;
    assert_eq!(&after[20 * row..], &before[20 * row..]);
}

// Replays the generator draws of `vhs_glitch` against a plain pixel model.
fn glitch_model(
    mut px: Vec<[u8; 4]>,
    w: usize,
    h: usize,
    iterations: u32,
    seed: u64,
) -> Vec<[u8; 4]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let tint = GLITCH_TINT.to_premul();
    for _ in 0..iterations {
        let y = rng.random_range(0..h as u32 - GLITCH_START_MARGIN) as usize;
        let band = rng.random_range(5..20u32) as usize;
        let dx = rng.random_range(-GLITCH_MAX_SHIFT..=GLITCH_MAX_SHIFT) as i64;
        let tinted = rng.random_bool(0.5);
        for row in y..(y + band).min(h) {
            let src: Vec<[u8; 4]> = px[row * w..(row + 1) * w].to_vec();
            for x in 0..w as i64 {
                let from = x - dx;
                if (0..w as i64).contains(&from) {
                    px[row * w + x as usize] = src[from as usize];
                }
            }
            if tinted {
                for p in &mut px[row * w..(row + 1) * w] {
                    *p = crate::render::composite::over(*p, tint, 1.0);
                }
            }
        }
    }
    px
}

fn pixels(c: &mut Canvas) -> Vec<[u8; 4]> {
    c.premul_bytes()
        .chunks_exact(4)
        .map(|p| [p[0], p[1], p[2], p[3]])
        .collect()
}

#[test]
fn glitch_matches_replayed_band_shifts_and_tints() {
    let (w, h) = (96usize, 140usize);
    for seed in [1u64, 7, 42, 2024] {
        let mut c = striped(w as u32, h as u32);
        let expected = glitch_model(pixels(&mut c), w, h, 6, seed);
        vhs_glitch(&mut c, 6, &mut StdRng::seed_from_u64(seed));
        assert_eq!(pixels(&mut c), expected, "seed {seed}");
    }
}

#[test]
fn glitch_band_moves_by_drawn_offset() {
    let (w, h) = (96u32, 140u32);
    let mut c = striped(w, h);
    let before = pixels(&mut c);

    let mut replay = StdRng::seed_from_u64(11);
    let y = replay.random_range(0..h - GLITCH_START_MARGIN) as usize;
    let band = replay.random_range(5..20u32) as usize;
    let dx = replay.random_range(-GLITCH_MAX_SHIFT..=GLITCH_MAX_SHIFT);
    let tinted = replay.random_bool(0.5);

    vhs_glitch(&mut c, 1, &mut StdRng::seed_from_u64(11));
    let after = pixels(&mut c);
    let w = w as usize;

    let tint = GLITCH_TINT.to_premul();
    for row in 0..h as usize {
        for x in 0..w {
            let i = row * w + x;
            if !(y..y + band).contains(&row) {
                assert_eq!(after[i], before[i], "untouched row {row}");
                continue;
            }
            let from = x as i64 - i64::from(dx);
            let moved = if (0..w as i64).contains(&from) {
                before[row * w + from as usize]
            } else {
                before[i]
            };
            let want = if tinted {
                crate::render::composite::over(moved, tint, 1.0)
            } else {
                moved
            };
            assert_eq!(after[i], want, "row {row} x {x}");
        }
    }
}

#[test]
fn gradient_endpoints_and_idempotence() {
    let top = Rgba8::rgb(155, 89, 182);
    let bottom = Rgba8::rgb(241, 196, 15);
    let mut c = Canvas::new(Size::new(5, 100), ColorMode::Rgba, Rgba8::rgba(0, 0, 0, 0)).unwrap();
    gradient_fill(&mut c, top, bottom);
    assert_eq!(c.pixel(2, 0), Some(top));
    let last = c.pixel(4, 99).unwrap();
    assert_eq!(last.a, 255);
    assert!((i32::from(last.r) - 241).abs() <= 2);
    assert!((i32::from(last.g) - 196).abs() <= 2);
    assert!((i32::from(last.b) - 15).abs() <= 2);
    assert_eq!(c.pixel(0, 50), c.pixel(4, 50));

    let once = c.premul_bytes().to_vec();
    gradient_fill(&mut c, top, bottom);
    assert_eq!(c.premul_bytes(), &once[..]);
}

#[test]
fn gradient_row_truncates() {
    let c = gradient_row(Rgba8::rgb(0, 10, 255), Rgba8::rgb(255, 0, 0), 1, 4);
    assert_eq!(c, Rgba8::rgb(63, 7, 191));
}
