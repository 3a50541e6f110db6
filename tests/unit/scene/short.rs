use super::*;
use crate::config::RenderConfig;
use crate::foundation::core::Size;

fn studio(seed: u64) -> Option<Studio> {
    let cfg = RenderConfig {
        size: Size::new(360, 640),
        seed: Some(seed),
        ..RenderConfig::short()
    };
    match Studio::new(cfg) {
        Ok(s) => Some(s),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

#[test]
fn scenes_are_listed_in_playback_order() {
    let slugs: Vec<&str> = SCENES.iter().map(|(slug, _)| *slug).collect();
    assert_eq!(slugs.len(), 10);
    assert_eq!(slugs[0], "001_tv_logo");
    assert_eq!(slugs[3], "004_npm_install");
    assert_eq!(slugs[9], "010_cta");
    let mut sorted = slugs.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, slugs);
}

#[test]
fn polar_truncates_toward_zero() {
    assert_eq!(polar(0, 0, 1000.0, 1000.0, 0), (1000, 0));
    assert_eq!(polar(10, 10, 600.0, 300.0, 90), (10, 310));
    assert_eq!(polar(0, 0, 1000.0, 1000.0, 135), (-707, 707));
}

#[test]
fn every_scene_renders_at_the_configured_size() {
    let Some(mut s) = studio(5) else { return };
    for (slug, build) in SCENES {
        let c = build(&mut s).unwrap_or_else(|e| panic!("{slug}: {e}"));
        assert_eq!(c.size(), Size::new(360, 640), "{slug}");
        assert_eq!(c.mode(), crate::foundation::core::ColorMode::Rgba);
    }
}

#[test]
fn scenes_are_reproducible_for_a_seed() {
    let (Some(mut a), Some(mut b)) = (studio(99), studio(99)) else {
        return;
    };
    let mut x = battle_mode(&mut a).unwrap();
    let mut y = battle_mode(&mut b).unwrap();
    assert_eq!(x.premul_bytes(), y.premul_bytes());
}

#[test]
fn news_desk_ticker_bar_is_black() {
    let Some(mut s) = studio(1) else { return };
    let mut c = news_desk(&mut s).unwrap();
    assert_eq!(c.pixel(10, 630), Some(Rgba8::BLACK));
    assert_eq!(c.pixel(359, 450).map(|p| p.a), Some(255));
}

#[test]
fn palette_overrides_reach_the_scenes() {
    let Some(mut s) = studio(1) else { return };
    s.palette.set("black", Rgba8::rgb(1, 2, 3));
    let mut c = news_desk(&mut s).unwrap();
    assert_eq!(c.pixel(10, 630), Some(Rgba8::rgb(1, 2, 3)));
}
