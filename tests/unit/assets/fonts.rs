use super::*;

#[test]
fn default_config_has_candidates_for_every_role() {
    let cfg = FontConfig::default();
    for role in FontRole::ALL {
        assert!(!cfg.candidates(role).is_empty(), "{role:?}");
    }
    assert!(cfg.candidates(FontRole::Code)[0].ends_with("LiberationMono-Regular.ttf"));
}

#[test]
fn missing_files_fall_back_or_report_font_error() {
    let cfg = FontConfig {
        title: vec!["/definitely/not/here.ttf".into()],
        main: vec![],
        code: vec![],
        small: vec![],
        display: vec![],
        extra_dirs: vec![],
    };
    match FontSet::resolve(&cfg) {
        Ok(set) => {
            for role in FontRole::ALL {
                let face = set.face(role).unwrap();
                assert!(matches!(face.source(), FontSource::Fallback { .. }));
                assert!(!face.bytes().is_empty());
            }
        }
        Err(e) => assert!(matches!(e, FramecastError::Font(_))),
    }
}

#[test]
fn font_config_deserializes_partial_json() {
    let cfg: FontConfig =
        serde_json::from_str(r#"{"code": ["/opt/fonts/Mono.ttf"]}"#).unwrap();
    assert_eq!(cfg.code, vec![PathBuf::from("/opt/fonts/Mono.ttf")]);
    assert_eq!(cfg.title, FontConfig::default().title);
}
