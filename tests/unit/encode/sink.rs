use super::*;
use crate::foundation::core::Rgba8;
use crate::render::canvas::Canvas;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target/test-sink")
        .join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn frame(w: u32, h: u32, mode: ColorMode, fill: Rgba8) -> FrameRgba {
    Canvas::new(Size::new(w, h), mode, fill).unwrap().into_frame()
}

#[test]
fn png_sink_writes_named_files() {
    let dir = scratch_dir("rgb");
    let mut sink = PngDirSink::new(&dir);
    sink.begin(SinkConfig {
        size: Size::new(8, 4),
        mode: ColorMode::Rgb,
    })
    .unwrap();
    let path = sink
        .push_frame("frame_001", &frame(8, 4, ColorMode::Rgb, Rgba8::rgb(20, 20, 30)))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(path, dir.join("frame_001.png"));
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (8, 4));
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert_eq!(img.to_rgb8().get_pixel(3, 2).0, [20, 20, 30]);
}

#[test]
fn png_sink_keeps_alpha_for_rgba_frames() {
    let dir = scratch_dir("rgba");
    let mut sink = PngDirSink::new(&dir);
    sink.begin(SinkConfig {
        size: Size::new(2, 2),
        mode: ColorMode::Rgba,
    })
    .unwrap();
    let path = sink
        .push_frame("frame_x", &frame(2, 2, ColorMode::Rgba, Rgba8::rgba(0, 0, 0, 0)))
        .unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgba8);
    assert_eq!(img.to_rgba8().get_pixel(0, 0).0[3], 0);
}

#[test]
fn png_sink_rejects_misuse() {
    let dir = scratch_dir("misuse");
    let mut sink = PngDirSink::new(&dir);
    let f = frame(2, 2, ColorMode::Rgb, Rgba8::BLACK);
    assert!(matches!(
        sink.push_frame("early", &f),
        Err(FramecastError::Encode(_))
    ));

    sink.begin(SinkConfig {
        size: Size::new(4, 4),
        mode: ColorMode::Rgb,
    })
    .unwrap();
    assert!(matches!(
        sink.push_frame("wrong_size", &f),
        Err(FramecastError::Encode(_))
    ));
}

#[test]
fn unwritable_output_dir_is_an_io_error() {
    let dir = scratch_dir("blocked");
    std::fs::create_dir_all(dir.parent().unwrap()).unwrap();
    std::fs::write(&dir, b"not a directory").unwrap();

    let mut sink = PngDirSink::new(dir.join("frames"));
    let err = sink
        .begin(SinkConfig {
            size: Size::new(1, 1),
            mode: ColorMode::Rgb,
        })
        .unwrap_err();
    assert!(matches!(err, FramecastError::Io { .. }));
    std::fs::remove_file(&dir).unwrap();
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        size: Size::new(1, 1),
        mode: ColorMode::Rgb,
    };
    sink.begin(cfg.clone()).unwrap();
    for name in ["a", "b"] {
        sink.push_frame(name, &frame(1, 1, ColorMode::Rgb, Rgba8::WHITE))
            .unwrap();
    }
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(&cfg));
    let names: Vec<&str> = sink.frames().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
}
