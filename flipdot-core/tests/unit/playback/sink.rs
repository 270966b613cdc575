use super::*;
use crate::foundation::core::Cell;

fn cfg(grid: Grid) -> SinkConfig {
    SinkConfig {
        grid,
        fps: Fps::new(10, 1).unwrap(),
        frames: 2,
    }
}

#[test]
fn in_memory_sink_keeps_frames_and_config() {
    let g = Grid::new(2, 1).unwrap();
    let mut sink = InMemorySink::new();
    sink.begin(cfg(g)).unwrap();
    sink.push_frame(FrameIndex(0), &PixelBuffer::from_bits(g, "10"))
        .unwrap();
    sink.push_frame(FrameIndex(3), &PixelBuffer::from_bits(g, "01"))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config().unwrap().frames, 2);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, [0, 3]);

    sink.begin(cfg(g)).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn bit_lines_sink_writes_one_line_per_frame() {
    let g = Grid::new(3, 1).unwrap();
    let mut sink = BitLinesSink::new(Vec::new());
    sink.begin(cfg(g)).unwrap();
    sink.push_frame(FrameIndex(0), &PixelBuffer::from_bits(g, "110"))
        .unwrap();
    sink.push_frame(FrameIndex(1), &PixelBuffer::from_bits(g, "001"))
        .unwrap();
    sink.end().unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "0 110\n1 001\n");
}

#[test]
fn png_sequence_sink_names_files_by_index() {
    let dir = std::env::temp_dir().join(format!("flipdot_png_sink_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let g = Grid::new(4, 2).unwrap();
    let style = PreviewStyle {
        scale: 2,
        gap: 0,
        ..PreviewStyle::default()
    };
    let mut sink = PngSequenceSink::new(&dir, style);
    sink.begin(cfg(g)).unwrap();
    let mut frame = PixelBuffer::new(g);
    frame.set(Cell::new(1, 1), true);
    sink.push_frame(FrameIndex(7), &frame).unwrap();
    sink.end().unwrap();

    let path = dir.join("frame_00007.png");
    assert_eq!(sink.written(), [path.clone()]);
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 4));

    let _ = std::fs::remove_dir_all(&dir);
}
