use super::*;
use crate::animation::spec::{
    CustomFramesParams, LogoParams, PongParams, StarBounceParams, TextScrollParams, TimerParams,
    WaveParams,
};

fn every_builtin() -> Vec<AnimationSpec> {
    vec![
        AnimationSpec::StarBounce(StarBounceParams::default()),
        AnimationSpec::Pong(PongParams::default()),
        AnimationSpec::Wave(WaveParams::default()),
        AnimationSpec::Timer(TimerParams::default()),
        AnimationSpec::TextScroll(TextScrollParams::default()),
        AnimationSpec::Logo(LogoParams::default()),
    ]
}

#[test]
fn builtins_build_and_render_on_both_panels() {
    for grid in [Grid::LARGE, Grid::SMALL] {
        for spec in every_builtin() {
            let mut anim = Animation::from_spec(&spec, grid).unwrap();
            let mut canvas = PixelBuffer::new(grid);
            for f in 0..90u64 {
                let timing = FrameTiming::new(if f == 0 { 0.0 } else { 0.05 }, f * 50);
                anim.render(&mut canvas, timing).unwrap();
            }
            assert!(canvas.count_on() > 0, "{} drew nothing", anim.name());
        }
    }
}

#[test]
fn names_match_spec_tags() {
    for spec in every_builtin() {
        let anim = Animation::from_spec(&spec, Grid::LARGE).unwrap();
        let tag = serde_json::to_value(&spec).unwrap()["kind"].clone();
        assert_eq!(tag, anim.name());
    }
}

#[test]
fn custom_frames_dispatch_through_the_enum() {
    let grid = Grid::new(3, 1).unwrap();
    let spec = AnimationSpec::CustomFrames(CustomFramesParams {
        frames: vec!["101".into(), "010".into()],
        frame_ms: 100,
        looping: true,
    });
    let mut anim = Animation::from_spec(&spec, grid).unwrap();
    let mut canvas = PixelBuffer::new(grid);
    anim.render(&mut canvas, FrameTiming::new(0.0, 150)).unwrap();
    assert_eq!(canvas.to_bits(), "010");
}

#[test]
fn grid_is_checked_before_building() {
    let bad = Grid {
        width: 0,
        height: 4,
    };
    let spec = AnimationSpec::Wave(WaveParams::default());
    assert!(Animation::from_spec(&spec, bad).is_err());
}

#[test]
fn canvas_mismatch_is_reported() {
    let mut anim =
        Animation::from_spec(&AnimationSpec::Timer(TimerParams::default()), Grid::LARGE).unwrap();
    let mut canvas = PixelBuffer::new(Grid::SMALL);
    let err = anim.render(&mut canvas, FrameTiming::default()).unwrap_err();
    assert!(err.to_string().contains("84x28"));
}

#[test]
fn constructors_reject_an_empty_grid_literal() {
    for grid in [
        Grid {
            width: 10,
            height: 0,
        },
        Grid {
            width: 0,
            height: 10,
        },
    ] {
        assert!(StarBounce::new(&StarBounceParams::default(), grid).is_err());
        assert!(Pong::new(&PongParams::default(), grid).is_err());
        assert!(Wave::new(&WaveParams::default(), grid).is_err());
        assert!(Timer::new(&TimerParams::default(), grid).is_err());
        assert!(TextScroll::new(&TextScrollParams::default(), grid).is_err());
        assert!(Logo::new(&LogoParams::default(), grid).is_err());
        let frames = CustomFramesParams {
            frames: vec![String::new()],
            ..CustomFramesParams::default()
        };
        assert!(matches!(
            CustomFrames::new(&frames, grid),
            Err(FlipdotError::Validation(_))
        ));
    }
}
