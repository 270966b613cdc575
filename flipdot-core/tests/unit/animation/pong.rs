use super::*;

fn flat(paddle_speed: f64) -> PongParams {
    PongParams {
        paddle_speed,
        serve_angle_deg: 0.0,
        ..PongParams::default()
    }
}

fn run(pong: &mut Pong, canvas: &mut PixelBuffer, frames: u64) {
    for f in 0..frames {
        pong.render(canvas, FrameTiming::new(1.0 / 30.0, f * 33))
            .unwrap();
    }
}

#[test]
fn first_frame_layout() {
    let g = Grid::SMALL;
    let mut pong = Pong::new(&PongParams::default(), g).unwrap();
    let mut canvas = PixelBuffer::new(g);
    pong.render(&mut canvas, FrameTiming::default()).unwrap();

    assert!(pong.ball_velocity().x > 0.0);
    assert_eq!(canvas.get(Cell::new(1, 7)), Some(true));
    assert_eq!(canvas.get(Cell::new(1, 12)), Some(true));
    assert_eq!(canvas.get(Cell::new(1, 6)), Some(false));
    assert_eq!(canvas.get(Cell::new(78, 7)), Some(true));
    assert_eq!(canvas.get(Cell::new(40, 0)), Some(true));
    assert_eq!(canvas.get(Cell::new(40, 2)), Some(false));
    assert_eq!(canvas.get(Cell::new(40, 10)), Some(true));
    assert_eq!(canvas.get(Cell::new(35, 0)), Some(true));
    assert_eq!(canvas.get(Cell::new(43, 0)), Some(true));
}

#[test]
fn centred_paddles_return_a_flat_shot() {
    let g = Grid::SMALL;
    let mut pong = Pong::new(&flat(0.0), g).unwrap();
    let mut canvas = PixelBuffer::new(g);
    run(&mut pong, &mut canvas, 60);
    assert_eq!(pong.score(), [0, 0]);
    assert!(pong.ball_velocity().x < 0.0);
}

#[test]
fn a_miss_scores_and_reserves() {
    let g = Grid::SMALL;
    let mut pong = Pong::new(&flat(0.0), g).unwrap();
    pong.paddles[RIGHT] = 2.5;
    let mut canvas = PixelBuffer::new(g);
    run(&mut pong, &mut canvas, 60);
    assert_eq!(pong.score(), [1, 0]);
    assert!(pong.ball_velocity().x > 0.0);
    assert!(pong.ball().x > 39.5 && pong.ball().x < 77.0);
}

#[test]
fn ball_stays_on_the_rows() {
    let g = Grid::LARGE;
    let mut pong = Pong::new(&PongParams::default(), g).unwrap();
    let mut canvas = PixelBuffer::new(g);
    for f in 0..900u64 {
        pong.render(&mut canvas, FrameTiming::new(1.0 / 30.0, f * 33))
            .unwrap();
        let b = pong.ball();
        assert!((0.0..=27.0).contains(&b.y), "frame {f}: {b:?}");
        assert!(canvas.count_on() > 0);
    }
}

#[test]
fn invalid_params_are_rejected() {
    let tall = PongParams {
        paddle_height: 30,
        ..PongParams::default()
    };
    assert!(Pong::new(&tall, Grid::SMALL).is_err());
    let backwards = PongParams {
        ball_speed: -1.0,
        ..PongParams::default()
    };
    assert!(Pong::new(&backwards, Grid::SMALL).is_err());
    assert!(Pong::new(&PongParams::default(), Grid::new(4, 20).unwrap()).is_err());
}
