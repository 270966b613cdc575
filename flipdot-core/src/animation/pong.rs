use crate::{
    animation::{AnimationRenderer, ensure_canvas, spec::PongParams},
    foundation::core::{Cell, FrameTiming, Grid, Vec2},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
    raster::{Clip, line::bresenham_line},
    text::font::{GLYPH_HEIGHT, draw_text, text_width},
};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Self-playing pong: two paddles chase the ball at a capped speed, so fast
/// vertical shots can get past them.
#[derive(Clone, Debug)]
pub struct Pong {
    grid: Grid,
    params: PongParams,
    ball: Vec2,
    vel: Vec2,
    /// Paddle centre rows, left then right.
    paddles: [f64; 2],
    score: [u32; 2],
    serves: u32,
}

impl Pong {
    /// Start a match with the ball served to the right.
    pub fn new(params: &PongParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        if grid.width < 8 {
            return Err(FlipdotError::validation("pong needs a grid at least 8 wide"));
        }
        if params.paddle_height == 0 || params.paddle_height > grid.height {
            return Err(FlipdotError::validation(format!(
                "paddle height {} must be within 1..={}",
                params.paddle_height, grid.height
            )));
        }
        for (name, v) in [
            ("ball_speed", params.ball_speed),
            ("paddle_speed", params.paddle_speed),
            ("serve_angle_deg", params.serve_angle_deg),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(FlipdotError::validation(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }

        let mid = f64::from(grid.height - 1) / 2.0;
        let mut pong = Self {
            grid,
            params: params.clone(),
            ball: Vec2::ZERO,
            vel: Vec2::ZERO,
            paddles: [mid; 2],
            score: [0; 2],
            serves: 0,
        };
        pong.serve(RIGHT);
        Ok(pong)
    }

    /// Points scored, left then right.
    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    /// Ball centre in cells.
    pub fn ball(&self) -> Vec2 {
        self.ball
    }

    /// Ball velocity in cells per second.
    pub fn ball_velocity(&self) -> Vec2 {
        self.vel
    }

    fn left_hit_x(&self) -> f64 {
        2.0
    }

    fn right_hit_x(&self) -> f64 {
        f64::from(self.grid.width) - 3.0
    }

    fn bottom(&self) -> f64 {
        f64::from(self.grid.height - 1)
    }

    /// Put the ball back in the middle heading towards `side`. The vertical
    /// direction alternates between serves.
    fn serve(&mut self, side: usize) {
        self.ball = Vec2::new(
            f64::from(self.grid.width - 1) / 2.0,
            f64::from(self.grid.height - 1) / 2.0,
        );
        let angle = self.params.serve_angle_deg.to_radians();
        let dir_x = if side == LEFT { -1.0 } else { 1.0 };
        let dir_y = if self.serves % 2 == 0 { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir_x * angle.cos(), dir_y * angle.sin()) * self.params.ball_speed;
        self.serves += 1;
    }

    fn move_paddles(&mut self, dt: f64) {
        let half = f64::from(self.params.paddle_height - 1) / 2.0;
        let max_step = self.params.paddle_speed * dt;
        let (lo, hi) = (half, self.bottom() - half);
        for p in &mut self.paddles {
            let delta = (self.ball.y - *p).clamp(-max_step, max_step);
            *p = (*p + delta).clamp(lo, hi);
        }
    }

    fn covers(&self, side: usize, y: f64) -> bool {
        let half = f64::from(self.params.paddle_height) / 2.0;
        (y - self.paddles[side]).abs() <= half
    }

    fn step(&mut self, dt: f64) {
        self.move_paddles(dt);
        self.ball += self.vel * dt;

        let bottom = self.bottom();
        if self.ball.y < 0.0 {
            self.ball.y = -self.ball.y;
            self.vel.y = self.vel.y.abs();
        } else if self.ball.y > bottom {
            self.ball.y = 2.0 * bottom - self.ball.y;
            self.vel.y = -self.vel.y.abs();
        }
        self.ball.y = self.ball.y.clamp(0.0, bottom);

        let (lx, rx) = (self.left_hit_x(), self.right_hit_x());
        if self.vel.x < 0.0 && self.ball.x <= lx {
            if self.covers(LEFT, self.ball.y) {
                self.ball.x = 2.0 * lx - self.ball.x;
                self.vel.x = self.vel.x.abs();
            } else if self.ball.x < 0.0 {
                self.score[RIGHT] += 1;
                self.serve(LEFT);
            }
        } else if self.vel.x > 0.0 && self.ball.x >= rx {
            if self.covers(RIGHT, self.ball.y) {
                self.ball.x = 2.0 * rx - self.ball.x;
                self.vel.x = -self.vel.x.abs();
            } else if self.ball.x > f64::from(self.grid.width - 1) {
                self.score[LEFT] += 1;
                self.serve(RIGHT);
            }
        }
    }

    fn draw(&self, canvas: &mut PixelBuffer) {
        let g = self.grid;
        canvas.clear();

        let net_x = (g.width / 2) as i32;
        for y in (0..g.height as i32).filter(|y| y % 4 < 2) {
            canvas.set(Cell::new(net_x, y), true);
        }

        let h = self.params.paddle_height as i32;
        for (side, x) in [(LEFT, 1), (RIGHT, g.width as i32 - 2)] {
            let top = (self.paddles[side] - f64::from(h - 1) / 2.0).round() as i32;
            let line = bresenham_line(g, Cell::new(x, top), Cell::new(x, top + h - 1), Clip::Bounds);
            canvas.apply(&line, true);
        }

        if self.params.show_score && g.height >= GLYPH_HEIGHT {
            let left = self.score[LEFT].to_string();
            let right = self.score[RIGHT].to_string();
            draw_text(canvas, Cell::new(net_x - 2 - text_width(&left) as i32, 0), &left);
            draw_text(canvas, Cell::new(net_x + 3, 0), &right);
        }

        canvas.set(Cell::from_vec2(self.ball), true);
    }
}

impl AnimationRenderer for Pong {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        self.step(timing.delta_time_secs);
        self.draw(canvas);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pong.rs"]
mod tests;
