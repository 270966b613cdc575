use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    animation::{AnimationRenderer, ensure_canvas, spec::StarBounceParams},
    foundation::core::{Cell, FrameTiming, Grid, Vec2},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
    raster::{Clip, line::polyline},
};

/// A five-pointed star drifting around the panel and bouncing off its edges.
#[derive(Clone, Debug)]
pub struct StarBounce {
    grid: Grid,
    radius: u32,
    pos: Vec2,
    vel: Vec2,
}

impl StarBounce {
    /// Check the star fits `grid` and place it, clamped inside the walls.
    pub fn new(params: &StarBounceParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        let span = 2 * u64::from(params.radius) + 1;
        if span > u64::from(grid.width) || span > u64::from(grid.height) {
            return Err(FlipdotError::validation(format!(
                "star radius {} does not fit a {}x{} grid",
                params.radius, grid.width, grid.height
            )));
        }
        let [vx, vy] = params.velocity;
        if !vx.is_finite() || !vy.is_finite() {
            return Err(FlipdotError::validation("star velocity must be finite"));
        }
        let pos = match params.start {
            Some([x, y]) => Vec2::new(x, y),
            None => grid.center().to_vec2(),
        };
        let mut star = Self {
            grid,
            radius: params.radius,
            pos,
            vel: Vec2::new(vx, vy),
        };
        star.pos = star.clamped(star.pos);
        Ok(star)
    }

    /// Star centre in cells.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Current velocity in cells per second.
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn limits(&self) -> (Vec2, Vec2) {
        let r = f64::from(self.radius);
        (
            Vec2::new(r, r),
            Vec2::new(
                f64::from(self.grid.width - 1) - r,
                f64::from(self.grid.height - 1) - r,
            ),
        )
    }

    fn clamped(&self, p: Vec2) -> Vec2 {
        let (lo, hi) = self.limits();
        Vec2::new(p.x.clamp(lo.x, hi.x), p.y.clamp(lo.y, hi.y))
    }

    fn step(&mut self, dt: f64) {
        let (lo, hi) = self.limits();
        let mut p = self.pos + self.vel * dt;

        if p.x < lo.x {
            p.x = 2.0 * lo.x - p.x;
            self.vel.x = self.vel.x.abs();
        } else if p.x > hi.x {
            p.x = 2.0 * hi.x - p.x;
            self.vel.x = -self.vel.x.abs();
        }
        if p.y < lo.y {
            p.y = 2.0 * lo.y - p.y;
            self.vel.y = self.vel.y.abs();
        } else if p.y > hi.y {
            p.y = 2.0 * hi.y - p.y;
            self.vel.y = -self.vel.y.abs();
        }

        // A single huge step can overshoot the far wall too.
        self.pos = self.clamped(p);
    }

    /// Pentagram tips visited in drawing order, closing back on the first.
    fn outline(&self) -> Vec<Cell> {
        let r = f64::from(self.radius);
        let tips: Vec<Cell> = (0..5)
            .map(|k| {
                let a = -FRAC_PI_2 + TAU * f64::from(k) / 5.0;
                Cell::from_vec2(self.pos + Vec2::new(a.cos(), a.sin()) * r)
            })
            .collect();
        [0, 2, 4, 1, 3, 0].iter().map(|&i| tips[i]).collect()
    }
}

impl AnimationRenderer for StarBounce {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        self.step(timing.delta_time_secs);
        canvas.clear();
        canvas.apply(&polyline(self.grid, &self.outline(), Clip::Bounds), true);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/star.rs"]
mod tests;
