//! Seeded random figures (replay tokens + placement frames).
//!
//! Purpose
//! - Deterministic source of valid `f64` squares, rectangles and trapezoids for
//!   property tests and benches. Each draw also returns the analytic area of
//!   the shape it built, so callers can check `area()` independently.
//!
//! Model
//! - Draw a center in `[-extent, extent]²` and, if `rotate` is set, an angle
//!   in `[0, 2π)`. Corners are laid out in a local frame and mapped through it.
//! - `ReplayToken { seed, index }` is mixed into a single `StdRng`.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FigureError;
use crate::figure::{Figure, FigureRef};
use crate::point::Point;
use crate::shapes::{Rectangle, Square, Trapezoid};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Centers are drawn from `[-extent, extent]²`.
    pub extent: f64,
    /// Side, base and height lengths are drawn from `[min_size, max_size)`.
    pub min_size: f64,
    pub max_size: f64,
    /// Random orientation; otherwise the first side is horizontal.
    pub rotate: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            min_size: 0.5,
            max_size: 5.0,
            rotate: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rigid placement: rotation by `theta` then translation to `(cx, cy)`.
struct Frame {
    cx: f64,
    cy: f64,
    cos: f64,
    sin: f64,
}

impl Frame {
    fn draw<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> Self {
        let e = cfg.extent.abs();
        let (cx, cy) = if e > 0.0 {
            (rng.gen_range(-e..=e), rng.gen_range(-e..=e))
        } else {
            (0.0, 0.0)
        };
        let theta = if cfg.rotate {
            rng.gen::<f64>() * std::f64::consts::TAU
        } else {
            0.0
        };
        Self {
            cx,
            cy,
            cos: theta.cos(),
            sin: theta.sin(),
        }
    }

    #[inline]
    fn place(&self, u: f64, v: f64) -> Point<f64> {
        Point::new(
            self.cx + self.cos * u - self.sin * v,
            self.cy + self.sin * u + self.cos * v,
        )
    }

    /// Axis-aligned box `[-w/2, w/2] × [-h/2, h/2]` in winding order.
    fn corners(&self, w: f64, h: f64) -> [Point<f64>; 4] {
        let (a, b) = (w / 2.0, h / 2.0);
        [
            self.place(-a, -b),
            self.place(a, -b),
            self.place(a, b),
            self.place(-a, b),
        ]
    }
}

fn length<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> f64 {
    let lo = cfg.min_size.max(1e-3);
    let hi = cfg.max_size.max(lo);
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn square_with<R: Rng>(
    cfg: &SampleCfg,
    rng: &mut R,
) -> Result<(Square<f64>, f64), FigureError> {
    let frame = Frame::draw(cfg, rng);
    let s = length(cfg, rng);
    Ok((Square::from_points(frame.corners(s, s))?, s * s))
}

fn rectangle_with<R: Rng>(
    cfg: &SampleCfg,
    rng: &mut R,
) -> Result<(Rectangle<f64>, f64), FigureError> {
    let frame = Frame::draw(cfg, rng);
    let w = length(cfg, rng);
    let h = length(cfg, rng);
    Ok((Rectangle::from_points(frame.corners(w, h))?, w * h))
}

fn trapezoid_with<R: Rng>(
    cfg: &SampleCfg,
    rng: &mut R,
) -> Result<(Trapezoid<f64>, f64), FigureError> {
    let frame = Frame::draw(cfg, rng);
    let b1 = length(cfg, rng);
    let b2 = length(cfg, rng);
    let h = length(cfg, rng);
    // top base offset relative to the bottom one
    let shift = rng.gen_range(-0.5..=0.5) * b1;
    let (y0, y1) = (-h / 2.0, h / 2.0);
    let pts = [
        frame.place(-b1 / 2.0, y0),
        frame.place(b1 / 2.0, y0),
        frame.place(shift + b2 / 2.0, y1),
        frame.place(shift - b2 / 2.0, y1),
    ];
    Ok((Trapezoid::from_points(pts)?, (b1 + b2) * h / 2.0))
}

/// Draw a square and its analytic area.
pub fn draw_square(
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<(Square<f64>, f64), FigureError> {
    square_with(&cfg, &mut tok.to_std_rng())
}

/// Draw a rectangle and its analytic area.
pub fn draw_rectangle(
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<(Rectangle<f64>, f64), FigureError> {
    rectangle_with(&cfg, &mut tok.to_std_rng())
}

/// Draw a trapezoid (sides 1-2 and 3-4 parallel) and its analytic area.
pub fn draw_trapezoid(
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<(Trapezoid<f64>, f64), FigureError> {
    trapezoid_with(&cfg, &mut tok.to_std_rng())
}

fn shared<F: Figure<f64> + 'static>((figure, area): (F, f64)) -> (FigureRef<f64>, f64) {
    let handle: FigureRef<f64> = Rc::new(figure);
    (handle, area)
}

/// Draw a figure of uniformly chosen kind as a shared handle.
pub fn draw_figure(
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<(FigureRef<f64>, f64), FigureError> {
    let mut rng = tok.to_std_rng();
    match rng.gen_range(0..3) {
        0 => square_with(&cfg, &mut rng).map(shared),
        1 => rectangle_with(&cfg, &mut rng).map(shared),
        _ => trapezoid_with(&cfg, &mut rng).map(shared),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Figure, FigureKind};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn draws_are_reproducible() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 42, index: 3 };
        let (a, _) = draw_trapezoid(cfg, tok).unwrap();
        let (b, _) = draw_trapezoid(cfg, tok).unwrap();
        assert_eq!(a, b);
        let (c, _) = draw_trapezoid(cfg, ReplayToken { seed: 42, index: 4 }).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn analytic_area_matches_computed_area() {
        let cfg = SampleCfg::default();
        for index in 0..64 {
            let tok = ReplayToken { seed: 1, index };
            let (s, sa) = draw_square(cfg, tok).unwrap();
            assert!(close(s.area(), sa), "square {index}: {} vs {sa}", s.area());
            let (r, ra) = draw_rectangle(cfg, tok).unwrap();
            assert!(close(r.area(), ra), "rectangle {index}: {} vs {ra}", r.area());
            let (t, ta) = draw_trapezoid(cfg, tok).unwrap();
            assert!(close(t.area(), ta), "trapezoid {index}: {} vs {ta}", t.area());
        }
    }

    #[test]
    fn unrotated_draws_have_horizontal_first_side() {
        let cfg = SampleCfg {
            rotate: false,
            ..SampleCfg::default()
        };
        let (r, _) = draw_rectangle(cfg, ReplayToken { seed: 9, index: 0 }).unwrap();
        let p = r.points();
        assert_eq!(p[0].y, p[1].y);
        assert!(p[1].x > p[0].x);
    }

    #[test]
    fn draw_figure_covers_every_kind() {
        let cfg = SampleCfg::default();
        let mut seen = Vec::new();
        for index in 0..64 {
            let (f, a) = draw_figure(cfg, ReplayToken { seed: 5, index }).unwrap();
            assert!(close(f.area(), a));
            if !seen.contains(&f.kind()) {
                seen.push(f.kind());
            }
        }
        for kind in [FigureKind::Square, FigureKind::Rectangle, FigureKind::Trapezoid] {
            assert!(seen.contains(&kind), "{kind} never drawn");
        }
    }

    #[test]
    fn degenerate_cfg_still_yields_valid_shapes() {
        let cfg = SampleCfg {
            extent: 0.0,
            min_size: 2.0,
            max_size: 1.0,
            rotate: false,
        };
        let (s, a) = draw_square(cfg, ReplayToken { seed: 0, index: 0 }).unwrap();
        assert_eq!(a, 4.0);
        assert_eq!(s.center(), Point::new(0.0, 0.0));
    }
}
