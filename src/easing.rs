//! Easing curves.
//!
//! Every animation in the catalog maps a linear time fraction (0.0-1.0) through
//! an [`Easing`] before interpolating. The named curves are the standard
//! motion-system cubic beziers.
//!
//! # Cubic Bezier Evaluation
//!
//! A curve is defined by two control points `(x1, y1)` and `(x2, y2)`; the end
//! points are fixed at `(0, 0)` and `(1, 1)`. For an input fraction `x` we solve
//! `bezier_x(t) = x` for `t` and return `bezier_y(t)`:
//!
//! ```text
//! t = newton(x)          // up to 8 iterations, tolerance 1e-6
//!   | bisect(x)          // fallback when the derivative is too flat
//! y = bezier_y(t)
//! ```

/// Newton iteration cap before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;

/// Bisection iteration cap.
const BISECTION_ITERATIONS: usize = 32;

/// Solve tolerance on the x axis.
const EPSILON: f32 = 1e-6;

/// Cubic bezier easing curve with fixed end points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    /// Build a curve from its two control points.
    ///
    /// `x1` and `x2` must lie in `0.0..=1.0` for the curve to be a function of x.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self { ax, bx, cx, ay, by, cy }
    }

    #[inline]
    fn sample_x(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    #[inline]
    fn sample_y(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    #[inline]
    fn sample_dx(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find the curve parameter `t` whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let dx = self.sample_dx(t);
            if dx.abs() < EPSILON {
                break;
            }
            t -= err / dx;
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = self.sample_x(t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }

    /// Map a linear fraction through the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(fraction))
    }
}

/// Easing applied to a linear time fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Identity.
    Linear,
    /// Cubic bezier curve.
    Bezier(CubicBezier),
}

impl Easing {
    /// Standard curve: quick start, long gentle settle.
    pub const FAST_OUT_SLOW_IN: Self = Self::Bezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0));

    /// Entering elements: starts at full speed, decelerates.
    pub const LINEAR_OUT_SLOW_IN: Self = Self::Bezier(CubicBezier::new(0.0, 0.0, 0.2, 1.0));

    /// Exiting elements: accelerates, ends at full speed.
    pub const FAST_OUT_LINEAR_IN: Self = Self::Bezier(CubicBezier::new(0.4, 0.0, 1.0, 1.0));

    /// Map `fraction` (clamped to 0.0-1.0) through this easing.
    #[inline]
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::Bezier(curve) => curve.transform(fraction),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::FAST_OUT_SLOW_IN
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (to - from).mul_add(t, from)
}
