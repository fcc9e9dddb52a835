//! Cubic spline track representation
//!
//! The track is given as a sequence of waypoints. A natural cubic spline is
//! first fitted against the chord length between the waypoints, which is only
//! an approximation of the arc length. The spline is then resampled at equal
//! arc length intervals and fitted again, so that the parameter of the final
//! spline is (close to) the true arc length.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;
use nalgebra::Vector2;
use serde::Serialize;

// Internal
use super::{ArcLengthPath, SplineError};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of integration sub-intervals per spline segment when measuring the
/// arc length. Must be even for Simpson's rule.
const ARC_LENGTH_SUBSTEPS: usize = 20;

/// Distance under which two neighbouring waypoints are considered the same.
///
/// Units: meters
const MIN_POINT_SEP_M: f64 = 1e-9;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A path through 2D waypoints, parameterised by arc length.
///
/// Arc length outside of `[0, length]` is clamped onto the ends of the path.
#[derive(Debug, Clone, Serialize)]
pub struct ArcLengthSpline {
    spline_x: CubicSpline,
    spline_y: CubicSpline,
    length_m: f64,
}

/// A natural cubic spline through scalar values.
///
/// Segment `i` covers `[knots[i], knots[i + 1]]` and evaluates to
/// `a + b*dt + c*dt^2 + d*dt^3` with `dt = t - knots[i]`.
#[derive(Debug, Clone, Serialize)]
struct CubicSpline {
    knots: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ArcLengthSpline {
    /// Build a new spline from the X and Y coordinates of the waypoints.
    pub fn new(xs_m: &[f64], ys_m: &[f64]) -> Result<Self, SplineError> {
        if xs_m.len() != ys_m.len() {
            return Err(SplineError::MismatchedLengths(xs_m.len(), ys_m.len()));
        }
        if xs_m.len() < 2 {
            return Err(SplineError::TooFewPoints(xs_m.len()));
        }

        // Chord length parameterisation
        let mut chord = Vec::with_capacity(xs_m.len());
        chord.push(0.0);
        for i in 1..xs_m.len() {
            let sep_m = (xs_m[i] - xs_m[i - 1]).hypot(ys_m[i] - ys_m[i - 1]);
            if sep_m < MIN_POINT_SEP_M {
                return Err(SplineError::CoincidentPoints(i));
            }
            chord.push(chord[i - 1] + sep_m);
        }

        let chord_x = CubicSpline::new(&chord, xs_m);
        let chord_y = CubicSpline::new(&chord, ys_m);

        // Tabulate arc length against the chord parameter at every
        // integration point
        let h_t = 1.0 / ARC_LENGTH_SUBSTEPS as f64;
        let speed = |t: f64| chord_x.derivative(t).hypot(chord_y.derivative(t));
        let mut table_t = vec![0.0];
        let mut table_s = vec![0.0];
        for i in 0..chord.len() - 1 {
            let seg_len = chord[i + 1] - chord[i];
            let step = seg_len * h_t;
            for j in 0..ARC_LENGTH_SUBSTEPS {
                let t0 = chord[i] + j as f64 * step;
                let ds = step / 6.0
                    * (speed(t0) + 4.0 * speed(t0 + 0.5 * step) + speed(t0 + step));
                table_t.push(t0 + step);
                table_s.push(table_s[table_s.len() - 1] + ds);
            }
        }
        let length_m = table_s[table_s.len() - 1];

        // Resample at equally spaced arc length and refit
        let num_points = xs_m.len();
        let mut knots = Vec::with_capacity(num_points);
        let mut res_x = Vec::with_capacity(num_points);
        let mut res_y = Vec::with_capacity(num_points);
        for j in 0..num_points {
            let s_m = length_m * j as f64 / (num_points - 1) as f64;
            let t = interp(&table_s, &table_t, s_m);
            knots.push(s_m);
            res_x.push(chord_x.value(t));
            res_y.push(chord_y.value(t));
        }

        debug!(
            "Built arc length spline from {} points, length {:.3} m (chord length {:.3} m)",
            num_points,
            length_m,
            chord[chord.len() - 1]
        );

        Ok(Self {
            spline_x: CubicSpline::new(&knots, &res_x),
            spline_y: CubicSpline::new(&knots, &res_y),
            length_m,
        })
    }

    fn clamp(&self, s: f64) -> f64 {
        s.max(0.0).min(self.length_m)
    }
}

impl ArcLengthPath for ArcLengthSpline {
    fn position(&self, s: f64) -> Vector2<f64> {
        let s = self.clamp(s);
        Vector2::new(self.spline_x.value(s), self.spline_y.value(s))
    }

    fn first_derivative(&self, s: f64) -> Vector2<f64> {
        let s = self.clamp(s);
        Vector2::new(self.spline_x.derivative(s), self.spline_y.derivative(s))
    }

    fn second_derivative(&self, s: f64) -> Vector2<f64> {
        let s = self.clamp(s);
        Vector2::new(
            self.spline_x.second_derivative(s),
            self.spline_y.second_derivative(s),
        )
    }

    fn length(&self) -> f64 {
        self.length_m
    }
}

impl CubicSpline {
    /// Fit a natural spline (zero second derivative at both ends).
    ///
    /// `knots` must be strictly increasing and the same length as `values`,
    /// with at least two entries.
    fn new(knots: &[f64], values: &[f64]) -> Self {
        let n = knots.len();
        let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();

        // Second derivatives at each knot, solved for the interior knots with
        // the Thomas algorithm
        let mut m = vec![0.0; n];
        if n > 2 {
            let size = n - 2;
            let mut diag = vec![0.0; size];
            let mut upper = vec![0.0; size];
            let mut rhs = vec![0.0; size];

            for k in 0..size {
                let i = k + 1;
                diag[k] = 2.0 * (h[i - 1] + h[i]);
                upper[k] = h[i];
                rhs[k] = 6.0
                    * ((values[i + 1] - values[i]) / h[i]
                    - (values[i] - values[i - 1]) / h[i - 1]);
            }

            // Forward sweep, the sub-diagonal entry of row k is h[k]
            for k in 1..size {
                let w = h[k] / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                rhs[k] -= w * rhs[k - 1];
            }

            // Back substitution
            m[size] = rhs[size - 1] / diag[size - 1];
            for k in (0..size - 1).rev() {
                m[k + 1] = (rhs[k] - upper[k] * m[k + 2]) / diag[k];
            }
        }

        let mut spline = Self {
            knots: knots.to_vec(),
            a: Vec::with_capacity(n - 1),
            b: Vec::with_capacity(n - 1),
            c: Vec::with_capacity(n - 1),
            d: Vec::with_capacity(n - 1),
        };

        for i in 0..n - 1 {
            spline.a.push(values[i]);
            spline.b.push(
                (values[i + 1] - values[i]) / h[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0
            );
            spline.c.push(m[i] / 2.0);
            spline.d.push((m[i + 1] - m[i]) / (6.0 * h[i]));
        }

        spline
    }

    /// Segment index and offset into the segment for the parameter `t`.
    ///
    /// Parameters before the first or after the last knot extrapolate the end
    /// segments.
    fn segment(&self, t: f64) -> (usize, f64) {
        let i = self.knots
            .partition_point(|k| *k <= t)
            .saturating_sub(1)
            .min(self.a.len() - 1);

        (i, t - self.knots[i])
    }

    fn value(&self, t: f64) -> f64 {
        let (i, dt) = self.segment(t);
        self.a[i] + dt * (self.b[i] + dt * (self.c[i] + dt * self.d[i]))
    }

    fn derivative(&self, t: f64) -> f64 {
        let (i, dt) = self.segment(t);
        self.b[i] + dt * (2.0 * self.c[i] + 3.0 * dt * self.d[i])
    }

    fn second_derivative(&self, t: f64) -> f64 {
        let (i, dt) = self.segment(t);
        2.0 * self.c[i] + 6.0 * dt * self.d[i]
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Linearly interpolate `ys` at `x` in the increasing table `xs`.
fn interp(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let i = xs
        .partition_point(|v| *v <= x)
        .saturating_sub(1)
        .min(xs.len() - 2);

    let span = xs[i + 1] - xs[i];
    if span <= 0.0 {
        return ys[i];
    }

    ys[i] + (ys[i + 1] - ys[i]) * (x - xs[i]) / span
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_straight_line() -> Result<(), SplineError> {
        let spline = ArcLengthSpline::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 0.0, 0.0, 0.0])?;

        assert_relative_eq!(spline.length(), 3.0, epsilon = 1e-9);
        assert_relative_eq!(spline.position(1.5), Vector2::new(1.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(spline.first_derivative(2.2), Vector2::new(1.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(spline.second_derivative(0.7), Vector2::zeros(), epsilon = 1e-9);

        // Out of domain is clamped onto the ends
        assert_relative_eq!(spline.position(-2.0), Vector2::new(0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(spline.position(10.0), Vector2::new(3.0, 0.0), epsilon = 1e-9);

        Ok(())
    }

    #[test]
    fn test_half_circle() -> Result<(), SplineError> {
        let radius_m = 5.0;
        let angles: Vec<f64> = (0..=40).map(|i| PI * i as f64 / 40.0).collect();
        let xs: Vec<f64> = angles.iter().map(|a| radius_m * a.cos()).collect();
        let ys: Vec<f64> = angles.iter().map(|a| radius_m * a.sin()).collect();

        let spline = ArcLengthSpline::new(&xs, &ys)?;
        let half_m = spline.length() / 2.0;

        assert_relative_eq!(spline.length(), PI * radius_m, max_relative = 1e-3);
        assert_relative_eq!(spline.position(half_m), Vector2::new(0.0, radius_m), epsilon = 1e-2);

        // Parameterised by arc length so the tangent has unit length
        assert_relative_eq!(spline.first_derivative(half_m).norm(), 1.0, epsilon = 1e-2);

        // Second derivative points at the centre with magnitude 1/R
        let dd = spline.second_derivative(half_m);
        assert_relative_eq!(dd, Vector2::new(0.0, -1.0 / radius_m), epsilon = 1e-2);

        Ok(())
    }

    #[test]
    fn test_invalid_points() {
        match ArcLengthSpline::new(&[0.0], &[0.0]) {
            Err(SplineError::TooFewPoints(1)) => (),
            other => panic!("Expected TooFewPoints, got {:?}", other)
        }

        match ArcLengthSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]) {
            Err(SplineError::MismatchedLengths(3, 2)) => (),
            other => panic!("Expected MismatchedLengths, got {:?}", other)
        }

        match ArcLengthSpline::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 1.0]) {
            Err(SplineError::CoincidentPoints(2)) => (),
            other => panic!("Expected CoincidentPoints, got {:?}", other)
        }
    }
}
