//! Reference point lookup

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::Cost;
use crate::track::ArcLengthPath;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The heading rate is only computed when the squared norm of the second
/// derivative is at least this value, otherwise it is reported as zero.
pub const DTHETA_DENOM_THRESHOLD: f64 = 1.0;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Geometry of the reference path at one arc length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct TrackPoint {
    /// Reference X position
    pub x_ref: f64,

    /// Reference Y position
    pub y_ref: f64,

    /// Derivative of the X position w.r.t. arc length
    pub dx_ref: f64,

    /// Derivative of the Y position w.r.t. arc length
    pub dy_ref: f64,

    /// Heading of the path, `atan2(dy_ref, dx_ref)`
    pub theta_ref: f64,

    /// Rate of change of the heading w.r.t. arc length
    pub dtheta_ref: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Compute the geometry of the track at arc length `s`.
    ///
    /// The heading rate is `(dx*ddy - dy*ddx) / (ddx^2 + ddy^2)` when
    /// `ddx^2 + ddy^2 >= DTHETA_DENOM_THRESHOLD`, and exactly zero otherwise.
    pub fn get_ref_point<P>(&self, track: &P, s: f64) -> TrackPoint
    where
        P: ArcLengthPath + ?Sized
    {
        let pos_ref = track.position(s);
        let dpos_ref = track.first_derivative(s);
        let ddpos_ref = track.second_derivative(s);

        let dx_ref = dpos_ref[0];
        let dy_ref = dpos_ref[1];
        let ddx_ref = ddpos_ref[0];
        let ddy_ref = ddpos_ref[1];

        let denom = ddx_ref * ddx_ref + ddy_ref * ddy_ref;
        let dtheta_ref = if denom >= DTHETA_DENOM_THRESHOLD {
            (dx_ref * ddy_ref - dy_ref * ddx_ref) / denom
        }
        else {
            0.0
        };

        TrackPoint {
            x_ref: pos_ref[0],
            y_ref: pos_ref[1],
            dx_ref,
            dy_ref,
            theta_ref: dy_ref.atan2(dx_ref),
            dtheta_ref,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
