//! Contouring and lag error

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::{RowVector2, SMatrix};

// Internal
use super::Cost;
use crate::model::{State, NX, SI_INDEX};
use crate::track::ArcLengthPath;

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// Jacobian of the (contouring, lag) error with respect to the state.
pub type ErrorJacobian = SMatrix<f64, 2, NX>;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The errors between the vehicle and the reference point at the vehicle's
/// progress, and their derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// Contouring error (element 0) and lag error (element 1).
    ///
    /// Units: meters
    pub error: RowVector2<f64>,

    /// Jacobian of `error` with respect to the state. Only the X, Y and s
    /// columns are non-zero.
    pub d_error: ErrorJacobian,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Compute the contouring and lag errors of the state `x` and their
    /// Jacobian.
    ///
    /// The contouring error is the offset perpendicular to the path and the
    /// lag error the offset along it, measured from the vehicle to the
    /// reference point at `x.s_m`.
    pub fn get_error_info<P>(&self, track: &P, x: &State) -> ErrorInfo
    where
        P: ArcLengthPath + ?Sized
    {
        let tp = self.get_ref_point(track, x.s_m);
        let (sin_t, cos_t) = tp.theta_ref.sin_cos();

        let dx_m = tp.x_ref - x.x_m;
        let dy_m = tp.y_ref - x.y_m;

        let contouring_error = -sin_t * dx_m + cos_t * dy_m;
        let lag_error = cos_t * dx_m + sin_t * dy_m;

        // Partial derivatives w.r.t. s, through both the reference position
        // and the reference heading
        let d_contouring_error =
            - tp.dtheta_ref * cos_t * dx_m
            - tp.dtheta_ref * sin_t * dy_m
            - tp.dx_ref * sin_t
            + tp.dy_ref * cos_t;
        let d_lag_error =
            - tp.dtheta_ref * sin_t * dx_m
            + tp.dtheta_ref * cos_t * dy_m
            + tp.dx_ref * cos_t
            + tp.dy_ref * sin_t;

        let mut d_error = ErrorJacobian::zeros();

        d_error[(0, SI_INDEX.x)] = sin_t;
        d_error[(0, SI_INDEX.y)] = -cos_t;
        d_error[(0, SI_INDEX.s)] = d_contouring_error;

        d_error[(1, SI_INDEX.x)] = -cos_t;
        d_error[(1, SI_INDEX.y)] = -sin_t;
        d_error[(1, SI_INDEX.s)] = d_lag_error;

        ErrorInfo {
            error: RowVector2::new(contouring_error, lag_error),
            d_error,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
