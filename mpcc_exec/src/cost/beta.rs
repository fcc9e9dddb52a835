//! Side slip angle cost

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::SMatrix;

// Internal
use super::{Cost, CostMatrix};
use crate::model::{State, NX, SI_INDEX};

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// Jacobian of the slip angle with respect to the state.
pub type BetaJacobian = SMatrix<f64, 1, NX>;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Build the linearised cost on the side slip angle `beta = atan(vy/vx)`.
    ///
    /// The slip angle is expanded to first order about `x`,
    /// `beta ~ beta_0 + J x`, and the penalty `q_beta * beta^2` on the
    /// expansion gives `Q = 2 q_beta J'J` and `q = 2 q_beta beta_0 J'`.
    ///
    /// # Preconditions
    ///
    /// - `vx^2 + vy^2` must be bounded away from zero. The slip angle is not
    ///   defined for a vehicle at rest and the result will not be finite.
    pub fn get_beta_cost(&self, x: &State) -> CostMatrix {
        let (d_beta, beta_zero) = beta_linearisation(x);

        CostMatrix {
            q_mat: 2.0 * self.params.q_beta * d_beta.transpose() * d_beta,
            q_vec: self.params.q_beta * 2.0 * beta_zero * d_beta.transpose(),
            ..CostMatrix::zeros()
        }
    }
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Side slip angle `atan(vy/vx)` of the state `x`.
///
/// Units: radians
pub fn slip_angle(x: &State) -> f64 {
    (x.vy_ms / x.vx_ms).atan()
}

/// Jacobian of the slip angle and the zero order term of its linearisation
/// about `x`.
pub(super) fn beta_linearisation(x: &State) -> (BetaJacobian, f64) {
    let vx = x.vx_ms;
    let vy = x.vy_ms;
    let v_sq = vx * vx + vy * vy;

    let mut d_beta = BetaJacobian::zeros();
    d_beta[(0, SI_INDEX.vx)] = -vy / v_sq;
    d_beta[(0, SI_INDEX.vy)] = vx / v_sq;

    let beta_zero = slip_angle(x) - (d_beta * x.to_vector())[0];

    (d_beta, beta_zero)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
