//! Contouring cost

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Matrix2;

// Internal
use super::{Cost, CostMatrix};
use crate::model::{State, SI_INDEX};
use crate::track::ArcLengthPath;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Weights of the (contouring, lag) errors at stage `k`.
    ///
    /// Only the contouring weight is scaled on the terminal stage.
    pub fn contouring_weights(&self, k: usize) -> Matrix2<f64> {
        let q_c = if self.is_terminal(k) {
            self.params.q_c_n_mult * self.params.q_c
        }
        else {
            self.params.q_c
        };

        Matrix2::new(
            q_c, 0.0,
            0.0, self.params.q_l
        )
    }

    /// Yaw rate regularisation weight at stage `k`.
    pub fn yaw_rate_weight(&self, k: usize) -> f64 {
        if self.is_terminal(k) {
            self.params.q_r_n_mult * self.params.q_r
        }
        else {
            self.params.q_r
        }
    }

    /// Build the contouring cost of stage `k` about the state `x`.
    ///
    /// The error `e` is linearised as `e0 + J (x - x0)`, and the penalty
    /// `e'We` on the linearisation gives
    ///
    /// ```text
    /// Q = 2 J'WJ
    /// q = 2 (e0 W J - x0' J'WJ)'
    /// ```
    ///
    /// The yaw rate weight is added to the Q diagonal (before doubling) and
    /// the progress rate entry of q is set to `-q_vs`, rewarding progress.
    pub fn get_contouring_cost<P>(&self, track: &P, x: &State, k: usize) -> CostMatrix
    where
        P: ArcLengthPath + ?Sized
    {
        let x_vec = x.to_vector();
        let error_info = self.get_error_info(track, x);
        let weights = self.contouring_weights(k);

        let jwj = error_info.d_error.transpose() * weights * error_info.d_error;

        let mut q_mat = jwj;
        q_mat[(SI_INDEX.r, SI_INDEX.r)] += self.yaw_rate_weight(k);

        // Solver interface expects 0.5 x'Qx + q'x
        q_mat *= 2.0;

        let mut q_vec = (2.0 * error_info.error * weights * error_info.d_error
            - 2.0 * x_vec.transpose() * jwj)
            .transpose();

        q_vec[SI_INDEX.vs] = -self.params.q_vs;

        CostMatrix {
            q_mat,
            q_vec,
            ..CostMatrix::zeros()
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
