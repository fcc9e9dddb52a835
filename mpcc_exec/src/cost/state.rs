//! Cost module state and stage assembly

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};

// Internal
use super::{CostError, CostMatrix, CostParams};
use crate::model::State;
use crate::track::ArcLengthPath;
use util::params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Builds the quadratic cost of each stage of the horizon.
///
/// Holds only read-only data, so a single instance can be shared between
/// threads evaluating different stages.
#[derive(Debug, Clone)]
pub struct Cost {
    pub(super) params: CostParams,

    /// Length of the horizon, the index of the terminal stage.
    pub(super) horizon_len: usize,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Create a new cost from the given parameters for a horizon of
    /// `horizon_len` stages (stage indices `0..=horizon_len`).
    pub fn new(params: CostParams, horizon_len: usize) -> Self {
        debug!("Cost initialised for a horizon of {} stages", horizon_len);

        Self { params, horizon_len }
    }

    /// Create a new cost, loading the parameters from the given parameter file.
    pub fn init(params_path: &str, horizon_len: usize) -> Result<Self, CostError> {
        let params = params::load(params_path).map_err(CostError::ParamLoadError)?;

        Ok(Self::new(params, horizon_len))
    }

    /// The parameters in use.
    pub fn params(&self) -> &CostParams {
        &self.params
    }

    /// Index of the terminal stage.
    pub fn horizon_len(&self) -> usize {
        self.horizon_len
    }

    /// True if `k` is the terminal stage (or beyond it).
    pub(super) fn is_terminal(&self, k: usize) -> bool {
        k >= self.horizon_len
    }

    /// Build the quadratic cost of stage `k` about the state `x`.
    ///
    /// # Preconditions
    ///
    /// - `x.vx_ms` must be bounded away from zero, see
    ///   [`Cost::get_beta_cost`].
    pub fn get_cost<P>(&self, track: &P, x: &State, k: usize) -> CostMatrix
    where
        P: ArcLengthPath + ?Sized
    {
        let contouring_cost = self.get_contouring_cost(track, x, k);
        let input_cost = self.get_input_cost();
        let beta_cost = self.get_beta_cost(x);
        let soft_con_cost = self.get_soft_constraint_cost();

        // No block models a state-input cross term, so S stays zero
        let cost = contouring_cost + input_cost + beta_cost + soft_con_cost;

        trace!(
            "Stage {} cost: Q trace {:.4}, q norm {:.4}",
            k,
            cost.q_mat.trace(),
            cost.q_vec.norm()
        );

        cost.symmetrised()
    }

    /// Build the cost of every stage, where `states[k]` is the state of stage
    /// `k`.
    ///
    /// With the `parallel` feature the stages are evaluated on the rayon
    /// thread pool. The result is identical either way.
    pub fn get_horizon_cost<P>(&self, track: &P, states: &[State]) -> Vec<CostMatrix>
    where
        P: ArcLengthPath + Sync + ?Sized
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
            states
                .par_iter()
                .enumerate()
                .map(|(k, x)| self.get_cost(track, x, k))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            states
                .iter()
                .enumerate()
                .map(|(k, x)| self.get_cost(track, x, k))
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::cost::test_paths::{Circle, Straight};
    use crate::cost::SMat;
    use crate::track::ArcLengthSpline;
    use crate::model::SI_INDEX;
    use approx::assert_relative_eq;

    fn params() -> CostParams {
        CostParams {
            q_c: 0.1,
            q_c_n_mult: 10.0,
            q_l: 1000.0,
            q_vs: 0.02,
            q_r: 1e-5,
            q_r_n_mult: 1.0,
            q_beta: 0.01,
            r_d: 1e-4,
            r_delta: 1e-4,
            r_vs: 1e-4,
            r_dd: 0.01,
            r_d_delta: 1.0,
            r_d_vs: 1e-4,
            sc_quad_track: 100.0,
            sc_quad_tire: 1.0,
            sc_quad_alpha: 10.0,
            sc_lin_track: 0.0,
            sc_lin_tire: 1.0,
            sc_lin_alpha: 0.5,
        }
    }

    fn states(num: usize) -> Vec<State> {
        (0..num)
            .map(|k| {
                let k = k as f64;
                State {
                    x_m: 0.1 * k,
                    y_m: 0.3 - 0.05 * k,
                    phi_rad: 0.2 * k,
                    vx_ms: 2.0 + 0.1 * k,
                    vy_ms: 0.3 - 0.07 * k,
                    r_rads: 0.4,
                    s_m: 0.12 * k,
                    d: 0.3,
                    delta_rad: -0.05,
                    vs_ms: 2.0,
                }
            })
            .collect()
    }

    #[test]
    fn test_q_is_symmetric() {
        let cost = Cost::new(params(), 12);
        let track = Circle { radius_m: 0.5 };

        for (k, x) in states(13).iter().enumerate() {
            let c = cost.get_cost(&track, x, k);
            assert_eq!(c.q_mat, c.q_mat.transpose());
            assert_eq!(c.s_mat, SMat::zeros());
        }
    }

    #[test]
    fn test_sum_of_blocks() {
        let cost = Cost::new(params(), 12);
        let track = Circle { radius_m: 0.5 };
        let x = states(4)[3];

        let c = cost.get_cost(&track, &x, 3);
        let contouring = cost.get_contouring_cost(&track, &x, 3);
        let input = cost.get_input_cost();
        let beta = cost.get_beta_cost(&x);
        let soft_con = cost.get_soft_constraint_cost();

        assert_relative_eq!(
            c.q_mat,
            contouring.q_mat + input.q_mat + beta.q_mat,
            epsilon = 1e-12
        );
        assert_eq!(c.r_mat, input.r_mat);
        assert_eq!(c.q_vec, contouring.q_vec + input.q_vec + beta.q_vec);
        assert_eq!(c.z_mat, soft_con.z_mat);
        assert_eq!(c.z_vec, soft_con.z_vec);
    }

    #[test]
    fn test_positive_semi_definite() {
        let cost = Cost::new(params(), 12);
        let track = Circle { radius_m: 0.5 };

        for (k, x) in states(13).iter().enumerate() {
            let eigs = cost.get_cost(&track, x, k).q_mat.symmetric_eigenvalues();
            assert!(eigs.iter().all(|e| *e > -1e-9), "Stage {} eigenvalues {}", k, eigs);
        }
    }

    #[test]
    fn test_end_to_end_straight() {
        let cost = Cost::new(params(), 12);
        let track = Straight { heading_rad: 0.0 };
        let x = State { x_m: 0.0, y_m: 1.0, s_m: 0.0, vx_ms: 10.0, vy_ms: 0.0, ..Default::default() };

        let info = cost.get_error_info(&track, &x);
        assert_relative_eq!(info.error[0].abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(info.error[1], 0.0, epsilon = 1e-12);

        // No slip so the slip angle adds nothing to the linear term, and the
        // error is zero at the origin so the contouring adds nothing either
        let c = cost.get_cost(&track, &x, 0);
        let mut q_expected = crate::cost::QVec::zeros();
        q_expected[SI_INDEX.vs] = -cost.params().q_vs;
        assert_relative_eq!(c.q_vec, q_expected, epsilon = 1e-12);
    }

    #[test]
    fn test_horizon_matches_stages() {
        let cost = Cost::new(params(), 12);
        let track = Circle { radius_m: 0.5 };
        let states = states(13);

        let horizon = cost.get_horizon_cost(&track, &states);
        assert_eq!(horizon.len(), cost.horizon_len() + 1);

        for (k, x) in states.iter().enumerate() {
            assert_eq!(horizon[k], cost.get_cost(&track, x, k));
        }

        // Terminal stage uses the scaled contouring weight
        assert_ne!(horizon[12].q_mat, cost.get_cost(&track, &states[12], 11).q_mat);
    }

    #[test]
    fn test_spline_track_gradient() {
        // Oval track, closed by repeating the first point
        let track = ArcLengthSpline::new(
            &[0.0, 1.0, 2.0, 2.8, 3.0, 2.8, 2.0, 1.0, 0.0, -0.8, -1.0, -0.8, 0.0],
            &[0.0, 0.0, 0.0, 0.2, 1.0, 1.8, 2.0, 2.0, 2.0, 1.8, 1.0, 0.2, 0.0],
        ).unwrap();
        let cost = Cost::new(params(), 40);

        // Stages along the track, offset to the left and slipping
        let states: Vec<State> = (0..=40)
            .map(|k| {
                let s_m = 0.03 * k as f64;
                let pos = track.position(s_m);
                let tangent = track.first_derivative(s_m);
                State {
                    x_m: pos[0] - 0.05 * tangent[1],
                    y_m: pos[1] + 0.05 * tangent[0],
                    phi_rad: tangent[1].atan2(tangent[0]),
                    vx_ms: 1.5,
                    vy_ms: 0.02,
                    s_m,
                    vs_ms: 1.5,
                    ..Default::default()
                }
            })
            .collect();

        let horizon = cost.get_horizon_cost(&track, &states);
        assert_eq!(horizon.len(), 41);

        for (k, (x, c)) in states.iter().zip(horizon.iter()).enumerate() {
            assert_eq!(c.q_mat, c.q_mat.transpose(), "Stage {}", k);

            // Only the contouring block touches X, Y and s, and its gradient
            // at the linearisation point is that of e'We
            let info = cost.get_error_info(&track, x);
            let grad = c.q_mat * x.to_vector() + c.q_vec;
            let expected = 2.0 * info.error * cost.contouring_weights(k) * info.d_error;

            for &i in &[SI_INDEX.x, SI_INDEX.y, SI_INDEX.s] {
                assert_relative_eq!(grad[i], expected[i], epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}
