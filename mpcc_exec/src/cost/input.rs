//! Input cost

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{Cost, CostMatrix};
use crate::model::SI_INDEX;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Build the cost on the "real" inputs and their rates of change.
    ///
    /// The drive command, steering angle and progress rate are states of the
    /// model, so their weights go into Q. Their rates of change are the
    /// actual inputs and go into R.
    pub fn get_input_cost(&self) -> CostMatrix {
        let mut cost = CostMatrix::zeros();

        cost.q_mat[(SI_INDEX.d, SI_INDEX.d)] = self.params.r_d;
        cost.q_mat[(SI_INDEX.delta, SI_INDEX.delta)] = self.params.r_delta;
        cost.q_mat[(SI_INDEX.vs, SI_INDEX.vs)] = self.params.r_vs;

        cost.r_mat[(SI_INDEX.dd, SI_INDEX.dd)] = self.params.r_dd;
        cost.r_mat[(SI_INDEX.d_delta, SI_INDEX.d_delta)] = self.params.r_d_delta;
        cost.r_mat[(SI_INDEX.d_vs, SI_INDEX.d_vs)] = self.params.r_d_vs;

        // Solver interface expects 0.5 x'Qx and 0.5 u'Ru
        cost.q_mat *= 2.0;
        cost.r_mat *= 2.0;

        cost
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cost::{CostParams, QMat, RMat};

    fn params() -> CostParams {
        CostParams {
            r_d: 1e-4,
            r_delta: 3e-4,
            r_vs: 5e-4,
            r_dd: 0.01,
            r_d_delta: 1.0,
            r_d_vs: 7e-4,
            ..Default::default()
        }
    }

    #[test]
    fn test_diagonals() {
        let cost = Cost::new(params(), 10).get_input_cost();

        let mut q_expected = QMat::zeros();
        q_expected[(SI_INDEX.d, SI_INDEX.d)] = 2.0 * 1e-4;
        q_expected[(SI_INDEX.delta, SI_INDEX.delta)] = 2.0 * 3e-4;
        q_expected[(SI_INDEX.vs, SI_INDEX.vs)] = 2.0 * 5e-4;
        assert_eq!(cost.q_mat, q_expected);

        let mut r_expected = RMat::zeros();
        r_expected[(SI_INDEX.dd, SI_INDEX.dd)] = 2.0 * 0.01;
        r_expected[(SI_INDEX.d_delta, SI_INDEX.d_delta)] = 2.0 * 1.0;
        r_expected[(SI_INDEX.d_vs, SI_INDEX.d_vs)] = 2.0 * 7e-4;
        assert_eq!(cost.r_mat, r_expected);

        assert_eq!(cost.q_vec.norm(), 0.0);
        assert_eq!(cost.r_vec.norm(), 0.0);
        assert_eq!(cost.s_mat.norm(), 0.0);
    }

    #[test]
    fn test_each_weight_scales_own_entry() {
        let base = Cost::new(params(), 10).get_input_cost();

        // State-side weights live in Q
        let state_weights: [(fn(&mut CostParams), usize); 3] = [
            (|p| p.r_d *= 2.0, SI_INDEX.d),
            (|p| p.r_delta *= 2.0, SI_INDEX.delta),
            (|p| p.r_vs *= 2.0, SI_INDEX.vs),
        ];

        for (scale, idx) in state_weights.iter() {
            let mut p = params();
            scale(&mut p);
            let scaled = Cost::new(p, 10).get_input_cost();

            let mut expected = base.q_mat;
            expected[(*idx, *idx)] *= 2.0;
            assert_eq!(scaled.q_mat, expected, "Q offset {}", idx);
            assert_eq!(scaled.r_mat, base.r_mat);
        }

        // Rate weights live in R
        let rate_weights: [(fn(&mut CostParams), usize); 3] = [
            (|p| p.r_dd *= 2.0, SI_INDEX.dd),
            (|p| p.r_d_delta *= 2.0, SI_INDEX.d_delta),
            (|p| p.r_d_vs *= 2.0, SI_INDEX.d_vs),
        ];

        for (scale, idx) in rate_weights.iter() {
            let mut p = params();
            scale(&mut p);
            let scaled = Cost::new(p, 10).get_input_cost();

            let mut expected = base.r_mat;
            expected[(*idx, *idx)] *= 2.0;
            assert_eq!(scaled.r_mat, expected, "R offset {}", idx);
            assert_eq!(scaled.q_mat, base.q_mat);
        }
    }
}
