//! Soft constraint cost

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{Cost, CostMatrix, ZMat, ZVec};
use crate::model::SI_INDEX;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cost {
    /// Build the quadratic and linear penalties on the slack variables.
    pub fn get_soft_constraint_cost(&self) -> CostMatrix {
        let mut z_mat = ZMat::identity();
        let mut z_vec = ZVec::repeat(1.0);

        z_mat[(SI_INDEX.con_track, SI_INDEX.con_track)] = self.params.sc_quad_track;
        z_mat[(SI_INDEX.con_tire, SI_INDEX.con_tire)] = self.params.sc_quad_tire;
        z_mat[(SI_INDEX.con_alpha, SI_INDEX.con_alpha)] = self.params.sc_quad_alpha;

        z_vec[SI_INDEX.con_track] = self.params.sc_lin_track;
        z_vec[SI_INDEX.con_tire] = self.params.sc_lin_tire;
        z_vec[SI_INDEX.con_alpha] = self.params.sc_lin_alpha;

        CostMatrix {
            z_mat,
            z_vec,
            ..CostMatrix::zeros()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cost::{CostParams, QMat};
    use crate::model::NS;

    #[test]
    fn test_mirrors_weights() {
        let params = CostParams {
            sc_quad_track: 100.0,
            sc_quad_tire: 10.0,
            sc_quad_alpha: 0.0,
            sc_lin_track: 5.0,
            sc_lin_tire: 1.0,
            sc_lin_alpha: 0.5,
            ..Default::default()
        };
        let cost = Cost::new(params, 10).get_soft_constraint_cost();

        assert_eq!(cost.z_mat[(SI_INDEX.con_track, SI_INDEX.con_track)], 100.0);
        assert_eq!(cost.z_mat[(SI_INDEX.con_tire, SI_INDEX.con_tire)], 10.0);
        assert_eq!(cost.z_mat[(SI_INDEX.con_alpha, SI_INDEX.con_alpha)], 0.0);
        assert_eq!(cost.z_vec[SI_INDEX.con_track], 5.0);
        assert_eq!(cost.z_vec[SI_INDEX.con_tire], 1.0);
        assert_eq!(cost.z_vec[SI_INDEX.con_alpha], 0.5);

        for i in 0..NS {
            for j in 0..NS {
                if i != j {
                    assert_eq!(cost.z_mat[(i, j)], 0.0);
                }
            }
        }

        assert_eq!(cost.q_mat, QMat::zeros());
    }
}
