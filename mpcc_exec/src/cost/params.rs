//! Cost parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Weights of the stage cost.
///
/// Values are used exactly as given, no checks are made on their sign or
/// magnitude.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CostParams {

    // ---- CONTOURING ----

    /// Contouring error weight
    pub q_c: f64,

    /// Multiplier applied to the contouring weight on the terminal stage
    pub q_c_n_mult: f64,

    /// Lag error weight
    pub q_l: f64,

    /// Linear reward on the progress rate
    pub q_vs: f64,

    /// Yaw rate regularisation weight
    pub q_r: f64,

    /// Multiplier applied to the yaw rate weight on the terminal stage
    pub q_r_n_mult: f64,

    /// Side slip angle weight
    pub q_beta: f64,

    // ---- INPUTS ----

    /// Drive command weight
    pub r_d: f64,

    /// Steering angle weight
    pub r_delta: f64,

    /// Progress rate weight
    pub r_vs: f64,

    /// Drive command rate weight
    pub r_dd: f64,

    /// Steering angle rate weight
    pub r_d_delta: f64,

    /// Progress rate rate weight
    pub r_d_vs: f64,

    // ---- SOFT CONSTRAINTS ----

    /// Quadratic weight on the track boundary slack
    pub sc_quad_track: f64,

    /// Quadratic weight on the tire friction ellipse slack
    pub sc_quad_tire: f64,

    /// Quadratic weight on the slip angle admissibility slack
    pub sc_quad_alpha: f64,

    /// Linear weight on the track boundary slack
    pub sc_lin_track: f64,

    /// Linear weight on the tire friction ellipse slack
    pub sc_lin_tire: f64,

    /// Linear weight on the slip angle admissibility slack
    pub sc_lin_alpha: f64,
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_shipped_params() {
        let params: CostParams = util::params::from_str(
            include_str!("../../../params/cost.toml")
        ).unwrap();

        assert_eq!(params.q_c, 0.1);
        assert_eq!(params.q_c_n_mult, 10.0);
        assert_eq!(params.q_l, 1000.0);
        assert_eq!(params.r_d_delta, 1.0);
        assert_eq!(params.sc_quad_track, 100.0);
        assert_eq!(params.sc_lin_alpha, 0.5);
    }

    #[test]
    fn test_missing_weight() {
        let result: Result<CostParams, _> = util::params::from_str("q_c = 0.1\n");
        assert!(matches!(result, Err(util::params::LoadError::DeserialiseError(_))));
    }
}
