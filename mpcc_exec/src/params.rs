//! # MPCC Executable Parameters
//!
//! This module provide parameters for the MPCC executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct MpccExecParams {

    /// Number of stages in the horizon, the terminal stage has this index
    pub horizon_len: usize,

    /// Sampling time between two stages
    pub ts_s: f64,

    /// Progress speed used for the initial guess, also used as the forward
    /// velocity of the vehicle
    pub vs_ms: f64,

    /// Lateral offset of the initial guess from the track, positive to the left
    pub lateral_offset_m: f64,

    /// X coordinates of the track waypoints
    pub track_x_m: Vec<f64>,

    /// Y coordinates of the track waypoints
    pub track_y_m: Vec<f64>,
}
