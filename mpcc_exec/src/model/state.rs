//! Named vehicle state and input

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use super::{InputVector, StateVector, SI_INDEX};
use util::maths::{rem_euclid, wrap_2pi};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The predicted vehicle state at one stage of the horizon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Global X position.
    ///
    /// Units: meters
    pub x_m: f64,

    /// Global Y position.
    ///
    /// Units: meters
    pub y_m: f64,

    /// Heading of the vehicle.
    ///
    /// Units: radians
    pub phi_rad: f64,

    /// Longitudinal velocity in the body frame.
    ///
    /// Units: meters/second
    pub vx_ms: f64,

    /// Lateral velocity in the body frame.
    ///
    /// Units: meters/second
    pub vy_ms: f64,

    /// Yaw rate.
    ///
    /// Units: radians/second
    pub r_rads: f64,

    /// Progress along the reference path (arc length).
    ///
    /// Units: meters
    pub s_m: f64,

    /// Normalised drive command.
    pub d: f64,

    /// Steering angle.
    ///
    /// Units: radians
    pub delta_rad: f64,

    /// Progress rate.
    ///
    /// Units: meters/second
    pub vs_ms: f64,
}

/// The rate-of-change inputs applied at one stage of the horizon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Rate of change of the drive command.
    pub dd: f64,

    /// Rate of change of the steering angle.
    pub d_delta: f64,

    /// Rate of change of the progress rate.
    pub d_vs: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State {
    /// Pack the state into a vector ordered by the shared index table.
    pub fn to_vector(&self) -> StateVector {
        let mut v = StateVector::zeros();

        v[SI_INDEX.x] = self.x_m;
        v[SI_INDEX.y] = self.y_m;
        v[SI_INDEX.phi] = self.phi_rad;
        v[SI_INDEX.vx] = self.vx_ms;
        v[SI_INDEX.vy] = self.vy_ms;
        v[SI_INDEX.r] = self.r_rads;
        v[SI_INDEX.s] = self.s_m;
        v[SI_INDEX.d] = self.d;
        v[SI_INDEX.delta] = self.delta_rad;
        v[SI_INDEX.vs] = self.vs_ms;

        v
    }

    /// Unpack a state from a vector ordered by the shared index table.
    pub fn from_vector(v: &StateVector) -> Self {
        Self {
            x_m: v[SI_INDEX.x],
            y_m: v[SI_INDEX.y],
            phi_rad: v[SI_INDEX.phi],
            vx_ms: v[SI_INDEX.vx],
            vy_ms: v[SI_INDEX.vy],
            r_rads: v[SI_INDEX.r],
            s_m: v[SI_INDEX.s],
            d: v[SI_INDEX.d],
            delta_rad: v[SI_INDEX.delta],
            vs_ms: v[SI_INDEX.vs],
        }
    }

    /// Wrap the heading into [0, 2pi) and the progress into
    /// [0, track_length), as required when driving laps of a closed track.
    pub fn unwrap(&mut self, track_length_m: f64) {
        self.phi_rad = wrap_2pi(self.phi_rad);
        self.s_m = rem_euclid(self.s_m, track_length_m);
    }
}

impl Input {
    /// Pack the input into a vector ordered by the shared index table.
    pub fn to_vector(&self) -> InputVector {
        let mut v = InputVector::zeros();

        v[SI_INDEX.dd] = self.dd;
        v[SI_INDEX.d_delta] = self.d_delta;
        v[SI_INDEX.d_vs] = self.d_vs;

        v
    }

    /// Unpack an input from a vector ordered by the shared index table.
    pub fn from_vector(v: &InputVector) -> Self {
        Self {
            dd: v[SI_INDEX.dd],
            d_delta: v[SI_INDEX.d_delta],
            d_vs: v[SI_INDEX.d_vs],
        }
    }
}
