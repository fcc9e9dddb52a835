//! # Cost module
//!
//! Converts the nonlinear contouring objective into a quadratic cost for one
//! stage of the horizon, in the form expected by the QP solver:
//!
//! ```text
//! 0.5 x'Qx + q'x + 0.5 u'Ru + r'u + x'Su + 0.5 s'Zs + z's
//! ```
//!
//! The cost is made up of several blocks which are summed together:
//!
//! - Contouring and lag error. The errors are linearised about the current
//!   state, giving a quadratic cost on X, Y and s. A yaw rate regularisation
//!   term is added to the diagonal and a linear reward is placed on the
//!   progress rate.
//! - Side slip angle. The slip angle is linearised about the current
//!   velocities and its square penalised.
//! - Inputs. Quadratic costs on the "real" inputs (drive, steering and
//!   progress rate, which are part of the state) and on their rates of change
//!   (the actual inputs).
//! - Soft constraints. Quadratic and linear costs on each of the slack
//!   variables.
//!
//! All blocks are pure functions of the state, the track and the
//! parameters, so stages may be evaluated in any order or in parallel.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod beta;
mod contouring;
mod error_model;
mod input;
mod matrix;
mod params;
mod ref_point;
mod soft_con;
mod state;

#[cfg(test)]
mod test_paths;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use beta::{slip_angle, BetaJacobian};
pub use error_model::*;
pub use matrix::*;
pub use params::CostParams;
pub use ref_point::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while setting up the cost.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(util::params::LoadError),
}
