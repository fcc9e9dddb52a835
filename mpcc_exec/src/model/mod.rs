//! # Vehicle model definitions
//!
//! Fixed dimensions of the optimisation vectors, the shared index table that
//! maps named fields onto their offsets, and the named state and input
//! structures that are converted to and from those vectors.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod index;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use index::*;
pub use state::*;

use nalgebra::SVector;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of states (X, Y, phi, vx, vy, r, s, D, delta, vs).
pub const NX: usize = 10;

/// Number of inputs (dD, dDelta, dVs).
pub const NU: usize = 3;

/// Number of slack variables (track, tire, alpha).
pub const NS: usize = 3;

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// State as a column vector, ordered by [`SI_INDEX`].
pub type StateVector = SVector<f64, NX>;

/// Input as a column vector, ordered by [`SI_INDEX`].
pub type InputVector = SVector<f64, NU>;

/// Slack variables as a column vector, ordered by [`SI_INDEX`].
pub type SlackVector = SVector<f64, NS>;
