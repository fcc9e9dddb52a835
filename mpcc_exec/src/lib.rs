//! # MPCC library.
//!
//! This library allows other crates in the workspace (and the benchmarks) to access items defined
//! inside the MPCC crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Cost module - builds the quadratic cost of each stage of the horizon
pub mod cost;

/// Model definitions - dimensions, index table and the named state and input
pub mod model;

/// Track module - the arc length parameterised reference path
pub mod track;
