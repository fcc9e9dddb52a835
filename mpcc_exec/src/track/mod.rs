//! # Track module
//!
//! The reference path the controller follows. The cost only ever queries the
//! path through [`ArcLengthPath`], any representation which can report its
//! position and first two derivatives at a given arc length can be used.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod spline;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use spline::*;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A 2D path parameterised by arc length.
///
/// The behaviour for `s` outside of `[0, length()]` is up to the implementor.
pub trait ArcLengthPath {
    /// Position of the path at arc length `s`.
    ///
    /// Units: meters
    fn position(&self, s: f64) -> Vector2<f64>;

    /// First derivative of the position with respect to arc length.
    fn first_derivative(&self, s: f64) -> Vector2<f64>;

    /// Second derivative of the position with respect to arc length.
    ///
    /// Units: 1/meters
    fn second_derivative(&self, s: f64) -> Vector2<f64>;

    /// Total length of the path.
    ///
    /// Units: meters
    fn length(&self) -> f64;
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while building a spline.
#[derive(Debug, thiserror::Error)]
pub enum SplineError {
    #[error("At least 2 points are needed to build a spline, found {0}")]
    TooFewPoints(usize),

    #[error("The X and Y coordinates have different lengths ({0} and {1})")]
    MismatchedLengths(usize, usize),

    #[error("Point {0} is coincident with the point before it")]
    CoincidentPoints(usize),
}
