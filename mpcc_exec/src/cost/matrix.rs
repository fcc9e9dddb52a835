//! Quadratic cost bundle

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::{SMatrix, SVector};
use serde::Serialize;
use std::ops::Add;

// Internal
use crate::model::{InputVector, SlackVector, StateVector, NS, NU, NX};

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// Quadratic state cost (Q).
pub type QMat = SMatrix<f64, NX, NX>;

/// Quadratic input cost (R).
pub type RMat = SMatrix<f64, NU, NU>;

/// State-input cross cost (S).
pub type SMat = SMatrix<f64, NX, NU>;

/// Linear state cost (q).
pub type QVec = SVector<f64, NX>;

/// Linear input cost (r).
pub type RVec = SVector<f64, NU>;

/// Quadratic slack cost (Z).
pub type ZMat = SMatrix<f64, NS, NS>;

/// Linear slack cost (z).
pub type ZVec = SVector<f64, NS>;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The quadratic cost of one stage.
///
/// The matrices follow the solver convention
/// `0.5 x'Qx + q'x + 0.5 u'Ru + r'u + x'Su + 0.5 s'Zs + z's`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostMatrix {
    pub q_mat: QMat,
    pub r_mat: RMat,
    pub s_mat: SMat,
    pub q_vec: QVec,
    pub r_vec: RVec,
    pub z_mat: ZMat,
    pub z_vec: ZVec,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl CostMatrix {
    /// A cost with every block set to zero.
    pub fn zeros() -> Self {
        Self {
            q_mat: QMat::zeros(),
            r_mat: RMat::zeros(),
            s_mat: SMat::zeros(),
            q_vec: QVec::zeros(),
            r_vec: RVec::zeros(),
            z_mat: ZMat::zeros(),
            z_vec: ZVec::zeros(),
        }
    }

    /// Return a copy with Q replaced by `0.5 (Q + Q')`.
    pub fn symmetrised(mut self) -> Self {
        self.q_mat = 0.5 * (self.q_mat.transpose() + self.q_mat);
        self
    }

    /// Value of the quadratic cost at the given state, input and slacks.
    pub fn evaluate(&self, x: &StateVector, u: &InputVector, slack: &SlackVector) -> f64 {
        0.5 * (x.transpose() * self.q_mat * x)[0]
            + self.q_vec.dot(x)
            + 0.5 * (u.transpose() * self.r_mat * u)[0]
            + self.r_vec.dot(u)
            + (x.transpose() * self.s_mat * u)[0]
            + 0.5 * (slack.transpose() * self.z_mat * slack)[0]
            + self.z_vec.dot(slack)
    }
}

impl Add for CostMatrix {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            q_mat: self.q_mat + rhs.q_mat,
            r_mat: self.r_mat + rhs.r_mat,
            s_mat: self.s_mat + rhs.s_mat,
            q_vec: self.q_vec + rhs.q_vec,
            r_vec: self.r_vec + rhs.r_vec,
            z_mat: self.z_mat + rhs.z_mat,
            z_vec: self.z_vec + rhs.z_vec,
        }
    }
}
