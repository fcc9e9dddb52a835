//! State, input and slack index table

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{NS, NU, NX};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Offsets of every named field inside the state, input and slack vectors.
///
/// State offsets index into a vector of length [`NX`], input offsets into one
/// of length [`NU`] and slack offsets into one of length [`NS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInputIndex {
    // ---- STATES ----
    pub x: usize,
    pub y: usize,
    pub phi: usize,
    pub vx: usize,
    pub vy: usize,
    pub r: usize,
    pub s: usize,
    pub d: usize,
    pub delta: usize,
    pub vs: usize,

    // ---- INPUTS ----
    pub dd: usize,
    pub d_delta: usize,
    pub d_vs: usize,

    // ---- SLACKS ----
    pub con_track: usize,
    pub con_tire: usize,
    pub con_alpha: usize,
}

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The index table shared by every component of the controller.
pub const SI_INDEX: StateInputIndex = StateInputIndex {
    x: 0,
    y: 1,
    phi: 2,
    vx: 3,
    vy: 4,
    r: 5,
    s: 6,
    d: 7,
    delta: 8,
    vs: 9,

    dd: 0,
    d_delta: 1,
    d_vs: 2,

    con_track: 0,
    con_tire: 1,
    con_alpha: 2,
};

// A malformed table is a build failure, not a runtime one.
const _: () = assert!(
    SI_INDEX.is_bijection(),
    "SI_INDEX must map each vector family one-to-one onto its offsets"
);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl StateInputIndex {
    /// State offsets in declaration order.
    pub const fn state_offsets(&self) -> [usize; NX] {
        [
            self.x, self.y, self.phi, self.vx, self.vy, 
            self.r, self.s, self.d, self.delta, self.vs,
        ]
    }

    /// Input offsets in declaration order.
    pub const fn input_offsets(&self) -> [usize; NU] {
        [self.dd, self.d_delta, self.d_vs]
    }

    /// Slack offsets in declaration order.
    pub const fn slack_offsets(&self) -> [usize; NS] {
        [self.con_track, self.con_tire, self.con_alpha]
    }

    /// True if the state, input and slack offsets are each a bijection onto
    /// `[0, NX)`, `[0, NU)` and `[0, NS)` respectively.
    pub const fn is_bijection(&self) -> bool {
        is_bijection(self.state_offsets())
            && is_bijection(self.input_offsets())
            && is_bijection(self.slack_offsets())
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Every offset is in range and no two offsets collide.
const fn is_bijection<const N: usize>(offsets: [usize; N]) -> bool {
    let mut seen = [false; N];
    let mut i = 0;

    while i < N {
        let o = offsets[i];
        if o >= N || seen[o] {
            return false;
        }
        seen[o] = true;
        i += 1;
    }

    true
}
