//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
/// 
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()` if `lhs` is much smaller than `rhs.abs()` in
/// magnitude and `lhs < 0.0`.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}

/// Wrap an angle into the range [0, 2pi).
pub fn wrap_2pi<T>(value: T) -> T 
where
    T: Float
{
    match T::from(std::f64::consts::TAU) {
        Some(tau_t) => rem_euclid(value, tau_t),
        None => value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rem_euclid() {
        assert_eq!(rem_euclid(7.0f64, 4.0), 3.0);
        assert_eq!(rem_euclid(-1.0f64, 4.0), 3.0);
        assert_eq!(rem_euclid(-1.0f64, -4.0), 3.0);
        assert_eq!(rem_euclid(0.0f64, 4.0), 0.0);
    }

    #[test]
    fn test_wrap_2pi() {
        const TAU: f64 = std::f64::consts::TAU;
        const PI: f64 = std::f64::consts::PI;

        assert_eq!(wrap_2pi(1f64), 1f64);
        assert_eq!(wrap_2pi(TAU), 0f64);
        assert!((wrap_2pi(-PI) - PI).abs() < 1e-12);
        assert!((wrap_2pi(3.0 * TAU + 0.5) - 0.5).abs() < 1e-9);
    }
}
