//! Analytic paths used by the cost tests

use nalgebra::Vector2;

use crate::track::ArcLengthPath;

/// A straight line through the origin.
pub struct Straight {
    pub heading_rad: f64,
}

/// A circle about the origin, starting on the +X axis and running
/// anticlockwise.
pub struct Circle {
    pub radius_m: f64,
}

impl ArcLengthPath for Straight {
    fn position(&self, s: f64) -> Vector2<f64> {
        s * Vector2::new(self.heading_rad.cos(), self.heading_rad.sin())
    }

    fn first_derivative(&self, _s: f64) -> Vector2<f64> {
        Vector2::new(self.heading_rad.cos(), self.heading_rad.sin())
    }

    fn second_derivative(&self, _s: f64) -> Vector2<f64> {
        Vector2::zeros()
    }

    fn length(&self) -> f64 {
        f64::INFINITY
    }
}

impl ArcLengthPath for Circle {
    fn position(&self, s: f64) -> Vector2<f64> {
        let a = s / self.radius_m;
        self.radius_m * Vector2::new(a.cos(), a.sin())
    }

    fn first_derivative(&self, s: f64) -> Vector2<f64> {
        let a = s / self.radius_m;
        Vector2::new(-a.sin(), a.cos())
    }

    fn second_derivative(&self, s: f64) -> Vector2<f64> {
        let a = s / self.radius_m;
        Vector2::new(-a.cos(), -a.sin()) / self.radius_m
    }

    fn length(&self) -> f64 {
        std::f64::consts::TAU * self.radius_m
    }
}
