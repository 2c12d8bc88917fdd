//! # Geometry Helpers
//!
//! Rectangle and circle measurements. Every function is total over `f64`;
//! negative or zero inputs go straight through the formula.
//!
//! ```rust
//! use tally_core::geometry::{area, circle_area, perimeter};
//!
//! assert_eq!(area(5.0, 10.0), 50.0);
//! assert_eq!(perimeter(5.0, 10.0), 30.0);
//! assert_eq!(circle_area(1.0), std::f64::consts::PI);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Area of a `width` × `height` rectangle.
#[inline]
pub fn area(width: f64, height: f64) -> f64 {
    width * height
}

/// Perimeter of a `width` × `height` rectangle.
#[inline]
pub fn perimeter(width: f64, height: f64) -> f64 {
    2.0 * (width + height)
}

/// Area of a circle: π r².
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Circumference of a circle: 2 π r.
#[inline]
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

// =============================================================================
// Shape Types
// =============================================================================

/// Anything with an area and a boundary length.
pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        area(self.width, self.height)
    }

    fn perimeter(&self) -> f64 {
        perimeter(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub const fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        circle_area(self.radius)
    }

    /// The circumference.
    fn perimeter(&self) -> f64 {
        circumference(self.radius)
    }
}
