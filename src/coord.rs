//! This module contains a struct, [`Coord`](coord::Coord), that models a point in 3D space. Colors
//! project onto it component by component, which gives a common currency for clamping to a gamut
//! and for ordering colors lexicographically when laying out a swatch sheet.

use std::cmp::Ordering;

/// A point in 3D space.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any different in any method of
/// `Coord`, so the distinction between them is completely conventional. In swatchgen, any
/// [`Color`] that converts to a `Coord` will match its components with these axes in the order of
/// the letters in its name: for example, `CIELABColor` maps to a coordinate such that `l` is on the
/// x-axis, `a` is on the y-axis, and `b` is on the z-axis.
///
/// [`Color`]: ../color/trait.Color.html
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. This is *not* a perceptual difference, even in CIELAB:
    /// use [`Color::distance`] for that.
    ///
    /// [`Color::distance`]: ../color/trait.Color.html#method.distance
    /// # Example
    /// ```
    /// # use swatchgen::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// Compares two points axis by axis: first `x`, then `y` on ties, then `z`. Uses the IEEE total
    /// order, so NaN components sort deterministically instead of poisoning the comparison.
    /// # Example
    /// ```
    /// # use swatchgen::coord::Coord;
    /// # use std::cmp::Ordering;
    /// let dark = Coord{x: 10., y: 50., z: 0.};
    /// let light = Coord{x: 90., y: -50., z: 0.};
    /// assert_eq!(dark.lexicographic_cmp(&light), Ordering::Less);
    /// ```
    pub fn lexicographic_cmp(&self, other: &Coord) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }
}
