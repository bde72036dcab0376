//! This module describes the Bound trait, which allows for a description of what colors a color
//! gamut supports. For example, the sRGB gamut only supports channel values ranging from 0-1,
//! which is about 30% of the total visible range of human vision. Random walks in CIELAB, such as
//! the jittered variations of a base palette, routinely step outside of it.

use crate::color::{Color, RGBColor};
use crate::coord::Coord;

/// Describes a color space in which the total space of representable colors has explicit bounds
/// besides those imposed by human vision. For example, an sRGB color can't have negative values for
/// any of its components, whereas the CIELAB space can feasibly describe even those colors that
/// cannot be viewed by humans.
/// # Example
/// Bound a clearly-problematic color within sRGB.
///
/// ```
/// # use swatchgen::prelude::*;
/// # use swatchgen::colors::CIELABColor;
/// let out_of_bounds: RGBColor = CIELABColor{l: 1., a: 150., b: -150.}.convert();
/// let in_bounds = RGBColor::clamp(out_of_bounds);
/// assert!(in_bounds.r >= 0. && in_bounds.r <= 1.);
/// assert!(in_bounds.g >= 0. && in_bounds.g <= 1.);
/// assert!(in_bounds.b >= 0. && in_bounds.b <= 1.);
/// ```
pub trait Bound: Color + Into<Coord> + From<Coord> {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];

    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let [x, y, z] = Self::bounds();
        Coord {
            x: point.x.max(x.0).min(x.1),
            y: point.y.max(y.0).min(y.1),
            z: point.z.max(z.0).min(z.1),
        }
    }

    /// Returns `true` if every component already lies within the bounds.
    fn in_gamut(self) -> bool {
        let point: Coord = self.into();
        point == Self::clamp_coord(point)
    }

    /// Returns a copy of the color with each component clamped into the gamut. This is a per-axis
    /// clamp, not a perceptual gamut mapping: hue can shift for colors far outside.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}
