//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module. Perceptual distance ([`ciede2000`]) is defined over this space.
//!
//! [`ciede2000`]: ../../ciede2000/fn.ciede2000.html

use crate::color::{Color, XYZColor};
use crate::consts::CIELAB_DELTA;
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis. By convention, this is usually between -128 and 127, with -128
    /// being fully green and 127 being fully magenta. Many values in that range are still outside
    /// the sRGB gamut.
    pub a: f64,
    /// The second opponent color axis, between -128 and 127 by convention for most visible colors.
    /// -128 is fully blue; 127 is fully yellow.
    pub b: f64,
}

impl CIELABColor {
    /// The chroma: distance from the neutral axis, `sqrt(a^2 + b^2)`.
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl Color for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB. Every CIELAB color in swatchgen is relative to
    /// D65, the sRGB white point: XYZ colors relative to any other illuminant are adapted first.
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |x: f64| {
            if x <= CIELAB_DELTA.powi(3) {
                x / (3.0 * CIELAB_DELTA * CIELAB_DELTA) + 4.0 / 29.0
            } else {
                x.cbrt()
            }
        };
        let white_point = Illuminant::D65.white_point();
        let xyz_adapted = xyz.color_adapt(Illuminant::D65);
        let fx = f(xyz_adapted.x / white_point[0]);
        let fy = f(xyz_adapted.y / white_point[1]);
        let fz = f(xyz_adapted.z / white_point[2]);

        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Returns an XYZ color that corresponds to the CIELAB color, adapted to the requested
    /// illuminant.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        // inverse of the nonlinearity in from_xyz
        let f_inv = |x: f64| {
            if x > CIELAB_DELTA {
                x * x * x
            } else {
                3.0 * CIELAB_DELTA * CIELAB_DELTA * (x - 4.0 / 29.0)
            }
        };
        let xyz_n = Illuminant::D65.white_point();
        let fy = (self.l + 16.0) / 116.0;
        XYZColor {
            x: xyz_n[0] * f_inv(fy + self.a / 500.0),
            y: xyz_n[1] * f_inv(fy),
            z: xyz_n[2] * f_inv(fy - self.b / 200.0),
            illuminant: Illuminant::D65,
        }
        .color_adapt(illuminant)
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(c: CIELABColor) -> Coord {
        Coord {
            x: c.l,
            y: c.a,
            z: c.b,
        }
    }
}
