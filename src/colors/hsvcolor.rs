//! This module implements the HSV color space, a cylindrical rearrangement of sRGB. Value is an
//! extraordinarily poor analog of luminance (dark purple is the same value as white, despite
//! reflecting one-tenth the light), but hue and saturation are easy to compute and easy to read,
//! which is why swatch sheets can be ordered by them and why the practical base palette is
//! specified in HSV.

use crate::color::{Color, RGBColor, XYZColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// An HSV color, defining parameters for hue, saturation, and value from the sRGB space.
/// # Example
/// ```
/// # use swatchgen::prelude::*;
/// # use swatchgen::colors::HSVColor;
/// let dark_red = HSVColor{h: 0., s: 1., v: 0.5};
/// assert_eq!(dark_red.convert::<RGBColor>().to_string(), "#800000");
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees.
    pub h: f64,
    /// The saturation, between 0 and 1: the distance between the color and the gray of the same
    /// value.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color.
    pub v: f64,
}

impl From<RGBColor> for HSVColor {
    fn from(rgb: RGBColor) -> HSVColor {
        // More info: https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation
        let max_c = rgb.r.max(rgb.g).max(rgb.b);
        let min_c = rgb.r.min(rgb.g).min(rgb.b);
        let chroma = max_c - min_c;

        let hue = if chroma == 0.0 {
            // undefined for grays, 0 by convention
            0.0
        } else if max_c == rgb.r {
            ((rgb.g - rgb.b) / chroma).rem_euclid(6.0) * 60.0
        } else if max_c == rgb.g {
            ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
        } else {
            ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
        };

        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };

        HSVColor {
            h: hue,
            s: saturation,
            v: max_c,
        }
    }
}

impl From<HSVColor> for RGBColor {
    fn from(hsv: HSVColor) -> RGBColor {
        let chroma = hsv.s * hsv.v;
        let h = hsv.h.rem_euclid(360.0);
        // second-largest component
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = hsv.v - chroma;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl Color for HSVColor {
    /// Converts to HSV by going through sRGB.
    fn from_xyz(xyz: XYZColor) -> HSVColor {
        HSVColor::from(RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        RGBColor::from(*self).to_xyz(illuminant)
    }
}

impl From<HSVColor> for Coord {
    fn from(c: HSVColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.v,
        }
    }
}
