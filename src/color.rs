//! This file defines the [`Color`] trait, the CIE XYZ hub every color space converts through, and
//! [`RGBColor`], the sRGB type that swatch pools are made of. Conversions always pass through
//! [`XYZColor`]: a space only has to know how to get to and from XYZ to interoperate with every
//! other space, and perceptual distance comes for free through CIELAB.
//!
//! [`Color`]: trait.Color.html
//! [`RGBColor`]: struct.RGBColor.html
//! [`XYZColor`]: struct.XYZColor.html

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use nalgebra::{Matrix3, Vector3};
use regex::Regex;

use crate::ciede2000::ciede2000;
use crate::colors::cielabcolor::CIELABColor;
use crate::consts::{inv, BRADFORD_TRANSFORM_MAT, STANDARD_RGB_TO_XYZ_MAT, STANDARD_XYZ_TO_RGB_MAT};
use crate::coord::Coord;
use crate::error::SwatchError;
use crate::illuminants::Illuminant;

/// A point in the CIE 1931 XYZ color space, relative to a given illuminant. Values are scaled so
/// that the reference white of that illuminant has Y = 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly the red response.
    pub x: f64,
    /// The Y axis, luminance.
    pub y: f64,
    /// The Z axis, roughly the blue response.
    pub z: f64,
    /// The illuminant these coordinates are relative to.
    pub illuminant: Illuminant,
}

impl XYZColor {
    /// Converts these coordinates so that they are relative to another illuminant, using the
    /// Bradford chromatic adaptation transform. Returns a copy if the illuminants already match.
    pub fn color_adapt(&self, other_illuminant: Illuminant) -> XYZColor {
        if self.illuminant == other_illuminant {
            return *self;
        }
        let bradford = BRADFORD_TRANSFORM_MAT();
        let src_wp = self.illuminant.white_point();
        let dst_wp = other_illuminant.white_point();
        // cone responses of both white points
        let src_cone = bradford * Vector3::new(src_wp[0], src_wp[1], src_wp[2]);
        let dst_cone = bradford * Vector3::new(dst_wp[0], dst_wp[1], dst_wp[2]);
        let scale = Matrix3::from_diagonal(&Vector3::new(
            dst_cone[0] / src_cone[0],
            dst_cone[1] / src_cone[1],
            dst_cone[2] / src_cone[2],
        ));
        let adapted = inv(bradford) * scale * bradford * Vector3::new(self.x, self.y, self.z);
        XYZColor {
            x: adapted[0],
            y: adapted[1],
            z: adapted[2],
            illuminant: other_illuminant,
        }
    }

    /// Returns `true` if every component is within `1e-6` of the other color's, once both are
    /// relative to the same illuminant.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        let other = other.color_adapt(self.illuminant);
        (self.x - other.x).abs() <= 1e-6
            && (self.y - other.y).abs() <= 1e-6
            && (self.z - other.z).abs() <= 1e-6
    }
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space.
pub trait Color: Sized {
    /// Converts from a color in CIE XYZ to this color space.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts this color to CIE XYZ, relative to the given illuminant.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor;

    /// Converts this color into any other color space. D65 is used as the intermediate
    /// illuminant, as that is what sRGB and CIELAB are defined against here.
    /// # Example
    /// ```
    /// # use swatchgen::prelude::*;
    /// # use swatchgen::colors::CIELABColor;
    /// let white = RGBColor{r: 1., g: 1., b: 1.};
    /// let lab: CIELABColor = white.convert();
    /// assert!((lab.l - 100.).abs() <= 1e-3);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz(Illuminant::D65))
    }

    /// The perceptual difference between two colors, as CIEDE2000 (ΔE00) between their CIELAB
    /// representations. 0 means identical; a difference of about 1 is the smallest most observers
    /// notice.
    /// # Example
    /// ```
    /// # use swatchgen::prelude::*;
    /// let black = RGBColor{r: 0., g: 0., b: 0.};
    /// let white = RGBColor{r: 1., g: 1., b: 1.};
    /// assert!((black.distance(&white) - 100.).abs() <= 1e-3);
    /// ```
    fn distance<T: Color>(&self, other: &T) -> f64 {
        let lab1: CIELABColor = self.convert();
        let lab2: CIELABColor = other.convert();
        ciede2000(&lab1, &lab2)
    }

    /// Returns `true` if the two colors are closer than one just-noticeable difference.
    fn visually_indistinguishable<T: Color>(&self, other: &T) -> bool {
        self.distance(other) <= 1.0
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        self.color_adapt(illuminant)
    }
}

/// A color in the sRGB space, with each channel between 0 and 1. This is the color type pools and
/// selections are expressed in, and the one written to CSV and PNG.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBColor {
    /// The red channel, between 0 and 1.
    pub r: f64,
    /// The green channel, between 0 and 1.
    pub g: f64,
    /// The blue channel, between 0 and 1.
    pub b: f64,
}

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

// sRGB transfer function and its inverse
fn srgb_decode(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_encode(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl RGBColor {
    /// Builds a color from 8-bit channel values.
    pub fn from_u8(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Rounds each channel to the nearest 8-bit value, clamping anything outside of [0, 1].
    pub fn to_u8(&self) -> [u8; 3] {
        let quantize = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Parses a hex code of the form `#rrggbb`, case-insensitive.
    /// # Example
    /// ```
    /// # use swatchgen::prelude::*;
    /// let tan = RGBColor::from_hex_code("#C2996B").unwrap();
    /// assert_eq!(tan.to_u8(), [194, 153, 107]);
    /// assert!(RGBColor::from_hex_code("C2996B").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, SwatchError> {
        let caps = HEX_CODE
            .captures(hex)
            .ok_or_else(|| SwatchError::ParseHex(hex.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| SwatchError::ParseHex(hex.to_string()))
        };
        Ok(RGBColor::from_u8(channel(1)?, channel(2)?, channel(3)?))
    }
}

impl Color for RGBColor {
    /// Converts XYZ to linear sRGB with the standard D65 matrix and applies the sRGB transfer
    /// curve. Out-of-gamut colors keep their out-of-range channels: clamp with [`Bound`] if needed.
    ///
    /// [`Bound`]: ../bound/trait.Bound.html
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let xyz_d65 = xyz.color_adapt(Illuminant::D65);
        let linear = STANDARD_XYZ_TO_RGB_MAT() * Vector3::new(xyz_d65.x, xyz_d65.y, xyz_d65.z);
        // the transfer curve is odd-symmetric, which keeps negative channels meaningful
        let encode = |c: f64| c.signum() * srgb_encode(c.abs());
        RGBColor {
            r: encode(linear[0]),
            g: encode(linear[1]),
            b: encode(linear[2]),
        }
    }

    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let decode = |c: f64| c.signum() * srgb_decode(c.abs());
        let linear = Vector3::new(decode(self.r), decode(self.g), decode(self.b));
        let xyz = STANDARD_RGB_TO_XYZ_MAT() * linear;
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
            illuminant: Illuminant::D65,
        }
        .color_adapt(illuminant)
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(c: RGBColor) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b] = self.to_u8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl FromStr for RGBColor {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<RGBColor, SwatchError> {
        RGBColor::from_hex_code(s.trim())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_xyz_roundtrip() {
        let rgb = RGBColor {
            r: 0.2,
            g: 0.6,
            b: 0.9,
        };
        let rgb2: RGBColor = rgb.convert();
        assert!((rgb.r - rgb2.r).abs() <= 1e-9);
        assert!((rgb.g - rgb2.g).abs() <= 1e-9);
        assert!((rgb.b - rgb2.b).abs() <= 1e-9);
    }

    #[test]
    fn test_white_is_d65() {
        let white = RGBColor {
            r: 1.,
            g: 1.,
            b: 1.,
        };
        let xyz = white.to_xyz(Illuminant::D65);
        assert!((xyz.x - 0.95047).abs() <= 1e-4);
        assert!((xyz.y - 1.0).abs() <= 1e-4);
        assert!((xyz.z - 1.08883).abs() <= 1e-4);
    }

    #[test]
    fn test_chromatic_adaptation_roundtrip() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.2,
            z: 0.6,
            illuminant: Illuminant::D65,
        };
        let d50 = xyz.color_adapt(Illuminant::D50);
        assert_eq!(d50.illuminant, Illuminant::D50);
        assert!((d50.z - xyz.z).abs() > 1e-2);
        assert!(d50.color_adapt(Illuminant::D65).approx_equal(&xyz));
        // the white point maps onto the other white point
        let white = XYZColor {
            x: 0.95047,
            y: 1.0,
            z: 1.08883,
            illuminant: Illuminant::D65,
        };
        let white_d50 = white.color_adapt(Illuminant::D50);
        assert!((white_d50.x - 0.96422).abs() <= 1e-4);
        assert!((white_d50.y - 1.0).abs() <= 1e-4);
        assert!((white_d50.z - 0.82521).abs() <= 1e-4);
    }

    #[test]
    fn test_hex_codes() {
        let color: RGBColor = "#11457c".parse().unwrap();
        assert_eq!(color.to_u8(), [0x11, 0x45, 0x7c]);
        assert_eq!(color.to_string(), "#11457C");
        assert!(RGBColor::from_hex_code("#11457").is_err());
        assert!(RGBColor::from_hex_code("#11457g").is_err());
        assert!(RGBColor::from_hex_code("#11457c00").is_err());
    }

    #[test]
    fn test_hex_pattern_reused_across_calls() {
        // the compiled pattern is shared, so parses can't interfere with each other
        let codes = ["#000000", "#FFFFFF", "#c2996b", "#11457C", "#7f7f80"];
        for _ in 0..3 {
            for code in codes.iter() {
                let color = RGBColor::from_hex_code(code).unwrap();
                assert_eq!(color.to_string(), code.to_uppercase());
            }
        }
        assert!(HEX_CODE.is_match("#abcdef"));
        assert!(!HEX_CODE.is_match(" #abcdef"));
    }

    #[test]
    fn test_to_u8_clamps() {
        let color = RGBColor {
            r: -0.2,
            g: 0.5,
            b: 1.3,
        };
        assert_eq!(color.to_u8(), [0, 128, 255]);
    }

    #[test]
    fn test_distance_properties() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let green = RGBColor {
            r: 0.,
            g: 1.,
            b: 0.,
        };
        assert_eq!(red.distance(&red), 0.0);
        assert!((red.distance(&green) - green.distance(&red)).abs() <= 1e-12);
        assert!((red.distance(&green) - 86.6082).abs() <= 1e-3);
        assert!(red.visually_indistinguishable(&RGBColor::from_u8(255, 1, 0)));
        assert!(!red.visually_indistinguishable(&green));
    }
}
