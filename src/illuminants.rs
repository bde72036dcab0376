//! This module provides an enum of the illuminants swatchgen knows about, as well as a table of
//! white point values for them. The source for this table is the [ASTM E308
//! standard](https://www.astm.org/Standards/E308.htm). Unlike the published tables, these are
//! normalized so that the Y (luminance) value is 1, matching the scale of [`XYZColor`].
//!
//! [`XYZColor`]: ../color/struct.XYZColor.html

/// A listing of the supported CIE standard illuminants. sRGB is defined relative to D65, which is
/// also the reference white for all CIELAB values in this crate; D50 is kept because print-oriented
/// tools exchange XYZ data relative to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Illuminant {
    /// Horizon daylight, the usual reference for print.
    D50,
    /// Noon daylight, the reference white of sRGB.
    D65,
}

/// An array of the standard illuminants, in the same order as the white point table below.
pub static ILLUMINANTS: [Illuminant; 2] = [Illuminant::D50, Illuminant::D65];

/// White points of the standard illuminants. The order of the rows is the order of the
/// `Illuminant` enum definition. Each white point is an array of 3 `f64` values X, Y, and Z,
/// normalized so that Y is 1.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 2] = [
    [0.96422, 1.00000, 0.82521],
    [0.95047, 1.00000, 1.08883],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[1],
        }
    }
}
