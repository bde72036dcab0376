//! This file provides constants that are used for matrix multiplication and color space conversion,
//! along with a function for computing inverses. Inverse matrices are derived from the forward
//! ones.

use nalgebra::Matrix3;

/// Not safe for general use. The only reason this is here is to calculate the inverse of constant
/// matrices. This panics on singular matrices!
pub fn inv(m: Matrix3<f64>) -> Matrix3<f64> {
    match m.try_inverse() {
        Some(inverse) => inverse,
        None => panic!("Constant matrix not invertible!"),
    }
}

/// Linear sRGB to CIE XYZ, D65 reference white (IEC 61966-2-1, Lindbloom's derivation).
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn STANDARD_RGB_TO_XYZ_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.4124564, 0.3575761, 0.1804375,
        0.2126729, 0.7151522, 0.0721750,
        0.0193339, 0.1191920, 0.9503041,
    )
}

/// CIE XYZ to linear sRGB, D65 reference white.
#[allow(non_snake_case)]
pub fn STANDARD_XYZ_TO_RGB_MAT() -> Matrix3<f64> {
    inv(STANDARD_RGB_TO_XYZ_MAT())
}

/// The Bradford cone response matrix used for chromatic adaptation.
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn BRADFORD_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        00.8951, 00.2664, -0.1614,
        -0.7502, 01.7135, 00.0367,
        00.0389, -0.0685, 01.0296,
    )
}

/// δ = 6/29. The CIELAB nonlinearity switches from cube root to linear below δ³.
pub const CIELAB_DELTA: f64 = 6.0 / 29.0;

/// 25^7, the constant that recurs in the CIEDE2000 chroma terms.
pub const POW25_7: f64 = 6_103_515_625.0;
