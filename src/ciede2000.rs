//! This module implements CIEDE2000 (ΔE00), the CIE's recommended measure of how different two
//! colors look, as defined in CIE 142-2001 and clarified by Sharma, Wu and Dalal (2005). Euclidean
//! distance in CIELAB overstates differences between saturated colors and understates them in the
//! blues; ΔE00 corrects for both with lightness, chroma and hue weighting functions and a rotation
//! term for the blue region.
//!
//! The function is pure and deterministic, and degenerate inputs (zero chroma, where hue is
//! undefined) resolve to finite values instead of NaN.

use std::f64::consts::PI;

use crate::colors::cielabcolor::CIELABColor;
use crate::consts::POW25_7;

/// The parametric weighting factors of ΔE00 for lightness, chroma, and hue. The reference viewing
/// conditions use 1 for all three; textiles customarily use `k_l = 2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KFactors {
    /// Lightness weight.
    pub k_l: f64,
    /// Chroma weight.
    pub k_c: f64,
    /// Hue weight.
    pub k_h: f64,
}

impl Default for KFactors {
    fn default() -> KFactors {
        KFactors {
            k_l: 1.0,
            k_c: 1.0,
            k_h: 1.0,
        }
    }
}

/// `sqrt(c^7 / (c^7 + 25^7))`, which is 0 for achromatic input.
fn chroma_ratio(c: f64) -> f64 {
    let c7 = c.powi(7);
    if c7 == 0.0 {
        0.0
    } else {
        (c7 / (c7 + POW25_7)).sqrt()
    }
}

/// Hue angle of `(a, b)` in radians, in `[0, 2π)`. 0 at the neutral axis.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).rem_euclid(2.0 * PI)
    }
}

/// ΔE00 between two CIELAB colors with the reference weights `k_l = k_c = k_h = 1`.
/// # Example
/// ```
/// # use swatchgen::ciede2000::ciede2000;
/// # use swatchgen::colors::CIELABColor;
/// let lab1 = CIELABColor{l: 50., a: 2.6772, b: -79.7751};
/// let lab2 = CIELABColor{l: 50., a: 0., b: -82.7485};
/// assert!((ciede2000(&lab1, &lab2) - 2.0425).abs() <= 1e-4);
/// ```
pub fn ciede2000(lab1: &CIELABColor, lab2: &CIELABColor) -> f64 {
    ciede2000_weighted(lab1, lab2, &KFactors::default())
}

/// ΔE00 between two CIELAB colors with custom parametric weights. Symmetric in its two color
/// arguments, non-negative, and 0 exactly when the colors are identical.
pub fn ciede2000_weighted(lab1: &CIELABColor, lab2: &CIELABColor, k: &KFactors) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let c_avg = (c1 + c2) / 2.0;

    // rescale a* to undo its non-uniformity near the neutral axis
    let g = 0.5 * (1.0 - chroma_ratio(c_avg));
    let a1_prime = lab1.a * (1.0 + g);
    let a2_prime = lab2.a * (1.0 + g);

    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);
    let h1_prime = hue_angle(a1_prime, lab1.b);
    let h2_prime = hue_angle(a2_prime, lab2.b);
    let chroma_product = c1_prime * c2_prime;

    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;
    // hue difference along the shorter arc; meaningless (and zeroed) without chroma
    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let dh = h2_prime - h1_prime;
        if dh > PI {
            dh - 2.0 * PI
        } else if dh < -PI {
            dh + 2.0 * PI
        } else {
            dh
        }
    };
    let delta_big_h_prime = 2.0 * chroma_product.sqrt() * (delta_h_prime / 2.0).sin();

    let l_avg = (lab1.l + lab2.l) / 2.0;
    let c_avg_prime = (c1_prime + c2_prime) / 2.0;
    let h_sum = h1_prime + h2_prime;
    let h_avg_prime = if chroma_product == 0.0 {
        h_sum
    } else if (h1_prime - h2_prime).abs() <= PI {
        h_sum / 2.0
    } else if h_sum < 2.0 * PI {
        (h_sum + 2.0 * PI) / 2.0
    } else {
        (h_sum - 2.0 * PI) / 2.0
    };

    let t = 1.0 - 0.17 * (h_avg_prime - 30f64.to_radians()).cos()
        + 0.24 * (2.0 * h_avg_prime).cos()
        + 0.32 * (3.0 * h_avg_prime + 6f64.to_radians()).cos()
        - 0.20 * (4.0 * h_avg_prime - 63f64.to_radians()).cos();

    let l_offset_sq = (l_avg - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_avg_prime;
    let sh = 1.0 + 0.015 * c_avg_prime * t;

    // rotation of the chroma/hue ellipses around 275°, the blue region
    let delta_theta = 30f64.to_radians()
        * (-((h_avg_prime.to_degrees() - 275.0) / 25.0).powi(2)).exp();
    let rt = -2.0 * chroma_ratio(c_avg_prime) * (2.0 * delta_theta).sin();

    let dl = delta_l_prime / (k.k_l * sl);
    let dc = delta_c_prime / (k.k_c * sc);
    let dh = delta_big_h_prime / (k.k_h * sh);

    // the rotation term can push tiny differences a hair below zero
    (dl * dl + dc * dc + dh * dh + rt * dc * dh).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    fn lab(l: f64, a: f64, b: f64) -> CIELABColor {
        CIELABColor { l, a, b }
    }

    // the complete test data set of Sharma, Wu and Dalal (2005), in published order
    const SHARMA_PAIRS: [([f64; 3], [f64; 3], f64); 34] = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 2.8361, -74.0200], [50.0, 0.0, -82.7485], 3.4412),
        ([50.0, -1.3802, -84.2814], [50.0, 0.0, -82.7485], 1.0000),
        ([50.0, -1.1848, -84.8006], [50.0, 0.0, -82.7485], 1.0000),
        ([50.0, -0.9009, -85.5211], [50.0, 0.0, -82.7485], 1.0000),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
        ([50.0, -1.0, 2.0], [50.0, 0.0, 0.0], 2.3669),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0009], 7.1792),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0010], 7.1792),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0011], 7.2195),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0012], 7.2195),
        ([50.0, -0.0010, 2.4900], [50.0, 0.0009, -2.4900], 4.8045),
        ([50.0, -0.0010, 2.4900], [50.0, 0.0010, -2.4900], 4.8045),
        ([50.0, -0.0010, 2.4900], [50.0, 0.0011, -2.4900], 4.7461),
        ([50.0, 2.5, 0.0], [50.0, 0.0, -2.5], 4.3065),
        ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
        ([50.0, 2.5, 0.0], [61.0, -5.0, 29.0], 22.8977),
        ([50.0, 2.5, 0.0], [56.0, -27.0, -3.0], 31.9030),
        ([50.0, 2.5, 0.0], [58.0, 24.0, 15.0], 19.4535),
        ([50.0, 2.5, 0.0], [50.0, 3.1736, 0.5854], 1.0000),
        ([50.0, 2.5, 0.0], [50.0, 3.2972, 0.0], 1.0000),
        ([50.0, 2.5, 0.0], [50.0, 1.8634, 0.5757], 1.0000),
        ([50.0, 2.5, 0.0], [50.0, 3.2592, 0.3350], 1.0000),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([63.0109, -31.0961, -5.8663], [62.8187, -29.7946, -4.0864], 1.2630),
        ([61.2901, 3.7196, -5.3901], [61.4292, 2.2480, -4.9620], 1.8731),
        ([35.0831, -44.1164, 3.7933], [35.0232, -40.0716, 1.5901], 1.8645),
        ([22.7233, 20.0904, -46.6940], [23.0331, 14.9730, -42.5619], 2.0373),
        ([36.4612, 47.8580, 18.3852], [36.2715, 50.5065, 21.2231], 1.4146),
        ([90.8027, -2.0831, 1.4410], [91.1528, -1.6435, 0.0447], 1.4441),
        ([90.9257, -0.5406, -0.9208], [88.6381, -0.8985, -0.7239], 1.5381),
        ([6.7747, -0.2908, -2.4247], [5.8714, -0.0985, -2.2286], 0.6377),
        ([2.0776, 0.0795, -1.1350], [0.9033, -0.0636, -0.5514], 0.9082),
    ];

    #[test]
    fn test_sharma_reference_values() {
        for (c1, c2, expected) in SHARMA_PAIRS.iter() {
            let d = ciede2000(&lab(c1[0], c1[1], c1[2]), &lab(c2[0], c2[1], c2[2]));
            assert!(
                approx_eq!(f64, d, *expected, epsilon = 1e-4),
                "{:?} vs {:?}: got {}, expected {}",
                c1,
                c2,
                d,
                expected
            );
        }
    }

    #[test]
    fn test_mean_hue_past_full_turn() {
        // hues about 180° apart summing to more than 360°: the mean hue wraps back by a full turn
        let lab1 = lab(50., 2.49, -0.001);
        let lab2 = lab(50., -2.49, 0.0011);
        assert!(approx_eq!(f64, ciede2000(&lab1, &lab2), 7.2195, epsilon = 1e-4));
        assert!(approx_eq!(f64, ciede2000(&lab2, &lab1), 7.2195, epsilon = 1e-4));
        // a hair less b* brings the hues within 180° of each other, so the plain mean applies
        let lab3 = lab(50., -2.49, 0.0009);
        assert!(approx_eq!(f64, ciede2000(&lab1, &lab3), 7.1792, epsilon = 1e-4));
    }

    #[test]
    fn test_symmetry() {
        for (c1, c2, _) in SHARMA_PAIRS.iter() {
            let lab1 = lab(c1[0], c1[1], c1[2]);
            let lab2 = lab(c2[0], c2[1], c2[2]);
            assert!(approx_eq!(
                f64,
                ciede2000(&lab1, &lab2),
                ciede2000(&lab2, &lab1),
                epsilon = 1e-12
            ));
        }
    }

    #[test]
    fn test_identity_is_zero() {
        for (c1, c2, _) in SHARMA_PAIRS.iter() {
            assert_eq!(ciede2000(&lab(c1[0], c1[1], c1[2]), &lab(c1[0], c1[1], c1[2])), 0.0);
            assert_eq!(ciede2000(&lab(c2[0], c2[1], c2[2]), &lab(c2[0], c2[1], c2[2])), 0.0);
        }
    }

    #[test]
    fn test_achromatic_inputs_are_finite() {
        // both chroma values zero: hue is undefined, only lightness contributes
        let d = ciede2000(&lab(0., 0., 0.), &lab(100., 0., 0.));
        assert!(approx_eq!(f64, d, 100.0, epsilon = 1e-9));
        let d = ciede2000(&lab(50., 0., 0.), &lab(50., 0., 0.));
        assert_eq!(d, 0.0);
        // one achromatic, one chromatic
        let d = ciede2000(&lab(50., 0., 0.), &lab(50., 0., -10.));
        assert!(d.is_finite() && d > 0.0);
    }

    #[test]
    fn test_hue_wraparound() {
        // hues straddling 0/360 are close, not half a circle apart
        let near = ciede2000(&lab(50., 20., 1.), &lab(50., 20., -1.));
        let far = ciede2000(&lab(50., 20., 1.), &lab(50., -20., 1.));
        assert!(near < 2.0);
        assert!(far > 20.0);
    }

    #[test]
    fn test_non_negative_on_grid() {
        let values = [-100.0, -12.5, 0.0, 0.001, 37.0, 127.0];
        for &a1 in values.iter() {
            for &b2 in values.iter() {
                let d = ciede2000(&lab(30., a1, -b2), &lab(70., -a1, b2));
                assert!(d >= 0.0 && d.is_finite());
            }
        }
    }

    #[test]
    fn test_weights_scale_lightness() {
        let lab1 = lab(40., 0., 0.);
        let lab2 = lab(60., 0., 0.);
        let textile = KFactors {
            k_l: 2.0,
            ..KFactors::default()
        };
        let d1 = ciede2000(&lab1, &lab2);
        let d2 = ciede2000_weighted(&lab1, &lab2, &textile);
        assert!(approx_eq!(f64, d1, 2.0 * d2, epsilon = 1e-12));
    }
}
