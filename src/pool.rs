//! Candidate pools for swatch selection. Two generators are provided: a regular sRGB lattice
//! salted with primaries, grays and a handful of named earth and pastel tones, and a "practical"
//! pool built from an HSV base palette plus random walks around each base color in CIELAB. Neither
//! pool is a selection by itself: feed it to [`select_diverse`] to pick the spread-out subset.
//!
//! [`select_diverse`]: ../select/fn.select_diverse.html

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::colors::cielabcolor::CIELABColor;
use crate::colors::hsvcolor::HSVColor;
use crate::coord::Coord;
use crate::error::{Result, SwatchError};

/// Standard deviation, in CIELAB units, of the jitter applied by [`practical_pool`].
///
/// [`practical_pool`]: fn.practical_pool.html
pub const LAB_JITTER_SIGMA: f64 = 10.0;

const fn rgb(r: f64, g: f64, b: f64) -> RGBColor {
    RGBColor { r, g, b }
}

/// Tan, brown, olive, golden, taupe, camel, rust, umber, khaki.
pub const EARTH_TONES: [RGBColor; 9] = [
    rgb(0.76, 0.60, 0.42),
    rgb(0.55, 0.27, 0.07),
    rgb(0.33, 0.42, 0.18),
    rgb(0.85, 0.65, 0.13),
    rgb(0.55, 0.47, 0.37),
    rgb(0.73, 0.53, 0.40),
    rgb(0.80, 0.52, 0.25),
    rgb(0.45, 0.32, 0.28),
    rgb(0.60, 0.45, 0.33),
];

/// Pastel pink, green, blue, yellow, purple, orange.
pub const PASTELS: [RGBColor; 6] = [
    rgb(0.93, 0.77, 0.80),
    rgb(0.80, 0.92, 0.77),
    rgb(0.77, 0.83, 0.93),
    rgb(0.96, 0.87, 0.70),
    rgb(0.85, 0.77, 0.93),
    rgb(0.96, 0.80, 0.69),
];

/// `n` evenly spaced values from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

fn gray(v: f64) -> RGBColor {
    rgb(v, v, v)
}

/// A lattice pool sized for roughly `num_swatches` selections. With
/// `steps = max(3, floor(cbrt(num_swatches)))`, each channel takes the levels 0, `steps - 2` evenly
/// spaced values from 0.1 to 0.9, and 1. The full lattice is extended with the pure primaries, an
/// equally long gray ramp, [`EARTH_TONES`], and [`PASTELS`]. Exact duplicates are removed and the
/// result is sorted by red, then green, then blue, so it always starts with black.
///
/// [`EARTH_TONES`]: constant.EARTH_TONES.html
/// [`PASTELS`]: constant.PASTELS.html
/// # Example
/// ```
/// # use swatchgen::prelude::*;
/// # use swatchgen::pool::rgb_lattice_pool;
/// let pool = rgb_lattice_pool(27);
/// assert_eq!(pool[0], RGBColor{r: 0., g: 0., b: 0.});
/// assert!(pool.contains(&RGBColor{r: 0.1, g: 0.1, b: 1.}));
/// ```
pub fn rgb_lattice_pool(num_swatches: usize) -> Vec<RGBColor> {
    let steps = ((num_swatches as f64).cbrt().floor() as usize).max(3);
    let mut levels = vec![0.0];
    levels.extend(linspace(0.1, 0.9, steps - 2));
    levels.push(1.0);

    let mut colors = Vec::with_capacity(levels.len().pow(3) + steps + 18);
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                colors.push(rgb(r, g, b));
            }
        }
    }
    colors.extend_from_slice(&[rgb(1., 0., 0.), rgb(0., 1., 0.), rgb(0., 0., 1.)]);
    colors.extend(linspace(0.0, 1.0, steps).into_iter().map(gray));
    colors.extend_from_slice(&EARTH_TONES);
    colors.extend_from_slice(&PASTELS);

    colors.sort_by(|a, b| Coord::from(*a).lexicographic_cmp(&Coord::from(*b)));
    colors.dedup();
    debug!(steps, candidates = colors.len(), "built lattice pool");
    colors
}

/// The base palette of the practical pool: 18 evenly spaced hues, each fully saturated, half
/// saturated, and at half value; a 10-step gray ramp; and the first five earth tones and pastels.
/// 74 colors, in that order.
pub fn practical_base_colors() -> Vec<RGBColor> {
    let mut colors = Vec::with_capacity(74);
    for i in 0..18 {
        let h = i as f64 * 20.0;
        for &(s, v) in &[(1.0, 1.0), (0.5, 1.0), (1.0, 0.5)] {
            colors.push(RGBColor::from(HSVColor { h, s, v }));
        }
    }
    colors.extend(linspace(0.0, 1.0, 10).into_iter().map(gray));
    colors.extend_from_slice(&EARTH_TONES[..5]);
    colors.extend_from_slice(&PASTELS[..5]);
    colors
}

/// Random variations on each base color: `per_color` samples per base, each with L\*, a\*, and b\*
/// independently offset by a normal distribution with standard deviation `sigma`. L\* is clipped to
/// [0, 100], a\* and b\* to [-128, 127], and the result is clamped into the sRGB gamut. Variations of
/// the same base color are adjacent in the output.
/// # Errors
/// Returns `SwatchError::InvalidArgument` if `sigma` is negative, infinite, or NaN.
pub fn lab_variations<R: Rng + ?Sized>(
    base: &[RGBColor],
    per_color: usize,
    sigma: f64,
    rng: &mut R,
) -> Result<Vec<RGBColor>> {
    // Normal::new accepts a negative standard deviation and mirrors the distribution
    if sigma.is_nan() || sigma < 0.0 {
        return Err(SwatchError::InvalidArgument(format!(
            "jitter sigma must be non-negative, got {}",
            sigma
        )));
    }
    let jitter = Normal::new(0.0, sigma).map_err(|e| {
        SwatchError::InvalidArgument(format!("bad jitter sigma {}: {}", sigma, e))
    })?;
    let mut variations = Vec::with_capacity(base.len() * per_color);
    for color in base {
        let lab: CIELABColor = color.convert();
        for _ in 0..per_color {
            let varied = CIELABColor {
                l: (lab.l + jitter.sample(rng)).max(0.0).min(100.0),
                a: (lab.a + jitter.sample(rng)).max(-128.0).min(127.0),
                b: (lab.b + jitter.sample(rng)).max(-128.0).min(127.0),
            };
            variations.push(RGBColor::clamp(varied.convert()));
        }
    }
    Ok(variations)
}

/// The practical pool: [`practical_base_colors`] followed by `per_color` CIELAB variations of each
/// of them, drawn with [`LAB_JITTER_SIGMA`] from an RNG seeded with `seed`. The same seed always
/// gives the same pool.
///
/// [`practical_base_colors`]: fn.practical_base_colors.html
/// [`LAB_JITTER_SIGMA`]: constant.LAB_JITTER_SIGMA.html
pub fn practical_pool(per_color: usize, seed: u64) -> Result<Vec<RGBColor>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut colors = practical_base_colors();
    let variations = lab_variations(&colors, per_color, LAB_JITTER_SIGMA, &mut rng)?;
    colors.extend(variations);
    debug!(seed, candidates = colors.len(), "built practical pool");
    Ok(colors)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(0.1, 0.9, 1), vec![0.1]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_lattice_pool_shape() {
        let pool = rgb_lattice_pool(400);
        // 7 levels per channel: 343 lattice points plus the extras that aren't already on it
        assert!(pool.len() >= 343);
        assert!(pool.len() <= 343 + 3 + 7 + 9 + 6);
        assert_eq!(pool[0], rgb(0., 0., 0.));
        assert_eq!(pool[pool.len() - 1], rgb(1., 1., 1.));
        for pair in pool.windows(2) {
            assert_eq!(
                Coord::from(pair[0]).lexicographic_cmp(&Coord::from(pair[1])),
                Ordering::Less
            );
        }
        for tone in EARTH_TONES.iter().chain(PASTELS.iter()) {
            assert!(pool.contains(tone));
        }
    }

    #[test]
    fn test_lattice_pool_minimum_steps() {
        // 3 levels per channel even for tiny requests
        let pool = rgb_lattice_pool(1);
        assert!(pool.len() >= 27);
        assert!(pool.contains(&rgb(0.1, 1., 0.)));
    }

    #[test]
    fn test_practical_base_colors() {
        let base = practical_base_colors();
        assert_eq!(base.len(), 74);
        assert_eq!(base[0], rgb(1., 0., 0.));
        assert_eq!(base[1], rgb(1., 0.5, 0.5));
        assert_eq!(base[2], rgb(0.5, 0., 0.));
        assert_eq!(base[54], rgb(0., 0., 0.));
        assert_eq!(base[63], rgb(1., 1., 1.));
        assert_eq!(base[64], EARTH_TONES[0]);
        assert_eq!(base[73], PASTELS[4]);
    }

    #[test]
    fn test_practical_pool_reproducible() {
        let pool1 = practical_pool(5, 42).unwrap();
        let pool2 = practical_pool(5, 42).unwrap();
        let pool3 = practical_pool(5, 43).unwrap();
        assert_eq!(pool1.len(), 74 * 6);
        assert_eq!(pool1, pool2);
        assert_ne!(pool1, pool3);
        assert_eq!(&pool1[..74], &practical_base_colors()[..]);
        assert!(pool1.iter().all(|c| c.in_gamut()));
    }

    #[test]
    fn test_zero_sigma_variations_match_base() {
        let base = vec![rgb(0.2, 0.4, 0.6), rgb(0.76, 0.60, 0.42)];
        let mut rng = StdRng::seed_from_u64(7);
        let variations = lab_variations(&base, 2, 0.0, &mut rng).unwrap();
        assert_eq!(variations.len(), 4);
        for (i, v) in variations.iter().enumerate() {
            let original = base[i / 2];
            assert!((v.r - original.r).abs() <= 1e-9);
            assert!((v.g - original.g).abs() <= 1e-9);
            assert!((v.b - original.b).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_bad_sigma() {
        let mut rng = StdRng::seed_from_u64(7);
        let gray = [rgb(0.5, 0.5, 0.5)];
        for &sigma in [-1.0, -1e-9, f64::NAN, f64::INFINITY, f64::NEG_INFINITY].iter() {
            assert!(
                matches!(
                    lab_variations(&gray, 2, sigma, &mut rng),
                    Err(SwatchError::InvalidArgument(_))
                ),
                "sigma {} was accepted",
                sigma
            );
        }
        // -0.0 compares equal to 0 and behaves like it
        assert_eq!(lab_variations(&gray, 2, -0.0, &mut rng).unwrap().len(), 2);
    }
}
