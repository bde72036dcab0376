//! swatchgen picks sets of colors that look as different from each other as possible, for printed
//! calibration sheets and the like. Given a pool of candidate sRGB colors, it greedily selects the
//! candidate farthest from everything chosen so far, measuring "far" with CIEDE2000, the CIE's
//! perceptual color difference. Picking in RGB or even plain CIELAB would crowd the result with
//! near-identical greens and blues; ΔE00 spreads picks the way people actually see them.
//!
//! Around the selector the crate carries what's needed to go from nothing to a printable sheet:
//! color conversions between sRGB, CIE XYZ, CIELAB and HSV, candidate pool generators, a grid
//! renderer that writes PNG files, and CSV tables of the chosen channel values.

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

pub mod bound;
pub mod ciede2000;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod error;
pub mod illuminants;
pub mod pool;
pub mod prelude;
pub mod select;
pub mod sheet;
pub mod swatch_csv;

pub use crate::error::{Result, SwatchError};
pub use crate::select::{select_diverse, CandidatePool};
