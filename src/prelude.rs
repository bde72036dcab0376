//! This module simply brings the most common swatchgen functionality under a single namespace, to
//! prevent excessive imports. The prelude includes every trait, the ubiquitous [`RGBColor`], the
//! selector entry points, the [`Illuminant`] enum and the crate's error type. The alternative color
//! spaces in the [`colors`] module are not included.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`Illuminant`]: ../illuminants/enum.Illuminant.html
//! [`colors`]: ../colors/index.html

pub use crate::bound::Bound;
pub use crate::color::{Color, RGBColor};
pub use crate::error::SwatchError;
pub use crate::illuminants::Illuminant;
pub use crate::select::{select_diverse, CandidatePool};
