//! This module contains the color spaces besides sRGB and XYZ: CIELAB, which every distance is
//! measured in, and HSV, which is only used for ordering swatches by hue. For convenience, each
//! type is imported into this module's namespace directly.
pub mod cielabcolor;
pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::hsvcolor::HSVColor;
