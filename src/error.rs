//! The error type shared by every fallible operation in swatchgen. Selection itself only fails on
//! bad arguments; everything else here wraps the I/O and encoding libraries used to write swatch
//! sheets and CSV tables.

use thiserror::Error;

/// Errors that can occur while selecting swatches or writing them out.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// A caller-supplied argument is outside of what the operation accepts, such as requesting
    /// swatches from an empty pool or a sheet with no room for a single swatch.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A hex color code did not have the form `#rrggbb`.
    #[error("invalid hex color code: {0:?}")]
    ParseHex(String),
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The PNG encoder failed.
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SwatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SwatchError::InvalidArgument("empty pool".to_string());
        assert_eq!(err.to_string(), "invalid argument: empty pool");
        let err = SwatchError::ParseHex("#12".to_string());
        assert_eq!(err.to_string(), "invalid hex color code: \"#12\"");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SwatchError = io.into();
        assert!(matches!(err, SwatchError::Io(_)));
    }
}
