//! Reads and writes swatch tables: a CSV file with the header `R,G,B` and one row per color, each
//! channel a floating-point value in [0, 1].

use std::io::{Read, Write};
use std::path::Path;

use serde_derive::{Deserialize, Serialize};
use tracing::info;

use crate::color::RGBColor;
use crate::error::{Result, SwatchError};

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "R")]
    r: f64,
    #[serde(rename = "G")]
    g: f64,
    #[serde(rename = "B")]
    b: f64,
}

impl From<&RGBColor> for Record {
    fn from(c: &RGBColor) -> Record {
        Record {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Writes `colors` in order, with a header row, to any writer.
pub fn write_rgb_records<W: Write>(writer: W, colors: &[RGBColor]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for color in colors {
        csv_writer.serialize(Record::from(color))?;
    }
    // the header is only emitted alongside the first record
    if colors.is_empty() {
        csv_writer.write_record(&["R", "G", "B"])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `colors` to a new file at `path`, replacing any existing one.
pub fn write_rgb_csv<P: AsRef<Path>>(path: P, colors: &[RGBColor]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_rgb_records(file, colors)?;
    info!(path = %path.display(), rows = colors.len(), "wrote swatch table");
    Ok(())
}

/// Reads a swatch table from any reader.
/// # Errors
/// Returns `SwatchError::Csv` on malformed rows and `SwatchError::InvalidArgument` if any channel
/// lies outside of [0, 1].
pub fn read_rgb_records<R: Read>(reader: R) -> Result<Vec<RGBColor>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut colors = vec![];
    for (row, result) in csv_reader.deserialize().enumerate() {
        let record: Record = result?;
        let in_range = |c: f64| (0.0..=1.0).contains(&c);
        if !(in_range(record.r) && in_range(record.g) && in_range(record.b)) {
            return Err(SwatchError::InvalidArgument(format!(
                "row {} is outside of the sRGB gamut: {:?}",
                row + 1,
                record
            )));
        }
        colors.push(RGBColor {
            r: record.r,
            g: record.g,
            b: record.b,
        });
    }
    Ok(colors)
}

/// Reads a swatch table from the file at `path`.
pub fn read_rgb_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RGBColor>> {
    let file = std::fs::File::open(path)?;
    read_rgb_records(file)
}
