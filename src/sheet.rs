//! Lays out a set of swatches as a grid of solid squares and renders it to an RGB raster or a PNG
//! file. The sheet has a fixed page size; swatches are sorted so similar colors end up near each
//! other, unused cells are filled with a filler color, and anything that doesn't fit is dropped.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::{info, warn};

use crate::color::{Color, RGBColor};
use crate::colors::cielabcolor::CIELABColor;
use crate::colors::hsvcolor::HSVColor;
use crate::coord::Coord;
use crate::error::{Result, SwatchError};

/// How swatches are ordered on a sheet before being laid out row by row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    /// By CIELAB lightness, then a\*, then b\*.
    Lab,
    /// By HSV hue, then saturation, then value.
    Hsv,
}

impl SortOrder {
    fn key(self, color: RGBColor) -> Coord {
        match self {
            SortOrder::Lab => color.convert::<CIELABColor>().into(),
            SortOrder::Hsv => HSVColor::from(color).into(),
        }
    }
}

/// Page geometry and ordering for a swatch sheet. All sizes are in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SwatchSheet {
    /// The side length of one square swatch.
    pub swatch_size: u32,
    /// The page width. Any remainder narrower than a swatch is cut off.
    pub page_width: u32,
    /// The page height. Any remainder shorter than a swatch is cut off.
    pub page_height: u32,
    /// The order in which swatches fill the grid.
    pub order: SortOrder,
    /// The color of cells left over after every swatch is placed.
    pub filler: RGBColor,
}

impl Default for SwatchSheet {
    fn default() -> SwatchSheet {
        SwatchSheet {
            swatch_size: 150,
            page_width: 4400,
            page_height: 1300,
            order: SortOrder::Lab,
            filler: RGBColor {
                r: 1.,
                g: 1.,
                b: 1.,
            },
        }
    }
}

/// A rendered sheet: 8-bit RGB pixels, row-major, no padding between rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl SheetImage {
    /// The RGB value at column `x`, row `y`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }
}

impl SwatchSheet {
    /// Swatches per row.
    pub fn columns(&self) -> u32 {
        self.page_width.checked_div(self.swatch_size).unwrap_or(0)
    }

    /// Rows of swatches.
    pub fn rows(&self) -> u32 {
        self.page_height.checked_div(self.swatch_size).unwrap_or(0)
    }

    /// The number of swatches that fit on one sheet.
    pub fn cells(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    fn check_geometry(&self) -> Result<()> {
        if self.swatch_size == 0 {
            return Err(SwatchError::InvalidArgument(
                "swatch size must be positive".to_string(),
            ));
        }
        if self.cells() == 0 {
            return Err(SwatchError::InvalidArgument(format!(
                "a {}x{} page has no room for a {}px swatch",
                self.page_width, self.page_height, self.swatch_size
            )));
        }
        Ok(())
    }

    /// The colors in grid order: sorted by [`order`](#structfield.order) (stable, so equal keys
    /// keep their input order), padded with the filler, and cut to exactly
    /// [`cells`](#method.cells) entries.
    /// # Errors
    /// Returns `SwatchError::InvalidArgument` if the sheet has no cells.
    pub fn arrange(&self, colors: &[RGBColor]) -> Result<Vec<RGBColor>> {
        self.check_geometry()?;
        let cells = self.cells();
        let mut keyed: Vec<(Coord, RGBColor)> = colors
            .iter()
            .map(|&c| (self.order.key(c), c))
            .collect();
        keyed.sort_by(|a, b| a.0.lexicographic_cmp(&b.0));

        if keyed.len() > cells {
            warn!(
                swatches = keyed.len(),
                cells,
                dropped = keyed.len() - cells,
                "sheet too small, dropping swatches"
            );
        }
        let mut arranged: Vec<RGBColor> = keyed.into_iter().take(cells).map(|(_, c)| c).collect();
        arranged.resize(cells, self.filler);
        Ok(arranged)
    }

    /// Renders the arranged colors as a raster of `columns * swatch_size` by
    /// `rows * swatch_size` pixels.
    pub fn render(&self, colors: &[RGBColor]) -> Result<SheetImage> {
        let arranged = self.arrange(colors)?;
        let columns = self.columns() as usize;
        let size = self.swatch_size as usize;
        let width = columns * size;
        let height = self.rows() as usize * size;

        let mut pixels = vec![0u8; width * height * 3];
        for (i, color) in arranged.iter().enumerate() {
            let rgb = color.to_u8();
            let left = (i % columns) * size;
            let top = (i / columns) * size;
            for y in top..top + size {
                let row_start = (y * width + left) * 3;
                for px in pixels[row_start..row_start + size * 3].chunks_exact_mut(3) {
                    px.copy_from_slice(&rgb);
                }
            }
        }
        Ok(SheetImage {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    /// Renders the sheet and writes it to `path` as an 8-bit RGB PNG.
    pub fn write_png<P: AsRef<Path>>(&self, colors: &[RGBColor], path: P) -> Result<()> {
        let path = path.as_ref();
        let image = self.render(colors)?;
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.pixels)?;
        writer.finish()?;
        info!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            swatches = colors.len(),
            "wrote swatch sheet"
        );
        Ok(())
    }
}
