//! Selects diverse swatches from a regular sRGB lattice and writes them out as a hue-ordered sheet
//! and a CSV table under `$CARGO_TARGET_DIR/swatches`.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatchgen::pool::rgb_lattice_pool;
use swatchgen::sheet::{SortOrder, SwatchSheet};
use swatchgen::swatch_csv::write_rgb_csv;
use swatchgen::CandidatePool;

const NUM_SWATCHES: usize = 400;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchgen=info,rgb_swatches=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("swatches");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let pool = CandidatePool::new(rgb_lattice_pool(NUM_SWATCHES));
    info!(candidates = pool.len(), target = NUM_SWATCHES, "selecting swatches");
    let selected = pool.select(NUM_SWATCHES)?;

    let sheet = SwatchSheet {
        order: SortOrder::Hsv,
        ..SwatchSheet::default()
    };
    sheet.write_png(&selected, out_dir.join("rgb_swatches.png"))?;
    write_rgb_csv(out_dir.join("rgb_values.csv"), &selected)?;

    println!("Generated {} RGB swatches in {}", selected.len(), out_dir.display());
    Ok(())
}
