//! Selects diverse swatches from a practical palette (hue wheel, grays, earth tones and pastels plus
//! random CIELAB variations of each) and writes a lightness-ordered sheet and a CSV table under
//! `$CARGO_TARGET_DIR/swatches`.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatchgen::pool::practical_pool;
use swatchgen::sheet::SwatchSheet;
use swatchgen::swatch_csv::write_rgb_csv;
use swatchgen::CandidatePool;

const NUM_SWATCHES: usize = 400;
const VARIATIONS_PER_COLOR: usize = 5;
const SEED: u64 = 42;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchgen=info,practical_swatches=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("swatches");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let pool = CandidatePool::new(practical_pool(VARIATIONS_PER_COLOR, SEED)?);
    info!(candidates = pool.len(), target = NUM_SWATCHES, seed = SEED, "selecting swatches");
    let selected = pool.select(NUM_SWATCHES)?;

    SwatchSheet::default().write_png(&selected, out_dir.join("practical_color_swatches.png"))?;
    write_rgb_csv(out_dir.join("practical_rgb_values.csv"), &selected)?;

    println!("Generated {} color swatches in {}", selected.len(), out_dir.display());
    Ok(())
}
