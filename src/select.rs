//! Greedy farthest-point selection of a perceptually diverse subset of colors. Starting from the
//! first candidate, each round adds the candidate whose smallest ΔE00 to everything selected so
//! far is largest (max-min diversity). The result is ordered by selection, so any prefix of it is
//! itself a well-spread subset.
//!
//! Each candidate's CIELAB value is computed once per pool, and each round only measures distances
//! to the color picked in the previous round, folding them into a running minimum per candidate.
//! A run therefore costs `O(target_count × pool size)` distance evaluations.

use tracing::debug;

use crate::ciede2000::ciede2000;
use crate::color::{Color, RGBColor};
use crate::colors::cielabcolor::CIELABColor;
use crate::error::{Result, SwatchError};

/// Marks an already-selected candidate in the distance array. Below every valid ΔE00.
const SELECTED: f64 = -1.0;

/// An ordered set of candidate colors with their CIELAB values precomputed. The order only matters
/// for the seed: selection always starts at index 0.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    colors: Vec<RGBColor>,
    labs: Vec<CIELABColor>,
}

/// Per-run bookkeeping: the selected indices in selection order, and for every candidate its
/// distance to the nearest selected color (or `SELECTED`).
struct SelectionState {
    selected: Vec<usize>,
    nearest: Vec<f64>,
}

impl SelectionState {
    fn seeded(pool_len: usize) -> SelectionState {
        let mut nearest = vec![f64::INFINITY; pool_len];
        nearest[0] = SELECTED;
        SelectionState {
            selected: vec![0],
            nearest,
        }
    }

    fn mark(&mut self, index: usize) {
        self.selected.push(index);
        self.nearest[index] = SELECTED;
    }

    /// Folds the distances to the most recent pick into the running minimums.
    fn update_from_last(&mut self, labs: &[CIELABColor]) {
        let last = match self.selected.last() {
            Some(&i) => labs[i],
            None => return,
        };
        for (nearest, lab) in self.nearest.iter_mut().zip(labs) {
            if *nearest == SELECTED {
                continue;
            }
            let d = ciede2000(&last, lab);
            if d < *nearest {
                *nearest = d;
            }
        }
    }

    /// The unselected candidate farthest from the selected set, lowest index on ties.
    fn farthest(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in self.nearest.iter().enumerate() {
            if d == SELECTED {
                continue;
            }
            match best {
                Some((_, best_d)) if d <= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best
    }
}

impl CandidatePool {
    /// Builds a pool, converting every color to CIELAB once.
    pub fn new(colors: Vec<RGBColor>) -> CandidatePool {
        let labs = colors.iter().map(|c| c.convert()).collect();
        CandidatePool { colors, labs }
    }

    /// The candidates, in pool order.
    pub fn colors(&self) -> &[RGBColor] {
        &self.colors
    }

    /// The CIELAB value of each candidate, parallel to [`colors`](#method.colors).
    pub fn labs(&self) -> &[CIELABColor] {
        &self.labs
    }

    /// The number of candidates.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the pool has no candidates.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Selects up to `target_count` mutually distant candidates and returns their indices in
    /// selection order. The first index is always 0, and the length is
    /// `min(target_count, self.len())`.
    /// # Errors
    /// Returns `SwatchError::InvalidArgument` when the pool is empty but a non-zero count is
    /// requested.
    pub fn select_indices(&self, target_count: usize) -> Result<Vec<usize>> {
        if target_count == 0 {
            return Ok(Vec::new());
        }
        if self.is_empty() {
            return Err(SwatchError::InvalidArgument(format!(
                "cannot select {} swatches from an empty pool",
                target_count
            )));
        }
        let goal = target_count.min(self.len());
        let mut state = SelectionState::seeded(self.len());
        while state.selected.len() < goal {
            state.update_from_last(&self.labs);
            match state.farthest() {
                Some((index, d)) => {
                    debug!(
                        round = state.selected.len(),
                        index,
                        distance = d,
                        "selected swatch"
                    );
                    state.mark(index);
                }
                None => break,
            }
        }
        Ok(state.selected)
    }

    /// Like [`select_indices`](#method.select_indices), but returns the colors themselves.
    pub fn select(&self, target_count: usize) -> Result<Vec<RGBColor>> {
        let indices = self.select_indices(target_count)?;
        Ok(indices.into_iter().map(|i| self.colors[i]).collect())
    }
}

/// Picks `min(target_count, pool.len())` perceptually diverse colors from `pool`, in selection
/// order. Deterministic: the same pool and count always give the same result.
/// # Example
/// ```
/// # use swatchgen::prelude::*;
/// let pool = vec![
///     RGBColor{r: 1., g: 0., b: 0.},
///     RGBColor{r: 0.9, g: 0., b: 0.},
///     RGBColor{r: 0., g: 0., b: 1.},
/// ];
/// let picked = select_diverse(&pool, 2).unwrap();
/// assert_eq!(picked, vec![pool[0], pool[2]]);
/// ```
/// # Errors
/// Returns `SwatchError::InvalidArgument` when `pool` is empty and `target_count` is not 0.
pub fn select_diverse(pool: &[RGBColor], target_count: usize) -> Result<Vec<RGBColor>> {
    CandidatePool::new(pool.to_vec()).select(target_count)
}
