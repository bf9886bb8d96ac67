//! First-fit-decreasing cutting-stock heuristic.
//!
//! Algorithm:
//! 1. Reject any cut that is non-positive or longer than the stock
//! 2. Stable sort by length, longest first (equal lengths keep input order)
//! 3. Give every full-length cut a stick of its own
//! 4. Place each remaining cut on the first stick, in creation order, with
//!    enough length left; open a new stick when none has room
//!
//! The result is deterministic but not guaranteed minimal: nothing is
//! repacked once placed.

use tracing::debug;

use crate::error::{FenceError, Result};
use crate::model::{Cut, StockPiece};

/// Assign every cut to a stick of `stock_length`.
///
/// The input is left untouched; returned sticks carry copies of the cuts
/// tagged with their stick id. Sticks come back in creation order: the
/// full-length sticks first, then those opened during first-fit.
pub fn optimize_cuts(cuts: &[Cut], stock_length: f64) -> Result<Vec<StockPiece>> {
    if !stock_length.is_finite() || stock_length <= 0.0 {
        return Err(FenceError::InvalidConfig {
            field: "stock_length",
            value: stock_length,
        });
    }

    for cut in cuts {
        check_cut(cut, stock_length)?;
    }

    let sorted = sort_longest_first(cuts);
    let (full, rest): (Vec<&Cut>, Vec<&Cut>) = sorted
        .into_iter()
        .partition(|cut| cut.length == stock_length);

    let mut sticks: Vec<StockPiece> = Vec::new();
    let mut next_id: u32 = 1;

    for cut in full {
        sticks.push(StockPiece::full(next_id, cut));
        next_id += 1;
    }
    let full_count = sticks.len();

    for cut in rest {
        match sticks.iter().position(|stick| stick.fits(cut.length)) {
            Some(idx) => sticks[idx].assign(cut),
            None => {
                sticks.push(StockPiece::open(next_id, stock_length, cut));
                next_id += 1;
            }
        }
    }

    debug!(
        "Packed {} cuts into {} sticks ({} full-length)",
        cuts.len(),
        sticks.len(),
        full_count
    );

    Ok(sticks)
}

/// A cut is placeable if it is positive, finite and no longer than the stock.
///
/// Compared exactly: anything past the stock length, however small, is rejected.
fn check_cut(cut: &Cut, stock_length: f64) -> Result<()> {
    let placeable = cut.length.is_finite() && cut.length > 0.0 && cut.length <= stock_length;
    if placeable {
        Ok(())
    } else {
        Err(FenceError::InvalidCutLength {
            length: cut.length,
            stock_length,
        })
    }
}

/// Longest first. `sort_by` is stable, so ties stay in input order.
fn sort_longest_first(cuts: &[Cut]) -> Vec<&Cut> {
    let mut sorted: Vec<&Cut> = cuts.iter().collect();
    sorted.sort_by(|a, b| b.length.total_cmp(&a.length));
    sorted
}
