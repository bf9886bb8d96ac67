//! Stock piece: one purchased raw stick and the cuts taken from it.

use serde::{Deserialize, Serialize};

use super::Cut;

/// A raw stick with the cuts assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPiece {
    /// Sequential id, starting at 1 in creation order.
    pub id: u32,
    /// Length still available on this stick.
    pub remaining_length: f64,
    /// Assigned cuts in assignment order.
    pub cuts: Vec<Cut>,
}

impl StockPiece {
    /// Open a new stick for `cut`, leaving `stock_length - cut.length` available.
    ///
    /// `cut.length` must not exceed `stock_length`.
    pub fn open(id: u32, stock_length: f64, cut: &Cut) -> Self {
        Self {
            id,
            remaining_length: stock_length - cut.length,
            cuts: vec![cut.assigned_to(id)],
        }
    }

    /// Open a stick consumed entirely by a single full-length cut.
    pub fn full(id: u32, cut: &Cut) -> Self {
        Self {
            id,
            remaining_length: 0.0,
            cuts: vec![cut.assigned_to(id)],
        }
    }

    /// Check if `length` fits in what is left of this stick.
    pub fn fits(&self, length: f64) -> bool {
        length <= self.remaining_length
    }

    /// Take `cut` from this stick.
    ///
    /// Callers check [`StockPiece::fits`] first, so the remaining length
    /// never goes negative.
    pub fn assign(&mut self, cut: &Cut) {
        self.remaining_length -= cut.length;
        self.cuts.push(cut.assigned_to(self.id));
    }

    /// Sum of all assigned cut lengths.
    pub fn used_length(&self) -> f64 {
        self.cuts.iter().map(|c| c.length).sum()
    }

    /// Check if nothing usable is left on this stick.
    pub fn is_exhausted(&self) -> bool {
        crate::config::float_cmp::approx_zero(self.remaining_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tags_cut() {
        let piece = StockPiece::open(4, 29.0, &Cut::post(8.5));
        assert_eq!(piece.id, 4);
        assert_eq!(piece.remaining_length, 20.5);
        assert_eq!(piece.cuts.len(), 1);
        assert_eq!(piece.cuts[0].source_stock_id, Some(4));
    }

    #[test]
    fn test_full_piece_has_nothing_left() {
        let piece = StockPiece::full(1, &Cut::top_rail(29.0));
        assert_eq!(piece.remaining_length, 0.0);
        assert!(piece.is_exhausted());
        assert!(!piece.fits(0.5));
    }

    #[test]
    fn test_assign_until_full() {
        let mut piece = StockPiece::open(1, 29.0, &Cut::post(8.5));
        assert!(piece.fits(8.5));
        piece.assign(&Cut::post(8.5));
        piece.assign(&Cut::post(8.5));
        assert_eq!(piece.remaining_length, 3.5);
        assert!(!piece.fits(8.5));
        assert!(piece.fits(3.5));
        assert_eq!(piece.used_length(), 25.5);
        assert!(piece.cuts.iter().all(|c| c.source_stock_id == Some(1)));
    }

    #[test]
    fn test_assign_rounding_residue_stays_non_negative() {
        let mut piece = StockPiece::open(1, 1.0, &Cut::post(0.7));
        piece.assign(&Cut::post(0.1));
        piece.assign(&Cut::post(0.1));
        assert!(piece.fits(0.1));
        piece.assign(&Cut::post(0.1));
        assert!(piece.remaining_length >= 0.0);
        assert!(piece.is_exhausted());
    }

    #[test]
    fn test_fits_is_exact() {
        let piece = StockPiece::open(1, 29.0, &Cut::top_rail(20.0));
        assert!(piece.fits(9.0));
        assert!(!piece.fits(9.00009));
        assert!(!piece.fits(9.0 + 1e-12));
    }
}
