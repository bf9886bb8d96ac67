//! Configuration constants and material settings.

use serde::{Deserialize, Serialize};

use crate::error::{FenceError, Result};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Length of one pipe stick in feet.
pub const DEFAULT_STOCK_LENGTH: f64 = 29.0;

/// Height of a post cut in feet.
pub const DEFAULT_POST_HEIGHT: f64 = 8.5;

/// Spacing between posts in feet.
pub const DEFAULT_POST_SPACING: f64 = 8.0;

/// Price per stick in dollars.
pub const DEFAULT_STOCK_PRICE: f64 = 55.0;

/// Longest segment accepted, in feet.
pub const MAX_SEGMENT_LENGTH: f64 = 100_000.0;

/// Most posts, sections or top rail cuts a single segment may produce.
pub const MAX_PIECES_PER_SEGMENT: f64 = 100_000.0;

/// Material configuration shared by the extractor, the optimizer and the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Raw stick length.
    pub stock_length: f64,
    /// Post cut length.
    pub post_height: f64,
    /// Distance between posts (and mid-rail section width).
    pub post_spacing: f64,
    /// Price of one stick.
    pub stock_price: f64,
    /// Turn mid-rail sections into cut requests for the optimizer.
    pub pack_mid_rails: bool,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            stock_length: DEFAULT_STOCK_LENGTH,
            post_height: DEFAULT_POST_HEIGHT,
            post_spacing: DEFAULT_POST_SPACING,
            stock_price: DEFAULT_STOCK_PRICE,
            pack_mid_rails: false,
        }
    }
}

impl MaterialConfig {
    /// Create a configuration with a custom stock length.
    pub fn with_stock_length(stock_length: f64) -> Self {
        Self {
            stock_length,
            ..Default::default()
        }
    }

    /// Check that every dimension is usable.
    ///
    /// Lengths must be positive and finite, the price must not be negative.
    pub fn check(&self) -> Result<()> {
        check_positive("stock_length", self.stock_length)?;
        check_positive("post_height", self.post_height)?;
        check_positive("post_spacing", self.post_spacing)?;
        if !self.stock_price.is_finite() || self.stock_price < 0.0 {
            return Err(FenceError::InvalidConfig {
                field: "stock_price",
                value: self.stock_price,
            });
        }
        Ok(())
    }

    /// Cost of the given number of sticks.
    pub fn cost_of(&self, sticks: usize) -> f64 {
        sticks as f64 * self.stock_price
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FenceError::InvalidConfig { field, value })
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if `a <= b` with epsilon tolerance.
    #[inline]
    pub fn approx_le(a: f64, b: f64) -> bool {
        a <= b + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MaterialConfig::default();
        assert_eq!(config.stock_length, 29.0);
        assert_eq!(config.post_height, 8.5);
        assert_eq!(config.post_spacing, 8.0);
        assert_eq!(config.stock_price, 55.0);
        assert!(!config.pack_mid_rails);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let config = MaterialConfig::with_stock_length(0.0);
        assert!(matches!(
            config.check(),
            Err(FenceError::InvalidConfig {
                field: "stock_length",
                ..
            })
        ));

        let config = MaterialConfig {
            post_spacing: f64::NAN,
            ..Default::default()
        };
        assert!(config.check().is_err());

        let config = MaterialConfig {
            stock_price: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.check(),
            Err(FenceError::InvalidConfig {
                field: "stock_price",
                ..
            })
        ));
    }

    #[test]
    fn test_free_material_is_valid() {
        let config = MaterialConfig {
            stock_price: 0.0,
            ..Default::default()
        };
        assert!(config.check().is_ok());
        assert_eq!(config.cost_of(10), 0.0);
    }

    #[test]
    fn test_cost_of() {
        let config = MaterialConfig::default();
        assert_eq!(config.cost_of(0), 0.0);
        assert_eq!(config.cost_of(4), 220.0);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: MaterialConfig = serde_json::from_str(r#"{"stock_length": 21.0}"#).unwrap();
        assert_eq!(config.stock_length, 21.0);
        assert_eq!(config.post_height, DEFAULT_POST_HEIGHT);
        assert_eq!(config.stock_price, DEFAULT_STOCK_PRICE);
    }

    #[test]
    fn test_float_cmp() {
        assert!(float_cmp::approx_eq(29.0, 29.00001));
        assert!(!float_cmp::approx_eq(29.0, 29.01));
        assert!(float_cmp::approx_zero(-0.00001));
        assert!(float_cmp::approx_le(8.50001, 8.5));
        assert!(!float_cmp::approx_le(8.6, 8.5));
    }
}
