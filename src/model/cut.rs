//! Cut definition: one length of material needed for one purpose.

use serde::{Deserialize, Serialize};

/// What a cut is used for in the finished fence.
///
/// Only used for traceability in the report; packing ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CutPurpose {
    /// Vertical post.
    Post,
    /// Top rail running along the segment.
    TopRail,
    /// Mid rail spanning one section between posts.
    MidRail,
}

impl CutPurpose {
    /// Label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            CutPurpose::Post => "POST",
            CutPurpose::TopRail => "TOP_RAIL",
            CutPurpose::MidRail => "MID_RAIL",
        }
    }
}

impl std::fmt::Display for CutPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A required length of material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Requested length in feet.
    pub length: f64,
    /// What the cut is for.
    pub purpose: CutPurpose,
    /// Stock piece this cut was assigned to (None until optimized).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_stock_id: Option<u32>,
}

impl Cut {
    /// Create a new unassigned cut.
    pub fn new(length: f64, purpose: CutPurpose) -> Self {
        Self {
            length,
            purpose,
            source_stock_id: None,
        }
    }

    /// Create a post cut.
    pub fn post(length: f64) -> Self {
        Self::new(length, CutPurpose::Post)
    }

    /// Create a top rail cut.
    pub fn top_rail(length: f64) -> Self {
        Self::new(length, CutPurpose::TopRail)
    }

    /// Create a mid rail cut.
    pub fn mid_rail(length: f64) -> Self {
        Self::new(length, CutPurpose::MidRail)
    }

    /// Copy of this cut tagged with the stock piece it was taken from.
    pub fn assigned_to(&self, stock_id: u32) -> Self {
        Self {
            source_stock_id: Some(stock_id),
            ..self.clone()
        }
    }

    /// Check if this cut has been assigned to a stock piece.
    pub fn is_assigned(&self) -> bool {
        self.source_stock_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cut_is_unassigned() {
        let cut = Cut::post(8.5);
        assert_eq!(cut.length, 8.5);
        assert_eq!(cut.purpose, CutPurpose::Post);
        assert!(!cut.is_assigned());
    }

    #[test]
    fn test_assigned_to_leaves_original_untouched() {
        let cut = Cut::top_rail(21.0);
        let assigned = cut.assigned_to(3);
        assert_eq!(assigned.source_stock_id, Some(3));
        assert_eq!(assigned.length, 21.0);
        assert_eq!(assigned.purpose, CutPurpose::TopRail);
        assert!(!cut.is_assigned());
    }

    #[test]
    fn test_purpose_labels() {
        assert_eq!(CutPurpose::Post.to_string(), "POST");
        assert_eq!(CutPurpose::TopRail.to_string(), "TOP_RAIL");
        assert_eq!(CutPurpose::MidRail.to_string(), "MID_RAIL");
    }

    #[test]
    fn test_purpose_serde_names() {
        let json = serde_json::to_string(&Cut::mid_rail(8.0)).unwrap();
        assert_eq!(json, r#"{"length":8.0,"purpose":"MID_RAIL"}"#);

        let cut: Cut = serde_json::from_str(r#"{"length":2.5,"purpose":"TOP_RAIL"}"#).unwrap();
        assert_eq!(cut, Cut::top_rail(2.5));
    }
}
