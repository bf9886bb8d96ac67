//! Fence segment definitions and their derived components.

use serde::{Deserialize, Serialize};

use super::Cut;

/// How a segment terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentKind {
    /// Segment with its own start and end posts.
    #[default]
    Regular,
    /// Segment ending in a corner post shared with the next segment.
    Corner,
}

impl SegmentKind {
    /// Check if the segment carries its own end post.
    pub fn has_end_post(&self) -> bool {
        matches!(self, SegmentKind::Regular)
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentKind::Regular => write!(f, "REGULAR"),
            SegmentKind::Corner => write!(f, "CORNER"),
        }
    }
}

/// A straight run of fence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FenceSegment {
    /// Run length in feet.
    pub length: f64,
    /// Boundary kind.
    #[serde(default)]
    pub kind: SegmentKind,
}

impl FenceSegment {
    /// Create a new segment.
    pub fn new(length: f64, kind: SegmentKind) -> Self {
        Self { length, kind }
    }

    /// Create a segment with a dedicated end post.
    pub fn regular(length: f64) -> Self {
        Self::new(length, SegmentKind::Regular)
    }

    /// Create a segment ending in a shared corner post.
    pub fn corner(length: f64) -> Self {
        Self::new(length, SegmentKind::Corner)
    }
}

/// Whether a mid-rail section spans the full post spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionKind {
    /// Full post-spacing section.
    Full,
    /// Shorter last section of a segment.
    Partial,
}

/// One mid-rail bay between two posts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub length: f64,
    pub kind: SectionKind,
}

impl Section {
    pub fn full(length: f64) -> Self {
        Self {
            length,
            kind: SectionKind::Full,
        }
    }

    pub fn partial(length: f64) -> Self {
        Self {
            length,
            kind: SectionKind::Partial,
        }
    }
}

/// Materials derived for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentComponents {
    /// Segment length.
    pub total_length: f64,
    /// Posts including start post and, for regular segments, end post.
    pub num_posts: usize,
    /// Top rail length (equal to the segment length).
    pub top_rail_length: f64,
    /// Top rail length expressed in sticks.
    pub top_rail_sticks: f64,
    /// Number of mid-rail sections.
    pub mid_rail_sections: usize,
    /// Mid-rail sections in order along the segment.
    pub sections: Vec<Section>,
    /// One post-height cut per post.
    pub post_cuts: Vec<Cut>,
    /// Top rail split into stick-sized cuts.
    pub top_rail_cuts: Vec<Cut>,
}

impl SegmentComponents {
    /// Mid-rail cuts, one per section.
    pub fn mid_rail_cuts(&self) -> Vec<Cut> {
        self.sections.iter().map(|s| Cut::mid_rail(s.length)).collect()
    }
}
