//! Data model types for fence material calculation.

mod cut;
mod segment;
mod stock;

pub use cut::{Cut, CutPurpose};
pub use segment::{FenceSegment, Section, SectionKind, SegmentComponents, SegmentKind};
pub use stock::StockPiece;
