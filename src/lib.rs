//! fence-calc - Fence bill of materials and pipe stick cut optimization.
//!
//! This library derives the posts, top rails and mid-rail sections of a
//! multi-segment fence, then packs the required cuts into fixed-length pipe
//! sticks with a first-fit-decreasing heuristic.
//!
//! # Example
//!
//! ```
//! use fence_calc::{calculate_project, render_text, FenceSegment, MaterialConfig};
//!
//! let segments = [FenceSegment::regular(24.0), FenceSegment::corner(108.0)];
//! let report = calculate_project(&segments, &MaterialConfig::default()).unwrap();
//! println!("{}", render_text(&report));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod project;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::MaterialConfig;
pub use error::{ErrorCode, FenceError, Result};
pub use extract::{calculate_components, required_cuts};
pub use model::{
    Cut, CutPurpose, FenceSegment, Section, SectionKind, SegmentComponents, SegmentKind,
    StockPiece,
};
pub use optimizer::optimize_cuts;
pub use parser::{parse_project_file, ProjectFile};
pub use project::{calculate_project, calculate_project_totals, ProjectReport, ProjectTotals};
pub use report::{render_json, render_text};
pub use validation::{validate_plan, validate_project, ValidationResult};

/// Load a project file and compute its report.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the project file
/// 2. Validate segments and material settings
/// 3. Derive components and required cuts
/// 4. Optimize the cuts into sticks
///
/// Validation errors stop the pipeline with the first offending
/// segment's error; warnings are logged.
pub fn calculate_project_file(input_path: &std::path::Path) -> Result<ProjectReport> {
    let project = parse_project_file(input_path)?;

    let validation = validate_project(&project.segments, &project.config)?;
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    calculate_project(&project.segments, &project.config)
}
