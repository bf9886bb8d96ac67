//! Project-wide totals: material lengths, optimized sticks and cost.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::MaterialConfig;
use crate::error::Result;
use crate::extract::{calculate_all_components, cuts_from_components};
use crate::model::{FenceSegment, SegmentComponents, StockPiece};
use crate::optimizer::optimize_cuts;

/// Totals for the whole fence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectTotals {
    /// Post count times post height.
    pub total_post_length: f64,
    /// Sum of segment lengths.
    pub total_top_rail_length: f64,
    /// Mid-rail section count times segment length, per segment.
    pub total_mid_rail_length: f64,
    /// All lengths above expressed in sticks, before optimization.
    pub total_sticks: f64,
    /// Sticks produced by the cut optimizer.
    pub optimized_sticks: Vec<StockPiece>,
    /// Optimized stick count times stick price.
    pub total_cost: f64,
}

impl ProjectTotals {
    /// Number of sticks to buy.
    pub fn stock_count(&self) -> usize {
        self.optimized_sticks.len()
    }

    /// Total length of all packed cuts.
    pub fn total_cut_length(&self) -> f64 {
        self.optimized_sticks.iter().map(|s| s.used_length()).sum()
    }

    /// Total offcut length left on the sticks.
    pub fn total_leftover(&self) -> f64 {
        self.optimized_sticks.iter().map(|s| s.remaining_length).sum()
    }
}

/// A segment paired with its derived components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub segment: FenceSegment,
    pub components: SegmentComponents,
}

/// Everything needed to render a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    pub config: MaterialConfig,
    pub segments: Vec<SegmentReport>,
    pub totals: ProjectTotals,
}

/// Run the full pipeline for a project.
pub fn calculate_project(
    segments: &[FenceSegment],
    config: &MaterialConfig,
) -> Result<ProjectReport> {
    config.check()?;
    let components = calculate_all_components(segments, config)?;
    let totals = totals_from_components(segments, &components, config)?;

    let segments = segments
        .iter()
        .copied()
        .zip(components)
        .map(|(segment, components)| SegmentReport {
            segment,
            components,
        })
        .collect();

    Ok(ProjectReport {
        config: config.clone(),
        segments,
        totals,
    })
}

/// Compute the project totals for a list of segments.
pub fn calculate_project_totals(
    segments: &[FenceSegment],
    config: &MaterialConfig,
) -> Result<ProjectTotals> {
    let components = calculate_all_components(segments, config)?;
    totals_from_components(segments, &components, config)
}

fn totals_from_components(
    segments: &[FenceSegment],
    components: &[SegmentComponents],
    config: &MaterialConfig,
) -> Result<ProjectTotals> {
    let mut total_post_length = 0.0;
    let mut total_top_rail_length = 0.0;
    let mut total_mid_rail_length = 0.0;

    for (segment, comp) in segments.iter().zip(components) {
        total_post_length += comp.num_posts as f64 * config.post_height;
        total_top_rail_length += comp.top_rail_length;
        total_mid_rail_length += comp.mid_rail_sections as f64 * segment.length;
    }

    let total_sticks =
        (total_post_length + total_top_rail_length + total_mid_rail_length) / config.stock_length;

    let cuts = cuts_from_components(components, config);
    debug!("Optimizing {} cuts", cuts.len());
    let optimized_sticks = optimize_cuts(&cuts, config.stock_length)?;
    let total_cost = config.cost_of(optimized_sticks.len());

    info!(
        "{} segments need {} sticks (${:.2})",
        segments.len(),
        optimized_sticks.len(),
        total_cost
    );

    Ok(ProjectTotals {
        total_post_length,
        total_top_rail_length,
        total_mid_rail_length,
        total_sticks,
        optimized_sticks,
        total_cost,
    })
}
