//! Per-segment component derivation: posts, mid-rail sections and rail cuts.

use tracing::debug;

use crate::config::{MaterialConfig, EPS, MAX_PIECES_PER_SEGMENT, MAX_SEGMENT_LENGTH};
use crate::error::{FenceError, Result};
use crate::model::{Cut, FenceSegment, Section, SegmentComponents};

/// Derive the components of one segment.
///
/// `index` is the 1-based position of the segment in the project and only
/// shows up in errors. Segments longer than [`MAX_SEGMENT_LENGTH`], or that
/// would split into more than [`MAX_PIECES_PER_SEGMENT`] sections or rail
/// cuts, are rejected.
pub fn calculate_components(
    segment: &FenceSegment,
    index: usize,
    config: &MaterialConfig,
) -> Result<SegmentComponents> {
    if !segment.length.is_finite() || segment.length <= 0.0 {
        return Err(FenceError::InvalidSegmentLength {
            index,
            length: segment.length,
        });
    }
    config.check()?;

    let shortest_piece = config.post_spacing.min(config.stock_length);
    if segment.length > MAX_SEGMENT_LENGTH
        || segment.length / shortest_piece > MAX_PIECES_PER_SEGMENT
    {
        return Err(FenceError::InvalidSegmentLength {
            index,
            length: segment.length,
        });
    }

    let num_posts = count_posts(segment, config.post_spacing);
    let sections = split_sections(segment.length, config.post_spacing);
    let top_rail_cuts = top_rail_cuts(segment.length, config.stock_length);
    let post_cuts = vec![Cut::post(config.post_height); num_posts];

    debug!(
        "Segment {}: {} ft {}, {} posts, {} sections, {} top rail cuts",
        index,
        segment.length,
        segment.kind,
        num_posts,
        sections.len(),
        top_rail_cuts.len()
    );

    Ok(SegmentComponents {
        total_length: segment.length,
        num_posts,
        top_rail_length: segment.length,
        top_rail_sticks: segment.length / config.stock_length,
        mid_rail_sections: sections.len(),
        sections,
        post_cuts,
        top_rail_cuts,
    })
}

/// Derive the components of every segment, in order.
pub fn calculate_all_components(
    segments: &[FenceSegment],
    config: &MaterialConfig,
) -> Result<Vec<SegmentComponents>> {
    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| calculate_components(segment, idx + 1, config))
        .collect()
}

/// Flatten the cut requests of all segments.
///
/// For each segment: post cuts, then top rail cuts, then (only with
/// `pack_mid_rails`) one mid-rail cut per section.
pub fn required_cuts(segments: &[FenceSegment], config: &MaterialConfig) -> Result<Vec<Cut>> {
    let components = calculate_all_components(segments, config)?;
    Ok(cuts_from_components(&components, config))
}

/// Flatten already derived components into cut requests.
pub fn cuts_from_components(components: &[SegmentComponents], config: &MaterialConfig) -> Vec<Cut> {
    let mut cuts = Vec::new();
    for comp in components {
        cuts.extend(comp.post_cuts.iter().cloned());
        cuts.extend(comp.top_rail_cuts.iter().cloned());
        if config.pack_mid_rails {
            cuts.extend(comp.mid_rail_cuts());
        }
    }
    cuts
}

/// Start post, one post every `spacing` feet, and the end post unless the
/// segment hands it over to the next one as a corner.
fn count_posts(segment: &FenceSegment, spacing: f64) -> usize {
    // Segments under 1 ft would give a negative intermediate count
    let intermediate = ((segment.length - 1.0) / spacing).floor().max(0.0) as usize;
    let end_post = usize::from(segment.kind.has_end_post());
    1 + intermediate + end_post
}

/// Full sections of `spacing` width plus a partial one for any remainder.
fn split_sections(length: f64, spacing: f64) -> Vec<Section> {
    let full_sections = (length / spacing).floor() as usize;
    let last_section = length % spacing;

    let mut sections = vec![Section::full(spacing); full_sections];
    if last_section > EPS {
        sections.push(Section::partial(last_section));
    }
    sections
}

/// Split the top rail into whole sticks plus a final remainder cut.
fn top_rail_cuts(length: f64, stock_length: f64) -> Vec<Cut> {
    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > EPS {
        if remaining >= stock_length {
            cuts.push(Cut::top_rail(stock_length));
            remaining -= stock_length;
        } else {
            cuts.push(Cut::top_rail(remaining));
            remaining = 0.0;
        }
    }
    cuts
}
