//! Plain-text material breakdown.

use std::fmt::Write;

use crate::project::{ProjectReport, ProjectTotals, SegmentReport};

/// Render the full material breakdown.
pub fn render_text(report: &ProjectReport) -> String {
    let mut output = String::new();

    writeln!(output).unwrap();
    writeln!(output, "FENCE CALCULATION SUMMARY").unwrap();
    writeln!(output, "{}", "=".repeat(40)).unwrap();

    write_segment_breakdown(&mut output, &report.segments);
    write_material_totals(&mut output, &report.totals);
    write_cut_list(&mut output, &report.totals);

    writeln!(output).unwrap();
    writeln!(output, "Total Sticks Needed: {}", report.totals.stock_count()).unwrap();
    writeln!(output, "Cost per Stick: ${:.2}", report.config.stock_price).unwrap();
    writeln!(output, "Total Cost: ${:.2}", report.totals.total_cost).unwrap();

    output
}

/// Full precision, but whole numbers keep one decimal (`24.0`, `24.25`).
fn format_feet(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn write_heading(output: &mut String, title: &str) {
    writeln!(output).unwrap();
    writeln!(output, "{}", title).unwrap();
    writeln!(output, "{}", "-".repeat(20)).unwrap();
}

fn write_segment_breakdown(output: &mut String, segments: &[SegmentReport]) {
    write_heading(output, "SEGMENT BREAKDOWN:");

    for (i, entry) in segments.iter().enumerate() {
        let comp = &entry.components;
        writeln!(output).unwrap();
        writeln!(
            output,
            "Segment {}: {} ft ({})",
            i + 1,
            format_feet(entry.segment.length),
            entry.segment.kind
        )
        .unwrap();
        writeln!(output, "  - Posts: {}", comp.num_posts).unwrap();
        writeln!(
            output,
            "  - Top Rail: {} ft ({:.1} sticks)",
            format_feet(comp.top_rail_length),
            comp.top_rail_sticks
        )
        .unwrap();
        writeln!(output, "  - Mid Rails: {} sections", comp.mid_rail_sections).unwrap();
        writeln!(output, "  - Section lengths:").unwrap();
        for section in &comp.sections {
            writeln!(output, "    * {:.1} ft", section.length).unwrap();
        }
    }
}

fn write_material_totals(output: &mut String, totals: &ProjectTotals) {
    write_heading(output, "TOTAL MATERIALS NEEDED:");

    writeln!(output, "Total Post Length: {:.1} ft", totals.total_post_length).unwrap();
    writeln!(
        output,
        "Total Top Rail Length: {:.1} ft",
        totals.total_top_rail_length
    )
    .unwrap();
    writeln!(
        output,
        "Total Mid Rail Length: {:.1} ft",
        totals.total_mid_rail_length
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Total Length in Sticks: {:.1} sticks (before optimization)",
        totals.total_sticks
    )
    .unwrap();
}

fn write_cut_list(output: &mut String, totals: &ProjectTotals) {
    write_heading(output, "OPTIMIZED CUT LIST:");

    for stick in &totals.optimized_sticks {
        writeln!(output).unwrap();
        writeln!(output, "Stick {}:", stick.id).unwrap();
        writeln!(output, "  Total cut length: {:.1} ft", stick.used_length()).unwrap();
        for cut in &stick.cuts {
            writeln!(output, "  - {:.1} ft ({})", cut.length, cut.purpose).unwrap();
        }
        writeln!(output, "  Remaining: {:.1} ft", stick.remaining_length).unwrap();
    }
}
