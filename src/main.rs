//! fence-calc - CLI tool to compute fence materials and an optimized cut list.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fence_calc::{
    calculate_project, parse_project_file, render_json, render_text, validate_plan,
    validate_project, ProjectFile,
};

/// Compute posts, rails and an optimized pipe stick cut list for a fence.
#[derive(Parser, Debug)]
#[command(name = "fence-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project file (JSON); the built-in sample project when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stick length in feet
    #[arg(long)]
    stock_length: Option<f64>,

    /// Post height in feet
    #[arg(long)]
    post_height: Option<f64>,

    /// Post spacing in feet
    #[arg(long)]
    post_spacing: Option<f64>,

    /// Price per stick in dollars
    #[arg(long)]
    price: Option<f64>,

    /// Include mid-rail sections in the cut optimization
    #[arg(long)]
    pack_mid_rails: bool,

    /// Validate only, don't compute the cut list
    #[arg(long)]
    validate: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load the project
    let mut project = match &args.input {
        Some(path) => {
            info!("Processing: {}", path.display());
            parse_project_file(path)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => {
            info!("No input given, using the sample project");
            ProjectFile::sample()
        }
    };

    // Command line overrides
    if let Some(v) = args.stock_length {
        project.config.stock_length = v;
    }
    if let Some(v) = args.post_height {
        project.config.post_height = v;
    }
    if let Some(v) = args.post_spacing {
        project.config.post_spacing = v;
    }
    if let Some(v) = args.price {
        project.config.stock_price = v;
    }
    if args.pack_mid_rails {
        project.config.pack_mid_rails = true;
    }

    info!("Loaded {} segment(s)", project.segments.len());

    // Validate
    let validation = validate_project(&project.segments, &project.config)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let report = calculate_project(&project.segments, &project.config)
        .context("Failed to calculate materials")?;

    let plan_check = validate_plan(&report.totals.optimized_sticks, project.config.stock_length);
    for err in &plan_check.errors {
        warn!("Cut plan check: {}", err);
    }

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
