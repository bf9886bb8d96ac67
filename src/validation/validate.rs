//! Validation of fence projects and cut plans.

use crate::config::{float_cmp, MaterialConfig, EPS, MAX_SEGMENT_LENGTH};
use crate::error::{FenceError, Result};
use crate::model::{FenceSegment, StockPiece};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a whole project: its segments and its material settings.
pub fn validate_project(
    segments: &[FenceSegment],
    config: &MaterialConfig,
) -> Result<ValidationResult> {
    let mut result = validate_segments(segments)?;
    result.merge(validate_config(config));
    Ok(result)
}

/// Validate all segments.
pub fn validate_segments(segments: &[FenceSegment]) -> Result<ValidationResult> {
    if segments.is_empty() {
        return Err(FenceError::NoSegments);
    }

    let mut result = ValidationResult::ok();
    for (idx, segment) in segments.iter().enumerate() {
        result.merge(validate_segment(segment, idx + 1));
    }
    Ok(result)
}

/// Validate a single segment.
pub fn validate_segment(segment: &FenceSegment, segment_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !segment.length.is_finite() || segment.length <= 0.0 {
        result.add_error(format!(
            "Segment {}: Invalid length {} ft",
            segment_num, segment.length
        ));
    } else if segment.length > MAX_SEGMENT_LENGTH {
        result.add_error(format!(
            "Segment {}: Length {} ft exceeds the {} ft limit",
            segment_num, segment.length, MAX_SEGMENT_LENGTH
        ));
    } else if segment.length < 1.0 {
        result.add_warning(format!(
            "Segment {}: Length {} ft is shorter than 1 ft",
            segment_num, segment.length
        ));
    }

    result
}

/// Validate material settings.
pub fn validate_config(config: &MaterialConfig) -> ValidationResult {
    if let Err(err) = config.check() {
        return ValidationResult::error(format!("Config: {}", err));
    }

    let mut result = ValidationResult::ok();

    if config.post_height > config.stock_length + EPS {
        result.add_warning(format!(
            "Config: Post height {} ft exceeds stock length {} ft",
            config.post_height, config.stock_length
        ));
    }

    if config.pack_mid_rails && config.post_spacing > config.stock_length + EPS {
        result.add_warning(format!(
            "Config: Post spacing {} ft exceeds stock length {} ft",
            config.post_spacing, config.stock_length
        ));
    }

    result
}

/// Check that a packed plan honours the optimizer's guarantees.
///
/// Ids run 1..=n in order, every cut is tagged with its stick, and each
/// stick's remaining length equals the stock length minus what was cut.
pub fn validate_plan(sticks: &[StockPiece], stock_length: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, stick) in sticks.iter().enumerate() {
        let expected_id = idx as u32 + 1;
        if stick.id != expected_id {
            result.add_error(format!(
                "Stick {}: Expected id {}",
                stick.id, expected_id
            ));
        }

        if stick.cuts.is_empty() {
            result.add_warning(format!("Stick {}: No cuts assigned", stick.id));
        }

        let used = stick.used_length();
        if !float_cmp::approx_le(used, stock_length) {
            result.add_error(format!(
                "Stick {}: Cuts total {} ft, more than stock length {} ft",
                stick.id, used, stock_length
            ));
        }

        if stick.remaining_length < 0.0
            || !float_cmp::approx_eq(stick.remaining_length, (stock_length - used).max(0.0))
        {
            result.add_error(format!(
                "Stick {}: Remaining {} ft does not match {} ft used",
                stick.id, stick.remaining_length, used
            ));
        }

        if stick
            .cuts
            .iter()
            .any(|c| c.source_stock_id != Some(stick.id))
        {
            result.add_error(format!(
                "Stick {}: Cut tagged with another stick",
                stick.id
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cut;
    use crate::optimizer::optimize_cuts;

    #[test]
    fn test_empty_project_is_error() {
        assert!(matches!(
            validate_segments(&[]),
            Err(FenceError::NoSegments)
        ));
    }

    #[test]
    fn test_valid_segments() {
        let result =
            validate_segments(&[FenceSegment::regular(24.0), FenceSegment::corner(2.0)]).unwrap();
        assert!(result.passed);
        assert!(result.warnings.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_invalid_segment_lengths() {
        let result = validate_segments(&[
            FenceSegment::regular(0.0),
            FenceSegment::regular(10.0),
            FenceSegment::corner(-5.0),
        ])
        .unwrap();
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].starts_with("Segment 1:"));
        assert!(result.errors[1].starts_with("Segment 3:"));
    }

    #[test]
    fn test_oversized_segment_is_error() {
        let result = validate_segments(&[FenceSegment::regular(1e20)]).unwrap();
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Segment 1:"));
    }

    #[test]
    fn test_short_segment_warns() {
        let result = validate_segments(&[FenceSegment::regular(0.5)]).unwrap();
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_config_validation() {
        assert!(validate_config(&MaterialConfig::default()).passed);

        let result = validate_config(&MaterialConfig::with_stock_length(-1.0));
        assert!(!result.passed);

        let result = validate_config(&MaterialConfig::with_stock_length(8.0));
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_spacing_warning_only_when_mid_rails_packed() {
        // Spacing longer than a stick only matters once sections become cuts
        let config = MaterialConfig {
            post_spacing: 30.0,
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.passed);
        assert!(result.warnings.is_empty());

        let config = MaterialConfig {
            pack_mid_rails: true,
            ..config
        };
        let result = validate_config(&config);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Post spacing"));
    }

    #[test]
    fn test_validate_project_merges() {
        let result = validate_project(
            &[FenceSegment::regular(0.0)],
            &MaterialConfig::with_stock_length(0.0),
        )
        .unwrap();
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_optimizer_output_passes_plan_check() {
        let mut cuts = vec![Cut::top_rail(29.0), Cut::top_rail(21.0), Cut::top_rail(2.5)];
        cuts.extend(vec![Cut::post(8.5); 9]);
        let sticks = optimize_cuts(&cuts, 29.0).unwrap();
        let result = validate_plan(&sticks, 29.0);
        assert!(result.passed, "{:?}", result.errors);
    }

    #[test]
    fn test_plan_check_catches_overfull_stick() {
        let mut stick = StockPiece::open(1, 29.0, &Cut::top_rail(24.0));
        stick.cuts.push(Cut::post(8.5).assigned_to(1));
        let result = validate_plan(&[stick], 29.0);
        assert!(!result.passed);
    }

    #[test]
    fn test_plan_check_catches_bad_ids() {
        let stick = StockPiece::open(2, 29.0, &Cut::post(8.5));
        let result = validate_plan(&[stick], 29.0);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
    }
}
