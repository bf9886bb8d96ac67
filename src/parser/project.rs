//! JSON project file parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MaterialConfig;
use crate::error::{FenceError, Result};
use crate::model::FenceSegment;

/// A fence project: material settings plus the segments to build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Material settings (defaults when omitted).
    #[serde(default)]
    pub config: MaterialConfig,
    /// Segments in build order.
    pub segments: Vec<FenceSegment>,
}

impl ProjectFile {
    /// The built-in example project.
    pub fn sample() -> Self {
        Self {
            config: MaterialConfig::default(),
            segments: vec![
                FenceSegment::regular(24.0),
                FenceSegment::corner(108.0),
                FenceSegment::regular(15.0),
                FenceSegment::corner(2.0),
                FenceSegment::regular(118.5),
            ],
        }
    }

    /// Parse a project from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Parse a project file.
pub fn parse_project_file(path: &Path) -> Result<ProjectFile> {
    use std::fs;

    if !path.exists() {
        return Err(FenceError::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(FenceError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    ProjectFile::from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentKind;

    #[test]
    fn test_parse_minimal_project() {
        let project = ProjectFile::from_json(
            r#"{"segments": [{"length": 24.0, "kind": "REGULAR"}, {"length": 2.0, "kind": "CORNER"}]}"#,
        )
        .unwrap();
        assert_eq!(project.config, MaterialConfig::default());
        assert_eq!(project.segments.len(), 2);
        assert_eq!(project.segments[1].kind, SegmentKind::Corner);
    }

    #[test]
    fn test_parse_config_overrides() {
        let project = ProjectFile::from_json(
            r#"{
                "config": {"stock_length": 21.0, "stock_price": 40.0, "pack_mid_rails": true},
                "segments": [{"length": 10.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(project.config.stock_length, 21.0);
        assert_eq!(project.config.stock_price, 40.0);
        assert_eq!(project.config.post_height, 8.5);
        assert!(project.config.pack_mid_rails);
    }

    #[test]
    fn test_parse_errors() {
        let err = ProjectFile::from_json(r#"{"segments": [{"length": "long"}]}"#).unwrap_err();
        assert!(matches!(err, FenceError::ParseError { .. }));

        let err = ProjectFile::from_json(r#"{"config": {}}"#).unwrap_err();
        assert!(matches!(err, FenceError::ParseError { .. }));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err =
            ProjectFile::from_json(r#"{"segments": [{"length": 3.0, "kind": "GATE"}]}"#).unwrap_err();
        assert!(matches!(err, FenceError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_project_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, FenceError::ProjectNotFound { .. }));
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = ProjectFile::sample();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(ProjectFile::from_json(&json).unwrap(), sample);
    }
}
