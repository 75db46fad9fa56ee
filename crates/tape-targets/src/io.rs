//! JSON frame input and per-frame reports.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tape_targets_core::{BoundingBox, CandidatePolygon, Point2, TargetMeasurement};
use tape_targets_select::{Alignment, RejectedCandidate, TargetSelection};
use tape_targets_table::PublishSummary;

use crate::config::ConfigIoError;
use crate::overlay::OverlayShape;

/// One approximated polygon as delivered by the contour stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
    pub vertices: Vec<[i32; 2]>,
    /// Bounding box of the traced contour, if the stage reports it.
    #[serde(default)]
    pub contour: Option<BoundingBox>,
    /// Area reported by the contour stage; computed from the vertices
    /// when absent.
    #[serde(default)]
    pub area: Option<f32>,
}

impl From<CandidateInput> for CandidatePolygon {
    fn from(input: CandidateInput) -> Self {
        let vertices = input
            .vertices
            .iter()
            .map(|&[x, y]| Point2::new(x, y))
            .collect();
        let poly = CandidatePolygon::from_vertices(vertices, input.contour);
        match input.area {
            Some(area) => poly.with_area(area),
            None => poly,
        }
    }
}

/// Everything the contour stage produced for one camera frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
}

impl Frame {
    pub fn candidate_polygons(&self) -> Vec<CandidatePolygon> {
        self.candidates.iter().cloned().map(Into::into).collect()
    }
}

/// Load a recorded frame sequence (a JSON array of frames).
pub fn load_frames(path: impl AsRef<Path>) -> Result<Vec<Frame>, ConfigIoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Result of processing one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame_width: i32,
    pub frame_height: i32,
    pub accepted: usize,
    pub filtered: Vec<CandidatePolygon>,
    pub rejected: Vec<RejectedCandidate>,
    pub target: TargetSelection,
    #[serde(default)]
    pub measurement: Option<TargetMeasurement>,
    pub alignment: Alignment,
    pub published: PublishSummary,
    #[serde(default)]
    pub overlay: Vec<OverlayShape>,
}
