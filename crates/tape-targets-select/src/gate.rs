//! Shape gate applied before deduplication.

use serde::{Deserialize, Serialize};
use tape_targets_core::CandidatePolygon;

/// Acceptance window for raw candidates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateParams {
    pub required_vertices: usize,
    /// Exclusive lower bound on the contour `height / width` ratio.
    pub min_aspect: f32,
    /// Exclusive upper bound on the contour `height / width` ratio.
    pub max_aspect: f32,
}

impl Default for GateParams {
    fn default() -> Self {
        Self {
            required_vertices: 4,
            min_aspect: 0.5,
            max_aspect: 1.25,
        }
    }
}

/// First check a candidate failed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    NotConvex,
    VertexCount { found: usize },
    AspectRatio { ratio: f32 },
}

/// A candidate routed to the bad-polygon diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RejectedCandidate {
    pub polygon: CandidatePolygon,
    pub reason: RejectReason,
}

impl GateParams {
    pub fn check(&self, poly: &CandidatePolygon) -> Result<(), RejectReason> {
        if !poly.convex {
            return Err(RejectReason::NotConvex);
        }
        if poly.vertex_count() != self.required_vertices {
            return Err(RejectReason::VertexCount {
                found: poly.vertex_count(),
            });
        }
        // NaN from a degenerate contour fails both comparisons.
        let ratio = poly.aspect_ratio;
        if !(ratio > self.min_aspect && ratio < self.max_aspect) {
            return Err(RejectReason::AspectRatio { ratio });
        }
        Ok(())
    }
}

/// Split candidates into accepted quads and rejected diagnostics, keeping
/// input order in both lists.
pub fn gate_candidates(
    candidates: Vec<CandidatePolygon>,
    params: &GateParams,
) -> (Vec<CandidatePolygon>, Vec<RejectedCandidate>) {
    let mut accepted = Vec::with_capacity(candidates.len());
    let mut rejected = Vec::new();
    for polygon in candidates {
        match params.check(&polygon) {
            Ok(()) => accepted.push(polygon),
            Err(reason) => {
                log::debug!(
                    "rejected candidate at ({}, {}): {:?}",
                    polygon.bbox.x,
                    polygon.bbox.y,
                    reason
                );
                rejected.push(RejectedCandidate { polygon, reason });
            }
        }
    }
    (accepted, rejected)
}
