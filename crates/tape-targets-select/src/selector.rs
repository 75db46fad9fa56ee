use serde::{Deserialize, Serialize};
use tape_targets_core::CandidatePolygon;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::classify::{classify, TargetSelection};
use crate::dedup::dedup_candidates;
use crate::gate::{gate_candidates, RejectedCandidate};
use crate::params::SelectParams;

/// Everything the selection pass learned about one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSelection {
    /// Candidates that passed the shape gate, before deduplication.
    pub accepted: usize,
    /// Deduplicated candidates in input order.
    pub filtered: Vec<CandidatePolygon>,
    pub rejected: Vec<RejectedCandidate>,
    pub target: TargetSelection,
}

/// Runs gate, dedup and classification for one frame.
pub struct TargetSelector {
    params: SelectParams,
}

impl TargetSelector {
    pub fn new(params: SelectParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &SelectParams {
        &self.params
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, candidates), fields(candidates = candidates.len()))
    )]
    pub fn select(&self, candidates: Vec<CandidatePolygon>) -> FrameSelection {
        let (accepted, rejected) = gate_candidates(candidates, &self.params.gate);
        let filtered = dedup_candidates(&accepted, self.params.similarity_radius_px);
        let target = classify(&filtered);

        log::debug!(
            "selection: {} accepted, {} rejected, {} after dedup, found={}",
            accepted.len(),
            rejected.len(),
            filtered.len(),
            target.is_found()
        );

        FrameSelection {
            accepted: accepted.len(),
            filtered,
            rejected,
            target,
        }
    }
}

impl Default for TargetSelector {
    fn default() -> Self {
        Self::new(SelectParams::default())
    }
}
