use serde::{Deserialize, Serialize};

use crate::gate::GateParams;

fn default_similarity_radius_px() -> i32 {
    20
}

/// Parameters for one selection pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectParams {
    /// Candidates whose bbox centres are closer than this (strictly) are
    /// treated as the same physical blob.
    #[serde(default = "default_similarity_radius_px")]
    pub similarity_radius_px: i32,
    #[serde(default)]
    pub gate: GateParams,
}

impl Default for SelectParams {
    fn default() -> Self {
        Self {
            similarity_radius_px: default_similarity_radius_px(),
            gate: GateParams::default(),
        }
    }
}
