//! Target selection for reflective-tape vision targets.
//!
//! ## Quickstart
//!
//! ```
//! use tape_targets_core::{BoundingBox, CandidatePolygon};
//! use tape_targets_select::{measure, SelectParams, TargetSelector};
//!
//! let selector = TargetSelector::new(SelectParams::default());
//! let candidates = vec![CandidatePolygon::rectangle(BoundingBox::new(150, 40, 20, 20))];
//!
//! let frame = selector.select(candidates);
//! let m = measure(&frame.target, 160).expect("single target");
//! assert_eq!(m.x_from_center, 0);
//! ```
//!
//! Per-frame pass:
//! 1. Gate raw candidates on vertex count, convexity and contour aspect ratio.
//! 2. Drop nested/overlapping duplicates: within every group of candidates
//!    whose centres lie closer than the similarity radius, only the largest
//!    area survives.
//! 3. Pick the topmost survivor; pair it with a vertically overlapping
//!    neighbour into a middle left/right pair when one exists.
//! 4. Derive the aim offset and crosshair alignment from the selection.

mod aim;
mod alignment;
mod classify;
mod dedup;
mod gate;
mod params;
mod selector;

pub use aim::{measure, reference_x};
pub use alignment::{alignment, Alignment, Crosshair};
pub use classify::{classify, TargetSelection};
pub use dedup::{dedup_candidates, filter_similar};
pub use gate::{gate_candidates, GateParams, RejectReason, RejectedCandidate};
pub use params::SelectParams;
pub use selector::{FrameSelection, TargetSelector};
