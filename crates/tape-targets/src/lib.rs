//! High-level facade for the `tape-targets-*` workspace.
//!
//! This crate provides:
//! - re-exports of the geometry, selection and table crates
//! - [`VisionConfig`], the operator-tunable parameter set
//! - [`TargetPipeline`], which runs one frame from raw polygon candidates to
//!   a published table update
//!
//! ## Quickstart
//!
//! ```
//! use tape_targets::{Frame, TargetPipeline, VisionConfig};
//! use tape_targets::table::{keys, TableRoute, TableSink, TableValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = TableRoute::in_memory();
//! let mut pipeline = TargetPipeline::new(route.clone());
//!
//! let frame: Frame = serde_json::from_str(
//!     r#"{"width": 320, "height": 240,
//!         "candidates": [{"vertices": [[150,40],[170,40],[170,60],[150,60]]}]}"#,
//! )?;
//! pipeline.process_frame(&frame, &VisionConfig::default())?;
//!
//! assert_eq!(route.local.get(keys::FOUND), Some(TableValue::Bool(true)));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `tape_targets::core`: bounding boxes, candidate polygons, logger setup.
//! - `tape_targets::select`: gating, dedup, classification, aim offset, alignment.
//! - `tape_targets::table`: table sinks, routing and the state publisher.

pub use tape_targets_core as core;
pub use tape_targets_select as select;
pub use tape_targets_table as table;

mod config;
mod io;
pub mod overlay;
mod pipeline;

pub use config::{ColorThresholds, ConfigError, ConfigIoError, ModeFlags, Morphology, VisionConfig};
pub use io::{load_frames, CandidateInput, Frame, FrameReport};
pub use pipeline::{FrameOutcome, PipelineError, TargetPipeline};
