//! Core types for reflective-tape target selection.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete image-processing library: contour tracing and
//! polygon approximation happen upstream, and the results arrive here as
//! [`CandidatePolygon`] values.

mod geometry;
mod logger;
mod measurement;

pub use geometry::{BoundingBox, CandidatePolygon};
pub use measurement::TargetMeasurement;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

pub use nalgebra::Point2;
