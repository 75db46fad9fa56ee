//! Shared-table output for the target pipeline.
//!
//! The robot's aiming loop reads a small string-keyed table. This crate
//! provides:
//! - [`TableSink`], the write surface, with an in-process [`LocalTable`]
//!   and the shared [`CameraTable`];
//! - [`TableRoute`], which picks one of the two per frame;
//! - [`StatePublisher`], which writes the found/offset/size group as one
//!   batch and republishes PID coefficients only when they change.

mod camera;
mod error;
pub mod keys;
mod local;
mod publisher;
mod route;
mod sink;
mod value;

pub use camera::CameraTable;
pub use error::PublishError;
pub use local::LocalTable;
pub use publisher::{FrameState, PidCoefficients, PublishSummary, StatePublisher};
pub use route::TableRoute;
pub use sink::{TableSink, TableSnapshot};
pub use value::TableValue;
