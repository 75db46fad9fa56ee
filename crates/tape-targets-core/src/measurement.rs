use serde::{Deserialize, Serialize};

/// Values written to the shared table when a target is found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TargetMeasurement {
    /// Aim point x minus target reference x, in pixels.
    pub x_from_center: i32,
    pub height: i32,
    pub width: i32,
}
