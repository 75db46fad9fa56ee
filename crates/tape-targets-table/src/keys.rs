//! Key names understood by the robot's aiming loop.

pub const TARGET_X_FROM_CENTER: &str = "TargetXFromCenter";
pub const TARGET_HEIGHT: &str = "TargetHeight";
pub const TARGET_WIDTH: &str = "TargetWidth";
pub const FOUND: &str = "Found";
pub const IGNORE_CAM_DATA: &str = "IgnoreCamData";

pub const DERIVATIVE: &str = "Derivative";
pub const INTEGRAL: &str = "Integral";
pub const PROPORTIONAL: &str = "Proportional";
