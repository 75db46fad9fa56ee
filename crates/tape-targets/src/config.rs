//! Tunable parameters, mirroring the dashboard's property sheet.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tape_targets_select::{Crosshair, SelectParams};
use tape_targets_table::PidCoefficients;

#[derive(thiserror::Error, Debug)]
pub enum ConfigIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Configuration values the pipeline refuses to run with.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("polygon quality must be finite and positive (got {0})")]
    PolygonQuality(f64),
    #[error("green minimum {min} exceeds green maximum {max}")]
    GreenRange { min: u8, max: u8 },
    #[error("crosshair {field} must be non-negative (got {value})")]
    NegativeCrosshair { field: &'static str, value: i32 },
}

/// Per-channel thresholds for the tape mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorThresholds {
    pub red_max: u8,
    pub green_min: u8,
    pub green_max: u8,
    pub blue_min: u8,
}

impl Default for ColorThresholds {
    fn default() -> Self {
        Self {
            red_max: 225,
            green_min: 225,
            green_max: 255,
            blue_min: 100,
        }
    }
}

/// Erode/dilate radii applied to the mask before contour tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Morphology {
    pub erode: u32,
    pub dilate: u32,
}

impl Default for Morphology {
    fn default() -> Self {
        Self {
            erode: 0,
            dilate: 9,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeFlags {
    pub do_target_processing: bool,
    pub show_binary_image: bool,
    pub show_crosshair: bool,
    pub show_bad_polygons: bool,
    /// Publish to the shared camera table instead of the local one.
    pub use_camera_table: bool,
    /// Passed through to the robot as `IgnoreCamData`.
    pub ignore_cam_data: bool,
}

impl Default for ModeFlags {
    fn default() -> Self {
        Self {
            do_target_processing: true,
            show_binary_image: false,
            show_crosshair: true,
            show_bad_polygons: false,
            use_camera_table: false,
            ignore_cam_data: false,
        }
    }
}

fn default_polygon_quality() -> f64 {
    30.0
}

/// Everything the operator can tune while the pipeline runs.
///
/// Colour thresholds, morphology and polygon quality are consumed by the
/// image-processing stage that produces candidates; they are carried and
/// validated here so one file configures the whole chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisionConfig {
    #[serde(default = "default_polygon_quality")]
    pub polygon_quality: f64,
    #[serde(default)]
    pub color: ColorThresholds,
    #[serde(default)]
    pub morphology: Morphology,
    #[serde(default)]
    pub crosshair: Crosshair,
    #[serde(default)]
    pub pid: PidCoefficients,
    #[serde(default)]
    pub flags: ModeFlags,
    #[serde(default)]
    pub select: SelectParams,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            polygon_quality: default_polygon_quality(),
            color: ColorThresholds::default(),
            morphology: Morphology::default(),
            crosshair: Crosshair::default(),
            pid: PidCoefficients::default(),
            flags: ModeFlags::default(),
            select: SelectParams::default(),
        }
    }
}

impl VisionConfig {
    /// Load a JSON config from disk. Missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.polygon_quality.is_finite() || self.polygon_quality <= 0.0 {
            return Err(ConfigError::PolygonQuality(self.polygon_quality));
        }
        if self.color.green_min > self.color.green_max {
            return Err(ConfigError::GreenRange {
                min: self.color.green_min,
                max: self.color.green_max,
            });
        }
        for (field, value) in [
            ("horizontal position", self.crosshair.horizontal_px),
            ("vertical position", self.crosshair.vertical_px),
            ("tolerance", self.crosshair.tolerance_px),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeCrosshair { field, value });
            }
        }
        Ok(())
    }
}
