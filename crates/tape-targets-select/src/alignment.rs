use serde::{Deserialize, Serialize};

use crate::aim::reference_x;
use crate::classify::TargetSelection;

/// Configured crosshair in image pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crosshair {
    /// x of the vertical crosshair line; also the aim point.
    pub horizontal_px: i32,
    /// y of the horizontal crosshair line.
    pub vertical_px: i32,
    pub tolerance_px: i32,
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            horizontal_px: 160,
            vertical_px: 120,
            tolerance_px: 3,
        }
    }
}

impl Crosshair {
    #[inline]
    fn within(&self, value: i32, position: i32) -> bool {
        value >= position - self.tolerance_px && value <= position + self.tolerance_px
    }
}

/// Per-axis alignment flags for the overlay.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Alignment of the selection against the crosshair window.
///
/// Pairs have no vertical reference, so `vertical` is always `false` for
/// them.
pub fn alignment(selection: &TargetSelection, crosshair: &Crosshair) -> Alignment {
    match selection {
        TargetSelection::NoTarget => Alignment::default(),
        TargetSelection::Paired { .. } => Alignment {
            horizontal: reference_x(selection)
                .is_some_and(|x| crosshair.within(x, crosshair.horizontal_px)),
            vertical: false,
        },
        TargetSelection::Single(t) => {
            let c = t.center();
            Alignment {
                horizontal: crosshair.within(c.x, crosshair.horizontal_px),
                vertical: crosshair.within(c.y, crosshair.vertical_px),
            }
        }
    }
}
