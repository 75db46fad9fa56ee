use tape_targets_core::TargetMeasurement;

use crate::classify::TargetSelection;

/// Horizontal reference point of a selection in image pixels.
///
/// A pair is referenced at the midpoint between the left polygon's left edge
/// and the right polygon's right edge; a single target at its bbox centre.
pub fn reference_x(selection: &TargetSelection) -> Option<i32> {
    match selection {
        TargetSelection::NoTarget => None,
        TargetSelection::Single(t) => Some(t.bbox.x + t.bbox.width / 2),
        TargetSelection::Paired { left, right } => Some((right.bbox.right() + left.bbox.x) / 2),
    }
}

/// Offset from `aim_x` to the selection, with the reported size.
pub fn measure(selection: &TargetSelection, aim_x: i32) -> Option<TargetMeasurement> {
    let reference = reference_x(selection)?;
    let reported = selection.reported_polygon()?;
    Some(TargetMeasurement {
        x_from_center: aim_x - reference,
        height: reported.bbox.height,
        width: reported.bbox.width,
    })
}
