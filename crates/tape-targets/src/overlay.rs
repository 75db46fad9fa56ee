//! Debug annotations for the camera view.
//!
//! Nothing here draws pixels: the overlay is a list of shapes for whatever
//! widget displays the frame.

use serde::{Deserialize, Serialize};
use tape_targets_core::{CandidatePolygon, Point2};
use tape_targets_select::{reference_x, Alignment, Crosshair, FrameSelection, TargetSelection};

use crate::config::ModeFlags;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayColor {
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum OverlayShape {
    Polygon {
        vertices: Vec<Point2<i32>>,
        color: OverlayColor,
        thickness: u32,
    },
    Point {
        at: Point2<i32>,
        color: OverlayColor,
        size: u32,
    },
    Line {
        from: Point2<i32>,
        to: Point2<i32>,
        color: OverlayColor,
        thickness: u32,
    },
}

fn outline(poly: &CandidatePolygon, color: OverlayColor, thickness: u32) -> OverlayShape {
    OverlayShape::Polygon {
        vertices: poly.vertices.clone(),
        color,
        thickness,
    }
}

fn vline(x: i32, height: i32, color: OverlayColor, thickness: u32) -> OverlayShape {
    OverlayShape::Line {
        from: Point2::new(x, 0),
        to: Point2::new(x, height),
        color,
        thickness,
    }
}

fn hline(y: i32, width: i32, color: OverlayColor, thickness: u32) -> OverlayShape {
    OverlayShape::Line {
        from: Point2::new(0, y),
        to: Point2::new(width, y),
        color,
        thickness,
    }
}

fn alignment_color(aligned: bool) -> OverlayColor {
    if aligned {
        OverlayColor::Green
    } else {
        OverlayColor::Blue
    }
}

/// Annotations for one processed frame, in drawing order.
pub fn build_overlay(
    selection: &FrameSelection,
    alignment: Alignment,
    crosshair: &Crosshair,
    flags: &ModeFlags,
    frame_size: (i32, i32),
) -> Vec<OverlayShape> {
    let (width, height) = frame_size;
    let mut shapes = Vec::new();

    if flags.show_bad_polygons {
        for bad in &selection.rejected {
            shapes.push(outline(&bad.polygon, OverlayColor::Red, 1));
        }
    }

    for poly in &selection.filtered {
        shapes.push(outline(poly, OverlayColor::Yellow, 1));
        shapes.push(OverlayShape::Point {
            at: poly.center(),
            color: OverlayColor::Yellow,
            size: 2,
        });
    }

    match &selection.target {
        TargetSelection::NoTarget => {}
        TargetSelection::Paired { left, right } => {
            shapes.push(outline(left, OverlayColor::Yellow, 2));
            shapes.push(outline(right, OverlayColor::Yellow, 2));
            if let Some(x) = reference_x(&selection.target) {
                shapes.push(vline(x, height, OverlayColor::Yellow, 1));
            }
        }
        TargetSelection::Single(t) => {
            let c = t.center();
            shapes.push(hline(c.y, width, OverlayColor::Yellow, 1));
            shapes.push(vline(c.x, height, OverlayColor::Yellow, 1));
        }
    }

    if flags.show_crosshair {
        shapes.push(hline(
            crosshair.vertical_px,
            width,
            alignment_color(alignment.vertical),
            3,
        ));
        shapes.push(vline(
            crosshair.horizontal_px,
            height,
            alignment_color(alignment.horizontal),
            3,
        ));
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use tape_targets_core::BoundingBox;
    use tape_targets_select::TargetSelector;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> CandidatePolygon {
        CandidatePolygon::rectangle(BoundingBox::new(x, y, w, h))
    }

    #[test]
    fn single_target_gets_centre_lines_and_crosshair() {
        let sel = TargetSelector::default().select(vec![rect(150, 110, 20, 20)]);
        let alignment = Alignment {
            horizontal: true,
            vertical: true,
        };
        let shapes = build_overlay(
            &sel,
            alignment,
            &Crosshair::default(),
            &ModeFlags::default(),
            (320, 240),
        );
        // outline, centre point, two centre lines, two crosshair lines
        assert_eq!(shapes.len(), 6);
        assert_eq!(
            shapes[4],
            OverlayShape::Line {
                from: Point2::new(0, 120),
                to: Point2::new(320, 120),
                color: OverlayColor::Green,
                thickness: 3,
            }
        );
    }

    #[test]
    fn bad_polygons_only_when_enabled() {
        let mut flat = rect(0, 0, 40, 5);
        flat.aspect_ratio = 0.125;
        let sel = TargetSelector::default().select(vec![flat]);
        let mut flags = ModeFlags {
            show_crosshair: false,
            ..ModeFlags::default()
        };
        let quiet = build_overlay(&sel, Alignment::default(), &Crosshair::default(), &flags, (320, 240));
        assert!(quiet.is_empty());

        flags.show_bad_polygons = true;
        let loud = build_overlay(&sel, Alignment::default(), &Crosshair::default(), &flags, (320, 240));
        assert!(matches!(
            loud[0],
            OverlayShape::Polygon {
                color: OverlayColor::Red,
                thickness: 1,
                ..
            }
        ));
    }

    #[test]
    fn pair_gets_thick_outlines_and_reference_line() {
        let sel = TargetSelector::default().select(vec![rect(100, 50, 20, 20), rect(200, 55, 20, 20)]);
        let flags = ModeFlags {
            show_crosshair: false,
            ..ModeFlags::default()
        };
        let shapes = build_overlay(&sel, Alignment::default(), &Crosshair::default(), &flags, (320, 240));
        assert_eq!(
            shapes.last(),
            Some(&OverlayShape::Line {
                from: Point2::new(160, 0),
                to: Point2::new(160, 240),
                color: OverlayColor::Yellow,
                thickness: 1,
            })
        );
    }
}
