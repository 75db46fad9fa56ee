use serde::{Deserialize, Serialize};
use tape_targets_core::CandidatePolygon;

/// Outcome of classifying one frame's filtered candidates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetSelection {
    #[default]
    NoTarget,
    /// The topmost candidate on its own.
    Single(CandidatePolygon),
    /// The top candidate paired with a vertically overlapping neighbour,
    /// ordered by x.
    Paired {
        left: CandidatePolygon,
        right: CandidatePolygon,
    },
}

impl TargetSelection {
    pub fn is_found(&self) -> bool {
        !matches!(self, TargetSelection::NoTarget)
    }

    /// Polygon whose height/width are reported alongside the offset: the
    /// right half of a pair, or the single target.
    pub fn reported_polygon(&self) -> Option<&CandidatePolygon> {
        match self {
            TargetSelection::NoTarget => None,
            TargetSelection::Single(t) => Some(t),
            TargetSelection::Paired { right, .. } => Some(right),
        }
    }
}

/// Index of the candidate with the smallest `y`; the first one found keeps
/// the title on ties.
fn top_index(candidates: &[CandidatePolygon]) -> Option<usize> {
    let mut top: Option<usize> = None;
    for (index, p) in candidates.iter().enumerate() {
        match top {
            Some(t) if candidates[t].bbox.y <= p.bbox.y => {}
            _ => top = Some(index),
        }
    }
    top
}

/// Select the top target and, when possible, a middle left/right pair.
///
/// Every non-top candidate whose top edge is at or above the top target's
/// bottom edge forms a pair with it. When several qualify the last one in
/// iteration order replaces earlier pairings.
pub fn classify(candidates: &[CandidatePolygon]) -> TargetSelection {
    let Some(top) = top_index(candidates) else {
        return TargetSelection::NoTarget;
    };
    let top_poly = &candidates[top];
    let top_bottom = top_poly.bbox.bottom();

    let mut pair: Option<(usize, usize)> = None;
    for (index, p) in candidates.iter().enumerate() {
        if index == top {
            continue;
        }
        if top_bottom >= p.bbox.y {
            let next = if top_poly.bbox.x < p.bbox.x {
                (top, index)
            } else {
                (index, top)
            };
            if let Some(prev) = pair {
                log::trace!("middle pair {:?} replaced by {:?}", prev, next);
            }
            pair = Some(next);
        }
    }

    match pair {
        Some((left, right)) => TargetSelection::Paired {
            left: candidates[left].clone(),
            right: candidates[right].clone(),
        },
        None => TargetSelection::Single(top_poly.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tape_targets_core::BoundingBox;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> CandidatePolygon {
        CandidatePolygon::rectangle(BoundingBox::new(x, y, w, h))
    }

    #[test]
    fn empty_is_no_target() {
        assert_eq!(classify(&[]), TargetSelection::NoTarget);
        assert!(!TargetSelection::NoTarget.is_found());
    }

    #[test]
    fn lone_candidate_is_single() {
        let a = rect(10, 10, 20, 20);
        assert_eq!(classify(std::slice::from_ref(&a)), TargetSelection::Single(a));
    }

    #[test]
    fn topmost_wins_and_same_row_pairs() {
        let low = rect(0, 100, 20, 20);
        let high_a = rect(50, 10, 20, 20);
        let high_b = rect(200, 10, 22, 20);
        let sel = classify(&[low.clone(), high_a.clone()]);
        assert_eq!(sel, TargetSelection::Single(high_a.clone()));

        match classify(&[high_a.clone(), high_b.clone()]) {
            TargetSelection::Paired { left, right } => {
                assert_eq!(left, high_a);
                assert_eq!(right, high_b);
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn top_index_keeps_first_on_ties() {
        let a = rect(0, 10, 5, 5);
        let b = rect(40, 10, 5, 5);
        let c = rect(80, 3, 5, 5);
        assert_eq!(top_index(&[a.clone(), b.clone()]), Some(0));
        assert_eq!(top_index(&[b, a, c]), Some(2));
    }

    #[test]
    fn touching_edges_pair() {
        let top = rect(100, 10, 20, 20);
        let below = rect(40, 30, 20, 20);
        match classify(&[top.clone(), below.clone()]) {
            TargetSelection::Paired { left, right } => {
                assert_eq!(left, below);
                assert_eq!(right, top);
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn gap_below_top_is_single() {
        let top = rect(100, 10, 20, 20);
        let below = rect(40, 31, 20, 20);
        assert_eq!(classify(&[below, top.clone()]), TargetSelection::Single(top));
    }

    #[test]
    fn equal_x_puts_other_on_the_left() {
        let top = rect(50, 10, 20, 20);
        let other = rect(50, 20, 20, 20);
        match classify(&[top.clone(), other.clone()]) {
            TargetSelection::Paired { left, right } => {
                assert_eq!(left, other);
                assert_eq!(right, top);
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn last_overlapping_candidate_wins_the_pair() {
        let top = rect(100, 10, 20, 30);
        let first = rect(10, 20, 20, 20);
        let last = rect(200, 25, 20, 20);
        match classify(&[first, top.clone(), last.clone()]) {
            TargetSelection::Paired { left, right } => {
                assert_eq!(left, top);
                assert_eq!(right, last);
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn reported_polygon_is_right_half() {
        let left = rect(0, 0, 10, 10);
        let right = rect(30, 0, 12, 14);
        let sel = TargetSelection::Paired {
            left,
            right: right.clone(),
        };
        assert_eq!(sel.reported_polygon(), Some(&right));
    }
}
