//! Removal of nested and overlapping duplicates.
//!
//! Erode/dilate artifacts regularly produce two or three concentric quads for
//! one strip of tape. Every candidate builds its own similarity group from
//! the full input (itself plus every candidate whose centre lies within the
//! radius) and votes to discard all but the largest member of that group.
//! Votes are collected first and applied once at the end, so a candidate
//! that wins its own group can still be discarded by a larger neighbour's
//! group.

use tape_targets_core::CandidatePolygon;

fn similar_to(reference: &CandidatePolygon, pool: &[CandidatePolygon], radius_px: i32) -> Vec<usize> {
    let c = reference.center();
    let r2 = radius_px as i64 * radius_px as i64;
    pool.iter()
        .enumerate()
        .filter(|(_, p)| {
            let pc = p.center();
            let dx = (pc.x - c.x) as i64;
            let dy = (pc.y - c.y) as i64;
            dx * dx + dy * dy < r2
        })
        .map(|(index, _)| index)
        .collect()
}

/// Index of the largest-area member; the earliest one wins ties.
fn largest(group: &[usize], pool: &[CandidatePolygon]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &index in group {
        match best {
            Some(b) if pool[index].area <= pool[b].area => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Indices (in input order) of the candidates that survive deduplication.
pub fn filter_similar(candidates: &[CandidatePolygon], radius_px: i32) -> Vec<usize> {
    let mut discard = vec![false; candidates.len()];

    for reference in candidates {
        let group = similar_to(reference, candidates, radius_px);
        let keep = largest(&group, candidates);
        for index in group {
            if Some(index) != keep {
                discard[index] = true;
            }
        }
    }

    (0..candidates.len()).filter(|&i| !discard[i]).collect()
}

/// Surviving candidates, in input order.
pub fn dedup_candidates(candidates: &[CandidatePolygon], radius_px: i32) -> Vec<CandidatePolygon> {
    filter_similar(candidates, radius_px)
        .into_iter()
        .map(|index| candidates[index].clone())
        .collect()
}
