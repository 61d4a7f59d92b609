use crate::base::BasePalette;
use crate::cancel::CancelToken;
use crate::color::Color;
use crate::pipeline::count::ColorCounts;
use crate::source::PixelSource;

/// A pixel color and its distance to a slot's base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDistance {
    pub color: Color,
    pub distance: f64,
}

/// Result of the nearest-match pass, indexed by slot.
#[derive(Debug, Clone)]
pub struct NearestMatches {
    /// `Some` for requested slots that saw at least one pixel.
    pub matches: Vec<Option<ColorDistance>>,
    /// Whether the scan stopped early.
    pub cancelled: bool,
}

/// Keep `candidate` in `held` only if it is strictly nearer to `target`, so
/// the earliest candidate at the minimum distance survives.
fn keep_nearer(held: &mut Option<(Color, u64)>, target: Color, candidate: Color) {
    let d = target.distance_sq(candidate);
    match *held {
        Some((_, held_d)) if d >= held_d => {}
        _ => *held = Some((candidate, d)),
    }
}

fn into_matches(
    best: Vec<Option<(Color, u64)>>,
    base: &BasePalette,
    unassigned: &[usize],
) -> Vec<Option<ColorDistance>> {
    let mut matches = vec![None; base.len()];
    for (held, &slot) in best.into_iter().zip(unassigned) {
        matches[slot] = held.map(|(color, d)| ColorDistance {
            color,
            distance: (d as f64).sqrt(),
        });
    }
    log::debug!(
        "fallback resolved {} of {} unassigned slots",
        matches.iter().filter(|m| m.is_some()).count(),
        unassigned.len()
    );
    matches
}

/// Nearest-match pass for the slots the best-match pass left empty.
///
/// One row-major scan serves every requested slot. Frequency is ignored;
/// each slot keeps the first sample at minimum distance from its base color.
pub fn match_nearest<S: PixelSource>(
    source: &S,
    base: &BasePalette,
    unassigned: &[usize],
    cancel: &CancelToken,
) -> NearestMatches {
    let mut best: Vec<Option<(Color, u64)>> = vec![None; unassigned.len()];
    let mut cancelled = false;

    if !unassigned.is_empty() {
        for sample in source.samples() {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            for (held, &slot) in best.iter_mut().zip(unassigned) {
                keep_nearer(held, base.colors()[slot], sample.color);
            }
            // nothing beats an exact match
            if best.iter().all(|b| matches!(b, Some((_, 0)))) {
                break;
            }
        }
    }

    NearestMatches {
        matches: into_matches(best, base, unassigned),
        cancelled,
    }
}

/// Nearest-match pass over colors that were already counted, without
/// touching the pixel source again.
///
/// Counted colors are in first-occurrence order, so the first color at the
/// minimum distance is also the first such pixel in scan order: the result
/// equals [`match_nearest`] over exactly the pixels that were counted.
pub fn match_nearest_counted(
    counts: &ColorCounts,
    base: &BasePalette,
    unassigned: &[usize],
) -> NearestMatches {
    let mut best: Vec<Option<(Color, u64)>> = vec![None; unassigned.len()];
    for entry in counts.entries() {
        for (held, &slot) in best.iter_mut().zip(unassigned) {
            keep_nearer(held, base.colors()[slot], entry.color);
        }
    }
    NearestMatches {
        matches: into_matches(best, base, unassigned),
        cancelled: false,
    }
}
