pub mod assign;
pub mod compose;
pub mod count;
pub mod fallback;

use crate::base::BasePalette;
use crate::cancel::CancelToken;
use crate::error::SchemeError;
use crate::source::PixelSource;

use self::compose::Scheme;

/// Derive a scheme from `source`, one color per slot of `base`.
///
/// Counts colors, assigns each slot the most frequent color nearest to it,
/// then fills any empty slot with the closest pixel in the image.
///
/// Cancellation is not an error. If the count is cut short, empty slots are
/// filled from the colors counted so far, giving the scheme of the scanned
/// prefix, which reports itself incomplete. If only the fallback scan is cut
/// short, the full counts still yield the exact fallback. Slots stay empty
/// only when no pixel was scanned at all.
pub fn generate<S: PixelSource>(
    source: &S,
    base: &BasePalette,
    cancel: &CancelToken,
) -> Result<Scheme, SchemeError> {
    let counts = count::count_colors(source, cancel);
    let best = assign::assign_best(&counts, base);

    let unassigned: Vec<usize> = best
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_none())
        .map(|(i, _)| i)
        .collect();
    let nearest = if counts.is_cancelled() {
        fallback::match_nearest_counted(&counts, base, &unassigned)
    } else {
        let scanned = fallback::match_nearest(source, base, &unassigned, cancel);
        if scanned.cancelled {
            fallback::match_nearest_counted(&counts, base, &unassigned)
        } else {
            scanned
        }
    };

    let cancelled = counts.is_cancelled();
    if cancelled {
        log::warn!(
            "scan cancelled after {} of {} pixels; scheme reflects a partial image",
            counts.scanned(),
            source.pixel_count()
        );
    }
    compose::compose(&best, &nearest, cancelled)
}
