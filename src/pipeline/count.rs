use std::collections::HashMap;

use crate::cancel::CancelToken;
use crate::color::Color;
use crate::source::PixelSource;

/// A distinct color and the number of pixels equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Color,
    pub count: u64,
}

/// Occurrence counts per distinct color, kept in first-occurrence scan order.
#[derive(Debug, Clone, Default)]
pub struct ColorCounts {
    entries: Vec<ColorCount>,
    index: HashMap<Color, usize>,
    scanned: u64,
    cancelled: bool,
}

impl ColorCounts {
    fn record(&mut self, color: Color) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push(ColorCount { color, count: 1 });
            }
        }
        self.scanned += 1;
    }

    /// Distinct colors in the order they were first seen.
    pub fn entries(&self) -> &[ColorCount] {
        &self.entries
    }

    /// Count for `color`, or `None` if it never occurred.
    pub fn get(&self, color: Color) -> Option<u64> {
        self.index.get(&color).map(|&i| self.entries[i].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pixels visited. Equals the sum of all counts.
    pub fn scanned(&self) -> u64 {
        self.scanned
    }

    /// Whether the scan stopped before the last pixel.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Tabulate how often each distinct color occurs in `source`.
///
/// The token is checked before every sample; on cancellation the counts
/// gathered so far are returned.
pub fn count_colors<S: PixelSource>(source: &S, cancel: &CancelToken) -> ColorCounts {
    let mut counts = ColorCounts::default();
    for sample in source.samples() {
        if cancel.is_cancelled() {
            counts.cancelled = true;
            break;
        }
        counts.record(sample.color);
    }
    log::debug!(
        "counted {} distinct colors over {} of {} pixels",
        counts.len(),
        counts.scanned,
        source.pixel_count()
    );
    counts
}
