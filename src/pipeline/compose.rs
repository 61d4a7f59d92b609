use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Color;
use crate::error::SchemeError;
use crate::pipeline::count::ColorCount;
use crate::pipeline::fallback::NearestMatches;

/// A generated color scheme, one entry per base slot, in base order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    slots: Vec<Option<Color>>,
    complete: bool,
}

impl Scheme {
    /// Per-slot colors. Only a cancelled scan can leave a `None`.
    pub fn slots(&self) -> &[Option<Color>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// False when the scan was cancelled and only part of the image was seen.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Indices of slots without a color.
    pub fn unresolved(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// All colors, or the list of unresolved slots.
    pub fn colors(&self) -> Result<Vec<Color>, SchemeError> {
        self.slots
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SchemeError::Incomplete {
                slots: self.unresolved(),
            })
    }

    /// One lowercase `#rrggbb` per line, in slot order.
    pub fn serialize(&self) -> Result<String, SchemeError> {
        Ok(self
            .colors()?
            .iter()
            .map(|c| format!("{c}\n"))
            .collect())
    }

    /// Write the serialized scheme to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.serialize()?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write scheme to {}", path.display()))?;
        Ok(())
    }
}

/// Merge the two passes slot by slot: the best match where there is one,
/// otherwise the nearest match.
///
/// A slot neither pass filled is an error unless the scan was cancelled,
/// since without cancellation that only happens when there were no pixels.
pub fn compose(
    best: &[Option<ColorCount>],
    nearest: &NearestMatches,
    cancelled: bool,
) -> Result<Scheme, SchemeError> {
    let slots: Vec<Option<Color>> = best
        .iter()
        .zip(&nearest.matches)
        .map(|(b, n)| b.map(|b| b.color).or(n.map(|n| n.color)))
        .collect();
    if !cancelled && slots.iter().any(Option::is_none) {
        return Err(SchemeError::NoPixels);
    }
    Ok(Scheme {
        slots,
        complete: !cancelled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fallback::ColorDistance;

    const RED: Color = Color::new(200, 0, 0);
    const BLUE: Color = Color::new(0, 0, 200);
    const GRAY: Color = Color::new(90, 90, 90);

    fn counted(color: Color) -> Option<ColorCount> {
        Some(ColorCount { color, count: 4 })
    }

    fn near(color: Color) -> Option<ColorDistance> {
        Some(ColorDistance {
            color,
            distance: 1.0,
        })
    }

    #[test]
    fn best_match_takes_precedence() {
        let nearest = NearestMatches {
            matches: vec![near(GRAY), near(GRAY)],
            cancelled: false,
        };
        let scheme = compose(&[counted(RED), None], &nearest, false).unwrap();
        assert_eq!(scheme.slots(), &[Some(RED), Some(GRAY)]);
        assert!(scheme.is_complete());
    }

    #[test]
    fn order_is_preserved() {
        let nearest = NearestMatches {
            matches: vec![None, near(BLUE), None],
            cancelled: false,
        };
        let scheme = compose(&[counted(GRAY), None, counted(RED)], &nearest, false).unwrap();
        assert_eq!(scheme.colors().unwrap(), vec![GRAY, BLUE, RED]);
    }

    #[test]
    fn unfilled_slot_without_cancel_is_no_pixels() {
        let nearest = NearestMatches {
            matches: vec![None, None],
            cancelled: false,
        };
        assert_eq!(
            compose(&[None, None], &nearest, false),
            Err(SchemeError::NoPixels)
        );
    }

    #[test]
    fn cancelled_scheme_keeps_gaps() {
        let nearest = NearestMatches {
            matches: vec![None, None],
            cancelled: true,
        };
        let scheme = compose(&[counted(RED), None], &nearest, true).unwrap();
        assert!(!scheme.is_complete());
        assert_eq!(scheme.unresolved(), vec![1]);
        assert_eq!(
            scheme.serialize(),
            Err(SchemeError::Incomplete { slots: vec![1] })
        );
    }

    #[test]
    fn serialize_one_hex_per_line() {
        let nearest = NearestMatches {
            matches: vec![None, None],
            cancelled: false,
        };
        let scheme = compose(&[counted(RED), counted(BLUE)], &nearest, false).unwrap();
        assert_eq!(scheme.serialize().unwrap(), "#c80000\n#0000c8\n");
    }

    #[test]
    fn write_to_file() {
        let nearest = NearestMatches {
            matches: vec![None],
            cancelled: false,
        };
        let scheme = compose(&[counted(GRAY)], &nearest, false).unwrap();
        let dir = std::env::temp_dir().join("imgscheme-compose-write");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scheme.txt");
        scheme.write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#5a5a5a\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
