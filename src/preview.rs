use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{style, Color as TermColor, Print, PrintStyledContent, Stylize};

use crate::base::{BasePalette, SLOT_NAMES};
use crate::color::Color;
use crate::pipeline::compose::Scheme;

const SWATCH_WIDTH: usize = 9;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Black or white text, whichever reads better on `c`.
fn contrast_fg(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

fn swatch<W: Write>(out: &mut W, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(c) => {
            let label = format!("{:^width$}", c.to_hex(), width = SWATCH_WIDTH);
            queue!(out, PrintStyledContent(style(label).with(contrast_fg(c)).on(to_term(c))))
        }
        None => queue!(out, Print(format!("{:^width$}", "--", width = SWATCH_WIDTH))),
    }
}

/// Print one row per slot: base swatch, then the generated swatch.
pub fn render<W: Write>(out: &mut W, base: &BasePalette, scheme: &Scheme) -> io::Result<()> {
    for (i, (base_color, slot)) in base.colors().iter().zip(scheme.slots()).enumerate() {
        let name = SLOT_NAMES.get(i).copied().unwrap_or("");
        queue!(out, Print(format!("{i:>3} {name:<15}")))?;
        swatch(out, Some(*base_color))?;
        queue!(out, Print(" -> "))?;
        swatch(out, *slot)?;
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::pipeline::generate;
    use crate::source::PixelGrid;

    #[test]
    fn preview_lists_every_slot() {
        let base = BasePalette::new(vec![Color::new(0, 0, 0), Color::new(255, 255, 255)]);
        let grid = PixelGrid::from_row(vec![Color::new(0x12, 0x34, 0x56)]).unwrap();
        let scheme = generate(&grid, &base, &CancelToken::new()).unwrap();

        let mut out = Vec::new();
        render(&mut out, &base, &scheme).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("black"));
        assert!(text.contains("#ffffff"));
        assert!(text.contains("#123456"));
        assert!(text.contains("\u{1b}["), "expected ANSI styling");
    }

    #[test]
    fn unresolved_slots_are_marked() {
        let base = BasePalette::new(vec![Color::new(0, 0, 0)]);
        let token = CancelToken::new();
        token.cancel();
        let scheme = generate(&PixelGrid::from_row(vec![Color::new(1, 1, 1)]).unwrap(), &base, &token)
            .unwrap();

        let mut out = Vec::new();
        render(&mut out, &base, &scheme).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("--"));
    }
}
