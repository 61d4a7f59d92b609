use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Color;
use crate::error::SchemeError;

/// Number of slots in a conventional terminal base palette.
pub const SLOTS: usize = 16;

/// Conventional names of the 16 terminal slots, used for diagnostics.
pub const SLOT_NAMES: [&str; SLOTS] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright black",
    "bright red",
    "bright green",
    "bright yellow",
    "bright blue",
    "bright magenta",
    "bright cyan",
    "bright white",
];

/// Ordered reference colors whose slots a scheme fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePalette {
    colors: Vec<Color>,
}

impl BasePalette {
    /// Any length is accepted here; the slot order is preserved in the output.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the slot nearest to `color` in widened channel space.
    /// Ties go to the lowest index. `None` only for an empty palette.
    pub fn nearest_slot(&self, color: Color) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (i, slot) in self.colors.iter().enumerate() {
            let d = slot.distance_sq(color);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Parse the base-palette text format: one `#rrggbb` triplet per line,
    /// exactly 16 lines, final newline optional.
    pub fn parse(text: &str) -> Result<Self, SchemeError> {
        let colors = text
            .lines()
            .map(Color::from_hex)
            .collect::<Result<Vec<_>, _>>()?;
        if colors.is_empty() {
            return Err(SchemeError::EmptyPalette);
        }
        if colors.len() != SLOTS {
            return Err(SchemeError::PaletteLength {
                expected: SLOTS,
                found: colors.len(),
            });
        }
        Ok(Self { colors })
    }

    /// Read and parse a base-palette file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read base palette: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("invalid base palette: {}", path.display()))
    }
}

const VGA: [Color; SLOTS] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0xaa, 0x00, 0x00),
    Color::new(0x00, 0xaa, 0x00),
    Color::new(0xaa, 0x55, 0x00),
    Color::new(0x00, 0x00, 0xaa),
    Color::new(0xaa, 0x00, 0xaa),
    Color::new(0x00, 0xaa, 0xaa),
    Color::new(0xaa, 0xaa, 0xaa),
    Color::new(0x55, 0x55, 0x55),
    Color::new(0xff, 0x55, 0x55),
    Color::new(0x55, 0xff, 0x55),
    Color::new(0xff, 0xff, 0x55),
    Color::new(0x55, 0x55, 0xff),
    Color::new(0xff, 0x55, 0xff),
    Color::new(0x55, 0xff, 0xff),
    Color::new(0xff, 0xff, 0xff),
];

const XTERM: [Color; SLOTS] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0xcd, 0x00, 0x00),
    Color::new(0x00, 0xcd, 0x00),
    Color::new(0xcd, 0xcd, 0x00),
    Color::new(0x00, 0x00, 0xee),
    Color::new(0xcd, 0x00, 0xcd),
    Color::new(0x00, 0xcd, 0xcd),
    Color::new(0xe5, 0xe5, 0xe5),
    Color::new(0x7f, 0x7f, 0x7f),
    Color::new(0xff, 0x00, 0x00),
    Color::new(0x00, 0xff, 0x00),
    Color::new(0xff, 0xff, 0x00),
    Color::new(0x5c, 0x5c, 0xff),
    Color::new(0xff, 0x00, 0xff),
    Color::new(0x00, 0xff, 0xff),
    Color::new(0xff, 0xff, 0xff),
];

const TANGO: [Color; SLOTS] = [
    Color::new(0x2e, 0x34, 0x36),
    Color::new(0xcc, 0x00, 0x00),
    Color::new(0x4e, 0x9a, 0x06),
    Color::new(0xc4, 0xa0, 0x00),
    Color::new(0x34, 0x65, 0xa4),
    Color::new(0x75, 0x50, 0x7b),
    Color::new(0x06, 0x98, 0x9a),
    Color::new(0xd3, 0xd7, 0xcf),
    Color::new(0x55, 0x57, 0x53),
    Color::new(0xef, 0x29, 0x29),
    Color::new(0x8a, 0xe2, 0x34),
    Color::new(0xfc, 0xe9, 0x4f),
    Color::new(0x72, 0x9f, 0xcf),
    Color::new(0xad, 0x7f, 0xa8),
    Color::new(0x34, 0xe2, 0xe2),
    Color::new(0xee, 0xee, 0xec),
];

/// Immutable table of named base palettes. Built once by the caller and
/// handed to whatever needs a lookup; nothing reads it globally.
#[derive(Debug, Clone)]
pub struct BuiltinBases {
    entries: BTreeMap<&'static str, BasePalette>,
}

impl BuiltinBases {
    pub fn new() -> Self {
        let entries = [("vga", VGA), ("xterm", XTERM), ("tango", TANGO)]
            .into_iter()
            .map(|(name, colors)| (name, BasePalette::new(colors.to_vec())))
            .collect();
        Self { entries }
    }

    /// Look up a palette by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Result<&BasePalette, SchemeError> {
        self.entries
            .get(name.to_ascii_lowercase().as_str())
            .ok_or_else(|| SchemeError::UnknownBase {
                name: name.to_string(),
            })
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for BuiltinBases {
    fn default() -> Self {
        Self::new()
    }
}
