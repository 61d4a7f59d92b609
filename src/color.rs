use std::str::FromStr;

use palette::Srgba;

use crate::error::SchemeError;

/// Core color type used throughout the pipeline.
/// Three 8-bit sRGB channels, fully opaque. Equality is exact per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Widen an 8-bit channel to 16 bits by bit replication (`0xab` -> `0xabab`).
fn widen(v: u8) -> u16 {
    (u16::from(v) << 8) | u16::from(v)
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex triplet of the exact form `#rrggbb`. Hex digits may be
    /// upper or lower case; anything else is a malformed triplet.
    pub fn from_hex(text: &str) -> Result<Self, SchemeError> {
        let malformed = || SchemeError::MalformedTriplet {
            text: text.to_string(),
        };
        let digits = text.strip_prefix('#').ok_or_else(malformed)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let channel =
            |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| malformed());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Widened 16-bit-per-channel representation. Alpha is always opaque.
    pub fn to_channels(self) -> Srgba<u16> {
        Srgba::new(widen(self.r), widen(self.g), widen(self.b), u16::MAX)
    }

    /// Squared Euclidean distance in widened channel space.
    ///
    /// Exact integer arithmetic; used for every nearest-color comparison so
    /// that ties are real ties and not float noise.
    pub fn distance_sq(self, other: Color) -> u64 {
        let a = self.to_channels();
        let b = other.to_channels();
        [(a.red, b.red), (a.green, b.green), (a.blue, b.blue)]
            .into_iter()
            .map(|(x, y)| {
                let d = u64::from(x.abs_diff(y));
                d * d
            })
            .sum()
    }

    /// Euclidean distance in widened channel space.
    pub fn distance(self, other: Color) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl FromStr for Color {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
