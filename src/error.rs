use thiserror::Error;

/// Errors raised while loading a base palette or deriving a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("malformed triplet: {text:?} (expected #rrggbb)")]
    MalformedTriplet { text: String },

    #[error("unknown base scheme: {name:?}")]
    UnknownBase { name: String },

    #[error("no pixels to scan")]
    NoPixels,

    #[error("base palette must have {expected} colors, found {found}")]
    PaletteLength { expected: usize, found: usize },

    #[error("base palette is empty")]
    EmptyPalette,

    #[error("scan cancelled before slots {slots:?} were resolved")]
    Incomplete { slots: Vec<usize> },

    #[error("row of {len} pixels exceeds the u32 width limit")]
    RowTooLong { len: usize },
}
