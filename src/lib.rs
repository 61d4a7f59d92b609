//! Derive terminal color schemes from images.
//!
//! Every slot of a base palette gets the most frequent image color that lies
//! nearest to it; slots no image color is nearest to get the closest pixel
//! in the image instead. See [`pipeline::generate`].

pub mod base;
pub mod cancel;
pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod source;
