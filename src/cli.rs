use std::path::PathBuf;

use clap::Parser;

/// Derive a 16-color terminal scheme from the colors of an image.
#[derive(Parser, Debug)]
#[command(name = "imgscheme", version, about)]
pub struct Args {
    /// Path to the input image
    #[arg(required_unless_present = "list_bases")]
    pub image: Option<PathBuf>,

    /// Built-in base palette to fill
    #[arg(short, long, default_value = "vga", conflicts_with = "base_file")]
    pub base: String,

    /// Read the base palette from a file of 16 `#rrggbb` lines
    #[arg(short = 'f', long)]
    pub base_file: Option<PathBuf>,

    /// Write the scheme to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of base and scheme to stderr
    #[arg(long)]
    pub preview: bool,

    /// Stop scanning pixels after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// List the built-in base palettes and exit
    #[arg(long)]
    pub list_bases: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
