use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use imgscheme::base::{BasePalette, BuiltinBases};
use imgscheme::cancel::CancelToken;
use imgscheme::cli::Args;
use imgscheme::{pipeline, preview, source};

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let builtins = BuiltinBases::new();
    if args.list_bases {
        for name in builtins.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let base = match &args.base_file {
        Some(path) => BasePalette::load(path)?,
        None => builtins.get(&args.base)?.clone(),
    };
    let image_path = args.image.as_deref().context("no image given")?;
    let img = source::load_image(image_path)?;
    log::info!(
        "scanning {} ({}x{}) against a {}-color base",
        image_path.display(),
        img.width(),
        img.height(),
        base.len()
    );

    let cancel = match args.timeout {
        Some(ms) => CancelToken::with_deadline(Duration::from_millis(ms)),
        None => CancelToken::new(),
    };
    let scheme = pipeline::generate(&img, &base, &cancel)?;

    if args.preview {
        preview::render(&mut io::stderr().lock(), &base, &scheme)?;
    }

    match &args.output {
        Some(path) => {
            scheme.write_to(path)?;
            log::info!("wrote scheme to {}", path.display());
        }
        None => io::stdout().lock().write_all(scheme.serialize()?.as_bytes())?,
    }
    Ok(())
}
