use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use tatami::cli::{CliArgs, Options};
use tatami::layout::CropSpec;
use tatami::output::{rescale_sheet, save_sheet_image};
use tatami::sheet::SheetBuilder;
use tatami::sprite::load_sprites;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = Options::from_args(CliArgs::parse());

    env_logger::Builder::new()
        .filter_level(if options.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Tatami sprite sheet generator v{}", env!("CARGO_PKG_VERSION"));

    // Reject a malformed crop spec before any image work happens
    let crop = options
        .crop
        .as_deref()
        .map(CropSpec::parse)
        .transpose()?;

    let sprites = load_sprites(&options.input, options.trim)
        .with_context(|| format!("failed to load images from {}", options.input.display()))?;
    info!("Loaded {} sprites", sprites.len());

    // Without trimming or cropping there is nothing to reconcile mixed
    // sizes with, so they are a hard error
    let require_uniform = !options.trim && crop.is_none();

    let sheet = SheetBuilder::new()
        .crop(crop)
        .require_uniform(require_uniform)
        .build(sprites)?;

    save_sheet_image(&sheet, &options.output)?;
    info!(
        "Sprite sheet written to {} ({}x{})",
        options.output.display(),
        sheet.width,
        sheet.height
    );

    if let Some(raw_scale) = &options.scale {
        match rescale_sheet(&options.output, raw_scale) {
            Ok(scale) => info!("Rescaled sheet by {}", scale),
            Err(e) => {
                warn!(
                    "Rescale failed; the unscaled sheet at {} is still valid",
                    options.output.display()
                );
                return Err(e).context("failed to rescale sprite sheet");
            }
        }
    }

    info!("Done!");

    Ok(())
}
