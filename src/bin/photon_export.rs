//! # photon-export
//!
//! Command-line front end: turns PNG layer masks into printer files.
//!
//! ## Usage
//!
//! ```bash
//! # One .pwms file per layer image, written next to the current directory
//! photon-export cut.png fill.png --model pwms --exposure 8
//!
//! # Custom preview and output directory
//! photon-export cut.png --preview thumb.png --model pm3 --exposure 2.5 -o out/
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{info, warn};

use photon_writer::{export_layers, LayerExport, PrinterModel, PrinterProfile};

/// photon-export - write resin printer exposure files from PNG masks
#[derive(Parser)]
#[command(name = "photon-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Layer images (white = exposed), one output file each
    #[arg(value_name = "LAYER", required = true)]
    layers: Vec<PathBuf>,

    /// Preview image; defaults to a downscaled copy of each layer
    #[arg(short, long, value_name = "PREVIEW")]
    preview: Option<PathBuf>,

    /// Printer model, by file extension (pwms, pm3, photon, ...)
    #[arg(short, long)]
    model: PrinterModel,

    /// Exposure time in seconds
    #[arg(short, long)]
    exposure: f32,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.exposure.is_nan() || cli.exposure <= 0.0 {
        bail!("exposure must be a positive number of seconds, got {}", cli.exposure);
    }

    let profile = cli.model.profile();
    info!("target printer: {}", profile.printer_model);

    let preview = cli
        .preview
        .as_deref()
        .map(|path| load_preview(path, &profile))
        .transpose()?;

    let mut requests = Vec::with_capacity(cli.layers.len());
    for path in &cli.layers {
        let layer = load_layer(path, &profile)?;
        let preview = match &preview {
            Some(p) => p.clone(),
            None => fit_preview(&layer, &profile),
        };
        requests.push(LayerExport {
            name: file_stem(path),
            layer: layer.into_raw(),
            preview: preview.into_raw(),
            exposure_s: cli.exposure,
        });
    }

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create output directory {}", cli.output.display()))?;

    let mut failures = 0;
    for file in export_layers(&requests, &profile) {
        match file.result {
            Ok(bytes) => {
                let path = cli.output.join(&file.file_name);
                std::fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{} ({} bytes)", path.display(), bytes.len());
            }
            Err(e) => {
                warn!("skipped {}", file.file_name);
                eprintln!("{}: {e}", file.file_name);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} layers failed", requests.len());
    }
    Ok(())
}

/// Load a layer mask, rotated when the printer projects upside down.
fn load_layer(path: &Path, profile: &PrinterProfile) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to read layer image {}", path.display()))?
        .to_rgba8();

    let expected = profile.pixel_resolution;
    if image.dimensions() != (expected.width, expected.height) {
        bail!(
            "{} is {}x{}, but {} needs {}",
            path.display(),
            image.width(),
            image.height(),
            profile.printer_model,
            expected
        );
    }

    Ok(if profile.rotate_180 {
        imageops::rotate180(&image)
    } else {
        image
    })
}

fn load_preview(path: &Path, profile: &PrinterProfile) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to read preview image {}", path.display()))?
        .to_rgba8();
    Ok(fit_preview(&image, profile))
}

/// Scale `image` to the profile's preview resolution.
fn fit_preview(image: &RgbaImage, profile: &PrinterProfile) -> RgbaImage {
    let target = profile.preview_resolution;
    if image.dimensions() == (target.width, target.height) {
        return image.clone();
    }
    imageops::resize(image, target.width, target.height, FilterType::Triangle)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "layer".to_string())
}
