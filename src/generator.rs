//! Splashscreen resizing and per-platform fan-out
//!
//! Each splash is a proportional resize of the one decoded source image: the
//! larger of the target width/height is the constrained axis, the other axis
//! follows the source aspect ratio. When the source aspect ratio differs from
//! the target's, the unconstrained axis will not match the table value; that
//! discrepancy is accepted, never crop-corrected.

use crate::catalog::{PlatformSpec, SplashSpec};
use crate::display;
use crate::exceptions::{Result, SplashError};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use log::{debug, error};
use std::fs;
use std::path::Path;
use std::thread;

/// The single axis passed to the proportional resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Output width is fixed, height follows the source aspect ratio
    Width(u32),
    /// Output height is fixed, width follows the source aspect ratio
    Height(u32),
}

/// Pick the larger target dimension as the resize constraint; ties go to width
pub fn constraint(splash: &SplashSpec) -> Constraint {
    if splash.height > splash.width {
        Constraint::Height(splash.height)
    } else {
        Constraint::Width(splash.width)
    }
}

/// Derive the full output size from the source size and one constraint
fn target_size(src_width: u32, src_height: u32, constraint: Constraint) -> (u32, u32) {
    match constraint {
        Constraint::Width(w) => {
            let h = (f64::from(src_height) * f64::from(w) / f64::from(src_width)).round() as u32;
            (w, h.max(1))
        }
        Constraint::Height(h) => {
            let w = (f64::from(src_width) * f64::from(h) / f64::from(src_height)).round() as u32;
            (w.max(1), h)
        }
    }
}

/// Outcome of one splash generation
#[derive(Debug)]
pub struct SplashOutcome {
    /// Splash filename from the catalog
    pub file_name: String,
    /// Success, or the error that failed this one splash
    pub result: Result<()>,
}

/// Resize the source for one splash and write it under `output_dir`
///
/// Parent directories are created as needed. Output is always PNG, so the
/// write is lossless.
pub fn generate_splash(
    source: &DynamicImage,
    output_dir: &Path,
    splash: &SplashSpec,
) -> Result<()> {
    let dst = output_dir.join(&splash.file_name);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }

    let (width, height) = target_size(source.width(), source.height(), constraint(splash));
    debug!("resizing to {}x{} for {:?}", width, height, dst);

    let resized = source.resize_exact(width, height, FilterType::Lanczos3);
    resized
        .save_with_format(&dst, image::ImageFormat::Png)
        .map_err(|e| SplashError::Resize {
            file_name: splash.file_name.clone(),
            source: e,
        })?;
    Ok(())
}

/// Generate every splash of one platform into `output_dir`
///
/// Sibling resizes run concurrently and are all joined before returning; a
/// failure in one splash is recorded in its outcome and never aborts the
/// others.
pub fn generate_for_platform(
    source: &DynamicImage,
    output_dir: &Path,
    platform: &PlatformSpec,
) -> Vec<SplashOutcome> {
    display::header(&format!("Generating splashscreens for {}", platform.id));

    let outcomes: Vec<SplashOutcome> = thread::scope(|scope| {
        let handles: Vec<_> = platform
            .splashes
            .iter()
            .map(|splash| {
                scope.spawn(move || SplashOutcome {
                    file_name: splash.file_name.clone(),
                    result: generate_splash(source, output_dir, splash),
                })
            })
            .collect();

        handles
            .into_iter()
            .zip(platform.splashes.iter())
            .map(|(handle, splash)| {
                handle.join().unwrap_or_else(|_| SplashOutcome {
                    file_name: splash.file_name.clone(),
                    result: Err(SplashError::Generic("splash task panicked".to_string())),
                })
            })
            .collect()
    });

    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => display::success(&format!("{} created", outcome.file_name)),
            Err(e) => {
                display::error(&format!("{} failed", outcome.file_name));
                error!("splash generation failed for {}: {e}", outcome.file_name);
            }
        }
    }
    outcomes
}
