//! Precondition checks run before any generation
//!
//! Three checks, in order, each fatal on failure: at least one platform was
//! added, the source splashscreen exists, the descriptor exists. The caller
//! short-circuits on the first failure, so with zero platforms present
//! neither input file is ever touched.

use crate::api::Settings;
use crate::catalog::PlatformSpec;
use crate::display;
use crate::exceptions::{Result, SplashError};

/// Fail unless at least one platform build directory was detected
pub fn at_least_one_platform(platforms: &[PlatformSpec]) -> Result<()> {
    let present: Vec<&str> = platforms
        .iter()
        .filter(|p| p.is_present)
        .map(|p| p.id.as_str())
        .collect();

    if present.is_empty() {
        display::error(
            "No cordova platforms found. Make sure you are in the root folder \
             of your Cordova project and add platforms with 'cordova platform add'",
        );
        return Err(SplashError::MissingPlatform);
    }

    display::success(&format!("platforms found: {}", present.join(", ")));
    Ok(())
}

/// Fail unless the source splashscreen image exists in the project root
pub fn splash_exists(settings: &Settings) -> Result<()> {
    if settings.splash_path().is_file() {
        display::success(&format!("{} exists", settings.splash_file));
        Ok(())
    } else {
        display::error(&format!(
            "{} does not exist in the root folder",
            settings.splash_file
        ));
        Err(SplashError::MissingSourceImage(settings.splash_file.clone()))
    }
}

/// Fail unless the project descriptor exists in the project root
pub fn descriptor_exists(settings: &Settings) -> Result<()> {
    if settings.descriptor_path().is_file() {
        display::success(&format!("{} exists", settings.config_file));
        Ok(())
    } else {
        display::error(&format!(
            "cordova's {} does not exist in the root folder",
            settings.config_file
        ));
        Err(SplashError::MissingDescriptor(settings.config_file.clone()))
    }
}
