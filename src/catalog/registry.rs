//! Optional external platform registry
//!
//! A `splashes.json` file in the project root replaces the built-in platform
//! table, so new targets can be added without a code change. The file is a
//! JSON array of platform entries:
//!
//! ```json
//! [
//!   {
//!     "id": "android",
//!     "output_dir": "platforms/android/res",
//!     "splashes": [
//!       { "file_name": "drawable-port-hdpi/screen-test.png", "width": 480, "height": 800 }
//!     ]
//!   }
//! ]
//! ```

use crate::catalog::SplashSpec;
use crate::exceptions::{Result, SplashError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Platform entry before filesystem detection is applied
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformEntry {
    /// Platform identifier, also the directory name under `platforms/`
    pub id: String,
    /// Output directory relative to the project root; may contain `{project}`
    pub output_dir: String,
    /// Splashscreens to generate for this platform
    pub splashes: Vec<SplashSpec>,
}

/// Load platform entries from a registry file
pub fn load(path: &Path) -> Result<Vec<PlatformEntry>> {
    let data = fs::read_to_string(path)
        .map_err(|e| SplashError::Registry(format!("{}: {e}", path.display())))?;
    let entries: Vec<PlatformEntry> = serde_json::from_str(&data)
        .map_err(|e| SplashError::Registry(format!("{}: {e}", path.display())))?;

    if entries.is_empty() {
        return Err(SplashError::Registry(format!(
            "{}: registry defines no platforms",
            path.display()
        )));
    }
    Ok(entries)
}
