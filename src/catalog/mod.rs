//! Platform catalog and filesystem detection
//!
//! The catalog maps every supported build target to its splashscreen layout:
//! output directory, filenames and pixel sizes. Presence of a platform is a
//! pure function of the filesystem: an absent `platforms/<id>` directory
//! yields `is_present = false`, never an error.

pub mod registry;

pub use registry::PlatformEntry;

use crate::defaults::{DEFAULT_PLATFORMS_DIR, PROJECT_PLACEHOLDER};
use crate::exceptions::Result;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One splashscreen output: filename (possibly with a subdirectory) and its
/// target pixel size
#[derive(Debug, Clone, Deserialize)]
pub struct SplashSpec {
    /// Output filename, joined onto the platform's output directory
    pub file_name: String,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

/// One mobile build target and its splashscreen layout
#[derive(Debug, Clone)]
pub struct PlatformSpec {
    /// Platform identifier, also the directory name under `platforms/`
    pub id: String,
    /// Output directory template relative to the project root; may contain
    /// the `{project}` placeholder
    pub output_dir_template: String,
    /// Whether the platform's build directory exists on disk
    pub is_present: bool,
    /// Splashscreens to generate for this platform, in catalog order
    pub splashes: Vec<SplashSpec>,
}

impl PlatformSpec {
    /// Resolve the output directory for a given project name
    pub fn output_dir(&self, project_root: &Path, project_name: &str) -> PathBuf {
        let resolved = self
            .output_dir_template
            .replace(PROJECT_PLACEHOLDER, project_name);
        project_root.join(resolved)
    }
}

fn splash(file_name: &str, width: u32, height: u32) -> SplashSpec {
    SplashSpec {
        file_name: file_name.to_string(),
        width,
        height,
    }
}

/// Built-in platform table: the conventional cordova resource layouts
fn builtin() -> Vec<PlatformEntry> {
    vec![
        PlatformEntry {
            id: "ios".to_string(),
            output_dir: "platforms/ios/{project}/Resources/splash".to_string(),
            splashes: vec![
                splash("Default~iphone-test.png", 320, 480),
                splash("Default@2x~iphone-test.png", 640, 960),
                splash("Default-Portrait~ipad-test.png", 768, 1024),
                splash("Default-Portrait@2x~ipad-test.png", 1536, 2048),
                splash("Default-Landscape~ipad-test.png", 1024, 768),
                splash("Default-Landscape@2x~ipad-test.png", 2048, 1536),
                splash("Default-568h@2x~iphone-test.png", 640, 1136),
            ],
        },
        PlatformEntry {
            id: "android".to_string(),
            output_dir: "platforms/android/res".to_string(),
            splashes: vec![
                splash("drawable-land-hdpi/screen-test.png", 800, 480),
                splash("drawable-land-ldpi/screen-test.png", 320, 200),
                splash("drawable-land-mdpi/screen-test.png", 480, 320),
                splash("drawable-land-xhdpi/screen-test.png", 1280, 720),
                splash("drawable-port-hdpi/screen-test.png", 480, 800),
                splash("drawable-port-ldpi/screen-test.png", 200, 320),
                splash("drawable-port-mdpi/screen-test.png", 320, 480),
                splash("drawable-port-xhdpi/screen-test.png", 720, 1280),
            ],
        },
    ]
}

/// Build the catalog for a project root, detecting which platforms are added
///
/// When `registry_file` exists under the project root its entries replace the
/// built-in table.
pub fn load(project_root: &Path, registry_file: &str) -> Result<Vec<PlatformSpec>> {
    let registry_path = project_root.join(registry_file);
    let entries = if registry_path.is_file() {
        debug!("using platform registry {:?}", registry_path);
        registry::load(&registry_path)?
    } else {
        builtin()
    };

    Ok(entries
        .into_iter()
        .map(|entry| {
            let is_present = project_root
                .join(DEFAULT_PLATFORMS_DIR)
                .join(&entry.id)
                .is_dir();
            debug!("platform {}: present={}", entry.id, is_present);
            PlatformSpec {
                id: entry.id,
                output_dir_template: entry.output_dir,
                is_present,
                splashes: entry.splashes,
            }
        })
        .collect())
}
