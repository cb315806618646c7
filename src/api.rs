//! High-level API for splashgen runs

use crate::defaults::{DEFAULT_CONFIG_FILE, DEFAULT_REGISTRY_FILE, DEFAULT_SPLASH_FILE};
use crate::exceptions::Result;
use crate::generator::SplashOutcome;
use crate::pipeline;
use std::path::{Path, PathBuf};

/// Immutable run configuration, constructed once at startup and passed
/// explicitly to each step
#[derive(Debug, Clone)]
pub struct Settings {
    /// Project root containing `platforms/`, the descriptor and the source image
    pub project_root: PathBuf,
    /// Descriptor filename, `config.xml` by default
    pub config_file: String,
    /// Source splashscreen filename, `splash.png` by default
    pub splash_file: String,
    /// Platform registry filename, `splashes.json` by default
    pub registry_file: String,
}

impl Settings {
    /// Create settings for a project root with the default filenames
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            splash_file: DEFAULT_SPLASH_FILE.to_string(),
            registry_file: DEFAULT_REGISTRY_FILE.to_string(),
        }
    }

    /// Path of the project descriptor
    pub fn descriptor_path(&self) -> PathBuf {
        self.project_root.join(&self.config_file)
    }

    /// Path of the source splashscreen image
    pub fn splash_path(&self) -> PathBuf {
        self.project_root.join(&self.splash_file)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Generation outcomes for one platform
#[derive(Debug)]
pub struct PlatformOutcome {
    /// Platform identifier
    pub platform: String,
    /// Per-splash outcomes, in catalog order
    pub splashes: Vec<SplashOutcome>,
}

/// Result of a full pipeline run
#[derive(Debug)]
pub struct RunSummary {
    /// Project name read from the descriptor
    pub project_name: String,
    /// Outcomes for every platform that was present
    pub platforms: Vec<PlatformOutcome>,
}

impl RunSummary {
    /// Number of splashscreens written
    pub fn generated(&self) -> usize {
        self.platforms
            .iter()
            .flat_map(|p| p.splashes.iter())
            .filter(|s| s.result.is_ok())
            .count()
    }

    /// Number of splashscreens that failed
    pub fn failed(&self) -> usize {
        self.platforms
            .iter()
            .flat_map(|p| p.splashes.iter())
            .filter(|s| s.result.is_err())
            .count()
    }
}

/// Run the whole pipeline for a project
///
/// Preconditions are checked in order and the first failure stops the run.
/// Individual resize failures are recorded in the summary instead.
pub fn generate_splashes(settings: &Settings) -> Result<RunSummary> {
    pipeline::run(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_paths() {
        let settings = Settings::new("/proj");
        assert_eq!(settings.descriptor_path(), Path::new("/proj/config.xml"));
        assert_eq!(settings.splash_path(), Path::new("/proj/splash.png"));
    }
}
