//! Centralized default values for splashgen

// =================================
// Input file names
// =================================

/// Project descriptor read for the project name
pub const DEFAULT_CONFIG_FILE: &str = "config.xml";

/// Source splashscreen image expected in the project root
pub const DEFAULT_SPLASH_FILE: &str = "splash.png";

/// Optional platform registry overriding the built-in catalog
pub const DEFAULT_REGISTRY_FILE: &str = "splashes.json";

// =================================
// Path constants
// =================================

/// Directory cordova places added build targets under
pub const DEFAULT_PLATFORMS_DIR: &str = "platforms";

/// Placeholder substituted with the project name in output dir templates
pub const PROJECT_PLACEHOLDER: &str = "{project}";
