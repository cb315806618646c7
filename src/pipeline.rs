//! Linear run pipeline
//!
//! `platforms detected -> splash exists -> descriptor exists -> project name
//! -> generate for each present platform`, short-circuiting on the first
//! precondition failure. The catalog built for the first check is cached and
//! reused for generation. Platforms run strictly in catalog order; only the
//! resizes inside one platform run concurrently.

use crate::api::{PlatformOutcome, RunSummary, Settings};
use crate::catalog;
use crate::checks;
use crate::descriptor;
use crate::display;
use crate::exceptions::{Result, SplashError};
use crate::generator;
use image::GenericImageView;
use log::info;

/// Run the whole pipeline for the given settings
pub fn run(settings: &Settings) -> Result<RunSummary> {
    display::header("Checking Project & Splashscreens");

    let platforms = catalog::load(&settings.project_root, &settings.registry_file)?;
    checks::at_least_one_platform(&platforms)?;
    checks::splash_exists(settings)?;
    checks::descriptor_exists(settings)?;

    let project_name = descriptor::project_name(&settings.descriptor_path())?;

    // Decode the source once; every resize reads from the same image
    let source = image::open(settings.splash_path()).map_err(|e| SplashError::Resize {
        file_name: settings.splash_file.clone(),
        source: e,
    })?;
    info!(
        "source image {} is {}x{}",
        settings.splash_file,
        source.width(),
        source.height()
    );

    let mut outcomes = Vec::new();
    for platform in platforms.iter().filter(|p| p.is_present) {
        let output_dir = platform.output_dir(&settings.project_root, &project_name);
        let splashes = generator::generate_for_platform(&source, &output_dir, platform);
        outcomes.push(PlatformOutcome {
            platform: platform.id.clone(),
            splashes,
        });
    }

    Ok(RunSummary {
        project_name,
        platforms: outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_source_image(root: &Path) {
        // Same aspect ratio as the 1242x2208 image the tool is normally fed
        RgbaImage::from_pixel(207, 368, Rgba([10, 90, 200, 255]))
            .save(root.join("splash.png"))
            .unwrap();
    }

    fn write_descriptor(root: &Path) {
        fs::write(
            root.join("config.xml"),
            r#"<widget id="com.example.demo"><name>DemoApp</name></widget>"#,
        )
        .unwrap();
    }

    #[test]
    fn test_stops_before_io_when_no_platform_present() {
        let temp_dir = TempDir::new().unwrap();

        let err = run(&Settings::new(temp_dir.path())).unwrap_err();
        assert!(matches!(err, SplashError::MissingPlatform));
    }

    #[test]
    fn test_stops_before_descriptor_when_splash_missing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("platforms/android")).unwrap();
        write_descriptor(root);

        let err = run(&Settings::new(root)).unwrap_err();
        assert!(matches!(err, SplashError::MissingSourceImage(_)));
    }

    #[test]
    fn test_stops_when_descriptor_missing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("platforms/android")).unwrap();
        write_source_image(root);

        let err = run(&Settings::new(root)).unwrap_err();
        assert!(matches!(err, SplashError::MissingDescriptor(_)));
    }

    #[test]
    fn test_android_only_project_generates_eight_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("platforms/android")).unwrap();
        write_source_image(root);
        write_descriptor(root);

        let summary = run(&Settings::new(root)).unwrap();

        assert_eq!(summary.project_name, "DemoApp");
        assert_eq!(summary.generated(), 8);
        assert_eq!(summary.failed(), 0);

        let res = root.join("platforms/android/res");
        for name in [
            "drawable-land-hdpi/screen-test.png",
            "drawable-land-ldpi/screen-test.png",
            "drawable-land-mdpi/screen-test.png",
            "drawable-land-xhdpi/screen-test.png",
            "drawable-port-hdpi/screen-test.png",
            "drawable-port-ldpi/screen-test.png",
            "drawable-port-mdpi/screen-test.png",
            "drawable-port-xhdpi/screen-test.png",
        ] {
            assert!(res.join(name).is_file(), "missing {name}");
        }

        // Portrait mdpi targets 320x480: height is the constraint, the width
        // follows the source aspect ratio (207 * 480 / 368 = 270)
        assert_eq!(
            image::image_dimensions(res.join("drawable-port-mdpi/screen-test.png")).unwrap(),
            (270, 480)
        );

        // Nothing generated for the absent ios platform
        assert!(!root.join("platforms/ios").exists());
    }

    #[test]
    fn test_ios_output_path_uses_project_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("platforms/ios")).unwrap();
        write_source_image(root);
        write_descriptor(root);

        let summary = run(&Settings::new(root)).unwrap();

        assert_eq!(summary.generated(), 7);
        let splash_dir = root.join("platforms/ios/DemoApp/Resources/splash");
        assert!(splash_dir.join("Default~iphone-test.png").is_file());
        assert!(splash_dir.join("Default-Landscape@2x~ipad-test.png").is_file());
    }

    #[test]
    fn test_rerun_produces_identical_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("platforms/android")).unwrap();
        write_source_image(root);
        write_descriptor(root);
        let settings = Settings::new(root);

        let first = run(&settings).unwrap();
        assert_eq!(first.generated(), 8);

        let res = root.join("platforms/android/res");
        let names = [
            "drawable-land-hdpi/screen-test.png",
            "drawable-land-ldpi/screen-test.png",
            "drawable-land-mdpi/screen-test.png",
            "drawable-land-xhdpi/screen-test.png",
            "drawable-port-hdpi/screen-test.png",
            "drawable-port-ldpi/screen-test.png",
            "drawable-port-mdpi/screen-test.png",
            "drawable-port-xhdpi/screen-test.png",
        ];
        let before: Vec<Vec<u8>> = names.iter().map(|n| fs::read(res.join(n)).unwrap()).collect();

        let second = run(&settings).unwrap();
        assert_eq!(second.generated(), 8);

        for (name, old_bytes) in names.iter().zip(&before) {
            let new_bytes = fs::read(res.join(name)).unwrap();
            assert_eq!(&new_bytes, old_bytes, "{name} changed between runs");
        }
    }

    #[test]
    fn test_single_failure_is_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("platforms/android")).unwrap();
        write_source_image(root);
        write_descriptor(root);
        // A directory squatting on one output path makes exactly that save fail
        fs::create_dir_all(root.join("platforms/android/res/drawable-port-xhdpi/screen-test.png"))
            .unwrap();

        let summary = run(&Settings::new(root)).unwrap();

        assert_eq!(summary.generated(), 7);
        assert_eq!(summary.failed(), 1);
        assert!(
            root.join("platforms/android/res/drawable-port-hdpi/screen-test.png")
                .is_file()
        );
    }
}
