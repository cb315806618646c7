//! Project descriptor reading
//!
//! The descriptor is the cordova `config.xml` manifest. Only one field is
//! needed: the text of the first `name` element under the `widget` root.
//! Comparison is by local name so the default widgets namespace is accepted.

use crate::exceptions::{Result, SplashError};
use log::debug;
use std::fs;
use std::path::Path;

/// Read the project name from the descriptor file
pub fn project_name(path: &Path) -> Result<String> {
    let data = fs::read_to_string(path)
        .map_err(|e| SplashError::DescriptorParse(format!("{}: {e}", path.display())))?;
    let doc = roxmltree::Document::parse(&data)?;

    let root = doc.root_element();
    if root.tag_name().name() != "widget" {
        return Err(SplashError::DescriptorParse(format!(
            "expected root element 'widget', found '{}'",
            root.tag_name().name()
        )));
    }

    let name = root
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "name")
        .and_then(|n| n.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(SplashError::MissingNameField)?;

    debug!("project name: {name}");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceptions::SplashError;
    use tempfile::TempDir;

    fn write_descriptor(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.xml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_project_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_descriptor(
            &temp_dir,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<widget id="com.example.demo" version="1.0.0">
    <name>DemoApp</name>
    <description>A demo</description>
</widget>"#,
        );

        assert_eq!(project_name(&path).unwrap(), "DemoApp");
    }

    #[test]
    fn test_accepts_default_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_descriptor(
            &temp_dir,
            r#"<widget xmlns="http://www.w3.org/ns/widgets" id="com.example.demo">
    <name>DemoApp</name>
</widget>"#,
        );

        assert_eq!(project_name(&path).unwrap(), "DemoApp");
    }

    #[test]
    fn test_malformed_descriptor() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_descriptor(&temp_dir, "<widget><name>Broken");

        let err = project_name(&path).unwrap_err();
        assert!(matches!(err, SplashError::DescriptorParse(_)));
    }

    #[test]
    fn test_wrong_root_element() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_descriptor(&temp_dir, "<manifest><name>DemoApp</name></manifest>");

        let err = project_name(&path).unwrap_err();
        assert!(matches!(err, SplashError::DescriptorParse(_)));
    }

    #[test]
    fn test_missing_name_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_descriptor(
            &temp_dir,
            r#"<widget id="com.example.demo"><description>no name</description></widget>"#,
        );

        let err = project_name(&path).unwrap_err();
        assert!(matches!(err, SplashError::MissingNameField));
    }

    #[test]
    fn test_unreadable_descriptor() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.xml");

        let err = project_name(&path).unwrap_err();
        assert!(matches!(err, SplashError::DescriptorParse(_)));
    }
}
