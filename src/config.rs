// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading configuration
//! and catalog data from files.

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::models::Config;

/// Load the catalog named by `config`, or the built-in sample catalog.
///
/// A configured catalog file that cannot be read is an error; there is no
/// silent fallback once a path is given.
pub fn load_catalog(config: &Config, base_dir: &Path) -> Result<Catalog> {
    match config.catalog.resolve(base_dir) {
        Some(path) => {
            log::info!("Loading catalog from {}", path.display());
            Catalog::load(&path).map_err(|e| {
                AppError::config(format!("Failed to load catalog {}: {e}", path.display()))
            })
        }
        None => {
            log::debug!("No catalog file configured, using sample catalog");
            Ok(Catalog::sample())
        }
    }
}

/// Load and validate both config and catalog.
///
/// A missing config file falls back to defaults.
pub fn load_all(config_path: &Path) -> Result<(Config, Catalog)> {
    let config = Config::load_or_default(config_path);
    config.validate()?;

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = load_catalog(&config, base_dir)?;

    // Validate catalog data
    catalog
        .validate()
        .map_err(|e| AppError::config(format!("Invalid catalog data: {e}")))?;

    Ok((config, catalog))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_missing_config_uses_defaults_and_sample() {
        let dir = tempfile::tempdir().unwrap();
        let (config, catalog) = load_all(&dir.path().join("showcase.toml")).unwrap();
        assert_eq!(config.feed.limit, 8);
        assert_eq!(catalog.projects.len(), 3);
    }

    #[test]
    fn test_catalog_path_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("showcase.toml"),
            "[catalog]\npath = \"catalog.json\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("catalog.json"),
            r#"{"categories":[{"id":"c1","name":"Robotics","slug":"robotics"}]}"#,
        )
        .unwrap();

        let (_, catalog) = load_all(&dir.path().join("showcase.toml")).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert!(catalog.students.is_empty());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("showcase.toml"),
            "[catalog]\npath = \"missing.json\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_all(&dir.path().join("showcase.toml")),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("showcase.toml"), "[feed]\nlimit = 0\n").unwrap();
        assert!(matches!(
            load_all(&dir.path().join("showcase.toml")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_duplicate_catalog_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("showcase.toml"),
            "[catalog]\npath = \"catalog.json\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("catalog.json"),
            r#"{"mentors":[
                {"id":"m1","name":"A","position":"P","field":"F"},
                {"id":"m1","name":"B","position":"P","field":"F"}
            ]}"#,
        )
        .unwrap();
        let err = load_all(&dir.path().join("showcase.toml")).unwrap_err();
        assert!(err.to_string().contains("duplicate id 'm1'"));
    }
}
