use crate::{
    errors::{FileOperation, IoError},
    plan::{MigrationEntry, MigrationPlan, PlaceholderEntry},
    utils::normalize_path,
};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Roots the legacy tool hardcoded, kept as the zero-flag defaults.
pub const DEFAULT_SOURCE_ROOT: &str = "docs";
pub const DEFAULT_TARGET_ROOT: &str = "multimind-docs/docs";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(docmigrate::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(docmigrate::config::parse_toml), help("Review the manifest file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate target path in plan: '{target}'")]
    #[diagnostic(
        code(docmigrate::config::duplicate_target),
        help("Every migration and placeholder must write to a distinct target path")
    )]
    DuplicateTarget { target: PathBuf },
}

/// Where documents are read from and written to. Passed into the migrator at
/// construction so the same logic runs against a temp tree in tests.
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
}

impl MigrateConfig {
    pub fn new(source_root: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
        }
    }
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_ROOT, DEFAULT_TARGET_ROOT)
    }
}

/// Optional TOML description of a migration plan, mirroring the built-in
/// tables field for field.
///
/// ```toml
/// dirs = ["features"]
///
/// [[migration]]
/// source = "features.md"
/// target = "features/core-features.md"
/// id = "core-features"
/// title = "Core Features"
/// sidebar_position = 1
///
/// [[placeholder]]
/// target = "guides/basic-usage.md"
/// id = "basic-usage"
/// title = "Basic Usage Guide"
/// sidebar_position = 1
/// ```
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
    #[serde(default, rename = "migration")]
    pub migrations: Vec<MigrationEntry>,
    #[serde(default, rename = "placeholder")]
    pub placeholders: Vec<PlaceholderEntry>,
}

impl Manifest {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the manifest cannot be read or is not
    /// valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed = toml::from_str(&content).map_err(|error| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: error,
        })?;

        Ok(parsed)
    }

    /// Normalizes every relative path and checks the unique-target invariant.
    pub fn into_plan(self) -> Result<MigrationPlan, ConfigError> {
        let plan = MigrationPlan {
            dirs: self.dirs.iter().map(|d| normalize_path(d)).collect(),
            migrations: self
                .migrations
                .into_iter()
                .map(|entry| MigrationEntry {
                    source: normalize_path(&entry.source),
                    target: normalize_path(&entry.target),
                    front_matter: entry.front_matter,
                })
                .collect(),
            placeholders: self
                .placeholders
                .into_iter()
                .map(|entry| PlaceholderEntry {
                    target: normalize_path(&entry.target),
                    front_matter: entry.front_matter,
                })
                .collect(),
        };

        if let Some(target) = plan.duplicate_target() {
            return Err(ConfigError::DuplicateTarget {
                target: target.to_path_buf(),
            });
        }

        Ok(plan)
    }
}

/// Loads the plan from `manifest` when given, or falls back to the built-in
/// tables.
pub fn load_plan(manifest: Option<&Path>) -> Result<MigrationPlan, ConfigError> {
    match manifest {
        Some(path) => {
            log::debug!("loading migration plan from {}", path.display());
            Manifest::from_file(path)?.into_plan()
        }
        None => Ok(MigrationPlan::built_in()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MANIFEST: &str = r#"
dirs = ["features", "guides"]

[[migration]]
source = "./features.md"
target = "features/core-features.md"
id = "core-features"
title = "Core Features"
sidebar_position = 1

[[placeholder]]
target = "guides/basic-usage.md"
id = "basic-usage"
title = "Basic Usage Guide"
sidebar_position = 1
"#;

    #[test]
    fn manifest_parses_and_normalizes() {
        let manifest: Manifest = toml::from_str(SMALL_MANIFEST).expect("parse");
        let plan = manifest.into_plan().expect("plan");

        assert_eq!(plan.dirs, vec![PathBuf::from("features"), PathBuf::from("guides")]);
        assert_eq!(plan.migrations.len(), 1);
        // the leading "./" is collapsed
        assert_eq!(plan.migrations[0].source, PathBuf::from("features.md"));
        assert_eq!(plan.placeholders[0].front_matter.id, "basic-usage");
    }

    #[test]
    fn duplicate_targets_are_rejected_at_load_time() {
        let doubled = format!(
            "{SMALL_MANIFEST}
[[placeholder]]
target = \"guides/basic-usage.md\"
id = \"basic-usage\"
title = \"Basic Usage Guide\"
sidebar_position = 2
"
        );

        let manifest: Manifest = toml::from_str(&doubled).expect("parse");
        let error = manifest.into_plan().expect_err("duplicate must fail");

        assert!(matches!(
            error,
            ConfigError::DuplicateTarget { target } if target == PathBuf::from("guides/basic-usage.md")
        ));
    }

    #[test]
    fn missing_manifest_surfaces_as_io_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let error = Manifest::from_file(&temp.path().join("absent.toml")).expect_err("must fail");

        assert!(matches!(error, ConfigError::Io(_)));
    }

    #[test]
    fn no_manifest_falls_back_to_built_in_plan() {
        let plan = load_plan(None).expect("plan");
        assert_eq!(plan.migrations.len(), 4);
        assert_eq!(plan.placeholders.len(), 3);
    }
}
