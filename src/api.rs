use crate::{
    config::{self, ConfigError, MigrateConfig},
    migrate::{self, MigrateError, MigrationReport},
    preview,
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DocmigrateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Migrate(#[from] MigrateError),
}

/// Migrates the legacy docs tree into the target site tree.
///
/// Loads the plan (from `manifest` when given, otherwise the built-in
/// tables), prepares the target directories, runs the migration pass and
/// then the placeholder pass.
///
/// # Errors
///
/// Returns a [`DocmigrateError`] if:
///
/// - The manifest cannot be read, parsed, or contains duplicate targets.
/// - A source file cannot be read (other than not existing, which is a
///   warning).
/// - A directory or file cannot be created or written to.
/// - A document fails to render.
pub fn run_migration(
    config: &MigrateConfig,
    manifest: Option<&Path>,
) -> Result<MigrationReport, DocmigrateError> {
    let plan = config::load_plan(manifest)?;

    log::debug!(
        "plan loaded: {} dirs, {} migrations, {} placeholders",
        plan.dirs.len(),
        plan.migrations.len(),
        plan.placeholders.len()
    );

    let report = migrate::run(config, &plan)?;

    Ok(report)
}

/// Renders the planned target tree without touching the filesystem.
///
/// # Errors
///
/// Returns a [`DocmigrateError`] if the manifest cannot be loaded; the
/// preview itself performs no writes and cannot fail.
pub fn preview_migration(
    config: &MigrateConfig,
    manifest: Option<&Path>,
) -> Result<(), DocmigrateError> {
    let plan = config::load_plan(manifest)?;

    preview::preview_plan(config, &plan);

    Ok(())
}
