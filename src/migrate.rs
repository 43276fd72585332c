use crate::{
    config::MigrateConfig,
    errors::{FileOperation, IoError},
    plan::MigrationPlan,
    transform::{self, TransformError},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MigrateError {
    #[error("I/O error within migration domain")]
    #[diagnostic(code(docmigrate::migrate::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Transform(#[from] TransformError),
}

/// What one run actually did, per pass. Paths are relative to the roots so
/// callers can assert outcomes without re-scanning the tree.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub migrated: Vec<PathBuf>,
    pub missing_sources: Vec<PathBuf>,
    pub placeholders_created: Vec<PathBuf>,
    pub placeholders_kept: Vec<PathBuf>,
}

/// Executes `plan` against the roots in `config`: directory preparation,
/// then the migration pass, then the placeholder pass, strictly in list
/// order.
///
/// A missing migration source is the one recoverable condition — it is
/// warned about and skipped. Any other I/O failure aborts the run where it
/// stands; already-written files are left in place.
///
/// # Errors
///
/// Returns a [`MigrateError`] if a file cannot be read or written, a
/// directory cannot be created, or a document fails to render.
pub fn run(config: &MigrateConfig, plan: &MigrationPlan) -> Result<MigrationReport, MigrateError> {
    ensure_directories(config, plan)?;

    let mut report = MigrationReport::default();

    for entry in &plan.migrations {
        let source_path = config.source_root.join(&entry.source);
        let target_path = config.target_root.join(&entry.target);

        if !source_path.exists() {
            eprintln!(
                "{} source file not found: {}",
                "warning".yellow(),
                source_path.display()
            );
            report.missing_sources.push(entry.source.clone());
            continue;
        }

        let content = fs::read_to_string(&source_path)
            .map_err(|error| IoError::new(FileOperation::Read, source_path.clone(), error))?;

        let document = transform::render_document(&entry.front_matter, &content)?;

        if let Some(parent) = target_path.parent() {
            create_directory(parent)?;
        }

        write_file(&target_path, document)?;

        println!(
            "{} {} to {}",
            "migrated".green(),
            entry.source.display(),
            entry.target.display()
        );

        report.migrated.push(entry.target.clone());
    }

    for entry in &plan.placeholders {
        let target_path = config.target_root.join(&entry.target);

        if target_path.exists() {
            log::debug!("keeping existing document: {}", target_path.display());
            report.placeholders_kept.push(entry.target.clone());
            continue;
        }

        let body = transform::placeholder_body(&entry.front_matter);
        let document = transform::render_document(&entry.front_matter, &body)?;

        if let Some(parent) = target_path.parent() {
            create_directory(parent)?;
        }

        write_file(&target_path, document)?;

        println!(
            "{} {}",
            "created placeholder".green(),
            entry.target.display()
        );

        report.placeholders_created.push(entry.target.clone());
    }

    Ok(report)
}

/// Creates every plan directory under the target root. Re-running against an
/// existing tree is a no-op.
fn ensure_directories(config: &MigrateConfig, plan: &MigrationPlan) -> Result<(), MigrateError> {
    for dir in &plan.dirs {
        create_directory(&config.target_root.join(dir))?;
    }

    Ok(())
}

fn create_directory(path: &Path) -> Result<(), MigrateError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    Ok(())
}

fn write_file(path: &Path, contents: String) -> Result<(), MigrateError> {
    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    Ok(())
}
