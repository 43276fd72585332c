use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command};
use docmigrate::{
    api,
    config::{MigrateConfig, DEFAULT_SOURCE_ROOT, DEFAULT_TARGET_ROOT},
};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("source")
                .long("source")
                .value_name("DIR")
                .help(format!("Legacy docs root [default: {DEFAULT_SOURCE_ROOT}]")),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .value_name("DIR")
                .help(format!("Site docs root [default: {DEFAULT_TARGET_ROOT}]")),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .value_name("FILE")
                .help("TOML manifest overriding the built-in migration plan"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the planned target tree without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("verbose") {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let config = build_config(&matches);
    let manifest = matches.get_one::<String>("manifest").map(PathBuf::from);

    if matches.get_flag("dry-run") {
        api::preview_migration(&config, manifest.as_deref())?;

        return Ok(());
    }

    let report = api::run_migration(&config, manifest.as_deref())?;

    log::debug!(
        "{} migrated, {} missing, {} placeholders created, {} kept",
        report.migrated.len(),
        report.missing_sources.len(),
        report.placeholders_created.len(),
        report.placeholders_kept.len()
    );

    println!("Documentation migration completed!");

    Ok(())
}

fn build_config(matches: &ArgMatches) -> MigrateConfig {
    let mut config = MigrateConfig::default();

    if let Some(source) = matches.get_one::<String>("source") {
        config.source_root = PathBuf::from(source);
    }
    if let Some(target) = matches.get_one::<String>("target") {
        config.target_root = PathBuf::from(target);
    }

    config
}
