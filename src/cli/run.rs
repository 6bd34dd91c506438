use std::env;

use anyhow::{Context, Result};

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    check::check_sources,
    config::{CONFIG_FILE_NAME, ConfigLoadResult, default_config_json, load_config},
    sources::SourcePaths,
    validate::DuplicateCheck,
};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    if args.print_config {
        println!("{}", default_config_json()?);
        return Ok(ExitStatus::Success);
    }

    let Some(sources) = SourcePaths::partition(&args.paths, args.mode()) else {
        report::print_usage(args.format)?;
        return Ok(ExitStatus::Failure);
    };

    // ============================================================
    // Config: CLI > config file > defaults
    // ============================================================
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let ConfigLoadResult { mut config, path } = load_config(args.config.as_deref(), &cwd)?;

    if args.verbose {
        match &path {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    if args.strict {
        config.duplicate_check = DuplicateCheck::Multiset;
    }

    // ============================================================
    // Extract and validate
    // ============================================================
    let sources = sources.expand_implementations()?;
    let result = check_sources(sources, &config)?;

    if args.verbose {
        report::print_summary(&result);
    }
    report::print(&result, &config, args.format)?;

    Ok(ExitStatus::from(&result.outcome))
}
