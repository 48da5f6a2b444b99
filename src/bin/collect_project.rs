use anyhow::Context;
use clap::Parser;
use srcbundle::args::ProjectArgs;
use srcbundle::config::ProjectConfig;
use srcbundle::{logging, presentation};
use std::process::ExitCode;

fn run(args: ProjectArgs) -> anyhow::Result<()> {
    let console = args.console.clone();
    let config = ProjectConfig::try_from(args).context("Invalid arguments")?;
    tracing::debug!(?config, "resolved configuration");
    let report = srcbundle_engine::run_project(&config, |entry| {
        presentation::print_project_entry(entry, &console);
    })?;
    presentation::print_project_summary(&report, &console);
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    match run(ProjectArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
