use anyhow::Context;
use clap::Parser;
use srcbundle::args::ScanArgs;
use srcbundle::config::ScanConfig;
use srcbundle::{logging, presentation};
use std::process::ExitCode;

fn run(args: ScanArgs) -> anyhow::Result<()> {
    let console = args.console.clone();
    let config = ScanConfig::try_from(args).context("Invalid arguments")?;
    tracing::debug!(?config, "resolved configuration");
    let report = srcbundle_engine::run_scan(&config)?;
    presentation::print_scan_report(&report, &config.root, &console);
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    match run(ScanArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
