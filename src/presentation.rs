// src/presentation.rs
use crate::args::ConsoleOptions;
use srcbundle_engine::options::BlockOutcome;
use srcbundle_engine::report::{ProjectEntry, ProjectReport, ScanReport};
use std::path::Path;

pub fn print_scan_report(report: &ScanReport, root: &Path, console: &ConsoleOptions) {
    for dir in &report.missing_dirs {
        eprintln!("Warning: {dir} directory not found in {}", root.display());
    }
    for (path, err) in &report.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
    if !console.quiet {
        println!(
            "Collection complete. Output written to {}",
            report.output.display()
        );
    }
}

pub fn print_project_entry(entry: &ProjectEntry, console: &ConsoleOptions) {
    match &entry.outcome {
        BlockOutcome::Included(path) => {
            if !console.quiet {
                println!("Added: {}", path.display());
            }
        }
        BlockOutcome::NotFound => eprintln!("Not found: {}", entry.candidate),
        BlockOutcome::Failed(err) => eprintln!("Failed: {} ({err})", entry.candidate),
    }
}

pub fn print_project_summary(report: &ProjectReport, console: &ConsoleOptions) {
    if console.quiet {
        return;
    }
    println!(
        "Wrote {} files to {} ({} not found, {} failed)",
        report.included(),
        report.output.display(),
        report.not_found(),
        report.failed()
    );
}
