// crates/engine/src/lib.rs
pub mod cmake;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod output;
pub mod project;
pub mod report;
pub mod scan;

use crate::config::{ProjectConfig, ScanConfig};
use crate::error::Result;
use crate::report::{ProjectEntry, ProjectReport, ScanReport};

/// Concatenate every matching file under the configured subdirectories.
///
/// Missing directories and unreadable files are collected in the returned
/// `ScanReport` rather than failing the run.
///
/// # Errors
///
/// Returns an error only when the output file cannot be written or an
/// exclusion glob is invalid.
pub fn run_scan(config: &ScanConfig) -> Result<ScanReport> {
    scan::run(config)
}

/// Concatenate the sources and headers referenced by a build configuration.
///
/// `on_entry` is called once per output block, in output order.
///
/// # Errors
///
/// Returns an error only when the configuration file cannot be read or the
/// output file cannot be written.
pub fn run_project<F>(config: &ProjectConfig, on_entry: F) -> Result<ProjectReport>
where
    F: FnMut(&ProjectEntry),
{
    project::run_with(config, on_entry)
}
