//! Directory-scan aggregator: every matching file under the configured
//! subdirectories, sorted by path, framed by `=` banners.

use crate::config::ScanConfig;
use crate::error::{EngineError, Result};
use crate::filesystem::{collect_files, exclusion_overrides};
use crate::output::OutputDocument;
use crate::report::ScanReport;
use std::fs;
use std::path::{Path, PathBuf};

pub const BANNER_WIDTH: usize = 80;

/// Formats one file block: separator line, banner, label, banner, blank
/// line, content, trailing newline.
#[must_use]
pub fn format_block(label: &Path, content: &str) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    format!(
        "\n{banner}\nFile: {}\n{banner}\n\n{content}\n",
        label.display()
    )
}

/// Collects candidate files and returns them in ascending path order along
/// with the configured subdirectories that were missing.
///
/// # Errors
/// Returns an error if an exclusion pattern is invalid.
pub fn discover(config: &ScanConfig) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let overrides = exclusion_overrides(&config.root, &config.exclude)?;

    let mut files = Vec::new();
    let mut missing = Vec::new();
    for dir in &config.dirs {
        let dir_path = config.root.join(dir);
        if !dir_path.exists() {
            tracing::debug!(dir = %dir_path.display(), "scan directory missing");
            missing.push(dir.clone());
            continue;
        }
        files.extend(collect_files(
            &dir_path,
            &config.extensions,
            overrides.as_ref(),
        ));
    }
    files.sort();
    Ok((files, missing))
}

/// Runs the aggregator, overwriting `config.output`.
///
/// Unreadable files are skipped and reported in [`ScanReport::errors`];
/// nothing of a skipped file reaches the output.
///
/// # Errors
/// Fails only when the output cannot be written or an exclusion pattern is
/// invalid.
pub fn run(config: &ScanConfig) -> Result<ScanReport> {
    let (files, missing_dirs) = discover(config)?;
    let mut doc = OutputDocument::create(&config.output)?;

    let mut written = Vec::with_capacity(files.len());
    let mut errors = Vec::new();
    for path in files {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                errors.push((path.clone(), EngineError::file_read(&path, e)));
                continue;
            }
        };
        let label = path
            .strip_prefix(&config.root)
            .unwrap_or(path.as_path())
            .to_path_buf();
        doc.push_block(&format_block(&label, &content))?;
        written.push(label);
    }

    let output = doc.finish()?;
    tracing::info!(
        output = %output.display(),
        blocks = written.len(),
        skipped = errors.len(),
        "scan complete"
    );
    Ok(ScanReport {
        output,
        written,
        missing_dirs,
        errors,
    })
}
