//! Build-config aggregator: sources named in a `CMakeLists.txt`, then
//! headers found under the include directories.

use crate::cmake::{Declarations, Extractor, is_unresolved};
use crate::config::ProjectConfig;
use crate::error::{EngineError, Result};
use crate::filesystem::collect_files;
use crate::options::{BlockOutcome, HeaderSource};
use crate::output::OutputDocument;
use crate::report::{ProjectEntry, ProjectReport};
use std::fs;
use std::path::{Path, PathBuf};

#[must_use]
pub fn format_found(path: &Path, content: &str) -> String {
    let p = path.display();
    format!("// ===== Start of {p} =====\n{content}\n// ===== End of {p} =====\n\n")
}

#[must_use]
pub fn format_not_found(candidate: &str) -> String {
    format!("// File not found: {candidate}\n\n")
}

#[must_use]
pub fn format_failed(path: &Path, err: &std::io::Error) -> String {
    format!("// Error reading {}: {err}\n\n", path.display())
}

/// Absolute directory containing the build configuration file.
///
/// # Errors
/// Returns [`EngineError::ConfigRead`] if the current directory is unavailable.
pub fn config_dir(config_file: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(config_file).map_err(|e| EngineError::ConfigRead {
        path: config_file.to_path_buf(),
        source: e,
    })?;
    Ok(absolute
        .parent()
        .map_or_else(|| absolute.clone(), Path::to_path_buf))
}

/// Tries `candidate` as given, then relative to `base`.
#[must_use]
pub fn resolve(candidate: &str, base: &Path) -> Option<PathBuf> {
    let direct = PathBuf::from(candidate);
    if direct.exists() {
        return Some(direct);
    }
    let relative = base.join(candidate);
    if relative.exists() {
        tracing::debug!(candidate, resolved = %relative.display(), "resolved via config directory");
        return Some(relative);
    }
    None
}

/// Header search roots in scan order. Unresolved and missing directories are
/// dropped silently; a root reached twice is kept once.
#[must_use]
pub fn header_roots(config: &ProjectConfig, base: &Path, decls: &Declarations) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if config.header_source.uses_fixed() {
        candidates.push(base.join(&config.include_dir));
    }
    if config.header_source.uses_declared() {
        for dir in &decls.include_dirs {
            if is_unresolved(dir) {
                tracing::debug!(dir = %dir, "skipping unresolved include directory");
                continue;
            }
            candidates.push(PathBuf::from(dir));
        }
    }

    let mut roots: Vec<PathBuf> = Vec::new();
    let mut seen: Vec<PathBuf> = Vec::new();
    for dir in candidates {
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "skipping missing include directory");
            continue;
        }
        let key = fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        roots.push(dir);
    }
    roots
}

/// Every candidate in output order: config-derived sources, then headers.
///
/// # Errors
/// Returns an error if the configuration file cannot be read.
pub fn discover(config: &ProjectConfig) -> Result<(PathBuf, Vec<String>)> {
    let text = fs::read_to_string(&config.config_file).map_err(|e| EngineError::ConfigRead {
        path: config.config_file.clone(),
        source: e,
    })?;
    let base = config_dir(&config.config_file)?;
    let decls = Extractor::new()?.extract(&text, &base, &config.root_token);
    tracing::debug!(
        sources = decls.sources.len(),
        include_dirs = decls.include_dirs.len(),
        "extracted declarations"
    );

    let mut candidates = decls.sources.clone();
    if config.header_source == HeaderSource::Fixed && !decls.include_dirs.is_empty() {
        tracing::debug!("declared include directories ignored; header source is fixed");
    }
    for root in header_roots(config, &base, &decls) {
        candidates.extend(
            collect_files(&root, &config.header_extensions, None)
                .into_iter()
                .map(|p| p.to_string_lossy().into_owned()),
        );
    }
    Ok((base, candidates))
}

/// Runs the aggregator, calling `on_entry` after each block is written.
///
/// Missing and unreadable files become inline comment blocks; they never
/// stop the run.
///
/// # Errors
/// Fails only when the configuration file cannot be read or the output
/// cannot be written.
pub fn run_with<F>(config: &ProjectConfig, mut on_entry: F) -> Result<ProjectReport>
where
    F: FnMut(&ProjectEntry),
{
    let (base, candidates) = discover(config)?;
    let mut doc = OutputDocument::create(&config.output)?;

    let mut entries = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let (block, outcome) = match resolve(&candidate, &base) {
            None => (format_not_found(&candidate), BlockOutcome::NotFound),
            Some(path) => match fs::read_to_string(&path) {
                Ok(content) => (format_found(&path, &content), BlockOutcome::Included(path)),
                Err(e) => (format_failed(&path, &e), BlockOutcome::Failed(e.to_string())),
            },
        };
        doc.push_block(&block)?;

        let entry = ProjectEntry { candidate, outcome };
        on_entry(&entry);
        entries.push(entry);
    }

    let output = doc.finish()?;
    Ok(ProjectReport { output, entries })
}

/// [`run_with`] without a progress callback.
///
/// # Errors
/// See [`run_with`].
pub fn run(config: &ProjectConfig) -> Result<ProjectReport> {
    run_with(config, |_| {})
}
