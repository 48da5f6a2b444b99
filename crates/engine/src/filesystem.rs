use crate::error::Result;
use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use std::path::{Path, PathBuf};

/// Recursive, sequential directory walk collecting files whose name ends in
/// `.<ext>` for any of `extensions`.
///
/// No ignore files are honoured and hidden entries are included. Symlinked
/// directories are not followed. Entries are visited in file-name order, so
/// the result is deterministic for an unchanged tree.
///
/// Entries that cannot be read during the walk are logged and skipped.
pub fn collect_files(
    dir: &Path,
    extensions: &[String],
    overrides: Option<&Override>,
) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    if let Some(ov) = overrides {
        builder.overrides(ov.clone());
    }

    let suffixes: Vec<String> = extensions.iter().map(|e| format!(".{e}")).collect();

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "walk error: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "collected files");
    files
}

/// Builds exclusion overrides rooted at `root`. Every pattern is treated as
/// an ignore glob, so files matching none of them are kept.
///
/// # Errors
/// Returns an error if a pattern is not a valid glob.
pub fn exclusion_overrides(root: &Path, patterns: &[String]) -> Result<Option<Override>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = OverrideBuilder::new(root);
    for pattern in patterns {
        builder.add(&format!("!{pattern}"))?;
    }
    Ok(Some(builder.build()?))
}
