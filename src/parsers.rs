// src/parsers.rs

/// Accepts `cpp`, `.cpp` or `*.cpp` and returns the bare extension.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    let ext = trimmed
        .strip_prefix("*.")
        .or_else(|| trimmed.strip_prefix('.'))
        .unwrap_or(trimmed);
    if ext.is_empty() {
        return Err(format!("Invalid extension: '{s}'"));
    }
    if ext.contains(['/', '\\']) {
        return Err(format!("Extension must not contain a path separator: '{s}'"));
    }
    Ok(ext.to_string())
}

/// Rejects values that would leave nothing to scan, such as `""` or `"/"`.
pub fn parse_subdir(s: &str) -> Result<String, String> {
    let trimmed = s.trim().trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return Err(format!("Invalid directory name: '{s}'"));
    }
    Ok(trimmed.to_string())
}
