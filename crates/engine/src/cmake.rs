//! Superficial extraction of paths from a `CMakeLists.txt`.
//!
//! This is plain pattern matching over the file text, not a CMake parser.
//! Comments are not stripped, variables other than the root token are left
//! as-is, and quoting is not interpreted.

use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Paths pulled out of a build configuration, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub sources: Vec<String>,
    pub include_dirs: Vec<String>,
}

#[derive(Debug)]
pub struct Extractor {
    source_list: Regex,
    executable: Regex,
    include_dirs: Regex,
    source_path: Regex,
}

impl Extractor {
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            source_list: Regex::new(r"(?s)\bset\s*\(\s*\w+_SOURCES\b(.*?)\)")?,
            executable: Regex::new(r"(?s)\badd_executable\s*\(\s*[^\s()]+(.*?)\)")?,
            include_dirs: Regex::new(r"(?s)\binclude_directories\s*\((.*?)\)")?,
            source_path: Regex::new(r#"src/[^\s"()]*\.cpp"#)?,
        })
    }

    /// Runs every pattern over `text`. `root` replaces `root_token` inside
    /// `include_directories(...)` bodies.
    #[must_use]
    pub fn extract(&self, text: &str, root: &Path, root_token: &str) -> Declarations {
        Declarations {
            sources: self.sources(text),
            include_dirs: self.include_dirs(text, root, root_token),
        }
    }

    /// `set(<name>_SOURCES ...)` matches first, then `add_executable(...)`,
    /// each in file order. Duplicates are kept.
    #[must_use]
    pub fn sources(&self, text: &str) -> Vec<String> {
        let bodies = self
            .source_list
            .captures_iter(text)
            .chain(self.executable.captures_iter(text))
            .filter_map(|c| c.get(1));

        let mut sources = Vec::new();
        for body in bodies {
            sources.extend(
                self.source_path
                    .find_iter(body.as_str())
                    .map(|m| m.as_str().to_string()),
            );
        }
        sources
    }

    #[must_use]
    pub fn include_dirs(&self, text: &str, root: &Path, root_token: &str) -> Vec<String> {
        let root = root.to_string_lossy();
        let mut dirs = Vec::new();
        for cap in self.include_dirs.captures_iter(text) {
            let Some(body) = cap.get(1) else { continue };
            let body = body.as_str().replace(root_token, &root);
            dirs.extend(body.split_whitespace().map(str::to_string));
        }
        dirs
    }
}

/// True when `dir` still carries a `${...}` reference after substitution.
#[must_use]
pub fn is_unresolved(dir: &str) -> bool {
    dir.contains("${")
}
