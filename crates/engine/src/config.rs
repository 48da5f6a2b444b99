use crate::options::HeaderSource;
use derive_builder::Builder;
use std::path::PathBuf;

/// Output file of the directory-scan aggregator.
pub const DEFAULT_SCAN_OUTPUT: &str = "cpp_contents.txt";
/// Output file of the build-config aggregator.
pub const DEFAULT_PROJECT_OUTPUT: &str = "project_code.txt";
/// Build configuration read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "CMakeLists.txt";
/// Placeholder replaced by the configuration file's directory.
pub const DEFAULT_ROOT_TOKEN: &str = "${CMAKE_SOURCE_DIR}";

pub const DEFAULT_SCAN_DIRS: [&str; 2] = ["src", "include"];
pub const DEFAULT_SCAN_EXTENSIONS: [&str; 2] = ["cpp", "h"];
pub const DEFAULT_HEADER_EXTENSIONS: [&str; 2] = ["h", "hpp"];
pub const DEFAULT_INCLUDE_DIR: &str = "include";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_SCAN_OUTPUT)")]
    pub output: PathBuf,
    /// Subdirectories of `root` to search, in order.
    #[builder(default = "strings(&DEFAULT_SCAN_DIRS)")]
    pub dirs: Vec<String>,
    /// Extensions without the leading dot.
    #[builder(default = "strings(&DEFAULT_SCAN_EXTENSIONS)")]
    pub extensions: Vec<String>,
    /// Gitignore-style globs, relative to `root`, removed from discovery.
    #[builder(default)]
    pub exclude: Vec<String>,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.dirs.as_ref().is_some_and(Vec::is_empty) {
            return Err("at least one directory must be scanned".into());
        }
        if self.extensions.as_ref().is_some_and(Vec::is_empty) {
            return Err("at least one extension is required".into());
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_SCAN_OUTPUT),
            dirs: strings(&DEFAULT_SCAN_DIRS),
            extensions: strings(&DEFAULT_SCAN_EXTENSIONS),
            exclude: vec![],
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ProjectConfig {
    #[builder(default = "PathBuf::from(DEFAULT_CONFIG_FILE)")]
    pub config_file: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_PROJECT_OUTPUT)")]
    pub output: PathBuf,
    #[builder(default)]
    pub header_source: HeaderSource,
    #[builder(default = "DEFAULT_ROOT_TOKEN.to_string()")]
    pub root_token: String,
    /// Directory next to the configuration file scanned by [`HeaderSource::Fixed`].
    #[builder(default = "DEFAULT_INCLUDE_DIR.to_string()")]
    pub include_dir: String,
    #[builder(default = "strings(&DEFAULT_HEADER_EXTENSIONS)")]
    pub header_extensions: Vec<String>,
}

impl ProjectConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.root_token.as_ref().is_some_and(String::is_empty) {
            return Err("root token must not be empty".into());
        }
        if self.header_extensions.as_ref().is_some_and(Vec::is_empty) {
            return Err("at least one header extension is required".into());
        }
        Ok(())
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            output: PathBuf::from(DEFAULT_PROJECT_OUTPUT),
            header_source: HeaderSource::default(),
            root_token: DEFAULT_ROOT_TOKEN.to_string(),
            include_dir: DEFAULT_INCLUDE_DIR.to_string(),
            header_extensions: strings(&DEFAULT_HEADER_EXTENSIONS),
        }
    }
}
