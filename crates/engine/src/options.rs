/// Which directories the project aggregator scans for headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderSource {
    /// Only the `include` directory next to the build configuration file.
    #[default]
    Fixed,
    /// Only the directories named by `include_directories(...)`.
    Declared,
    /// The fixed directory first, then every declared one.
    Both,
}

impl HeaderSource {
    #[must_use]
    pub const fn uses_fixed(self) -> bool {
        matches!(self, Self::Fixed | Self::Both)
    }

    #[must_use]
    pub const fn uses_declared(self) -> bool {
        matches!(self, Self::Declared | Self::Both)
    }
}

/// Result of turning one candidate path into an output block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// Content was written; holds the path the file was read from.
    Included(std::path::PathBuf),
    /// Neither the path as given nor the config-relative fallback exists.
    NotFound,
    /// The file existed but reading it failed.
    Failed(String),
}
