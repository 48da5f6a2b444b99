use crate::error::EngineError;
use crate::options::BlockOutcome;
use std::path::PathBuf;

/// Outcome of one directory-scan run.
#[derive(Debug)]
pub struct ScanReport {
    pub output: PathBuf,
    /// Labels (paths relative to the root) of the blocks written, in order.
    pub written: Vec<PathBuf>,
    /// Configured subdirectories that did not exist under the root.
    pub missing_dirs: Vec<String>,
    /// Files that were discovered but could not be read.
    pub errors: Vec<(PathBuf, EngineError)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Path as discovered, before resolution.
    pub candidate: String,
    pub outcome: BlockOutcome,
}

/// Outcome of one build-config run. `entries` follow output order.
#[derive(Debug)]
pub struct ProjectReport {
    pub output: PathBuf,
    pub entries: Vec<ProjectEntry>,
}

impl ProjectReport {
    #[must_use]
    pub fn included(&self) -> usize {
        self.count(|o| matches!(o, BlockOutcome::Included(_)))
    }

    #[must_use]
    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, BlockOutcome::NotFound))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, BlockOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&BlockOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
