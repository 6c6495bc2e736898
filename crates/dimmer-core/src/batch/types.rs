use std::path::PathBuf;

/// Batch stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchStage {
    Locating,
    Reading,
    Planning,
    Writing,
}

impl std::fmt::Display for BatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locating => write!(f, "Locating base profile"),
            Self::Reading => write!(f, "Reading base profile"),
            Self::Planning => write!(f, "Planning outputs"),
            Self::Writing => write!(f, "Writing profiles"),
        }
    }
}

/// One derived profile that made it to disk.
#[derive(Clone, Debug, PartialEq)]
pub struct WrittenProfile {
    pub brightness: f64,
    pub name: String,
    pub path: PathBuf,
    pub len: usize,
}

/// Result of a completed batch.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    pub base_profile: PathBuf,
    pub output_dir: PathBuf,
    pub written: Vec<WrittenProfile>,
}

/// Progress reporting for the batch driver.
///
/// All methods have default no-op implementations.
pub trait BatchReporter {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage, if known.
    fn begin_stage(&self, _stage: BatchStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op reporter, used when `run_batch` delegates.
pub(super) struct NoOpReporter;
impl BatchReporter for NoOpReporter {}
