use std::path::PathBuf;

use thiserror::Error;

/// One batch invocation of the external video tool.
///
/// Provider, mode and scale arrive as the selector values the panel exposes;
/// the engine does not interpret them beyond building the tool command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub input_files: Vec<PathBuf>,
    pub provider: String,
    pub mode: String,
    pub scale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    /// Input files actually processed; fewer than requested after a
    /// cooperative stop.
    pub outputs: usize,
}

/// Events relayed from the worker back to the UI thread.
#[derive(Debug)]
pub enum JobEvent {
    Progress { value: u32 },
    Finished { result: Result<JobSummary, JobError> },
}

/// The precondition that failed before the runner was invoked.
/// Checked in this order; the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("the input directory does not exist")]
    InputDirMissing,
    #[error("no input files were found")]
    NoInputFiles,
    #[error("the output directory does not exist")]
    OutputDirMissing,
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Precondition(#[from] Precondition),
    /// Licensing failure; routed to the license prompt, never the error banner.
    #[error("activation required: {0}")]
    Activation(String),
    /// The external tool could not be launched or exited abnormally.
    #[error("{0}")]
    Tool(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
