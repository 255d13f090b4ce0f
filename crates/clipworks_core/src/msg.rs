use std::path::PathBuf;

use crate::job::{JobFailure, Mode, Provider, Scale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page became active; idempotent after the first delivery.
    Activated { auto_open_output: bool },
    /// User edited the input directory box.
    InputDirChanged(String),
    /// User edited the output directory box.
    OutputDirChanged(String),
    /// Directory scan finished for the current input directory.
    FilesResolved(Vec<PathBuf>),
    /// User picked a file in the grid (or cleared the pick).
    FileSelected(Option<PathBuf>),
    /// User toggled the live file view.
    LivePreviewToggled(bool),
    ProviderSelected(Provider),
    ModeSelected(Mode),
    ScaleSelected(Scale),
    /// User pressed Start.
    StartClicked,
    /// User pressed Stop; cancellation is cooperative only.
    StopClicked,
    /// User asked for the output directory to be opened.
    OpenOutputClicked,
    /// Progress callback from the job service.
    JobProgress { value: u32 },
    /// Terminal callback from the job service; all exit paths arrive here.
    JobFinished { result: Result<(), JobFailure> },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
