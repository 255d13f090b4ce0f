use std::path::PathBuf;

use crate::job::{Feature, Mode, Provider, Scale};
use crate::state::{JobPhase, StatusMessage};

/// Plain snapshot of everything the renderer needs for one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViewModel {
    pub feature: Feature,
    pub provider: Provider,
    pub mode: Mode,
    pub scale: Scale,
    pub input_dir: String,
    pub output_dir: String,
    pub input_files: Vec<PathBuf>,
    pub live_preview: bool,
    pub selected_file: Option<PathBuf>,
    pub phase: JobPhase,
    pub progress: u32,
    pub progress_max: u32,
    pub can_start: bool,
    pub can_stop: bool,
    pub can_open_output: bool,
    pub status: StatusMessage,
}
