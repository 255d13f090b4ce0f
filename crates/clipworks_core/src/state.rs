use std::path::PathBuf;

use crate::job::{Feature, JobParams, Mode, Provider, Scale};
use crate::strings;
use crate::view_model::PanelViewModel;

/// Upper bound for the relayed progress value; reported values are clamped
/// into `[0, PROGRESS_MAX]` before they reach the view model.
pub const PROGRESS_MAX: u32 = 100;

/// Lifecycle phase of the one job a panel may have in flight.
///
/// `Completing` is transited within a single update call; observers only ever
/// see `Idle` afterwards. It exists so the mandatory cleanup contract has a
/// name in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobPhase {
    #[default]
    Idle,
    Validating,
    Running,
    Completing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Severity and text surfaced in the status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Mutable state of one feature panel.
///
/// Owned exclusively by the page that created it; mutated only through
/// [`crate::update`] on the UI thread. Concurrency with the job worker is
/// serialized by the enablement gating, not by locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    feature: Feature,
    activated: bool,
    auto_open_output: bool,

    provider: Provider,
    mode: Mode,
    scale: Scale,

    input_dir: String,
    output_dir: String,
    input_files: Vec<PathBuf>,
    live_preview: bool,
    selected_file: Option<PathBuf>,

    phase: JobPhase,
    progress: u32,
    can_start: bool,
    can_stop: bool,
    can_open_output: bool,
    stop_requested: bool,

    status: StatusMessage,
    dirty: bool,
}

impl PanelState {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            activated: false,
            auto_open_output: false,
            provider: Provider::Cpu,
            mode: feature.mode_choices()[0],
            scale: feature.scale_choices()[0],
            input_dir: String::new(),
            output_dir: String::new(),
            input_files: Vec::new(),
            live_preview: true,
            selected_file: None,
            phase: JobPhase::Idle,
            progress: 0,
            can_start: true,
            can_stop: false,
            can_open_output: false,
            stop_requested: false,
            status: StatusMessage::new(StatusLevel::Info, ""),
            dirty: true,
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            feature: self.feature,
            provider: self.provider,
            mode: self.mode,
            scale: self.scale,
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            input_files: self.input_files.clone(),
            live_preview: self.live_preview,
            selected_file: self.selected_file.clone(),
            phase: self.phase,
            progress: self.progress,
            progress_max: PROGRESS_MAX,
            can_start: self.can_start,
            can_stop: self.can_stop,
            can_open_output: self.can_open_output,
            status: self.status.clone(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Second half of the two-phase lifecycle: populates the help message and
    /// the read-only preference. Guarded by the activation flag; callers make
    /// re-activation a no-op.
    pub(crate) fn activate(&mut self, auto_open_output: bool) {
        self.auto_open_output = auto_open_output;
        self.status = StatusMessage::new(StatusLevel::Info, strings::help(self.feature));
        self.activated = true;
        self.mark_dirty();
    }

    pub(crate) fn auto_open_output(&self) -> bool {
        self.auto_open_output
    }

    pub(crate) fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
        self.mark_dirty();
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.feature.mode_choices().contains(&mode) {
            self.mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_scale(&mut self, scale: Scale) {
        if self.feature.scale_choices().contains(&scale) {
            self.scale = scale;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_input_dir(&mut self, dir: String) {
        self.input_dir = dir;
        // The stale list would otherwise satisfy the non-empty check.
        self.input_files.clear();
        self.selected_file = None;
        self.mark_dirty();
    }

    pub(crate) fn set_output_dir(&mut self, dir: String) {
        self.output_dir = dir;
        self.mark_dirty();
    }

    pub(crate) fn input_dir(&self) -> &str {
        &self.input_dir
    }

    pub(crate) fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub(crate) fn set_input_files(&mut self, files: Vec<PathBuf>) {
        if self
            .selected_file
            .as_ref()
            .is_some_and(|sel| !files.contains(sel))
        {
            self.selected_file = None;
        }
        self.input_files = files;
        self.mark_dirty();
    }

    pub(crate) fn select_file(&mut self, file: Option<PathBuf>) {
        self.selected_file = file;
        self.mark_dirty();
    }

    pub(crate) fn set_live_preview(&mut self, on: bool) {
        self.live_preview = on;
        self.mark_dirty();
    }

    pub(crate) fn can_open_output(&self) -> bool {
        self.can_open_output
    }

    /// Flips the enablement gate for a start request and snapshots the job
    /// parameters. The live file view is suspended until the job ends well.
    pub(crate) fn begin_start(&mut self) -> JobParams {
        self.phase = JobPhase::Validating;
        self.can_start = false;
        self.can_stop = true;
        self.can_open_output = true;
        self.stop_requested = false;
        self.live_preview = false;
        self.mark_dirty();
        JobParams {
            input_dir: PathBuf::from(&self.input_dir),
            output_dir: PathBuf::from(&self.output_dir),
            input_files: self.input_files.clone(),
            provider: self.provider,
            mode: self.mode,
            scale: self.scale,
        }
    }

    /// Cooperative stop: disables the stop action and remembers the request.
    /// Returns false when no job is in flight.
    pub(crate) fn request_stop(&mut self) -> bool {
        if !matches!(self.phase, JobPhase::Validating | JobPhase::Running) || !self.can_stop {
            return false;
        }
        self.can_stop = false;
        self.stop_requested = true;
        self.mark_dirty();
        true
    }

    /// Applies a progress callback, clamped into `[0, PROGRESS_MAX]`.
    /// The first callback is what moves `Validating` into `Running`.
    pub(crate) fn apply_progress(&mut self, value: u32) {
        match self.phase {
            JobPhase::Validating => self.phase = JobPhase::Running,
            JobPhase::Running => {}
            JobPhase::Idle | JobPhase::Completing => return,
        }
        self.progress = value.min(PROGRESS_MAX);
        self.mark_dirty();
    }

    pub(crate) fn enter_completing(&mut self) {
        self.phase = JobPhase::Completing;
    }

    pub(crate) fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = StatusMessage::new(level, text);
        self.mark_dirty();
    }

    /// The unconditional cleanup every terminal path converges on: progress
    /// back to zero, start re-enabled, stop disabled, phase back to idle.
    pub(crate) fn complete(&mut self) {
        debug_assert_eq!(self.phase, JobPhase::Completing);
        self.progress = 0;
        self.can_start = true;
        self.can_stop = false;
        self.stop_requested = false;
        self.phase = JobPhase::Idle;
        self.mark_dirty();
    }
}
