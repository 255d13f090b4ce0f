use std::fmt;
use std::path::PathBuf;

/// Feature page driving one kind of external video job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    FrameInterpolation,
    VideoMatting,
}

impl Feature {
    pub fn label(self) -> &'static str {
        match self {
            Feature::FrameInterpolation => "Frame interpolation",
            Feature::VideoMatting => "Video matting",
        }
    }

    /// Algorithm variants offered by this feature.
    pub fn mode_choices(self) -> &'static [Mode] {
        match self {
            Feature::FrameInterpolation => &[Mode::Standard],
            Feature::VideoMatting => &[Mode::General, Mode::Portrait],
        }
    }

    /// Output scale factors offered by this feature.
    pub fn scale_choices(self) -> &'static [Scale] {
        match self {
            Feature::FrameInterpolation => &[Scale::X2, Scale::X4, Scale::X8],
            Feature::VideoMatting => &[Scale::X1],
        }
    }
}

/// Compute backend selector for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Cpu,
    Gpu,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Cpu, Provider::Gpu];

    pub fn label(self) -> &'static str {
        match self {
            Provider::Cpu => "CPU",
            Provider::Gpu => "GPU",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Standard,
    General,
    Portrait,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::General => "General",
            Mode::Portrait => "Portrait",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    X1,
    X2,
    X4,
    X8,
}

impl Scale {
    pub fn label(self) -> &'static str {
        match self {
            Scale::X1 => "X1",
            Scale::X2 => "X2",
            Scale::X4 => "X4",
            Scale::X8 => "X8",
        }
    }

    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
            Scale::X4 => 4,
            Scale::X8 => 8,
        }
    }
}

/// Everything the external job service needs for one batch run.
///
/// The directory and file-list invariants are checked by the engine validator
/// before the service is invoked, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParams {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub input_files: Vec<PathBuf>,
    pub provider: Provider,
    pub mode: Mode,
    pub scale: Scale,
}

/// The precondition that stopped a start request before the job service ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    InputDirMissing,
    NoInputFiles,
    OutputDirMissing,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::InputDirMissing => write!(f, "the input directory does not exist"),
            Precondition::NoInputFiles => write!(f, "no input files were found"),
            Precondition::OutputDirMissing => write!(f, "the output directory does not exist"),
        }
    }
}

/// Terminal failure of a start request, as seen by the panel.
///
/// `Activation` is recognized by kind and routed to the license prompt; every
/// other failure lands in the generic error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFailure {
    Precondition(Precondition),
    Activation(String),
    Job(String),
}

impl fmt::Display for JobFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobFailure::Precondition(kind) => write!(f, "{kind}"),
            JobFailure::Activation(message) => write!(f, "activation required: {message}"),
            JobFailure::Job(message) => write!(f, "{message}"),
        }
    }
}
