//! Clipworks engine: the boundary to the external video-processing jobs.
mod engine;
mod files;
mod runner;
mod tool;
mod types;
mod validate;

pub use engine::JobHandle;
pub use files::{file_uri, list_video_files, VIDEO_EXTS};
pub use runner::{AbortToken, ChannelProgressSink, JobRunner, ProgressSink, StopQuery};
pub use tool::ToolRunner;
pub use types::{JobError, JobEvent, JobRequest, JobSummary, Precondition};
pub use validate::check_request;
