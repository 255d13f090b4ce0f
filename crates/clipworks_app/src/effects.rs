//! Executes the effects requested by the core update function and relays
//! engine events back into core messages.

use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use app_logging::{app_info, app_warn};
use clipworks_core::{Effect, JobFailure, JobParams, Msg, Precondition};
use clipworks_engine::{self as engine, JobEvent, JobHandle, JobRequest};

use crate::app::Notice;

/// Runs one batch of effects. Follow-up messages (resolved file lists) go
/// onto the dispatch queue; toasts and the license prompt are surfaced
/// through the app-level collections.
pub fn run(
    handle: &JobHandle,
    effects: Vec<Effect>,
    queue: &mut VecDeque<Msg>,
    notices: &mut Vec<Notice>,
    license_prompt: &mut Option<String>,
) {
    for effect in effects {
        match effect {
            Effect::RescanFiles { input_dir } => {
                queue.push_back(Msg::FilesResolved(scan_files(&input_dir)));
            }
            Effect::StartJob { params } => {
                app_info!(
                    "start requested: {} files, provider {}",
                    params.input_files.len(),
                    params.provider.label()
                );
                handle.start(to_request(params));
            }
            Effect::RequestStop => {
                app_info!("stop requested");
                handle.request_stop();
            }
            Effect::OpenOutput { dir } => open_directory(&dir),
            Effect::Notify { level, text } => notices.push(Notice {
                level,
                text,
                created: Instant::now(),
            }),
            Effect::PromptLicense { message } => {
                *license_prompt = Some(message);
            }
        }
    }
}

fn scan_files(input_dir: &str) -> Vec<std::path::PathBuf> {
    if input_dir.is_empty() {
        return Vec::new();
    }
    match engine::list_video_files(Path::new(input_dir)) {
        Ok(files) => files,
        Err(err) => {
            app_warn!("failed to scan {}: {}", input_dir, err);
            Vec::new()
        }
    }
}

fn to_request(params: JobParams) -> JobRequest {
    JobRequest {
        input_dir: params.input_dir,
        output_dir: params.output_dir,
        input_files: params.input_files,
        provider: params.provider.label().to_owned(),
        mode: params.mode.label().to_owned(),
        scale: params.scale.label().to_owned(),
    }
}

/// Maps an engine event onto the core message vocabulary.
pub fn msg_from_event(event: JobEvent) -> Msg {
    match event {
        JobEvent::Progress { value } => Msg::JobProgress { value },
        JobEvent::Finished { result } => Msg::JobFinished {
            result: result.map(|_| ()).map_err(failure_from_error),
        },
    }
}

fn failure_from_error(err: engine::JobError) -> JobFailure {
    match err {
        engine::JobError::Precondition(kind) => JobFailure::Precondition(match kind {
            engine::Precondition::InputDirMissing => Precondition::InputDirMissing,
            engine::Precondition::NoInputFiles => Precondition::NoInputFiles,
            engine::Precondition::OutputDirMissing => Precondition::OutputDirMissing,
        }),
        engine::JobError::Activation(message) => JobFailure::Activation(message),
        other => JobFailure::Job(other.to_string()),
    }
}

fn open_directory(dir: &str) {
    if dir.is_empty() {
        return;
    }
    let opener = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    if let Err(err) = Command::new(opener).arg(dir).spawn() {
        app_warn!("failed to open {} with {}: {}", dir, opener, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipworks_engine::{JobError, JobSummary};

    #[test]
    fn engine_preconditions_map_onto_core_kinds() {
        let failure = failure_from_error(JobError::Precondition(
            engine::Precondition::NoInputFiles,
        ));
        assert_eq!(failure, JobFailure::Precondition(Precondition::NoInputFiles));
    }

    #[test]
    fn activation_errors_keep_their_kind() {
        let failure = failure_from_error(JobError::Activation("key expired".into()));
        assert_eq!(failure, JobFailure::Activation("key expired".into()));
    }

    #[test]
    fn other_errors_become_generic_failures() {
        let failure = failure_from_error(JobError::Tool("tool exited with 1".into()));
        assert_eq!(failure, JobFailure::Job("tool exited with 1".into()));
    }

    #[test]
    fn finished_event_drops_the_summary() {
        let msg = msg_from_event(JobEvent::Finished {
            result: Ok(JobSummary { outputs: 3 }),
        });
        assert_eq!(msg, Msg::JobFinished { result: Ok(()) });
    }
}
