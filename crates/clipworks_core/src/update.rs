use crate::{Effect, JobFailure, JobPhase, Msg, PanelState, StatusLevel};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated { auto_open_output } => {
            if state.is_activated() {
                return (state, Vec::new());
            }
            state.activate(auto_open_output);
            Vec::new()
        }
        Msg::InputDirChanged(dir) => {
            state.set_input_dir(dir);
            vec![Effect::RescanFiles {
                input_dir: state.input_dir().to_owned(),
            }]
        }
        Msg::OutputDirChanged(dir) => {
            state.set_output_dir(dir);
            Vec::new()
        }
        Msg::FilesResolved(files) => {
            state.set_input_files(files);
            Vec::new()
        }
        Msg::FileSelected(file) => {
            state.select_file(file);
            Vec::new()
        }
        Msg::LivePreviewToggled(on) => {
            state.set_live_preview(on);
            if on {
                vec![Effect::RescanFiles {
                    input_dir: state.input_dir().to_owned(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ProviderSelected(provider) => {
            state.set_provider(provider);
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::ScaleSelected(scale) => {
            state.set_scale(scale);
            Vec::new()
        }
        Msg::StartClicked => {
            // Re-entrant starts are gated out; the button is also disabled.
            if state.phase() != JobPhase::Idle {
                return (state, Vec::new());
            }
            let params = state.begin_start();
            vec![Effect::StartJob { params }]
        }
        Msg::StopClicked => {
            if state.request_stop() {
                vec![Effect::RequestStop]
            } else {
                Vec::new()
            }
        }
        Msg::OpenOutputClicked => {
            if state.can_open_output() {
                vec![Effect::OpenOutput {
                    dir: state.output_dir().to_owned(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::JobProgress { value } => {
            state.apply_progress(value);
            Vec::new()
        }
        Msg::JobFinished { result } => {
            // A stale terminal event with no job in flight is dropped.
            if state.phase() == JobPhase::Idle {
                Vec::new()
            } else {
                finish_job(&mut state, result)
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Terminal handling for a start request. Success, precondition failure,
/// activation failure, and generic failure all converge here, and
/// [`PanelState::complete`] runs on every branch before control returns.
fn finish_job(state: &mut PanelState, result: Result<(), JobFailure>) -> Vec<Effect> {
    state.enter_completing();

    let effects = match result {
        Ok(()) => {
            let text = crate::strings::completed(state.feature());
            state.set_status(StatusLevel::Info, text);
            state.set_live_preview(true);
            let mut effects = vec![
                Effect::Notify {
                    level: StatusLevel::Info,
                    text: text.to_owned(),
                },
                Effect::RescanFiles {
                    input_dir: state.input_dir().to_owned(),
                },
            ];
            if state.auto_open_output() {
                effects.push(Effect::OpenOutput {
                    dir: state.output_dir().to_owned(),
                });
            }
            effects
        }
        Err(JobFailure::Activation(message)) => {
            // Recognized by kind; never the generic error banner.
            vec![Effect::PromptLicense { message }]
        }
        Err(failure) => {
            let text = failure.to_string();
            state.set_status(StatusLevel::Error, text.clone());
            vec![Effect::Notify {
                level: StatusLevel::Error,
                text,
            }]
        }
    };

    state.complete();
    effects
}
