use std::path::PathBuf;
use std::sync::Once;

use clipworks_core::{
    update, Effect, Feature, JobPhase, Msg, PanelState, Provider, Scale, StatusLevel, PROGRESS_MAX,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn activated(auto_open_output: bool) -> PanelState {
    let state = PanelState::new(Feature::FrameInterpolation);
    let (state, _) = update(state, Msg::Activated { auto_open_output });
    state
}

/// Activated panel with directories set and a resolved file list.
fn ready(auto_open_output: bool) -> PanelState {
    let (state, _) = update(
        activated(auto_open_output),
        Msg::InputDirChanged("/videos/in".to_owned()),
    );
    let (state, _) = update(state, Msg::OutputDirChanged("/videos/out".to_owned()));
    let (state, _) = update(
        state,
        Msg::FilesResolved(vec![
            PathBuf::from("/videos/in/a.mp4"),
            PathBuf::from("/videos/in/b.mp4"),
        ]),
    );
    state
}

fn started(auto_open_output: bool) -> PanelState {
    let (state, _) = update(ready(auto_open_output), Msg::StartClicked);
    state
}

#[test]
fn start_snapshots_params_and_flips_enablement() {
    init_logging();
    let (state, _) = update(ready(false), Msg::ProviderSelected(Provider::Gpu));
    let (state, _) = update(state, Msg::ScaleSelected(Scale::X4));
    let (mut state, effects) = update(state, Msg::StartClicked);

    let params = match effects.as_slice() {
        [Effect::StartJob { params }] => params.clone(),
        other => panic!("expected a single StartJob effect, got {other:?}"),
    };
    assert_eq!(params.input_dir, PathBuf::from("/videos/in"));
    assert_eq!(params.output_dir, PathBuf::from("/videos/out"));
    assert_eq!(params.input_files.len(), 2);
    assert_eq!(params.provider, Provider::Gpu);
    assert_eq!(params.scale, Scale::X4);

    let view = state.view();
    assert_eq!(view.phase, JobPhase::Validating);
    assert!(!view.can_start);
    assert!(view.can_stop);
    assert!(view.can_open_output);
    assert!(!view.live_preview);
    assert!(state.consume_dirty());
}

#[test]
fn start_is_ignored_while_a_job_is_in_flight() {
    init_logging();
    let busy = started(false);
    let (next, effects) = update(busy.clone(), Msg::StartClicked);

    assert_eq!(busy, next);
    assert!(effects.is_empty());
}

#[test]
fn first_progress_moves_validating_into_running() {
    init_logging();
    let (state, _) = update(started(false), Msg::JobProgress { value: 10 });
    let view = state.view();

    assert_eq!(view.phase, JobPhase::Running);
    assert_eq!(view.progress, 10);
}

#[test]
fn progress_is_clamped_to_the_configured_maximum() {
    init_logging();
    let (state, _) = update(started(false), Msg::JobProgress { value: 2_500 });

    assert_eq!(state.view().progress, PROGRESS_MAX);
}

#[test]
fn progress_is_ignored_when_no_job_is_in_flight() {
    init_logging();
    let idle = ready(false);
    let (state, effects) = update(idle, Msg::JobProgress { value: 40 });

    assert!(effects.is_empty());
    assert_eq!(state.view().progress, 0);
    assert_eq!(state.view().phase, JobPhase::Idle);
}

#[test]
fn success_resets_progress_and_restores_the_panel() {
    init_logging();
    let (state, _) = update(started(false), Msg::JobProgress { value: 80 });
    let (state, effects) = update(state, Msg::JobFinished { result: Ok(()) });

    let view = state.view();
    assert_eq!(view.phase, JobPhase::Idle);
    assert_eq!(view.progress, 0);
    assert!(view.can_start);
    assert!(!view.can_stop);
    assert!(view.live_preview);
    assert_eq!(view.status.level, StatusLevel::Info);
    assert!(view.status.text.contains("completed"));

    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::Notify { level: StatusLevel::Info, .. })));
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::RescanFiles { .. })));
    // Preference unset: the output directory must not be opened.
    assert!(!effects.iter().any(|e| matches!(e, Effect::OpenOutput { .. })));
}

#[test]
fn auto_open_preference_opens_the_output_exactly_once() {
    init_logging();
    let (_, effects) = update(started(true), Msg::JobFinished { result: Ok(()) });

    let opens: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::OpenOutput { dir } => Some(dir.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(opens, vec!["/videos/out".to_owned()]);
}

#[test]
fn stop_disables_the_stop_action_and_emits_one_request() {
    init_logging();
    let (state, effects) = update(started(false), Msg::StopClicked);

    assert_eq!(effects, vec![Effect::RequestStop]);
    assert!(!state.view().can_stop);

    // The action is gone; a second click does nothing.
    let (_, effects) = update(state, Msg::StopClicked);
    assert!(effects.is_empty());
}

#[test]
fn stop_is_a_noop_when_idle() {
    init_logging();
    let (_, effects) = update(ready(false), Msg::StopClicked);
    assert!(effects.is_empty());
}

#[test]
fn open_output_is_gated_until_a_job_has_started() {
    init_logging();
    let (_, effects) = update(ready(false), Msg::OpenOutputClicked);
    assert!(effects.is_empty());

    let (_, effects) = update(started(false), Msg::OpenOutputClicked);
    assert_eq!(
        effects,
        vec![Effect::OpenOutput {
            dir: "/videos/out".to_owned()
        }]
    );
}

#[test]
fn editing_the_input_dir_clears_stale_files_and_rescans() {
    init_logging();
    let (state, effects) = update(ready(false), Msg::InputDirChanged("/videos/other".to_owned()));

    assert_eq!(
        effects,
        vec![Effect::RescanFiles {
            input_dir: "/videos/other".to_owned()
        }]
    );
    assert!(state.view().input_files.is_empty());
    assert!(state.view().selected_file.is_none());
}

#[test]
fn selecting_a_missing_file_is_cleared_on_rescan() {
    init_logging();
    let picked = PathBuf::from("/videos/in/a.mp4");
    let (state, _) = update(ready(false), Msg::FileSelected(Some(picked.clone())));
    assert_eq!(state.view().selected_file, Some(picked));

    let (state, _) = update(
        state,
        Msg::FilesResolved(vec![PathBuf::from("/videos/in/c.mp4")]),
    );
    assert!(state.view().selected_file.is_none());
}

#[test]
fn toggling_live_view_on_requests_a_rescan() {
    init_logging();
    let (state, effects) = update(ready(false), Msg::LivePreviewToggled(false));
    assert!(effects.is_empty());

    let (_, effects) = update(state, Msg::LivePreviewToggled(true));
    assert_eq!(
        effects,
        vec![Effect::RescanFiles {
            input_dir: "/videos/in".to_owned()
        }]
    );
}
