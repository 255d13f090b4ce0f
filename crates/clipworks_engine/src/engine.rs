use std::sync::{mpsc, Arc};
use std::thread;

use app_logging::app_warn;

use crate::runner::{AbortToken, ChannelProgressSink, JobRunner, StopQuery};
use crate::types::{JobError, JobEvent, JobRequest};
use crate::validate;

enum JobCommand {
    Start { request: JobRequest },
}

/// Handle to the engine worker owning one job at a time.
///
/// Commands go in over a channel, events come back over another; the caller
/// drains events on its own thread so all UI state stays single-writer. The
/// panel's enablement gating guarantees at most one job in flight, so the
/// worker simply processes commands serially.
pub struct JobHandle {
    cmd_tx: mpsc::Sender<JobCommand>,
    event_rx: mpsc::Receiver<JobEvent>,
    stop: AbortToken,
}

impl JobHandle {
    pub fn new(runner: Arc<dyn JobRunner>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let stop = AbortToken::new();
        let worker_stop = stop.clone();

        thread::spawn(move || {
            while let Ok(JobCommand::Start { request }) = cmd_rx.recv() {
                let sink = ChannelProgressSink::new(event_tx.clone());
                let result = validate::check_request(&request)
                    .map_err(JobError::from)
                    .and_then(|()| runner.run(&request, &sink, &worker_stop));
                if event_tx.send(JobEvent::Finished { result }).is_err() {
                    // Receiver dropped; the page was torn down.
                    return;
                }
            }
        });

        Self {
            cmd_tx,
            event_rx,
            stop,
        }
    }

    pub fn start(&self, request: JobRequest) {
        // A stop left over from the previous job must not leak into this one.
        self.stop.reset();
        if self.cmd_tx.send(JobCommand::Start { request }).is_err() {
            app_warn!("job worker is gone; start request dropped");
        }
    }

    /// Cooperative stop: flips the shared flag the runner polls between units
    /// of work. Nothing is forcibly terminated.
    pub fn request_stop(&self) {
        self.stop.request();
    }

    /// True while the stop flag is raised; mirrors what the runner observes.
    pub fn stop_requested(&self) -> bool {
        self.stop.should_stop()
    }

    /// Non-blocking drain of the next pending event, if any.
    pub fn try_recv(&self) -> Option<JobEvent> {
        self.event_rx.try_recv().ok()
    }
}
