use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::types::{JobError, JobEvent, JobRequest, JobSummary};

/// Receives progress callbacks from a running job.
pub trait ProgressSink: Send + Sync {
    fn report(&self, value: u32);
}

/// Progress sink that forwards onto the engine event channel.
pub struct ChannelProgressSink {
    tx: mpsc::Sender<JobEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<JobEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn report(&self, value: u32) {
        let _ = self.tx.send(JobEvent::Progress { value });
    }
}

/// Polled by a running job between units of work to decide whether to
/// cooperatively abort. There is no hard-cancel path: a job that never polls
/// runs to its own completion.
pub trait StopQuery: Send + Sync {
    fn should_stop(&self) -> bool;
}

/// Shared stop flag. Written from the UI side, read from the worker; an
/// atomic read is all the synchronization this needs.
#[derive(Debug, Clone, Default)]
pub struct AbortToken {
    flag: Arc<AtomicBool>,
}

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

impl StopQuery for AbortToken {
    fn should_stop(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The external long-running operation behind the panel. Implementations run
/// on the engine worker thread and must only talk back through the sink.
pub trait JobRunner: Send + Sync {
    fn run(
        &self,
        request: &JobRequest,
        progress: &dyn ProgressSink,
        stop: &dyn StopQuery,
    ) -> Result<JobSummary, JobError>;
}
