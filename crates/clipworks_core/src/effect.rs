use crate::job::JobParams;
use crate::state::StatusLevel;

/// Side effects requested by the update function; executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-enumerate video files under the given input directory.
    RescanFiles { input_dir: String },
    /// Validate and hand the batch to the external job service.
    StartJob { params: JobParams },
    /// Flip the shared stop flag the running job polls. No hard-kill path.
    RequestStop,
    /// Open the output directory in the platform file browser.
    OpenOutput { dir: String },
    /// Transient toast.
    Notify { level: StatusLevel, text: String },
    /// Activation failed; route to the license-acquisition flow.
    PromptLicense { message: String },
}
