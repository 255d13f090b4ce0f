use crate::types::{JobRequest, Precondition};

/// Checks the start preconditions in order: input directory exists, resolved
/// file list is non-empty, output directory exists. The first failing check
/// aborts the request; the runner is never invoked on failure.
pub fn check_request(request: &JobRequest) -> Result<(), Precondition> {
    if !request.input_dir.is_dir() {
        return Err(Precondition::InputDirMissing);
    }
    if request.input_files.is_empty() {
        return Err(Precondition::NoInputFiles);
    }
    if !request.output_dir.is_dir() {
        return Err(Precondition::OutputDirMissing);
    }
    Ok(())
}
