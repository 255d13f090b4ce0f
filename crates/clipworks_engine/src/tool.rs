use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use app_logging::{app_debug, app_info, app_warn};

use crate::runner::{JobRunner, ProgressSink, StopQuery};
use crate::types::{JobError, JobRequest, JobSummary};

/// Stderr lines starting with this prefix mark a licensing failure of the
/// external tool; they are surfaced as `JobError::Activation`.
const ACTIVATION_PREFIX: &str = "activation required";

/// Runs the configured external binary once per input file.
///
/// Progress is reported at batch granularity after each file, and the stop
/// query is polled between files. A stopped batch is still a normal
/// completion; the summary just reports fewer outputs.
pub struct ToolRunner {
    binary: PathBuf,
    output_suffix: String,
}

impl ToolRunner {
    pub fn new(binary: PathBuf, output_suffix: impl Into<String>) -> Self {
        Self {
            binary,
            output_suffix: output_suffix.into(),
        }
    }

    fn output_path(&self, request: &JobRequest, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_owned());
        let ext = input
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mp4".to_owned());
        request
            .output_dir
            .join(format!("{stem}_{}.{ext}", self.output_suffix))
    }

    fn tool_args(request: &JobRequest, input: &Path, output: &Path) -> Vec<OsString> {
        let gpu_id = if request.provider.eq_ignore_ascii_case("gpu") {
            "0"
        } else {
            "-1"
        };
        let factor = request
            .scale
            .trim_start_matches(['x', 'X'])
            .parse::<u32>()
            .unwrap_or(1);
        vec![
            OsString::from("-i"),
            input.into(),
            OsString::from("-o"),
            output.into(),
            OsString::from("-m"),
            request.mode.to_ascii_lowercase().into(),
            OsString::from("-s"),
            factor.to_string().into(),
            OsString::from("-g"),
            gpu_id.into(),
        ]
    }

    fn run_one(&self, request: &JobRequest, input: &Path) -> Result<(), JobError> {
        let output = self.output_path(request, input);
        let args = Self::tool_args(request, input, &output);
        app_info!(
            "spawning {} for {}",
            self.binary.display(),
            input.display()
        );

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                JobError::Tool(format!("failed to start {}: {err}", self.binary.display()))
            })?;

        let stdout_thread = child.stdout.take().map(|out| {
            std::thread::spawn(move || {
                for line in BufReader::new(out).lines().map_while(Result::ok) {
                    if !line.trim().is_empty() {
                        app_debug!("tool: {line}");
                    }
                }
            })
        });

        // Stderr is both logged and scanned for the activation marker.
        let stderr_thread = child.stderr.take().map(|err| {
            std::thread::spawn(move || {
                let mut activation: Option<String> = None;
                for line in BufReader::new(err).lines().map_while(Result::ok) {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    app_warn!("tool: {trimmed}");
                    if activation.is_none()
                        && trimmed.to_ascii_lowercase().starts_with(ACTIVATION_PREFIX)
                    {
                        activation = Some(trimmed.to_owned());
                    }
                }
                activation
            })
        });

        let status = child.wait()?;
        if let Some(handle) = stdout_thread {
            let _ = handle.join();
        }
        let activation = stderr_thread.and_then(|handle| handle.join().ok()).flatten();

        if status.success() {
            return Ok(());
        }
        if let Some(message) = activation {
            return Err(JobError::Activation(message));
        }
        Err(JobError::Tool(format!(
            "{} exited with {status}",
            self.binary.display()
        )))
    }
}

impl JobRunner for ToolRunner {
    fn run(
        &self,
        request: &JobRequest,
        progress: &dyn ProgressSink,
        stop: &dyn StopQuery,
    ) -> Result<JobSummary, JobError> {
        progress.report(0);

        let total = request.input_files.len().max(1);
        let mut outputs = 0;
        for (index, input) in request.input_files.iter().enumerate() {
            if stop.should_stop() {
                app_info!("stop requested; finishing after {outputs} of {total} files");
                break;
            }
            self.run_one(request, input)?;
            outputs += 1;
            progress.report((((index + 1) * 100) / total) as u32);
        }

        Ok(JobSummary { outputs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> JobRequest {
        JobRequest {
            input_dir: PathBuf::from("/in"),
            output_dir: PathBuf::from("/out"),
            input_files: vec![PathBuf::from("/in/clip.mp4")],
            provider: "GPU".to_owned(),
            mode: "Standard".to_owned(),
            scale: "X4".to_owned(),
        }
    }

    #[test]
    fn output_path_keeps_stem_and_extension() {
        let runner = ToolRunner::new(PathBuf::from("tool"), "x4");
        let out = runner.output_path(&request(), Path::new("/in/clip.mp4"));
        assert_eq!(out, PathBuf::from("/out/clip_x4.mp4"));
    }

    #[test]
    fn args_encode_provider_mode_and_scale() {
        let args = ToolRunner::tool_args(
            &request(),
            Path::new("/in/clip.mp4"),
            Path::new("/out/clip_x4.mp4"),
        );
        let text: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            text,
            vec![
                "-i",
                "/in/clip.mp4",
                "-o",
                "/out/clip_x4.mp4",
                "-m",
                "standard",
                "-s",
                "4",
                "-g",
                "0",
            ]
        );
    }

    #[test]
    fn cpu_provider_disables_gpu_and_bad_scale_falls_back() {
        let mut req = request();
        req.provider = "CPU".to_owned();
        req.scale = "weird".to_owned();
        let args = ToolRunner::tool_args(&req, Path::new("/in/clip.mp4"), Path::new("/out/c.mp4"));
        let text: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(text[7], "1");
        assert_eq!(text[9], "-1");
    }
}
