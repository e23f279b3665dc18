//! External transcoder invocation

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use crate::error::{TempoError, Result};
use super::command::FfmpegCommand;

#[derive(Debug, Clone)]
pub struct Transcoder {
    program: PathBuf,
    loglevel: String,
}

impl Transcoder {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(program: P, loglevel: S) -> Self {
        Self {
            program: program.into(),
            loglevel: loglevel.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Start a command for `input -> output` carrying this transcoder's program and log level.
    pub fn command(&self, input: &Path, output: &Path) -> FfmpegCommand {
        FfmpegCommand::new(self.program.clone(), input, output).loglevel(self.loglevel.clone())
    }

    /// Run `<program> -version` and return the first line it prints.
    pub fn check_available(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| TempoError::transcode(format!(
                "Cannot run {}: {}", self.program.display(), e
            )))?;

        if !output.status.success() {
            return Err(TempoError::transcode(format!(
                "{} -version exited with {}", self.program.display(), output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
    }

    /// Run the command to completion. A non-zero exit status is an error.
    pub fn run(&self, command: &FfmpegCommand) -> Result<()> {
        log::debug!("Running: {}", command.display());
        let start = Instant::now();

        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| TempoError::transcode(format!(
                "Cannot run {}: {}", command.program().display(), e
            )))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            log::debug!("ffmpeg: {}", line);
        }

        if !output.status.success() {
            let detail = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .map(|l| format!(": {}", l.trim()))
                .unwrap_or_default();
            return Err(TempoError::transcode(format!(
                "{} exited with {} while processing {}{}",
                command.program().display(), output.status, command.input().display(), detail
            )));
        }

        log::debug!("Transcoded {} in {:.2}s", command.input().display(), start.elapsed().as_secs_f64());
        Ok(())
    }
}
