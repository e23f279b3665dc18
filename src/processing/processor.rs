//! Single-file tempo conversion

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use crate::audio::{AudioInfo, AudioKind, format_kbps};
use crate::config::Config;
use crate::error::{TempoError, Result};
use super::command::{CodecPlan, FfmpegCommand};
use super::tempo::TempoFactor;
use super::transcoder::Transcoder;

#[derive(Debug)]
pub struct TempoProcessor {
    config: Config,
    tempo: TempoFactor,
    transcoder: Transcoder,
}

impl TempoProcessor {
    pub fn new(config: Config) -> Result<Self> {
        let tempo = config.tempo_factor()?;
        let transcoder = Transcoder::new(config.ffmpeg_program(), config.ffmpeg_loglevel());

        log::debug!(
            "Tempo {}% (factor {}, filter {}), ffmpeg: {}",
            config.tempo_percent(), tempo, tempo.filter(), transcoder.program().display()
        );

        Ok(Self { config, tempo, transcoder })
    }

    pub fn tempo(&self) -> TempoFactor {
        self.tempo
    }

    pub fn transcoder(&self) -> &Transcoder {
        &self.transcoder
    }

    pub fn build_command(&self, kind: AudioKind, info: &AudioInfo, input: &Path, output: &Path) -> Result<FfmpegCommand> {
        let codec = CodecPlan::for_source(kind, info)
            .map_err(|e| TempoError::audio(format!("{}: {}", input.display(), e)))?;

        Ok(self.transcoder
            .command(input, output)
            .overwrite(self.config.overwrite())
            .tempo(self.tempo)
            .codec(codec))
    }

    pub fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<ProcessingResult> {
        let start_time = Instant::now();

        let kind = AudioKind::from_path(input_path).ok_or_else(|| TempoError::processing(format!(
            "Not a WAV, FLAC or MP3 file: {}", input_path.display()
        )))?;

        let info = AudioInfo::from_file(input_path)?;
        log::debug!("{} {}: {}", kind, input_path.display(), info);

        if kind == AudioKind::Flac {
            let bitrate = info.pcm_bitrate_kbps()
                .map(format_kbps)
                .unwrap_or_else(|| "unknown".to_string());
            println!("Bit rate for {}: {}", display_name(input_path), bitrate);
        }

        let command = self.build_command(kind, &info, input_path, output_path)?;

        if self.config.dry_run() {
            println!("{}", command.display());
        } else {
            self.transcoder.run(&command)?;
            println!(
                "Processed {} with {}% tempo increase and saved to {}",
                input_path.display(), self.config.tempo_percent(), output_path.display()
            );
        }

        Ok(ProcessingResult {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            kind,
            info,
            processing_time: start_time.elapsed(),
            dry_run: self.config.dry_run(),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub kind: AudioKind,
    pub info: AudioInfo,
    pub processing_time: Duration,
    pub dry_run: bool,
}
