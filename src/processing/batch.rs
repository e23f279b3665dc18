//! Directory batch conversion

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use crate::audio::AudioKind;
use crate::config::Config;
use crate::error::{TempoError, Result};
use super::processor::{ProcessingResult, TempoProcessor};

/// Audio files found in the input directory, sorted by file name.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub ignored: usize,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ProcessingResult>,
    pub skipped: usize,
    pub ignored: usize,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.results.len()
    }
}

pub struct BatchProcessor {
    config: Config,
    processor: TempoProcessor,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Result<Self> {
        let processor = TempoProcessor::new(config.clone())?;
        Ok(Self { config, processor })
    }

    /// List the input directory without descending into subdirectories.
    pub fn scan(&self) -> Result<ScanResult> {
        let input_dir = &self.config.input_dir;
        if !input_dir.is_dir() {
            return Err(TempoError::config(format!(
                "Input directory does not exist: {}", input_dir.display()
            )));
        }

        let entries = fs::read_dir(input_dir).map_err(|e| TempoError::io(format!(
            "Cannot read input directory {}: {}", input_dir.display(), e
        )))?;

        let mut scan = ScanResult::default();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                log::debug!("Ignoring non-file entry {}", path.display());
                scan.ignored += 1;
                continue;
            }
            match AudioKind::from_path(&path) {
                Some(_) => scan.files.push(path),
                None => {
                    log::debug!("Ignoring {}: not a WAV, FLAC or MP3 file", path.display());
                    scan.ignored += 1;
                }
            }
        }

        scan.files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(scan)
    }

    /// Convert every audio file in order. The first failure stops the batch.
    pub fn run(&self) -> Result<BatchReport> {
        let start = Instant::now();
        let scan = self.scan()?;
        let total = scan.files.len();

        let mut report = BatchReport {
            ignored: scan.ignored,
            ..Default::default()
        };

        if total == 0 {
            log::warn!("No WAV, FLAC or MP3 files found in {}", self.config.input_dir.display());
            report.elapsed = start.elapsed();
            return Ok(report);
        }

        if !self.config.dry_run() {
            fs::create_dir_all(&self.config.output_dir).map_err(|e| TempoError::io(format!(
                "Cannot create output directory {}: {}", self.config.output_dir.display(), e
            )))?;
        }

        for (i, input) in scan.files.iter().enumerate() {
            let file_name = input.file_name().ok_or_else(|| TempoError::processing(format!(
                "Path has no file name: {}", input.display()
            )))?;
            let output = self.config.output_path_for(file_name);

            if !self.config.overwrite() && output.exists() {
                log::warn!("Skipping {}: {} already exists", input.display(), output.display());
                report.skipped += 1;
                continue;
            }

            log::info!("[{}/{}] {}", i + 1, total, input.display());
            let result = self.processor.process_file(input, &output)?;
            log::debug!("Finished {} in {:.2}s", input.display(), result.processing_time.as_secs_f64());
            report.results.push(result);
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}
