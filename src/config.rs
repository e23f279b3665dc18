//! Configuration management for batch tempo conversion

use crate::error::{TempoError, Result};
use crate::processing::TempoFactor;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels ffmpeg accepts for `-loglevel`.
pub const FFMPEG_LOG_LEVELS: &[&str] = &[
    "quiet", "panic", "fatal", "error", "warning", "info", "verbose", "debug", "trace",
];

/// Upper bound on the tempo increase, in percent.
pub const MAX_TEMPO_PERCENT: f64 = 1000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tempo: TempoConfig,
    pub ffmpeg: FfmpegConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TempoConfig {
    pub increase_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FfmpegConfig {
    pub program: PathBuf,
    pub loglevel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub overwrite: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            tempo: TempoConfig::default(),
            ffmpeg: FfmpegConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self { increase_percent: 12.0 }
    }
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
            loglevel: "error".to_string(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            dry_run: false,
            verbose: false,
        }
    }
}

impl Config {
    pub fn tempo_percent(&self) -> f64 {
        self.tempo.increase_percent
    }

    pub fn tempo_factor(&self) -> Result<TempoFactor> {
        TempoFactor::from_percent(self.tempo.increase_percent)
    }

    pub fn ffmpeg_program(&self) -> &Path {
        &self.ffmpeg.program
    }

    pub fn ffmpeg_loglevel(&self) -> &str {
        &self.ffmpeg.loglevel
    }

    pub fn overwrite(&self) -> bool {
        self.batch.overwrite
    }

    pub fn dry_run(&self) -> bool {
        self.batch.dry_run
    }

    pub fn verbose(&self) -> bool {
        self.batch.verbose
    }

    /// Where a converted copy of `file_name` is written.
    pub fn output_path_for(&self, file_name: &std::ffi::OsStr) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "tempobatch", about = "Batch tempo changer for WAV, FLAC and MP3 files", version, author)]
pub struct Args {
    #[arg(short = 'i', long = "input", help = "Directory to scan for audio files")]
    pub input: Option<PathBuf>,

    #[arg(short = 'o', long = "output", help = "Directory to write converted files to")]
    pub output: Option<PathBuf>,

    #[arg(short = 't', long = "tempo", allow_hyphen_values = true, help = "Tempo change in percent (negative slows down) [default: 12]")]
    pub tempo: Option<f64>,

    #[arg(long = "ffmpeg", help = "ffmpeg executable name or path [default: ffmpeg]")]
    pub ffmpeg: Option<PathBuf>,

    #[arg(long = "loglevel", help = "ffmpeg -loglevel value [default: error]")]
    pub loglevel: Option<String>,

    #[arg(long = "no-overwrite", help = "Skip files whose output already exists")]
    pub no_overwrite: bool,

    #[arg(short = 'n', long = "dry-run", help = "Print ffmpeg commands without running them")]
    pub dry_run: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(long = "check", help = "Validate the configuration and ffmpeg, do not process files")]
    pub check: bool,

    #[arg(long = "write-config", value_name = "PATH", help = "Write a default config file and exit")]
    pub write_config: Option<PathBuf>,
}

impl Config {
    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        if let Some(input) = args.input {
            config.input_dir = input;
        }
        if let Some(output) = args.output {
            config.output_dir = output;
        }
        if let Some(tempo) = args.tempo {
            config.tempo.increase_percent = tempo;
        }
        if let Some(ffmpeg) = args.ffmpeg {
            config.ffmpeg.program = ffmpeg;
        }
        if let Some(loglevel) = args.loglevel {
            config.ffmpeg.loglevel = loglevel;
        }
        if args.no_overwrite {
            config.batch.overwrite = false;
        }
        if args.dry_run {
            config.batch.dry_run = true;
        }
        if args.verbose {
            config.batch.verbose = true;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TempoError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| TempoError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        let percent = self.tempo.increase_percent;
        if !percent.is_finite() {
            return Err(TempoError::config("Tempo percentage must be a finite number"));
        }
        if percent <= -100.0 {
            return Err(TempoError::config("Tempo percentage must be greater than -100"));
        }
        if percent > MAX_TEMPO_PERCENT {
            return Err(TempoError::config(format!(
                "Tempo percentage cannot exceed {}", MAX_TEMPO_PERCENT
            )));
        }

        if self.ffmpeg.program.as_os_str().is_empty() {
            return Err(TempoError::config("ffmpeg program cannot be empty"));
        }
        if !FFMPEG_LOG_LEVELS.contains(&self.ffmpeg.loglevel.as_str()) {
            return Err(TempoError::config(format!(
                "Unknown ffmpeg log level '{}', expected one of: {}",
                self.ffmpeg.loglevel, FFMPEG_LOG_LEVELS.join(", ")
            )));
        }

        if self.same_directories() {
            return Err(TempoError::config(format!(
                "Input and output directory must differ: {}", self.input_dir.display()
            )));
        }

        Ok(())
    }

    fn same_directories(&self) -> bool {
        if self.input_dir == self.output_dir {
            return true;
        }
        match (self.input_dir.canonicalize(), self.output_dir.canonicalize()) {
            (Ok(input), Ok(output)) => input == output,
            _ => false,
        }
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TempoError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TempoError::config(format!("Failed to write config file: {}", e)))
    }

    /// Create default config file
    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}
