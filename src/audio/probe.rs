//! Audio metadata probing

use std::path::Path;
use std::time::Duration;
use lofty::config::ParseOptions;
use lofty::file::{AudioFile, FileType, TaggedFileExt};
use lofty::probe::Probe;
use crate::error::{TempoError, Result};

/// Stream properties reported by the tag reader. Fields are optional because
/// not every container records every value.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioInfo {
    pub file_type: FileType,
    pub sample_rate: Option<u32>,
    pub channels: Option<u8>,
    pub bit_depth: Option<u8>,
    pub audio_bitrate_kbps: Option<u32>,
    pub duration: Duration,
}

impl AudioInfo {
    /// Read properties only; tags and pictures are skipped. The container is
    /// detected from content, so a mislabelled extension still probes correctly.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let options = ParseOptions::new().read_tags(false).read_cover_art(false);

        let tagged = Probe::open(path)
            .map_err(|e| TempoError::audio(format!("Cannot open audio file {}: {}", path.display(), e)))?
            .options(options)
            .guess_file_type()
            .map_err(|e| TempoError::audio(format!("Cannot detect format of {}: {}", path.display(), e)))?
            .read()
            .map_err(|e| TempoError::audio(format!("Cannot read properties of {}: {}", path.display(), e)))?;

        let properties = tagged.properties();
        let info = Self {
            file_type: tagged.file_type(),
            sample_rate: properties.sample_rate().filter(|&r| r > 0),
            channels: properties.channels().filter(|&c| c > 0),
            bit_depth: properties.bit_depth().filter(|&b| b > 0),
            audio_bitrate_kbps: properties.audio_bitrate().filter(|&b| b > 0),
            duration: properties.duration(),
        };

        log::debug!("Probed {}: {}", path.display(), info);
        Ok(info)
    }

    /// Uncompressed PCM bit rate: `sample_rate * bits * channels / 1000`, truncated.
    pub fn pcm_bitrate_kbps(&self) -> Option<u32> {
        let sample_rate = u64::from(self.sample_rate?);
        let bits = u64::from(self.bit_depth?);
        let channels = u64::from(self.channels?);
        u32::try_from(sample_rate * bits * channels / 1000).ok()
    }
}

impl std::fmt::Display for AudioInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}, {:.2}s, {}Hz, {}ch, {}-bit, {}",
            self.file_type,
            self.duration.as_secs_f64(),
            display_or_unknown(self.sample_rate),
            display_or_unknown(self.channels),
            display_or_unknown(self.bit_depth),
            self.audio_bitrate_kbps.map(format_kbps).unwrap_or_else(|| "unknown bit rate".to_string()),
        )
    }
}

/// Render a kbps value the way ffmpeg's `-b:a` expects it.
pub fn format_kbps(kbps: u32) -> String {
    format!("{}k", kbps)
}

fn display_or_unknown<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}
