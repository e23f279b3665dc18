//! Extension-based audio kind dispatch

use std::path::Path;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["wav", "flac", "mp3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioKind {
    Wav,
    Flac,
    Mp3,
}

impl AudioKind {
    /// Match a path's extension, ignoring ASCII case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_extension(ext)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("wav") {
            Some(AudioKind::Wav)
        } else if ext.eq_ignore_ascii_case("flac") {
            Some(AudioKind::Flac)
        } else if ext.eq_ignore_ascii_case("mp3") {
            Some(AudioKind::Mp3)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AudioKind::Wav => "WAV",
            AudioKind::Flac => "FLAC",
            AudioKind::Mp3 => "MP3",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioKind::Wav => "wav",
            AudioKind::Flac => "flac",
            AudioKind::Mp3 => "mp3",
        }
    }

    /// WAV and FLAC are re-encoded losslessly; MP3 is re-encoded at its source bit rate.
    pub fn is_lossless(&self) -> bool {
        matches!(self, AudioKind::Wav | AudioKind::Flac)
    }
}

impl std::fmt::Display for AudioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_extension() {
        assert_eq!(AudioKind::from_path("song.wav"), Some(AudioKind::Wav));
        assert_eq!(AudioKind::from_path("dir/song.flac"), Some(AudioKind::Flac));
        assert_eq!(AudioKind::from_path("/abs/path/song.mp3"), Some(AudioKind::Mp3));
    }

    #[test]
    fn test_extension_case_is_ignored() {
        assert_eq!(AudioKind::from_path("LOUD.WAV"), Some(AudioKind::Wav));
        assert_eq!(AudioKind::from_path("Mixed.Flac"), Some(AudioKind::Flac));
        assert_eq!(AudioKind::from_path("track.mP3"), Some(AudioKind::Mp3));
    }

    #[test]
    fn test_unsupported_paths() {
        assert_eq!(AudioKind::from_path("notes.txt"), None);
        assert_eq!(AudioKind::from_path("song.ogg"), None);
        assert_eq!(AudioKind::from_path("Out"), None);
        assert_eq!(AudioKind::from_path(".wav"), None);
        assert_eq!(AudioKind::from_path("song.wav.bak"), None);
    }

    #[test]
    fn test_kind_properties() {
        assert!(AudioKind::Wav.is_lossless());
        assert!(AudioKind::Flac.is_lossless());
        assert!(!AudioKind::Mp3.is_lossless());

        for ext in SUPPORTED_EXTENSIONS {
            let kind = AudioKind::from_extension(ext).unwrap();
            assert_eq!(kind.extension(), *ext);
        }
        assert_eq!(AudioKind::Flac.to_string(), "FLAC");
    }
}
