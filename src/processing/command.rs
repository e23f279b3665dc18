//! ffmpeg argument construction

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use crate::audio::{AudioInfo, AudioKind, format_kbps};
use crate::error::{TempoError, Result};
use super::tempo::TempoFactor;

/// How the output stream is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecPlan {
    /// `-c:a <codec>`
    Codec(String),
    /// `-b:a <kbps>k`
    Bitrate(u32),
}

impl CodecPlan {
    /// WAV keeps its PCM bit depth, FLAC stays FLAC, MP3 keeps its source bit rate.
    pub fn for_source(kind: AudioKind, info: &AudioInfo) -> Result<Self> {
        match kind {
            AudioKind::Wav => Ok(CodecPlan::Codec(pcm_codec(info.bit_depth).to_string())),
            AudioKind::Flac => Ok(CodecPlan::Codec("flac".to_string())),
            AudioKind::Mp3 => info
                .audio_bitrate_kbps
                .map(CodecPlan::Bitrate)
                .ok_or_else(|| TempoError::audio("MP3 bit rate could not be determined")),
        }
    }

    fn args(&self) -> [OsString; 2] {
        match self {
            CodecPlan::Codec(codec) => ["-c:a".into(), codec.into()],
            CodecPlan::Bitrate(kbps) => ["-b:a".into(), format_kbps(*kbps).into()],
        }
    }
}

pub fn pcm_codec(bit_depth: Option<u8>) -> &'static str {
    match bit_depth {
        Some(8) => "pcm_u8",
        Some(24) => "pcm_s24le",
        Some(32) => "pcm_s32le",
        _ => "pcm_s16le",
    }
}

#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    program: PathBuf,
    input: PathBuf,
    output: PathBuf,
    filter: Option<String>,
    codec: Option<CodecPlan>,
    loglevel: String,
    overwrite: bool,
}

impl FfmpegCommand {
    pub fn new<P: Into<PathBuf>>(program: P, input: &Path, output: &Path) -> Self {
        Self {
            program: program.into(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            filter: None,
            codec: None,
            loglevel: "error".to_string(),
            overwrite: true,
        }
    }

    pub fn tempo(mut self, tempo: TempoFactor) -> Self {
        self.filter = Some(tempo.filter());
        self
    }

    pub fn codec(mut self, codec: CodecPlan) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn loglevel<S: Into<String>>(mut self, level: S) -> Self {
        self.loglevel = level.into();
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-hide_banner".into(),
            "-nostdin".into(),
            "-loglevel".into(),
            self.loglevel.clone().into(),
            if self.overwrite { "-y" } else { "-n" }.into(),
            "-i".into(),
            self.input.clone().into(),
        ];

        if let Some(filter) = &self.filter {
            args.push("-filter:a".into());
            args.push(filter.into());
        }
        if let Some(codec) = &self.codec {
            args.extend(codec.args());
        }

        args.push(self.output.clone().into());
        args
    }

    pub fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(self.args());
        command
    }

    /// Shell-like rendering for logs and dry runs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_os_str().to_os_string())
            .chain(self.args())
            .map(|arg| quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(arg: &OsStr) -> String {
    let text = arg.to_string_lossy();
    if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", text.replace('\'', r"'\''"))
    } else {
        text.into_owned()
    }
}
