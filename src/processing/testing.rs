//! Fixtures shared by unit tests

use std::fs;
use std::path::{Path, PathBuf};

/// Write a short sine tone as a PCM WAV file.
pub fn write_wav(path: &Path, sample_rate: u32, channels: u16, bits: u16, frames: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: bits,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    let amplitude = ((1i64 << (bits - 1)) - 1) as f32 * 0.5;

    for i in 0..frames {
        let value = (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / sample_rate as f32).sin() * amplitude;
        for _ in 0..channels {
            match bits {
                8 => writer.write_sample(value as i8).unwrap(),
                16 => writer.write_sample(value as i16).unwrap(),
                _ => writer.write_sample(value as i32).unwrap(),
            }
        }
    }
    writer.finalize().unwrap();
}

/// Write a FLAC stream holding only the marker and a STREAMINFO block, which is
/// all a property reader needs.
pub fn write_flac_header(path: &Path, sample_rate: u32, channels: u8, bits: u8, total_samples: u32) {
    let mut bytes = Vec::with_capacity(42);
    bytes.extend_from_slice(b"fLaC");
    // last-block flag | STREAMINFO, 34 byte body
    bytes.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    bytes.extend_from_slice(&4096u16.to_be_bytes());
    bytes.extend_from_slice(&4096u16.to_be_bytes());
    bytes.extend_from_slice(&[0u8; 6]);

    let packed = (sample_rate << 12) | (u32::from(channels - 1) << 9) | (u32::from(bits - 1) << 4);
    bytes.extend_from_slice(&packed.to_be_bytes());
    bytes.extend_from_slice(&total_samples.to_be_bytes());
    bytes.extend_from_slice(&[0u8; 16]);

    fs::write(path, bytes).unwrap();
}

/// Write a constant bit rate MP3: MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo,
/// 417-byte frames with silent payloads.
pub fn write_mp3(path: &Path, frames: usize) {
    let mut frame = vec![0u8; 417];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
    fs::write(path, frame.repeat(frames)).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBehavior {
    Succeed,
    Fail,
}

pub struct FakeFfmpeg {
    pub program: PathBuf,
    pub log: PathBuf,
}

impl FakeFfmpeg {
    /// Argument lines of every transcode call, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Shell script standing in for ffmpeg: records its arguments and creates the
/// output file (its last argument), or fails the way ffmpeg does on bad input.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path, behavior: FakeBehavior) -> FakeFfmpeg {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("fake-ffmpeg");
    let log = dir.join("fake-ffmpeg.log");
    let action = match behavior {
        FakeBehavior::Succeed => ": > \"$last\"\nexit 0",
        FakeBehavior::Fail => "echo \"$last: Invalid data found when processing input\" >&2\nexit 1",
    };
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"-version\" ]; then\n  echo \"ffmpeg version fake\"\n  exit 0\nfi\n\
         echo \"$*\" >> '{}'\n\
         for last; do :; done\n\
         {}\n",
        log.display(),
        action
    );

    fs::write(&program, script).unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
    wait_until_executable(&program);
    FakeFfmpeg { program, log }
}

/// A child forked by another test while the script was open for writing keeps
/// the write handle until it execs, and running the script fails with ETXTBSY
/// meanwhile.
#[cfg(unix)]
pub fn wait_until_executable(program: &Path) {
    const ETXTBSY: i32 = 26;

    for _ in 0..100 {
        match std::process::Command::new(program).arg("-version").output() {
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
            _ => return,
        }
    }
    panic!("{} stayed busy", program.display());
}
