//! Fixtures for CLI tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn write_wav(path: &Path, sample_rate: u32, channels: u16, frames: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..frames * u32::from(channels) {
        writer.write_sample(((i % 64) as i16 - 32) * 256).unwrap();
    }
    writer.finalize().unwrap();
}

/// Marker plus a lone STREAMINFO block.
pub fn write_flac_header(path: &Path, sample_rate: u32, channels: u8, bits: u8, total_samples: u32) {
    let mut bytes = b"fLaC".to_vec();
    bytes.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    bytes.extend_from_slice(&[0x10, 0x00, 0x10, 0x00, 0, 0, 0, 0, 0, 0]);
    let packed = (sample_rate << 12) | (u32::from(channels - 1) << 9) | (u32::from(bits - 1) << 4);
    bytes.extend_from_slice(&packed.to_be_bytes());
    bytes.extend_from_slice(&total_samples.to_be_bytes());
    bytes.extend_from_slice(&[0u8; 16]);
    fs::write(path, bytes).unwrap();
}

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo frames of 417 bytes.
pub fn write_mp3(path: &Path, frames: usize) {
    let mut frame = vec![0u8; 417];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
    fs::write(path, frame.repeat(frames)).unwrap();
}

/// Stand-in for ffmpeg that logs its arguments and touches the output file.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("fake-ffmpeg");
    let log = dir.join("fake-ffmpeg.log");
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"-version\" ]; then\n  echo \"ffmpeg version fake\"\n  exit 0\nfi\n\
         echo \"$*\" >> '{}'\n\
         for last; do :; done\n\
         : > \"$last\"\n",
        log.display()
    );
    fs::write(&program, script).unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

    // Another test's child may still hold the write handle; exec fails with ETXTBSY until it goes.
    const ETXTBSY: i32 = 26;
    for _ in 0..100 {
        match std::process::Command::new(&program).arg("-version").output() {
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
            _ => return (program, log),
        }
    }
    panic!("{} stayed busy", program.display());
}
