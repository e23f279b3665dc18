//! Audio Metadata Probe
//!
//! Prints the stream properties tempobatch reads before building ffmpeg arguments.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tempobatch::audio::{format_kbps, AudioInfo, AudioKind};
use tempobatch::{init_logging, Result};

#[derive(Parser, Debug)]
#[command(name = "tempobatch-probe")]
#[command(about = "Print sample rate, channels, bit depth and bit rate of audio files")]
struct Args {
    /// Audio files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    for path in &args.files {
        let info = AudioInfo::from_file(path)?;
        let kind = AudioKind::from_path(path);

        // FLAC reports the uncompressed PCM rate, everything else the stream's own rate.
        let bitrate = match kind {
            Some(AudioKind::Flac) => info.pcm_bitrate_kbps(),
            _ => info.audio_bitrate_kbps,
        };

        println!("=== {} ===", path.display());
        println!("Kind: {}", kind.map(|k| k.name()).unwrap_or("unsupported"));
        println!("Container: {:?}", info.file_type);
        println!("Sample rate: {}", info.sample_rate.map(|r| format!("{} Hz", r)).unwrap_or_else(|| "unknown".to_string()));
        println!("Channels: {}", info.channels.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()));
        println!("Bit depth: {}", info.bit_depth.map(|b| b.to_string()).unwrap_or_else(|| "unknown".to_string()));
        println!("Bit rate: {}", bitrate.map(format_kbps).unwrap_or_else(|| "unknown".to_string()));
        if args.verbose {
            println!("Duration: {:.2}s", info.duration.as_secs_f64());
        }
    }
    Ok(())
}
