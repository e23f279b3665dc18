//! TempoBatch - Batch Audio Tempo Changer

use clap::Parser;
use std::process;
use tempobatch::processing::{BatchProcessor, Transcoder};
use tempobatch::{init_logging, Args, Config, Result};

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.verbose {
        println!("{}", tempobatch::get_library_info());
        println!();
    }

    if let Some(path) = &args.write_config {
        Config::create_default_config(path)?;
        println!("Default config written to {}", path.display());
        return Ok(());
    }

    let check_only = args.check;
    let config = Config::from_args_and_config(args)?;

    if check_only {
        return run_check_mode(&config);
    }

    println!("=== TempoBatch ===");
    println!("Input: {}", config.input_dir.display());
    println!("Output: {}", config.output_dir.display());
    println!("Tempo: {}% (x{})", config.tempo_percent(), config.tempo_factor()?);
    if config.dry_run() {
        println!("Mode: Dry run");
    }
    println!("==================\n");

    let batch = BatchProcessor::new(config.clone())?;
    let report = batch.run()?;

    println!("\n=== Processing Complete ===");
    println!("Processed: {}", report.processed());
    if report.skipped > 0 {
        println!("Skipped (output exists): {}", report.skipped);
    }
    if config.verbose() {
        println!("Ignored entries: {}", report.ignored);
    }
    println!("Time: {:.2}s", report.elapsed.as_secs_f64());

    Ok(())
}

fn run_check_mode(config: &Config) -> Result<()> {
    println!("=== Check Mode ===");
    println!("✅ Config OK");
    println!("✅ Tempo filter: {}", config.tempo_factor()?.filter());

    let transcoder = Transcoder::new(config.ffmpeg_program(), config.ffmpeg_loglevel());
    let version = transcoder.check_available()?;
    println!("✅ {}", version);

    if config.input_dir.is_dir() {
        println!("✅ Input directory: {}", config.input_dir.display());
    } else {
        println!("⚠️  Input directory not found: {}", config.input_dir.display());
    }
    println!("✅ Ready for processing");
    Ok(())
}
