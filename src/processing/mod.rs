//! Tempo Conversion Pipeline

pub mod tempo;
pub mod command;
pub mod transcoder;
pub mod processor;
pub mod batch;

#[cfg(test)]
pub(crate) mod testing;

pub use tempo::TempoFactor;
pub use command::{CodecPlan, FfmpegCommand};
pub use transcoder::Transcoder;
pub use processor::{TempoProcessor, ProcessingResult};
pub use batch::{BatchProcessor, BatchReport, ScanResult};
