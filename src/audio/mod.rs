//! Audio Inspection Module
//!
//! Decides which files are audio by extension and reads their stream properties.
//! Decoding and encoding are left to ffmpeg.

pub mod format;
pub mod probe;

pub use format::{AudioKind, SUPPORTED_EXTENSIONS};
pub use probe::{AudioInfo, format_kbps};
