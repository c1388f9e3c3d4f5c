//! Splicer Library
//!
//! Cuts time ranges out of a video and rejoins the remainder without
//! re-encoding. The pure planning logic lives in [`domain`]; ffmpeg, ffprobe
//! and HTTP access sit behind the traits in [`ports`].

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use adapters::SplicerConfig;
pub use app::CutInteractor;
pub use domain::errors::{DomainError, ErrorKind};
pub use domain::model::{
    CutInstruction, CutRange, CutReport, CutRequest, JobId, KeepRange, MediaDuration, TimeSpec,
};
pub use domain::rules::SegmentCalculator;
