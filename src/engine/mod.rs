//! Segment extraction and reassembly engine

pub mod manifest;
pub mod splicer;

pub use manifest::ConcatManifest;
pub use splicer::{SegmentSplicer, SpliceSummary};
