//! Serializable run reports for the edge and keypoint pipelines.
//!
//! Reports carry per-stage wall times and a few counts; they are meant for
//! the command-line tools and for tuning, not for the numeric results
//! themselves.

pub mod scale_space;
pub mod timing;

pub use scale_space::ScaleLevelReport;
pub use timing::{StageTiming, TimingBreakdown};
