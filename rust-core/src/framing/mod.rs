//! Frame segmentation over borrowed sample sources

pub mod frame;
pub mod sequence;

pub use frame::Frame;
pub use sequence::{divide, frame_bounds, BoundaryPolicy, FrameSequence};
