//! Division of a sample source into fixed-length, overlapping frames
//!
//! Boundaries are pure arithmetic over the source length; the resulting
//! frames borrow the source and never copy samples.

use std::ops::{Index, Range};

use super::frame::Frame;
use crate::error::{Error, Result};

/// Rule for the last frame when its end lands exactly on the source length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Emit a frame only when `end < source_len`
    #[default]
    Exclusive,

    /// Emit a frame when `end <= source_len`
    Inclusive,
}

impl BoundaryPolicy {
    fn admits(self, end: usize, source_len: usize) -> bool {
        match self {
            BoundaryPolicy::Exclusive => end < source_len,
            BoundaryPolicy::Inclusive => end <= source_len,
        }
    }
}

/// Compute the `[begin, end)` range of every frame
///
/// # Arguments
/// * `source_len` - Number of samples in the source
/// * `samples_per_frame` - Samples held by each frame
/// * `samples_per_overlap` - Samples shared by adjacent frames
/// * `policy` - Whether a frame may end exactly at `source_len`
///
/// # Returns
/// Ranges in increasing `begin` order, spaced by the hop size. The tail
/// that cannot fill a whole frame is dropped. Fails only when the hop
/// size `samples_per_frame - samples_per_overlap` is not positive.
pub fn frame_bounds(
    source_len: usize,
    samples_per_frame: usize,
    samples_per_overlap: usize,
    policy: BoundaryPolicy,
) -> Result<Vec<Range<usize>>> {
    if samples_per_frame == 0 || samples_per_overlap >= samples_per_frame {
        return Err(Error::InvalidFraming {
            samples_per_frame,
            samples_per_overlap,
        });
    }

    let hop = samples_per_frame - samples_per_overlap;
    let max_frames = source_len / hop;

    let mut bounds = Vec::with_capacity(max_frames);
    for i in 0..max_frames {
        let begin = i * hop;
        let end = begin + samples_per_frame;
        if !policy.admits(end, source_len) {
            break;
        }
        bounds.push(begin..end);
    }

    Ok(bounds)
}

/// Divide `source` into frames using the default boundary policy
pub fn divide(
    source: &[f64],
    samples_per_frame: usize,
    samples_per_overlap: usize,
) -> Result<Vec<Frame<'_>>> {
    Ok(FrameSequence::new(source, samples_per_frame, samples_per_overlap)?.frames)
}

/// Ordered collection of frames over one source
///
/// Owns the frame views only. Clearing or dropping the sequence leaves
/// the source untouched.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence<'a> {
    frames: Vec<Frame<'a>>,
    samples_per_frame: usize,
    samples_per_overlap: usize,
}

impl<'a> FrameSequence<'a> {
    /// Divide a source with the default (`Exclusive`) boundary policy
    ///
    /// # Arguments
    /// * `source` - Samples to divide
    /// * `samples_per_frame` - Frame length
    /// * `samples_per_overlap` - Samples common to adjacent frames
    pub fn new(
        source: &'a [f64],
        samples_per_frame: usize,
        samples_per_overlap: usize,
    ) -> Result<Self> {
        Self::with_policy(
            source,
            samples_per_frame,
            samples_per_overlap,
            BoundaryPolicy::default(),
        )
    }

    /// Divide a source with an explicit boundary policy
    pub fn with_policy(
        source: &'a [f64],
        samples_per_frame: usize,
        samples_per_overlap: usize,
        policy: BoundaryPolicy,
    ) -> Result<Self> {
        let frames: Vec<Frame<'a>> =
            frame_bounds(source.len(), samples_per_frame, samples_per_overlap, policy)?
                .into_iter()
                .map(|r| Frame::from_bounds(source, r.start, r.end))
                .collect();

        log::debug!(
            "Divided {} samples into {} frames (frame={}, hop={}, policy={:?})",
            source.len(),
            frames.len(),
            samples_per_frame,
            samples_per_frame - samples_per_overlap,
            policy
        );

        Ok(Self {
            frames,
            samples_per_frame,
            samples_per_overlap,
        })
    }

    /// Divide a source using a frame duration and an overlap fraction
    ///
    /// # Arguments
    /// * `source` - Samples to divide
    /// * `sample_rate` - Sample rate in Hz
    /// * `frame_duration_ms` - Frame length in milliseconds
    /// * `overlap_ratio` - Fraction of each frame shared with the next, in `[0, 1)`
    pub fn from_duration(
        source: &'a [f64],
        sample_rate: f64,
        frame_duration_ms: f64,
        overlap_ratio: f64,
    ) -> Result<Self> {
        let samples_per_frame = (sample_rate * frame_duration_ms / 1000.0) as usize;
        let samples_per_overlap = (samples_per_frame as f64 * overlap_ratio) as usize;

        Self::new(source, samples_per_frame, samples_per_overlap)
    }

    /// Empty sequence with no frame length configured
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame<'a>> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame<'a>> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame<'a>] {
        &self.frames
    }

    pub fn samples_per_frame(&self) -> usize {
        self.samples_per_frame
    }

    pub fn samples_per_overlap(&self) -> usize {
        self.samples_per_overlap
    }

    /// Distance between the starts of consecutive frames
    pub fn hop_size(&self) -> usize {
        self.samples_per_frame - self.samples_per_overlap
    }

    /// Drop all frames; the source is not affected
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl<'a> Index<usize> for FrameSequence<'a> {
    type Output = Frame<'a>;

    fn index(&self, index: usize) -> &Frame<'a> {
        &self.frames[index]
    }
}

impl<'s, 'a> IntoIterator for &'s FrameSequence<'a> {
    type Item = &'s Frame<'a>;
    type IntoIter = std::slice::Iter<'s, Frame<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for FrameSequence<'a> {
    type Item = Frame<'a>;
    type IntoIter = std::vec::IntoIter<Frame<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
