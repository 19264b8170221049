//! Non-owning view over a range of source samples

use std::ops::{Index, Range};

use crate::error::{Error, Result};

/// Read-only window `[begin, end)` into a borrowed sample source
///
/// A frame holds a reference plus two offsets and never copies sample
/// data. The borrow ties its lifetime to the source, so the source stays
/// alive and unmodified for as long as the frame exists:
///
/// ```compile_fail
/// use spectral_frames::Frame;
///
/// let mut source = vec![0.0; 4];
/// let frame = Frame::new(&source, 0, 2).unwrap();
/// source[0] = 1.0;
/// assert_eq!(frame[0], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    source: &'a [f64],
    begin: usize,
    end: usize,
}

impl<'a> Frame<'a> {
    /// Create a frame over `source[begin..end]`
    ///
    /// # Returns
    /// `Error::InvalidFrameBounds` unless `begin < end <= source.len()`
    pub fn new(source: &'a [f64], begin: usize, end: usize) -> Result<Self> {
        if begin >= end || end > source.len() {
            return Err(Error::InvalidFrameBounds {
                begin,
                end,
                source_len: source.len(),
            });
        }

        Ok(Self::from_bounds(source, begin, end))
    }

    /// Bounds are checked by the caller
    pub(crate) fn from_bounds(source: &'a [f64], begin: usize, end: usize) -> Self {
        debug_assert!(begin < end && end <= source.len());
        Self { source, begin, end }
    }

    /// Absolute index of the first sample within the source
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Absolute index one past the last sample within the source
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// Number of samples in the frame
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Borrow the frame's samples directly from the source
    pub fn samples(&self) -> &'a [f64] {
        &self.source[self.begin..self.end]
    }

    /// Sample at local index `i`, i.e. `source[begin + i]`
    pub fn get(&self, i: usize) -> Option<f64> {
        self.samples().get(i).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, f64> {
        self.samples().iter()
    }

    /// Copy the samples out, e.g. for in-place windowing
    pub fn to_vec(&self) -> Vec<f64> {
        self.samples().to_vec()
    }
}

impl Index<usize> for Frame<'_> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.samples()[i]
    }
}

impl<'a> IntoIterator for &Frame<'a> {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[f64]> for Frame<'_> {
    fn as_ref(&self) -> &[f64] {
        self.samples()
    }
}
