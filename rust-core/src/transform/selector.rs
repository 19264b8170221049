//! Selection of a transform implementation for a requested length
//!
//! Callers ask for a length (and optionally a hint) and receive sole
//! ownership of a boxed `SpectrumTransform`. Which implementation backs a
//! hint is a table of constructors, so the policy can be changed without
//! touching callers.

use std::collections::HashMap;
use std::fmt;

use super::{MixedRadixFft, PowerOfTwoFft, RealInputFft, SpectrumTransform};
use crate::error::{Error, Result};

/// Optimization preference used to pick an implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformHint {
    /// Fastest kernel; restricted to power-of-two lengths
    #[default]
    Speed,

    /// Real-input kernel storing only `N/2 + 1` bins
    Memory,

    /// Any non-zero length
    AnyLength,
}

impl TransformHint {
    pub const ALL: [TransformHint; 3] = [
        TransformHint::Speed,
        TransformHint::Memory,
        TransformHint::AnyLength,
    ];
}

impl fmt::Display for TransformHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformHint::Speed => "speed",
            TransformHint::Memory => "memory",
            TransformHint::AnyLength => "any-length",
        };
        f.write_str(name)
    }
}

/// Builds a transform for a given length, validating it on the way
pub type TransformConstructor =
    Box<dyn Fn(usize) -> Result<Box<dyn SpectrumTransform>> + Send + Sync>;

fn boxed<T>(transform: Result<T>) -> Result<Box<dyn SpectrumTransform>>
where
    T: SpectrumTransform + 'static,
{
    Ok(Box::new(transform?))
}

/// Mapping from hint to transform constructor
pub struct TransformSelector {
    strategies: HashMap<TransformHint, TransformConstructor>,
}

impl TransformSelector {
    /// Selector with the built-in strategy table
    ///
    /// * `Speed` - `PowerOfTwoFft`
    /// * `Memory` - `RealInputFft`
    /// * `AnyLength` - `MixedRadixFft`
    pub fn new() -> Self {
        let mut selector = Self::empty();
        selector
            .register(TransformHint::Speed, |n| boxed(PowerOfTwoFft::new(n)))
            .register(TransformHint::Memory, |n| boxed(RealInputFft::new(n)))
            .register(TransformHint::AnyLength, |n| boxed(MixedRadixFft::new(n)));
        selector
    }

    /// Selector with no strategies registered
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Install or replace the constructor used for `hint`
    pub fn register<F>(&mut self, hint: TransformHint, constructor: F) -> &mut Self
    where
        F: Fn(usize) -> Result<Box<dyn SpectrumTransform>> + Send + Sync + 'static,
    {
        self.strategies.insert(hint, Box::new(constructor));
        self
    }

    pub fn has_strategy(&self, hint: TransformHint) -> bool {
        self.strategies.contains_key(&hint)
    }

    /// Best transform for `length` under the default (`Speed`) hint
    pub fn select(&self, length: usize) -> Result<Box<dyn SpectrumTransform>> {
        self.select_with_hint(length, TransformHint::default())
    }

    /// Construct the transform registered for `hint`
    ///
    /// # Returns
    /// The new transform, or the constructor's error (typically
    /// `Error::InvalidLength`). `Error::NoTransformForHint` if nothing is
    /// registered for `hint`.
    pub fn select_with_hint(
        &self,
        length: usize,
        hint: TransformHint,
    ) -> Result<Box<dyn SpectrumTransform>> {
        let constructor = self
            .strategies
            .get(&hint)
            .ok_or_else(|| Error::NoTransformForHint {
                hint: hint.to_string(),
            })?;

        let transform = constructor(length)?;
        log::debug!(
            "Selected {} transform for length {} (hint: {})",
            transform.name(),
            length,
            hint
        );

        Ok(transform)
    }
}

impl Default for TransformSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hints: Vec<String> = self.strategies.keys().map(|h| h.to_string()).collect();
        hints.sort();
        f.debug_struct("TransformSelector")
            .field("strategies", &hints)
            .finish()
    }
}

/// Best available transform for `length` using the built-in policy
pub fn select_transform(length: usize) -> Result<Box<dyn SpectrumTransform>> {
    TransformSelector::new().select(length)
}
