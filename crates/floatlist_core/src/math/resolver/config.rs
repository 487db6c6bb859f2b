//! Resolver configuration types.

use std::fmt;
use std::str::FromStr;

/// How an index outside `[0, len - 1]` is mapped back onto the sequence.
///
/// # Example
///
/// ```
/// use floatlist_core::math::resolver::BoundaryPolicy;
///
/// let policy: BoundaryPolicy = "wrap".parse().unwrap();
/// assert_eq!(policy, BoundaryPolicy::Wrap);
/// assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Clamp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryPolicy {
    /// Saturate to the first or last element. No extrapolation.
    #[default]
    Clamp,
    /// Reduce the index modulo the length. The segment past the last
    /// element blends back into the first.
    Wrap,
}

/// Whether fractional indices blend neighbours or snap to the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SampleMode {
    /// Linear interpolation between the two neighbouring elements.
    #[default]
    Linear,
    /// Use the lower neighbour only, as if the index were floored.
    Floor,
}

/// How a write at a fractional index is spread over its two neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WriteStrategy {
    /// Minimum-norm correction proportional to the blend weights.
    ///
    /// Both neighbours move by `delta * w / (w0² + w1²)` where `w` is the
    /// neighbour's weight, so a read at the same index returns the written
    /// value exactly.
    #[default]
    Proportional,
    /// Pull each neighbour toward the written value.
    ///
    /// The lower neighbour becomes `value + (lo - value) * frac` and the
    /// upper becomes `hi + (value - hi) * frac`. A read at the same index
    /// does not in general return the written value.
    Blend,
}

/// Error returned when parsing a policy name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: '{value}'. Expected one of: {expected}")]
pub struct ParsePolicyError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParsePolicyError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl BoundaryPolicy {
    /// Lowercase name as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Clamp => "clamp",
            BoundaryPolicy::Wrap => "wrap",
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clamp" | "saturate" => Ok(BoundaryPolicy::Clamp),
            "wrap" | "modulo" => Ok(BoundaryPolicy::Wrap),
            _ => Err(ParsePolicyError::new("boundary policy", s, "clamp, wrap")),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SampleMode {
    /// Lowercase name as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleMode::Linear => "linear",
            SampleMode::Floor => "floor",
        }
    }
}

impl FromStr for SampleMode {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "lerp" => Ok(SampleMode::Linear),
            "floor" | "nearest-below" => Ok(SampleMode::Floor),
            _ => Err(ParsePolicyError::new("sample mode", s, "linear, floor")),
        }
    }
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WriteStrategy {
    /// Lowercase name as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStrategy::Proportional => "proportional",
            WriteStrategy::Blend => "blend",
        }
    }
}

impl FromStr for WriteStrategy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proportional" | "minimal" => Ok(WriteStrategy::Proportional),
            "blend" => Ok(WriteStrategy::Blend),
            _ => Err(ParsePolicyError::new(
                "write strategy",
                s,
                "proportional, blend",
            )),
        }
    }
}

impl fmt::Display for WriteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for fractional-index resolution.
///
/// Groups the three independent policies applied by
/// [`IndexResolver`](super::IndexResolver).
///
/// # Example
///
/// ```
/// use floatlist_core::math::resolver::{BoundaryPolicy, ResolverConfig, SampleMode, WriteStrategy};
///
/// // Default: clamp at the ends, blend linearly, minimum-perturbation writes
/// let config = ResolverConfig::default();
/// assert_eq!(config.boundary, BoundaryPolicy::Clamp);
/// assert_eq!(config.mode, SampleMode::Linear);
/// assert_eq!(config.write_strategy, WriteStrategy::Proportional);
///
/// // Custom configuration
/// let custom = ResolverConfig {
///     boundary: BoundaryPolicy::Wrap,
///     ..ResolverConfig::default()
/// };
/// assert_eq!(custom, ResolverConfig::wrapping());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Out-of-range index handling.
    pub boundary: BoundaryPolicy,

    /// Interpolating or floored access.
    pub mode: SampleMode,

    /// Distribution of fractional writes.
    pub write_strategy: WriteStrategy,
}

impl ResolverConfig {
    /// Create a configuration with all three policies given explicitly.
    pub fn new(boundary: BoundaryPolicy, mode: SampleMode, write_strategy: WriteStrategy) -> Self {
        Self {
            boundary,
            mode,
            write_strategy,
        }
    }

    /// Default configuration with a wrapping boundary.
    ///
    /// Treats the sequence as one period of a cyclic signal.
    pub fn wrapping() -> Self {
        Self {
            boundary: BoundaryPolicy::Wrap,
            ..Self::default()
        }
    }

    /// Default configuration with floored, non-interpolating access.
    pub fn floor() -> Self {
        Self {
            mode: SampleMode::Floor,
            ..Self::default()
        }
    }

    /// Default configuration with blending writes.
    pub fn blend() -> Self {
        Self {
            write_strategy: WriteStrategy::Blend,
            ..Self::default()
        }
    }

    /// Returns a copy with the boundary policy replaced.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns a copy with the sample mode replaced.
    pub fn with_mode(mut self, mode: SampleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with the write strategy replaced.
    pub fn with_write_strategy(mut self, write_strategy: WriteStrategy) -> Self {
        self.write_strategy = write_strategy;
        self
    }
}

impl fmt::Display for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "boundary={}, mode={}, write_strategy={}",
            self.boundary, self.mode, self.write_strategy
        )
    }
}
