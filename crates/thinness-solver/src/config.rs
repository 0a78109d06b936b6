// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Configuration of a thinness computation.
//!
//! `ThinnessConfig` carries the bounds, the variant and the resource limits
//! of a run. Build one with `ThinnessConfig::builder()` or start from
//! `ThinnessConfig::default()`, which asks for the exact thinness without any
//! limit.
//!
//! ```rust
//! use std::time::Duration;
//! use thinness_solver::config::ThinnessConfig;
//!
//! let config = ThinnessConfig::builder()
//!     .with_lower_bound(2)
//!     .with_time_limit(Duration::from_secs(10))
//!     .build();
//! assert_eq!(config.lower_bound(), 2);
//! ```

use std::time::Duration;
use thinness_bnb::bnb::SearchBounds;
use thinness_bnb::error::{Result, ThinnessError};
use thinness_model::compatibility::Variant;

/// Settings for one thinness computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinnessConfig {
    lower_bound: usize,
    upper_bound: Option<usize>,
    variant: Variant,
    reduce_twins: bool,
    node_limit: Option<u64>,
    time_limit: Option<Duration>,
    log_progress: bool,
}

impl Default for ThinnessConfig {
    fn default() -> Self {
        Self {
            lower_bound: 1,
            upper_bound: None,
            variant: Variant::Thinness,
            reduce_twins: true,
            node_limit: None,
            time_limit: None,
            log_progress: false,
        }
    }
}

impl ThinnessConfig {
    #[inline]
    pub fn builder() -> ThinnessConfigBuilder {
        ThinnessConfigBuilder::new()
    }

    /// The thinness the caller promises the graph has at least.
    #[inline]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// The largest thinness the caller is interested in, inclusive. `None`
    /// stands for the number of vertices.
    #[inline]
    pub fn upper_bound(&self) -> Option<usize> {
        self.upper_bound
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether twins are removed before the search. Always `false` for
    /// proper thinness.
    #[inline]
    pub fn reduce_twins(&self) -> bool {
        self.reduce_twins && self.variant == Variant::Thinness
    }

    #[inline]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn log_progress(&self) -> bool {
        self.log_progress
    }

    /// Resolves the bounds for a graph on `num_vertices` vertices.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGraph` for a graph without vertices and `InvalidBounds`
    /// unless `1 <= lower <= upper <= num_vertices`.
    pub fn search_bounds(&self, num_vertices: usize) -> Result<SearchBounds> {
        if num_vertices == 0 {
            return Err(ThinnessError::EmptyGraph);
        }
        let bounds = SearchBounds::new(
            self.lower_bound,
            self.upper_bound.unwrap_or(num_vertices),
        );
        bounds.validate(num_vertices)?;
        Ok(bounds)
    }
}

impl std::fmt::Display for ThinnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ThinnessConfig(variant: {}, lower_bound: {}, upper_bound: {:?}, reduce_twins: {}, node_limit: {:?}, time_limit: {:?})",
            self.variant,
            self.lower_bound,
            self.upper_bound,
            self.reduce_twins(),
            self.node_limit,
            self.time_limit
        )
    }
}

/// Builder for `ThinnessConfig`.
#[derive(Debug, Clone, Default)]
pub struct ThinnessConfigBuilder {
    config: ThinnessConfig,
}

impl ThinnessConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_lower_bound(mut self, lower_bound: usize) -> Self {
        self.config.lower_bound = lower_bound;
        self
    }

    #[inline]
    pub fn with_upper_bound(mut self, upper_bound: usize) -> Self {
        self.config.upper_bound = Some(upper_bound);
        self
    }

    #[inline]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.config.variant = variant;
        self
    }

    #[inline]
    pub fn with_twin_reduction(mut self, enabled: bool) -> Self {
        self.config.reduce_twins = enabled;
        self
    }

    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.config.node_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.config.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_progress_logging(mut self, enabled: bool) -> Self {
        self.config.log_progress = enabled;
        self
    }

    #[inline]
    pub fn build(self) -> ThinnessConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_span_the_graph() {
        let config = ThinnessConfig::default();
        assert_eq!(config.search_bounds(7), Ok(SearchBounds::new(1, 7)));
        assert!(config.reduce_twins());
        assert!(!config.log_progress());
    }

    #[test]
    fn test_invalid_bounds_are_rejected_not_clamped() {
        let config = ThinnessConfig::builder()
            .with_lower_bound(3)
            .with_upper_bound(2)
            .build();
        assert_eq!(
            config.search_bounds(5),
            Err(ThinnessError::InvalidBounds {
                lower: 3,
                upper: 2,
                max: 5
            })
        );

        let config = ThinnessConfig::builder().with_upper_bound(9).build();
        assert!(matches!(
            config.search_bounds(4),
            Err(ThinnessError::InvalidBounds { upper: 9, max: 4, .. })
        ));

        let config = ThinnessConfig::builder().with_lower_bound(0).build();
        assert!(config.search_bounds(4).is_err());
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        assert_eq!(
            ThinnessConfig::default().search_bounds(0),
            Err(ThinnessError::EmptyGraph)
        );
    }

    #[test]
    fn test_proper_variant_disables_twin_reduction() {
        let config = ThinnessConfig::builder()
            .with_variant(Variant::ProperThinness)
            .with_twin_reduction(true)
            .build();
        assert!(!config.reduce_twins());
    }

    #[test]
    fn test_builder_sets_limits() {
        let config = ThinnessConfig::builder()
            .with_node_limit(100)
            .with_time_limit(Duration::from_millis(5))
            .with_progress_logging(true)
            .build();
        assert_eq!(config.node_limit(), Some(100));
        assert_eq!(config.time_limit(), Some(Duration::from_millis(5)));
        assert!(config.log_progress());
    }
}
