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

//! Error types for the search engine.

use thinness_model::error::ModelError;
use thiserror::Error;

/// Errors that abort a thinness computation.
///
/// Invalid configurations are rejected before any search work starts. Oracle
/// failures are fatal: a coloring or layout that does not satisfy its contract
/// would silently corrupt bounds, so it is reported instead of retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThinnessError {
    #[error("invalid bounds: lower bound {lower} and upper bound {upper} must satisfy 1 <= lower <= upper <= {max}")]
    InvalidBounds {
        lower: usize,
        upper: usize,
        max: usize,
    },

    #[error("thinness is undefined for a graph without vertices")]
    EmptyGraph,

    #[error("oracle `{oracle}` violated its contract: {reason}")]
    OracleFailure { oracle: String, reason: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ThinnessError {
    /// Shorthand for an `OracleFailure`.
    pub fn oracle_failure<O, R>(oracle: O, reason: R) -> Self
    where
        O: Into<String>,
        R: Into<String>,
    {
        ThinnessError::OracleFailure {
            oracle: oracle.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, ThinnessError>;
