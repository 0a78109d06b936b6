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

//! Error types for graph construction and solution handling.

use crate::graph6::Graph6Error;
use thiserror::Error;

/// Errors raised while building graphs, decoding them, or constructing
/// compatibility graphs and solutions from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("graph has {count} vertices but at most {max} are supported")]
    TooManyVertices { count: usize, max: usize },

    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    #[error("adjacency rows are not symmetric between vertices {u} and {v}")]
    Asymmetric { u: usize, v: usize },

    #[error("vertex {0} appears more than once in the order")]
    DuplicateVertex(usize),

    #[error("order has {actual} vertices but the graph has {expected}")]
    IncompleteOrder { expected: usize, actual: usize },

    #[error("malformed graph6 input: {0}")]
    Graph6(#[from] Graph6Error),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
