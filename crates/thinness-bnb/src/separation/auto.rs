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

//! Size-based choice between the exact and the greedy layout.

use crate::separation::exact::{ExactSeparation, EXACT_SEPARATION_LIMIT};
use crate::separation::greedy::GreedySeparation;
use crate::separation::oracle::SeparationOracle;
use thinness_model::graph::Graph;

/// Uses `ExactSeparation` up to `EXACT_SEPARATION_LIMIT` vertices and
/// `GreedySeparation` above.
#[derive(Debug, Clone, Default)]
pub struct AutoSeparation {
    exact: ExactSeparation,
    greedy: GreedySeparation,
}

impl AutoSeparation {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeparationOracle for AutoSeparation {
    fn name(&self) -> &str {
        "AutoSeparation"
    }

    fn layout(&mut self, graph: &Graph) -> Vec<usize> {
        if graph.num_vertices() <= EXACT_SEPARATION_LIMIT {
            self.exact.layout(graph)
        } else {
            self.greedy.layout(graph)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::separation::oracle::separation_cost;
    use thinness_model::generators;

    #[test]
    fn test_small_graphs_get_optimal_layouts() {
        let g = generators::crown(4).unwrap();
        let auto = AutoSeparation::new().layout(&g);
        let exact = ExactSeparation::new().layout(&g);
        assert_eq!(separation_cost(&g, &auto), separation_cost(&g, &exact));
    }

    #[test]
    fn test_large_graphs_use_greedy() {
        let g = generators::grid(5, 5).unwrap();
        assert_eq!(
            AutoSeparation::new().layout(&g),
            GreedySeparation::new().layout(&g)
        );
    }
}
