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

//! Node limit for tree search.

use crate::monitor::tree_search_monitor::{SearchCommand, TreeSearchMonitor};
use crate::state::SearchState;
use crate::stats::BnbSolverStatistics;
use thinness_model::graph::Graph;

/// Stops the search once `node_limit` nodes have been explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLimitMonitor {
    node_limit: u64,
}

impl NodeLimitMonitor {
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self { node_limit }
    }

    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }
}

impl TreeSearchMonitor for NodeLimitMonitor {
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _graph: &Graph, _statistics: &BnbSolverStatistics) {}

    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}

    fn search_command(
        &mut self,
        _state: &SearchState,
        statistics: &BnbSolverStatistics,
    ) -> SearchCommand {
        if statistics.nodes_explored >= self.node_limit {
            SearchCommand::Terminate(format!("node limit of {} reached", self.node_limit))
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinness_model::compatibility::Variant;

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = NodeLimitMonitor::new(10);
        let state = SearchState::new(2, Variant::Thinness);
        let mut stats = BnbSolverStatistics {
            nodes_explored: 9,
            ..Default::default()
        };
        assert_eq!(monitor.search_command(&state, &stats), SearchCommand::Continue);
        stats.nodes_explored = 10;
        assert_eq!(
            monitor.search_command(&state, &stats),
            SearchCommand::Terminate("node limit of 10 reached".into())
        );
    }
}
