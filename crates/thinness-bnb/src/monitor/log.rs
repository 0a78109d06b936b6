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

//! Periodic progress reporting through `tracing`.

use crate::monitor::tree_search_monitor::TreeSearchMonitor;
use crate::stack::Candidate;
use crate::state::SearchState;
use crate::stats::BnbSolverStatistics;
use std::time::{Duration, Instant};
use thinness_model::graph::Graph;
use thinness_model::solution::ConsistentSolution;
use tracing::{debug, info};

/// Emits an `info!` progress event at most once per `log_interval`.
///
/// The clock is only read when `nodes_explored & clock_check_mask == 0`.
#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_thinness: Option<usize>,
}

impl LogTreeSearchMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_thinness: None,
        }
    }

    #[inline(always)]
    fn log_line(&mut self, state: &SearchState, stats: &BnbSolverStatistics) {
        let now = Instant::now();
        info!(
            elapsed = ?now.duration_since(self.start_time),
            nodes = stats.nodes_explored,
            depth = state.num_placed(),
            best = ?self.best_thinness,
            lower_bound = state.lower_bound(),
            backtracks = stats.backtracks,
            pruned = stats.prunings_bound,
            "search progress"
        );
        self.last_log_time = now;
    }
}

impl Default for LogTreeSearchMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogTreeSearchMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {:?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}

impl TreeSearchMonitor for LogTreeSearchMonitor {
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, graph: &Graph, stats: &BnbSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_thinness = Some(stats.seed_thinness);
        info!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            seed = stats.seed_thinness,
            "search started"
        );
    }

    fn on_descend(&mut self, state: &SearchState, _candidate: Candidate, stats: &BnbSolverStatistics) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, stats);
        }
    }

    fn on_solution_found(&mut self, solution: &ConsistentSolution, stats: &BnbSolverStatistics) {
        self.best_thinness = Some(solution.thinness());
        debug!(
            thinness = solution.thinness(),
            nodes = stats.nodes_explored,
            "improved solution"
        );
    }

    fn on_exit_search(&mut self, stats: &BnbSolverStatistics) {
        info!(
            elapsed = ?self.start_time.elapsed(),
            nodes = stats.nodes_explored,
            best = ?self.best_thinness,
            "search finished"
        );
    }
}
