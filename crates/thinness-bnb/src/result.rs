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

//! Outcomes of a branch-and-bound run.

use crate::stats::BnbSolverStatistics;
use thinness_model::solution::ConsistentSolution;

/// The solution a run ends with. A run always ends with a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult {
    /// A solution whose thinness is proven minimal.
    Optimal(ConsistentSolution),
    /// A valid solution without a proof of optimality.
    Feasible(ConsistentSolution),
}

impl SolverResult {
    /// Returns the solution, optimal or not.
    #[inline]
    pub fn solution(&self) -> &ConsistentSolution {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => solution,
        }
    }

    #[inline]
    pub fn into_solution(self) -> ConsistentSolution {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => solution,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(thinness={})", solution.thinness())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(thinness={})", solution.thinness())
            }
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search completed with an exact oracle, or the best solution met
    /// the lower bound the caller promised.
    OptimalityProven,
    /// No solution within the caller's upper bound exists. The best known
    /// solution is returned as feasible.
    InfeasibilityProven,
    /// The search completed, but the coloring oracle is not exact.
    Heuristic,
    /// A monitor stopped the search. The string names the limit.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Heuristic => write!(f, "Heuristic"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome {
    result: SolverResult,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics,
}

impl BnbSolverOutcome {
    #[inline]
    pub fn optimal(solution: ConsistentSolution, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// Nothing within the upper bound exists; `fallback` is the best
    /// solution known.
    #[inline]
    pub fn infeasible(fallback: ConsistentSolution, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Feasible(fallback),
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    #[inline]
    pub fn heuristic(solution: ConsistentSolution, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Feasible(solution),
            termination_reason: TerminationReason::Heuristic,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(
        solution: ConsistentSolution,
        reason: R,
        statistics: BnbSolverStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(solution),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SolverResult {
        &self.result
    }

    /// Returns the best solution found.
    #[inline]
    pub fn solution(&self) -> &ConsistentSolution {
        self.result.solution()
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Returns `true` if the solution is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.result.is_optimal()
    }

    #[inline]
    pub fn into_parts(self) -> (SolverResult, TerminationReason, BnbSolverStatistics) {
        (self.result, self.termination_reason, self.statistics)
    }
}

impl std::fmt::Display for BnbSolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BnbSolverOutcome(result: {}, termination: {}, nodes: {})",
            self.result, self.termination_reason, self.statistics.nodes_explored
        )
    }
}
