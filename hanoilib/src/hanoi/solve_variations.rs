//! Variations of solve function

use super::*;

use std::time::Instant;

/// Stores the outcome of solving a [`Problem`].
#[derive(Debug, Clone)]
pub struct Solution {
    /// Total time to produce the solution in seconds.
    pub total_time: f64,
    /// Time spent in the breadth-first search in seconds.
    pub search_time: f64,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
    /// Number of distinct states discovered.
    pub state_count: usize,
    /// Shortest path from start to goal; empty if the goal is unreachable.
    pub path: Path,
}

impl Solution {
    /// Get [`crate::io::BenchmarkResult`].
    pub fn get_benchmark_result(&self) -> crate::io::BenchmarkResult {
        crate::io::BenchmarkResult {
            total_time: self.total_time,
            search_time: self.search_time,
            max_memory: self.max_memory,
            states: self.state_count,
            moves: if self.path.is_empty() {
                None
            } else {
                Some(self.path.num_moves())
            },
        }
    }
}

/// Solve a Tower of Hanoi shortest-path problem with the default
/// configuration.
pub fn solve(problem: &Problem) -> Result<Solution, SolveFailure> {
    solve_with_config(problem, &Config::default())
}

/// Solve a Tower of Hanoi shortest-path problem.
pub fn solve_with_config(problem: &Problem, config: &Config) -> Result<Solution, SolveFailure> {
    let start_time = Instant::now();

    let SearchResult {
        path,
        state_count,
        max_memory,
    } = memory_limited_search(
        problem.start.clone(),
        problem.goal.clone(),
        config.max_memory,
    )?;

    let search_time: f64 = start_time.elapsed().as_secs_f64();

    if path.is_empty() {
        log::info!("Goal is unreachable; explored {state_count} states");
    } else {
        log::info!(
            "Found a {}-move path after discovering {state_count} states",
            path.num_moves()
        );
    }

    let total_time: f64 = start_time.elapsed().as_secs_f64();

    Ok(Solution {
        total_time,
        search_time,
        max_memory,
        state_count,
        path,
    })
}
