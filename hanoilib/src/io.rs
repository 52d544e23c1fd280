//! Input output module.
//!
//! Contains structs to serialize and deserialize problems, solutions and
//! benchmark results.
use crate::hanoi::{self, Solution};
use crate::hanoi::state::{Peg, State};
use crate::types::*;
use crate::utils::{has_duplicates, sorted_union};
use crate::SolveFailure;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

mod experiments;
pub mod fs;
pub use experiments::*;

#[cfg(test)]
mod tests;

/// JSON representation of a generalized Tower of Hanoi problem.
///
/// The outer lists of `start` and `goal` are peg positions; the inner lists
/// are the disks on that peg, in any order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HanoiProblem {
    pub name: Option<String>,
    /// Disks on each peg in the start arrangement.
    pub start: Vec<Vec<Disk>>,
    /// Disks on each peg in the goal arrangement.
    pub goal: Vec<Vec<Disk>>,
    /// Memory limit of the search in bytes.
    #[serde(default, rename = "memoryLimit")]
    pub memory_limit: Option<usize>,
}

/// Collect the disk universe of one arrangement in sorted order, rejecting
/// duplicate disks and non-positive identifiers.
fn disk_universe(pegs: &[Vec<Disk>], which: &str) -> Result<Vec<Disk>, SolveFailure> {
    let mut universe: Vec<Disk> = Vec::new();
    for disks in pegs.iter() {
        let mut disks = disks.clone();
        disks.sort_unstable();
        universe = sorted_union(&universe, &disks);
    }
    if universe.first() == Some(&0) {
        return Err(SolveFailure::BadInput(format!(
            "Disk identifiers must be positive in the {which} arrangement"
        )));
    }
    if has_duplicates(&universe) {
        return Err(SolveFailure::BadInput(format!(
            "A disk appears more than once in the {which} arrangement"
        )));
    }
    Ok(universe)
}

fn build_state(pegs: &[Vec<Disk>]) -> State {
    State::new(pegs.iter().map(|disks| Peg::new(disks.clone())).collect())
}

impl HanoiProblem {
    /// Prepare this problem before solving: build the start and goal states
    /// and validate the preconditions the search assumes.
    pub fn prepare(self) -> Result<(hanoi::Problem, hanoi::Config), SolveFailure> {
        let HanoiProblem {
            name: _,
            start,
            goal,
            memory_limit,
        } = self;

        if start.len() != goal.len() {
            return Err(SolveFailure::BadInput(format!(
                "Start has {} pegs but goal has {}",
                start.len(),
                goal.len()
            )));
        }

        let start_universe = disk_universe(&start, "start")?;
        let goal_universe = disk_universe(&goal, "goal")?;
        if start_universe != goal_universe {
            return Err(SolveFailure::BadInput(String::from(
                "Start and goal must contain the same disks",
            )));
        }

        let problem = hanoi::Problem {
            start: build_state(&start),
            goal: build_state(&goal),
        };
        let config = hanoi::Config {
            max_memory: memory_limit.unwrap_or(usize::MAX),
        };

        Ok((problem, config))
    }

    /// Solve this problem and return the [`Solution`] on success.
    pub fn solve(self) -> Result<Solution, SolveFailure> {
        let (problem, config) = self.prepare()?;
        hanoi::solve_with_config(&problem, &config)
    }
}

impl Serialize for Solution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("totalTime", &self.total_time)?;
        map.serialize_entry("searchTime", &self.search_time)?;
        map.serialize_entry("maxMemory", &self.max_memory)?;
        map.serialize_entry("states", &self.state_count)?;
        map.serialize_entry("found", &!self.path.is_empty())?;
        map.serialize_entry("path", &self.path)?;
        map.end()
    }
}

/// Simplified solution struct for storing benchmark-related data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Total time to produce the solution in seconds.
    pub total_time: f64,
    /// Time spent in the breadth-first search in seconds.
    pub search_time: f64,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
    /// Number of distinct states discovered.
    pub states: usize,
    /// Number of moves in the shortest path; `None` if the goal is
    /// unreachable.
    pub moves: Option<usize>,
}
