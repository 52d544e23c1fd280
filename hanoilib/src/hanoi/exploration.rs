use crate::ALLOCATOR;

use super::*;

/// Result of a breadth-first path search.
pub struct SearchResult {
    /// Shortest path from start to goal; empty if the goal is unreachable.
    pub path: Path,
    /// Number of distinct states discovered during the search.
    pub state_count: usize,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
}

/// A struct for indexing the states discovered during a search.
struct StateIndexer {
    /// Discovered states in discovery order.
    states: Vec<State>,
    /// Reverse index
    state_to_index: HashMap<State, StateIndex>,
}

impl StateIndexer {
    fn new() -> StateIndexer {
        StateIndexer {
            states: Vec::new(),
            state_to_index: HashMap::new(),
        }
    }

    #[inline]
    fn state_count(&self) -> usize {
        self.states.len()
    }

    #[inline]
    fn contains(&self, state: &State) -> bool {
        self.state_to_index.contains_key(state)
    }

    /// Add a newly discovered state, returning its index. The state must not
    /// have been indexed before.
    fn index_state(&mut self, state: State) -> StateIndex {
        let index = self.states.len();
        self.states.push(state.clone());
        self.state_to_index.insert(state, index);
        index
    }

    /// Get the state at given index.
    #[inline]
    fn get_state(&self, index: StateIndex) -> &State {
        &self.states[index]
    }
}

/// Breadth-first shortest-path search from `start` to `goal`.
///
/// States are expanded in first-in-first-out order and deduplicated on
/// discovery, so the first path reaching the goal has the minimum number of
/// moves and repeated searches return identical paths. The search owns its
/// frontier and explored set; nothing is shared between calls.
///
/// When the memory usage reported by the global allocator exceeds the limit,
/// [`SolveFailure::OutOfMemory`] will be returned.
pub fn memory_limited_search(
    start: State,
    goal: State,
    memory_limit: usize,
) -> Result<SearchResult, SolveFailure> {
    const MEMORY_SAMPLE_PERIOD: usize = 2_usize.pow(15);
    let mut max_memory: usize = 0;

    if start == goal {
        return Ok(SearchResult {
            path: Path::single(start),
            state_count: 1,
            max_memory: ALLOCATOR.allocated(),
        });
    }

    let mut states = StateIndexer::new();
    // Predecessor link of each discovered state: the state it was first
    // reached from and the action that reached it. None for the start state.
    let mut predecessors: Vec<Option<(StateIndex, Action)>> = Vec::new();
    let mut frontier: VecDeque<StateIndex> = VecDeque::new();

    let start_index = states.index_state(start);
    predecessors.push(None);
    frontier.push_back(start_index);

    let mut expanded: usize = 0;
    while let Some(index) = frontier.pop_front() {
        let current = states.get_state(index).clone();
        for (action, successor) in current.successors() {
            if states.contains(&successor) {
                continue;
            }
            let reached_goal = successor == goal;
            let successor_index = states.index_state(successor);
            predecessors.push(Some((index, action)));
            if reached_goal {
                return Ok(SearchResult {
                    path: reconstruct_path(&states, &predecessors, successor_index),
                    state_count: states.state_count(),
                    max_memory: std::cmp::max(max_memory, ALLOCATOR.allocated()),
                });
            }
            frontier.push_back(successor_index);
        }

        expanded += 1;
        if expanded % MEMORY_SAMPLE_PERIOD == 0 {
            let allocated = ALLOCATOR.allocated();
            max_memory = std::cmp::max(max_memory, allocated);
            if allocated > memory_limit {
                return Err(SolveFailure::OutOfMemory {
                    used: max_memory,
                    limit: memory_limit,
                });
            }
        }
    }

    // Reachable state space exhausted without finding the goal.
    max_memory = std::cmp::max(max_memory, ALLOCATOR.allocated());
    Ok(SearchResult {
        path: Path::empty(),
        state_count: states.state_count(),
        max_memory,
    })
}

/// Search without a memory limit.
pub fn search(start: State, goal: State) -> SearchResult {
    memory_limited_search(start, goal, usize::MAX).unwrap()
}

/// Walk the predecessor links back from `goal_index` to rebuild the path.
fn reconstruct_path(
    states: &StateIndexer,
    predecessors: &[Option<(StateIndex, Action)>],
    goal_index: StateIndex,
) -> Path {
    let mut path_states: Vec<State> = Vec::new();
    let mut path_actions: Vec<Action> = Vec::new();

    let mut index = goal_index;
    path_states.push(states.get_state(index).clone());
    while let Some((parent, action)) = predecessors[index] {
        path_actions.push(action);
        index = parent;
        path_states.push(states.get_state(index).clone());
    }

    path_states.reverse();
    path_actions.reverse();
    Path::new(path_states, path_actions)
}
