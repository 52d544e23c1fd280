use super::*;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A solution trace: the visited states and the actions between them.
///
/// A non-empty path holds one more state than actions and reads as the
/// alternating sequence `states[0], actions[0], states[1], ...`. The empty
/// path means the goal is unreachable; it is distinct from the single-state,
/// zero-move path returned when start and goal are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    states: Vec<State>,
    actions: Vec<Action>,
}

impl Path {
    /// The empty path: no states, goal unreachable.
    pub fn empty() -> Path {
        Path {
            states: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// The zero-move path containing a single state.
    pub fn single(state: State) -> Path {
        Path {
            states: vec![state],
            actions: Vec::new(),
        }
    }

    /// Build a path from its state and action sequences.
    pub fn new(states: Vec<State>, actions: Vec<Action>) -> Path {
        debug_assert!(
            (states.is_empty() && actions.is_empty()) || states.len() == actions.len() + 1,
            "A path must alternate states and actions"
        );
        Path { states, actions }
    }

    /// True if no path exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The actions of this path in order.
    #[inline]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The states of this path in order, starting with the start state.
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of moves in this path. Zero both for the empty path and for the
    /// single-state path; use [`Path::is_empty`] to tell them apart.
    #[inline]
    pub fn num_moves(&self) -> usize {
        self.actions.len()
    }

    /// The last state of the path, if any.
    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("states", &self.states)?;
        map.serialize_entry("moves", &self.actions)?;
        map.end()
    }
}
