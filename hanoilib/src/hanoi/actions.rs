use super::*;

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single relocation of one disk between two pegs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    /// The disk being moved.
    pub disk: Disk,
    /// Index of the peg the disk is taken from.
    pub source: PegIndex,
    /// Index of the peg the disk is placed on.
    pub dest: PegIndex,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.source, self.dest)
    }
}

impl State {
    /// Enumerate the legal actions in this state.
    ///
    /// Ordered peg pairs are visited in source-major index order, with
    /// `source == dest` excluded, so enumeration is deterministic. Only the
    /// top disk of a peg can move, onto an empty peg or onto a peg whose top
    /// disk is larger.
    pub fn actions(&self) -> Vec<Action> {
        iproduct!(0..self.pegs.len(), 0..self.pegs.len())
            .filter(|(source, dest)| source != dest)
            .filter_map(|(source, dest)| {
                let disk = self.pegs[source].top()?;
                match self.pegs[dest].top() {
                    Some(other) if other < disk => None,
                    _ => Some(Action { disk, source, dest }),
                }
            })
            .collect()
    }

    /// Apply a legal action to this state, returning the successor state.
    ///
    /// The action is assumed to come from [`State::actions`]; legality is not
    /// re-checked here.
    pub fn apply_action(&self, action: &Action) -> State {
        debug_assert_eq!(self.pegs[action.source].top(), Some(action.disk));
        let mut pegs = self.pegs.clone();
        pegs[action.source] = self.pegs[action.source].without(action.disk);
        pegs[action.dest] = self.pegs[action.dest].with(action.disk);
        State { pegs }
    }

    /// All `(action, successor state)` pairs of this state, in the order
    /// [`State::actions`] enumerates them.
    pub fn successors(&self) -> Vec<(Action, State)> {
        self.actions()
            .into_iter()
            .map(|action| {
                let successor = self.apply_action(&action);
                (action, successor)
            })
            .collect()
    }
}
