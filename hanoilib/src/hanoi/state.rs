use super::*;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// The set of disks on a single peg, stored in ascending order.
///
/// The set is unordered in the physical sense; the sorted representation
/// makes the top disk the first element and keeps equality and hashing
/// canonical. The smallest disk is the top of the stack and the only one
/// that can move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Peg {
    disks: Vec<Disk>,
}

impl Peg {
    /// Create a peg from the given disks. Input order is insignificant.
    pub fn new(mut disks: Vec<Disk>) -> Peg {
        disks.sort_unstable();
        Peg { disks }
    }

    /// The movable disk of this peg: the smallest one. `None` if the peg is
    /// empty.
    #[inline]
    pub fn top(&self) -> Option<Disk> {
        self.disks.first().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn contains(&self, disk: Disk) -> bool {
        self.disks.binary_search(&disk).is_ok()
    }

    /// The disks of this peg as a sorted slice.
    pub fn as_slice(&self) -> &[Disk] {
        &self.disks
    }

    /// A new peg with `disk` added.
    pub fn with(&self, disk: Disk) -> Peg {
        let mut disks = self.disks.clone();
        let position = disks.binary_search(&disk).unwrap_or_else(|p| p);
        disks.insert(position, disk);
        Peg { disks }
    }

    /// A new peg with `disk` removed.
    pub fn without(&self, disk: Disk) -> Peg {
        debug_assert!(self.contains(disk), "removed disk must be on the peg");
        let mut disks = self.disks.clone();
        if let Ok(position) = disks.binary_search(&disk) {
            disks.remove(position);
        }
        Peg { disks }
    }
}

/// A complete arrangement of the board: one disk set per peg position.
///
/// Peg order is significant and stable; the order of disks within a peg is
/// not. Derived states are always newly constructed, never edited in place.
#[derive(Eq, Clone, Debug)]
pub struct State {
    pub pegs: Vec<Peg>,
}

impl State {
    pub fn new(pegs: Vec<Peg>) -> State {
        State { pegs }
    }

    /// Number of peg positions on the board.
    #[inline]
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// All disks on the board in ascending order.
    pub fn disks(&self) -> Vec<Disk> {
        self.pegs.iter().fold(Vec::new(), |universe, peg| {
            crate::utils::sorted_union(&universe, peg.as_slice())
        })
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        let peg_count = self.pegs.len();
        assert_eq!(
            peg_count,
            other.pegs.len(),
            "Equality is undefined for states of different boards."
        );
        for i in 0..peg_count {
            if self.pegs[i] != other.pegs[i] {
                return false;
            }
        }
        true
    }
}

/// Hash is implemented for index lookup for a given state.
impl std::hash::Hash for State {
    fn hash<H: std::hash::Hasher>(&self, hash_state: &mut H) {
        // We don't hash the peg count because it will be the same in a given
        // HashMap. Each peg hashes its length, so peg boundaries stay
        // unambiguous.
        for peg in self.pegs.iter() {
            peg.disks.hash(hash_state);
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, disk) in self.disks.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", disk)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", peg)?;
        }
        Ok(())
    }
}

impl Serialize for Peg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.disks.len()))?;
        for disk in self.disks.iter() {
            seq.serialize_element(disk)?;
        }
        seq.end()
    }
}

impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.pegs.len()))?;
        for peg in self.pegs.iter() {
            seq.serialize_element(peg)?;
        }
        seq.end()
    }
}
