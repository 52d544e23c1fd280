//! Primitive data types.

/// Data type for disk identifiers. The value doubles as the disk size, so it
/// must be unique within a problem.
pub type Disk = u32;
/// Data type for peg indices.
pub type PegIndex = usize;
/// Data type for state indices.
pub type StateIndex = usize;
