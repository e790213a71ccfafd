use thiserror::Error;

use crate::list::{Link, NodeArena};

/// A sort produced a wrong result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("list of size {len} not sorted at element {at}")]
    NotSorted { len: usize, at: usize },
    #[error("list of size {expected} had {found} elements after sort")]
    WrongLength { expected: usize, found: usize },
    #[error("reset list {found} nodes, should have been {expected}")]
    ResetLength { expected: usize, found: usize },
}

impl VerifyError {
    /// Process exit code a benchmark run reports this failure with.
    pub fn exit_code(&self) -> u8 {
        match self {
            VerifyError::NotSorted { .. } => 1,
            VerifyError::WrongLength { .. } => 2,
            VerifyError::ResetLength { .. } => 3,
        }
    }
}

/// Walks the list at `head` and returns its length and whether its keys are non-decreasing.
///
/// If the list is out of order, the returned count is the position (starting at one) of the node
/// before the first descent, and the rest of the list is not walked.
pub fn is_sorted(arena: &NodeArena, head: Link) -> (usize, bool) {
    let mut len = 0;
    let mut prev: Option<u64> = None;
    for id in arena.iter(head) {
        let data = arena[id].data;
        if prev.is_some_and(|p| p > data) {
            return (len, false);
        }
        prev = Some(data);
        len += 1;
    }
    (len, true)
}

/// Checks that the list at `head` is sorted and holds `expected` nodes. Returns the length.
pub fn check_sorted(arena: &NodeArena, head: Link, expected: usize) -> Result<usize, VerifyError> {
    match is_sorted(arena, head) {
        (at, false) => Err(VerifyError::NotSorted { len: expected, at }),
        (found, true) if found != expected => Err(VerifyError::WrongLength { expected, found }),
        (len, true) => Ok(len),
    }
}

/// Restores the original order of the list built with head `original_head` and checks that the
/// reset chain still covers `expected` nodes. Returns the restored head.
pub fn check_reset(
    arena: &mut NodeArena,
    original_head: Link,
    expected: usize,
) -> Result<Link, VerifyError> {
    let found = arena.reset_order(original_head);
    if found != expected {
        return Err(VerifyError::ResetLength { expected, found });
    }
    Ok(original_head)
}
