use crate::list::{Link, NodeArena, NodeId};

/// Splits the non-empty list at `head` into a left half of `ceil(n / 2)` nodes that keeps `head`
/// and a right half of `floor(n / 2)` nodes, which is empty for a single node.
///
/// One pass with a slow and a fast cursor, no length count. Only the link that ends the left half
/// is written.
pub fn split(arena: &mut NodeArena, head: NodeId) -> (NodeId, Link) {
    // Starting `fast` one node ahead makes `slow` stop on the last node of the left half, for odd
    // and even lengths alike.
    let mut slow = head;
    let mut fast = arena[head].next;

    while let Some(two_ahead) = fast.and_then(|f| arena[f].next) {
        let Some(next) = arena[slow].next else {
            unreachable!("slow cursor ran past the fast cursor");
        };
        slow = next;
        fast = arena[two_ahead].next;
    }

    let right = arena.take_next(slow);
    (head, right)
}

/// Splits the list at `head` after its first `left_len` nodes, walking only those nodes.
///
/// `left_len` must be at least one and at most the length of the list.
pub fn split_at(arena: &mut NodeArena, head: NodeId, left_len: usize) -> (NodeId, Link) {
    debug_assert!(left_len >= 1);

    let mut last = head;
    for _ in 1..left_len {
        let Some(next) = arena[last].next else {
            unreachable!("split_at past the end of the list");
        };
        last = next;
    }

    let right = arena.take_next(last);
    (head, right)
}
