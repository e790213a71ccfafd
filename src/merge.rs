use crate::list::{Link, NodeArena};

/// Merges the sorted lists `left` and `right` into one sorted list by relinking their nodes, and
/// returns its head.
///
/// A node is taken from `right` only if `is_less(right, left)` holds for the two fronts, so on
/// equal keys the `left` node comes first. `is_less` is called exactly once per comparison of two
/// fronts, and not at all if either list is empty.
pub fn merge<F>(arena: &mut NodeArena, left: Link, right: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let (mut left, mut right) = match (left, right) {
        (None, rest) | (rest, None) => return rest,
        (Some(l), Some(r)) => (l, r),
    };

    // Pick the head before the loop, so the loop always has a tail to append to.
    let head = if is_less(&arena[right].data, &arena[left].data) {
        let head = right;
        match arena[head].next {
            Some(next) => right = next,
            None => {
                arena[head].next = Some(left);
                return Some(head);
            }
        }
        head
    } else {
        let head = left;
        match arena[head].next {
            Some(next) => left = next,
            None => {
                arena[head].next = Some(right);
                return Some(head);
            }
        }
        head
    };

    let mut tail = head;
    loop {
        if is_less(&arena[right].data, &arena[left].data) {
            arena[tail].next = Some(right);
            tail = right;
            match arena[right].next {
                Some(next) => right = next,
                None => {
                    arena[tail].next = Some(left);
                    break;
                }
            }
        } else {
            arena[tail].next = Some(left);
            tail = left;
            match arena[left].next {
                Some(next) => left = next,
                None => {
                    arena[tail].next = Some(right);
                    break;
                }
            }
        }
    }

    Some(head)
}
