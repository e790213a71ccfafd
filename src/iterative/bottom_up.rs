use std::cmp::Ordering;

use crate::list::{Link, NodeArena};
use crate::merge::merge;

sort_impl!("bottom_up");

/// Number of pending run slots. Slot `i` holds a run of `2^i` nodes.
pub const SLOTS: usize = 32;

/// Sorts the list starting at `head` and returns the new head.
///
/// Bottom-up merge sort for linked lists: every node is a run of length one, and pending runs are
/// kept in [`SLOTS`] slots that work like the digits of a binary counter. Adding a node carries
/// merges upward through the occupied slots until it reaches a free one. At the end all slots are
/// folded into one list.
///
/// No recursion and no allocation, the slot array is the only auxiliary state. If all slots are
/// occupied the carry stays in the last slot, which only makes that slot hold a longer run.
#[inline]
pub fn sort(arena: &mut NodeArena, head: Link) -> Link {
    merge_sort(arena, head, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<F>(arena: &mut NodeArena, head: Link, mut compare: F) -> Link
where
    F: FnMut(&u64, &u64) -> Ordering,
{
    merge_sort(arena, head, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn merge_sort<F>(arena: &mut NodeArena, head: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let mut slots: [Link; SLOTS] = [None; SLOTS];
    let mut rest = head;

    while let Some(node) = rest {
        rest = arena.take_next(node);

        // Runs in higher slots hold earlier nodes, so they go in as the left argument.
        let mut run = Some(node);
        let mut i = 0;
        while i < SLOTS {
            let Some(pending) = slots[i].take() else {
                break;
            };
            run = merge(arena, Some(pending), run, is_less);
            i += 1;
        }
        slots[i.min(SLOTS - 1)] = run;
    }

    slots
        .into_iter()
        .fold(None, |result, slot| merge(arena, slot, result, is_less))
}
