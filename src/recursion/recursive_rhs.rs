use std::cmp::Ordering;

use crate::list::{Link, NodeArena};
use crate::merge::merge;
use crate::split::split;

sort_impl!("recursive_rhs");

/// Sorts the list starting at `head` and returns the new head.
///
/// Recursive merge sort that sorts the right half first and hands it to the merge as the left
/// argument. The keys come out identical to the other engines, but equal keys from the second
/// half of a sublist are placed before those of the first half, so this sort is not stable.
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
    let head = head?;
    if arena[head].next().is_none() {
        return Some(head);
    }

    let (left, right) = split(arena, head);
    let right = merge_sort(arena, right, is_less);
    let left = merge_sort(arena, Some(left), is_less);

    merge(arena, right, left, is_less)
}
