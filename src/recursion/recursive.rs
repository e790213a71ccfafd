use std::cmp::Ordering;

use crate::list::{Link, NodeArena};
use crate::merge::merge;
use crate::split::split;

sort_impl!("recursive");

/// Sorts the list starting at `head` and returns the new head.
///
/// Top-down merge sort on the native call stack: split in half, sort both halves, merge. Recursion
/// depth is `ceil(log2(n)) + 1`. This is the reference every other engine has to agree with.
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
    let left = merge_sort(arena, Some(left), is_less);
    let right = merge_sort(arena, right, is_less);

    merge(arena, left, right, is_less)
}
