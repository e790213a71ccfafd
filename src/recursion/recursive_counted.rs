use std::cmp::Ordering;

use crate::list::{Link, NodeArena, NodeId};
use crate::merge::merge;
use crate::split::split_at;

sort_impl!("recursive_counted");

/// Sorts the list starting at `head` and returns the new head.
///
/// Same shape as the plain recursive sort, but every call knows the length of its sublist, so
/// finding the middle walks only the left half instead of racing two cursors over the whole list.
/// The list is counted once up front.
#[inline]
pub fn sort(arena: &mut NodeArena, head: Link) -> Link {
    sort_impl(arena, head, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<F>(arena: &mut NodeArena, head: Link, mut compare: F) -> Link
where
    F: FnMut(&u64, &u64) -> Ordering,
{
    sort_impl(arena, head, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn sort_impl<F>(arena: &mut NodeArena, head: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let len = arena.list_len(head);
    merge_sort(arena, head?, len, is_less)
}

fn merge_sort<F>(arena: &mut NodeArena, head: NodeId, len: usize, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    if len <= 1 {
        return Some(head);
    }

    let left_len = len - len / 2;
    let (left, right) = split_at(arena, head, left_len);
    let Some(right) = right else {
        unreachable!("list shorter than its recorded length");
    };

    let left = merge_sort(arena, left, left_len, is_less);
    let right = merge_sort(arena, right, len - left_len, is_less);

    merge(arena, left, right, is_less)
}
