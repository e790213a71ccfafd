use std::cmp::Ordering;

use crate::list::{Link, NodeArena};
use crate::merge::merge;
use crate::split::split;

sort_impl!("recursive_alternating");

/// Sorts the list starting at `head` and returns the new head.
///
/// Recursive merge sort whose levels alternate between two mirrored steps. The first half step
/// sorts the first half before the second and merges them in list order. The second half step
/// sorts the second half first and hands it to the merge as the left argument, like
/// `recursive_rhs`. The top level takes the first half step, its children the second half step, and
/// so on down. Equal keys end up reordered at every other level, so this sort is not stable.
#[inline]
pub fn sort(arena: &mut NodeArena, head: Link) -> Link {
    first_half_first(arena, head, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<F>(arena: &mut NodeArena, head: Link, mut compare: F) -> Link
where
    F: FnMut(&u64, &u64) -> Ordering,
{
    first_half_first(arena, head, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn first_half_first<F>(arena: &mut NodeArena, head: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let head = head?;
    if arena[head].next().is_none() {
        return Some(head);
    }

    let (left, right) = split(arena, head);
    let left = second_half_first(arena, Some(left), is_less);
    let right = second_half_first(arena, right, is_less);

    merge(arena, left, right, is_less)
}

fn second_half_first<F>(arena: &mut NodeArena, head: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let head = head?;
    if arena[head].next().is_none() {
        return Some(head);
    }

    let (left, right) = split(arena, head);
    let right = first_half_first(arena, right, is_less);
    let left = first_half_first(arena, Some(left), is_less);

    merge(arena, right, left, is_less)
}
