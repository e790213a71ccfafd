use std::cmp::Ordering;

use super::ownstack::{self, Frame, FrameStack, Resume, MAX_DEPTH};
use crate::list::{Link, NodeArena};

sort_impl!("ownstack_array");

/// Sorts the list starting at `head` and returns the new head.
///
/// Top-down merge sort with the recursion simulated in a fixed array of [`MAX_DEPTH`] frames
/// addressed by the current depth. Nothing is allocated.
///
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
    let mut stack = ArrayStack {
        frames: [Frame::default(); MAX_DEPTH],
        depth: 0,
    };
    ownstack::merge_sort(arena, head, &mut stack, is_less)
}

struct ArrayStack {
    frames: [Frame; MAX_DEPTH],
    // Number of live frames, the top one is `frames[depth - 1]`.
    depth: usize,
}

impl FrameStack for ArrayStack {
    #[inline]
    fn call(&mut self, list: Link) {
        assert!(self.depth < MAX_DEPTH, "merge sort recursion deeper than {MAX_DEPTH}");
        self.frames[self.depth] = Frame::call(list);
        self.depth += 1;
    }

    #[inline]
    fn ret(&mut self) {
        if let Some(top) = self.depth.checked_sub(1) {
            debug_assert_eq!(self.frames[top].resume(), Resume::Done);
            self.depth = top;
        }
    }

    #[inline]
    fn top(&mut self) -> Option<&mut Frame> {
        let top = self.depth.checked_sub(1)?;
        Some(&mut self.frames[top])
    }
}
