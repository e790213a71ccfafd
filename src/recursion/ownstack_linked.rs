use std::cmp::Ordering;

use super::ownstack::{self, Frame, FrameStack, Resume};
use crate::list::{Link, NodeArena};

sort_impl!("ownstack_linked");

/// Sorts the list starting at `head` and returns the new head.
///
/// Top-down merge sort with the recursion simulated on a linked stack of heap allocated frames,
/// one allocation per simulated call.
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
    ownstack::merge_sort(arena, head, &mut LinkedStack::default(), is_less)
}

struct StackFrame {
    frame: Frame,
    below: Option<Box<StackFrame>>,
}

#[derive(Default)]
struct LinkedStack {
    top: Option<Box<StackFrame>>,
}

impl FrameStack for LinkedStack {
    #[inline]
    fn call(&mut self, list: Link) {
        let below = self.top.take();
        self.top = Some(Box::new(StackFrame {
            frame: Frame::call(list),
            below,
        }));
    }

    #[inline]
    fn ret(&mut self) {
        if let Some(top) = self.top.take() {
            debug_assert_eq!(top.frame.resume(), Resume::Done);
            self.top = top.below;
        }
    }

    #[inline]
    fn top(&mut self) -> Option<&mut Frame> {
        self.top.as_deref_mut().map(|top| &mut top.frame)
    }
}
