//! Call/return machinery shared by the merge sorts that keep their own stack of frames instead of
//! recursing on the native call stack.
//!
//! A frame is the state of one simulated `merge_sort(list)` call. The driver loop always works on
//! the top frame and moves it through [`Resume`]:
//!
//! - `NotStarted`: a list of zero or one nodes returns itself. Anything longer is split, the right
//!   half is parked in the frame and `merge_sort(left)` is "called".
//! - `LeftDispatched`: the left call has returned. Its result is parked and `merge_sort(right)` is
//!   "called".
//!
//! A half of a single node is sorted already, so it is returned on the spot instead of getting a
//! frame of its own.
//! - `RightDispatched`: the right call has returned. Both halves get merged and the merge becomes
//!   this frame's return value.
//! - `Done`: the frame has returned and is released.
//!
//! How frames are stored is up to the [`FrameStack`] implementation.

use crate::list::{Link, NodeArena, NodeId};
use crate::merge::merge;
use crate::split::split;

/// Deepest simulated recursion the fixed-capacity stacks support. A list of `n > 1` nodes needs
/// `ceil(log2(n))` frames, so this covers every list an arena can hold.
pub const MAX_DEPTH: usize = 32;

/// Where a frame resumes the next time it is on top of the stack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Resume {
    #[default]
    NotStarted,
    LeftDispatched,
    RightDispatched,
    Done,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Frame {
    list: Link,
    right: Link,
    left_sorted: Link,
    resume: Resume,
}

impl Frame {
    #[inline]
    pub(crate) fn call(list: Link) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }

    #[inline]
    pub fn resume(&self) -> Resume {
        self.resume
    }
}

/// Storage for simulated call frames.
pub(crate) trait FrameStack {
    /// Pushes a fresh frame for `list`, the simulated call.
    fn call(&mut self, list: Link);

    /// Releases the top frame, the simulated return.
    fn ret(&mut self);

    fn top(&mut self) -> Option<&mut Frame>;
}

/// Sorts the list at `head` using `stack` in place of the call stack. `stack` must be empty and is
/// empty again when this returns.
pub(crate) fn merge_sort<S, F>(
    arena: &mut NodeArena,
    head: NodeId,
    stack: &mut S,
    is_less: &mut F,
) -> Link
where
    S: FrameStack,
    F: FnMut(&u64, &u64) -> bool,
{
    // Return value of the most recently returned frame.
    let mut returned: Link = None;

    stack.call(Some(head));

    while let Some(frame) = stack.top() {
        match frame.resume {
            Resume::NotStarted => {
                let Some(list) = frame.list.filter(|&id| arena[id].next().is_some()) else {
                    // Recursion bottomed out on a list of at most one node.
                    returned = frame.list;
                    frame.resume = Resume::Done;
                    stack.ret();
                    continue;
                };

                let (left, right) = split(arena, list);
                frame.right = right;
                frame.resume = Resume::LeftDispatched;
                if arena[left].next().is_none() {
                    returned = Some(left);
                } else {
                    stack.call(Some(left));
                }
            }
            Resume::LeftDispatched => {
                frame.left_sorted = returned.take();
                frame.resume = Resume::RightDispatched;
                match frame.right.take() {
                    Some(right) if arena[right].next().is_some() => stack.call(Some(right)),
                    single => returned = single,
                }
            }
            Resume::RightDispatched => {
                let left_sorted = frame.left_sorted.take();
                frame.resume = Resume::Done;
                stack.ret();
                returned = merge(arena, left_sorted, returned, is_less);
            }
            Resume::Done => stack.ret(),
        }
    }

    returned
}
