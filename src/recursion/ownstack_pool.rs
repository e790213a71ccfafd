use std::cmp::Ordering;

use super::ownstack::{self, Frame, FrameStack, Resume, MAX_DEPTH};
use crate::list::{Link, NodeArena};

sort_impl!("ownstack_pool");

/// Sorts the list starting at `head` and returns the new head.
///
/// Top-down merge sort with the recursion simulated on frames drawn from a preallocated
/// [`FramePool`]. A frame goes back to the pool when its simulated call returns.
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

/// Like [`sort_by`], but draws its frames from `pool`, so repeated sorts can share one pool.
pub fn sort_by_in<F>(arena: &mut NodeArena, head: Link, pool: &mut FramePool, mut compare: F) -> Link
where
    F: FnMut(&u64, &u64) -> Ordering,
{
    let head = head?;
    ownstack::merge_sort(arena, head, pool, &mut |a, b| {
        compare(a, b) == Ordering::Less
    })
}

fn merge_sort<F>(arena: &mut NodeArena, head: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let head = head?;
    ownstack::merge_sort(arena, head, &mut FramePool::new(), is_less)
}

#[derive(Copy, Clone)]
struct PoolFrame {
    frame: Frame,
    // Next frame on the free list, or the frame below on the stack.
    link: Option<u8>,
}

/// A fixed set of [`MAX_DEPTH`] frames threaded onto a free list. Simulated calls take the first
/// free frame and push it on the stack, simulated returns put it back.
pub struct FramePool {
    frames: [PoolFrame; MAX_DEPTH],
    free: Option<u8>,
    top: Option<u8>,
    depth: u8,
    high_water: u8,
}

impl FramePool {
    pub fn new() -> Self {
        let mut frames = [PoolFrame {
            frame: Frame::default(),
            link: None,
        }; MAX_DEPTH];
        for (i, slot) in frames.iter_mut().enumerate() {
            slot.link = (i + 1 < MAX_DEPTH).then_some(i as u8 + 1);
        }

        Self {
            frames,
            free: Some(0),
            top: None,
            depth: 0,
            high_water: 0,
        }
    }

    /// Number of frames currently on the free list.
    pub fn available(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free;
        while let Some(slot) = cursor {
            count += 1;
            cursor = self.frames[slot as usize].link;
        }
        count
    }

    /// Most frames this pool has had in use at once since it was created.
    pub fn high_water(&self) -> usize {
        self.high_water as usize
    }
}

impl Default for FramePool {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStack for FramePool {
    #[inline]
    fn call(&mut self, list: Link) {
        let Some(slot) = self.free else {
            panic!("merge sort recursion deeper than {MAX_DEPTH}, frame pool exhausted");
        };

        let entry = &mut self.frames[slot as usize];
        self.free = entry.link;
        entry.frame = Frame::call(list);
        entry.link = self.top;
        self.top = Some(slot);
        self.depth += 1;
        self.high_water = self.high_water.max(self.depth);
    }

    #[inline]
    fn ret(&mut self) {
        if let Some(slot) = self.top {
            let entry = &mut self.frames[slot as usize];
            debug_assert_eq!(entry.frame.resume(), Resume::Done);
            self.top = entry.link;
            entry.link = self.free;
            self.free = Some(slot);
            self.depth -= 1;
        }
    }

    #[inline]
    fn top(&mut self) -> Option<&mut Frame> {
        let slot = self.top?;
        Some(&mut self.frames[slot as usize].frame)
    }
}
