use std::cmp::Ordering;

use crate::list::{Link, NodeArena, NodeId};

sort_impl!("doubling");

/// Sorts the list starting at `head` and returns the new head.
///
/// Iterative merge sort that makes passes over the whole list with a block size `k` of 1, 2, 4,
/// and so on. Each pass merges neighbouring blocks of `k` nodes into a new list. A pass that merged
/// at most one pair of blocks leaves the list sorted.
///
/// The merge is written out inline with the same tie rule as [`crate::merge::merge`]: the node of
/// the earlier block wins ties.
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

/// Append cursor of the list under construction.
#[derive(Default)]
struct Appender {
    head: Link,
    tail: Link,
}

impl Appender {
    #[inline]
    fn push(&mut self, arena: &mut NodeArena, id: NodeId) {
        match self.tail {
            Some(tail) => arena[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    #[inline]
    fn finish(self, arena: &mut NodeArena) -> Link {
        if let Some(tail) = self.tail {
            arena[tail].next = None;
        }
        self.head
    }
}

fn merge_sort<F>(arena: &mut NodeArena, head: Link, is_less: &mut F) -> Link
where
    F: FnMut(&u64, &u64) -> bool,
{
    let mut head = head;
    let mut k = 1usize;

    loop {
        let mut out = Appender::default();
        let mut merges = 0usize;
        let mut p = head;

        while p.is_some() {
            merges += 1;

            // `q` starts right after the block at `p`, which may be shorter than `k` at the end.
            let mut q = p;
            let mut p_len = 0;
            while p_len < k {
                let Some(id) = q else {
                    break;
                };
                q = arena[id].next;
                p_len += 1;
            }
            let mut q_len = k;

            loop {
                let id = match (p, q) {
                    (Some(pid), Some(qid)) if p_len > 0 && q_len > 0 => {
                        if is_less(&arena[qid].data, &arena[pid].data) {
                            q = arena[qid].next;
                            q_len -= 1;
                            qid
                        } else {
                            p = arena[pid].next;
                            p_len -= 1;
                            pid
                        }
                    }
                    (Some(pid), _) if p_len > 0 => {
                        p = arena[pid].next;
                        p_len -= 1;
                        pid
                    }
                    (_, Some(qid)) if q_len > 0 => {
                        q = arena[qid].next;
                        q_len -= 1;
                        qid
                    }
                    _ => break,
                };
                out.push(arena, id);
            }

            // Both blocks are used up, the next pair starts where `q` stopped.
            p = q;
        }

        head = out.finish(arena);
        if merges <= 1 {
            return head;
        }
        k *= 2;
    }
}
