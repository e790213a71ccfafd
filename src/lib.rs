//! Merge sorts for singly linked lists that only relink existing nodes.
//!
//! Every engine has the same contract: it takes the head of a list stored in a [`NodeArena`],
//! relinks the nodes into non-decreasing key order and returns the new head. No node is created,
//! dropped or has its key changed. The engines differ in how they drive the merge sort:
//!
//! - [`recursion`]: top-down merge sort, on the native call stack or on a hand managed stack of
//!   frames.
//! - [`iterative`]: bottom-up merge sort with a binary counter of pending runs, and block size
//!   doubling passes.
//!
//! Lists must be acyclic. Handing an engine a cyclic list does not terminate.

use std::cmp::Ordering;

use list::{Link, NodeArena};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::ListSort for SortImpl {
            const NAME: &'static str = $name;

            #[inline]
            fn sort(
                arena: &mut $crate::list::NodeArena,
                head: $crate::list::Link,
            ) -> $crate::list::Link {
                sort(arena, head)
            }

            #[inline]
            fn sort_by<F>(
                arena: &mut $crate::list::NodeArena,
                head: $crate::list::Link,
                compare: F,
            ) -> $crate::list::Link
            where
                F: FnMut(&u64, &u64) -> std::cmp::Ordering,
            {
                sort_by(arena, head, compare)
            }
        }
    };
}

pub mod counter;
pub mod iterative;
pub mod list;
pub mod merge;
pub mod recursion;
pub mod split;
pub mod verify;

/// A linked list merge sort.
pub trait ListSort {
    const NAME: &'static str;

    fn name() -> String {
        Self::NAME.into()
    }

    /// Sorts the list at `head` by key and returns the new head.
    fn sort(arena: &mut NodeArena, head: Link) -> Link;

    /// Sorts the list at `head` with `compare` and returns the new head.
    fn sort_by<F>(arena: &mut NodeArena, head: Link, compare: F) -> Link
    where
        F: FnMut(&u64, &u64) -> Ordering;
}

pub type SortFn = fn(&mut NodeArena, Link) -> Link;

pub type SortByFn = fn(&mut NodeArena, Link, &mut dyn FnMut(&u64, &u64) -> Ordering) -> Link;

/// Type erased handle on one [`ListSort`], for picking an engine at runtime.
#[derive(Copy, Clone)]
pub struct Engine {
    pub name: &'static str,
    pub sort: SortFn,
    pub sort_by: SortByFn,
}

impl Engine {
    pub const fn of<S: ListSort>() -> Self {
        Self {
            name: S::NAME,
            sort: S::sort,
            sort_by: sort_by_dyn::<S>,
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Engine").field(&self.name).finish()
    }
}

fn sort_by_dyn<S: ListSort>(
    arena: &mut NodeArena,
    head: Link,
    compare: &mut dyn FnMut(&u64, &u64) -> Ordering,
) -> Link {
    S::sort_by(arena, head, compare)
}

pub static ENGINES: [Engine; 9] = [
    Engine::of::<recursion::recursive::SortImpl>(),
    Engine::of::<recursion::recursive_counted::SortImpl>(),
    Engine::of::<recursion::recursive_rhs::SortImpl>(),
    Engine::of::<recursion::recursive_alternating::SortImpl>(),
    Engine::of::<recursion::ownstack_linked::SortImpl>(),
    Engine::of::<recursion::ownstack_array::SortImpl>(),
    Engine::of::<recursion::ownstack_pool::SortImpl>(),
    Engine::of::<iterative::bottom_up::SortImpl>(),
    Engine::of::<iterative::doubling::SortImpl>(),
];

pub fn engine_by_name(name: &str) -> Option<&'static Engine> {
    ENGINES.iter().find(|engine| engine.name == name)
}
