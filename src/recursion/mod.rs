// Plain top-down merge sort on the native call stack, the reference result.
pub mod recursive;

// Top-down merge sort that splits by known sublist length instead of slow/fast cursors.
pub mod recursive_counted;

// Top-down merge sort that sorts the right half first and merges it as the left argument.
pub mod recursive_rhs;

// Top-down merge sort alternating per level between first-half-first and right-half-first steps.
pub mod recursive_alternating;

mod ownstack;

pub use ownstack::MAX_DEPTH;

// Simulated recursion, heap allocated linked stack of frames.
pub mod ownstack_linked;

// Simulated recursion, fixed array of frames indexed by depth.
pub mod ownstack_array;

// Simulated recursion, preallocated pool of frames on a free list.
pub mod ownstack_pool;
