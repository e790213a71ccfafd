// Bottom-up merge sort with an array of pending runs indexed by log2 of their length.
pub mod bottom_up;

// Repeated passes merging neighbouring blocks of doubling size.
pub mod doubling;
