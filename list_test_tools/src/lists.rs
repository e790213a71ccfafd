use list_sort_research::list::{Layout, Link, NodeArena};
use rand::seq::SliceRandom;

use crate::patterns;

// Seed salt of the `Scattered` shuffle.
const PLACEMENT_SALT: u64 = 0x5ca7;

/// How list positions are spread over arena memory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Built by pushing every node onto the head, the usual way to build a singly linked list.
    Prepended,
    AddressOrdered,
    /// Every node at a random slot.
    Scattered,
}

impl Placement {
    pub const ALL: [Placement; 3] = [
        Placement::Prepended,
        Placement::AddressOrdered,
        Placement::Scattered,
    ];

    pub fn layout(self, len: usize) -> Layout {
        match self {
            Placement::Prepended => Layout::Prepended,
            Placement::AddressOrdered => Layout::AddressOrdered,
            Placement::Scattered => {
                let mut slots: Vec<u32> = (0..len as u32).collect();
                slots.shuffle(&mut patterns::new_salted_rng(len, PLACEMENT_SALT));
                Layout::Placed(slots)
            }
        }
    }
}

/// Builds a list of `len` keys generated by `pattern`.
pub fn build(len: usize, pattern: fn(usize) -> Vec<u64>, placement: Placement) -> (NodeArena, Link) {
    from_keys(&pattern(len), placement)
}

pub fn from_keys(keys: &[u64], placement: Placement) -> (NodeArena, Link) {
    NodeArena::from_keys(keys, placement.layout(keys.len()))
}

/// Packs a key and a tag that tells equal keys apart. Compare with [`cmp_key`] to ignore the tag.
pub fn tagged(key: u32, tag: u32) -> u64 {
    (u64::from(key) << 32) | u64::from(tag)
}

pub fn tag_of(packed: u64) -> u32 {
    packed as u32
}

pub fn key_of(packed: u64) -> u32 {
    (packed >> 32) as u32
}

pub fn cmp_key(a: &u64, b: &u64) -> std::cmp::Ordering {
    key_of(*a).cmp(&key_of(*b))
}
