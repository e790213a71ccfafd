use std::fmt;
use std::ops::{Index, IndexMut};

/// Index of a node inside a [`NodeArena`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A link to the following node, `None` terminates the list. A list is named by the link to its
/// head, so `None` is also the empty list.
pub type Link = Option<NodeId>;

/// A list element.
///
/// Sorting only ever rewrites `next`. The `reset` link records the order the list was built in
/// and is never written after the arena has been constructed.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: u64,
    pub(crate) next: Link,
    reset: Link,
}

impl Node {
    #[inline]
    pub fn next(&self) -> Link {
        self.next
    }

    #[inline]
    pub fn reset(&self) -> Link {
        self.reset
    }
}

/// Where list positions are placed in arena memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Every node is pushed onto the head of the list, so addresses descend along the list.
    Prepended,
    /// Addresses ascend along the list.
    AddressOrdered,
    /// List position `i` lives in arena slot `slots[i]`. `slots` must be a permutation of
    /// `0..len`.
    Placed(Vec<u32>),
}

/// Storage for the nodes of one or more singly linked lists.
///
/// Nodes are created in bulk and never freed individually. Everything that relinks a list takes
/// the arena by `&mut` for the duration of the call.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Builds one list whose order is the order of `keys`, and returns the arena with the head of
    /// that list. The `reset` chain of every node starts out equal to its `next` chain.
    pub fn from_keys(keys: &[u64], layout: Layout) -> (Self, Link) {
        let len = keys.len();
        assert!(
            len <= u32::MAX as usize,
            "a node arena addresses at most u32::MAX nodes"
        );

        let slots: Vec<u32> = match layout {
            Layout::Prepended => (0..len as u32).rev().collect(),
            Layout::AddressOrdered => (0..len as u32).collect(),
            Layout::Placed(slots) => {
                assert_eq!(slots.len(), len, "placement must cover every key");
                slots
            }
        };

        let mut nodes = vec![
            Node {
                data: 0,
                next: None,
                reset: None,
            };
            len
        ];
        let mut placed = vec![false; len];

        for (pos, (&key, &slot)) in keys.iter().zip(&slots).enumerate() {
            let slot = slot as usize;
            assert!(!placed[slot], "placement slot {slot} used twice");
            placed[slot] = true;

            let next = slots.get(pos + 1).map(|&s| NodeId(s));
            nodes[slot] = Node {
                data: key,
                next,
                reset: next,
            };
        }

        let head = slots.first().map(|&s| NodeId(s));
        (Self { nodes }, head)
    }

    /// Number of nodes stored in the arena, independent of how they are linked.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the node ids of the list starting at `head`, following `next`.
    pub fn iter(&self, head: Link) -> Iter<'_> {
        Iter {
            arena: self,
            cursor: head,
        }
    }

    /// Keys of the list starting at `head`, in list order.
    pub fn keys(&self, head: Link) -> Vec<u64> {
        self.iter(head).map(|id| self[id].data).collect()
    }

    pub fn list_len(&self, head: Link) -> usize {
        self.iter(head).count()
    }

    /// Relinks every node reachable from `head` through the `reset` chain so that `next` equals
    /// `reset` again, restoring the order the list was built in. `head` must be the original head.
    ///
    /// Returns the number of nodes visited.
    pub fn reset_order(&mut self, head: Link) -> usize {
        let mut len = 0;
        let mut cursor = head;
        while let Some(id) = cursor {
            let node = &mut self[id];
            node.next = node.reset;
            cursor = node.reset;
            len += 1;
        }
        len
    }

    /// Overwrites the keys of the list starting at `head` in list order. Links are untouched.
    /// Stops at whichever runs out first, the list or `values`.
    pub fn refresh_keys<I>(&mut self, head: Link, values: I)
    where
        I: IntoIterator<Item = u64>,
    {
        let mut cursor = head;
        let mut values = values.into_iter();
        while let Some(id) = cursor {
            let Some(value) = values.next() else {
                return;
            };
            let node = &mut self[id];
            node.data = value;
            cursor = node.next;
        }
    }

    /// Cuts the list after `id` and returns what used to follow it.
    #[inline]
    pub(crate) fn take_next(&mut self, id: NodeId) -> Link {
        self[id].next.take()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

pub struct Iter<'a> {
    arena: &'a NodeArena,
    cursor: Link,
}

impl<'a> Iterator for Iter<'a> {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.arena[id].next;
        Some(id)
    }
}
