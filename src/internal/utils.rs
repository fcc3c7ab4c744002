use core::{
    fmt::Debug,
    ops::{Index, IndexMut},
};

use rand::{rngs::SmallRng, RngCore, SeedableRng};

pub(crate) const HEIGHT_BITS: usize = 5;

/// The tallest tower any list may be configured for.
pub const MAX_HEIGHT: usize = 1 << HEIGHT_BITS;

/// A draw below this keeps the tower growing, which happens half the time.
const KEEP_GROWING: u32 = 1 << 31;

/// Index of a node inside the [Arena] of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The head always occupies the first slot and is never released.
pub(crate) const HEAD: NodeId = NodeId(0);

/// A key and its pointer tower. `levels[i]` is the successor on level `i`.
///
/// The tower only ever holds the levels the node is linked into: when a node
/// is unlinked from a level, the tower is cut down to below that level.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) levels: Vec<Option<NodeId>>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, height: usize) -> Self {
        Node {
            key,
            levels: vec![None; height],
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }
}

impl<K> Debug for Node<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height())
            .field("levels", &self.levels)
            .finish()
    }
}

/// Owns every node of a list. Released slots are recycled before the arena grows.
pub(crate) struct Arena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
}

impl<K> Arena<K> {
    /// Creates an arena whose first slot is taken by `head`.
    pub(crate) fn with_head(head: Node<K>) -> Self {
        Arena {
            slots: vec![Some(head)],
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<K>> {
        if id == HEAD {
            panic!("the head of a list can not be released");
        }

        let node = self.slots.get_mut(id.0)?.take();
        if node.is_some() {
            self.free.push(id);
        }
        node
    }

    /// Drops every node but the head.
    pub(crate) fn truncate_to_head(&mut self) {
        self.slots.truncate(1);
        self.free.clear();
    }

    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.slots.len()
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {}", id.0),
        }
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {}", id.0),
        }
    }
}

/// Picks the height of the tower of a newly inserted node.
pub trait GeneratesHeight {
    /// Returns a height in `1..=max_level`.
    fn gen_height(&mut self, max_level: usize) -> usize;
}

/// Geometric heights: a tower grows one more level for every won coin flip.
pub struct CoinFlip {
    rng: SmallRng,
}

impl CoinFlip {
    pub fn new() -> Self {
        CoinFlip {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        CoinFlip {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        CoinFlip::new()
    }
}

impl GeneratesHeight for CoinFlip {
    fn gen_height(&mut self, max_level: usize) -> usize {
        let mut height = 1;

        while height < max_level && self.rng.next_u32() < KEEP_GROWING {
            height += 1;
        }

        height
    }
}
