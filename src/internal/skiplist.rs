use core::fmt::Debug;

use tracing::{debug, instrument, trace, warn};

use crate::config::{Config, DEFAULT_MAX_LEVEL};
use crate::error::{Result, SkipListError};
use crate::internal::utils::{Arena, CoinFlip, GeneratesHeight, Node, NodeId, HEAD, MAX_HEIGHT};
use crate::key::MinValue;

/// An ordered set of keys kept in a stack of increasingly sparse linked lists.
///
/// Every level is a sorted chain starting at the head. Level `0` holds every
/// key, and a node present on level `i` is present on all levels below `i`.
/// Heights are drawn from `G`, which makes the expected cost of every
/// operation logarithmic in the number of keys.
///
/// Keys are not deduplicated: adding a key twice stores it twice, and each
/// [erase](SkipList::erase) takes out one occurrence.
pub struct SkipList<K, G = CoinFlip> {
    nodes: Arena<K>,
    level: usize,
    max_level: usize,
    len: usize,
    heights: G,
}

impl<K> SkipList<K, CoinFlip>
where
    K: MinValue,
{
    pub fn new() -> Self {
        Self::build(DEFAULT_MAX_LEVEL, CoinFlip::new())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let heights = match config.seed() {
            Some(seed) => CoinFlip::seeded(seed),
            None => CoinFlip::new(),
        };

        Ok(Self::build(config.max_level(), heights))
    }
}

impl<K, G> SkipList<K, G>
where
    K: MinValue,
    G: GeneratesHeight,
{
    /// Builds a list that asks `heights` for the height of each new node.
    /// The seed of `config` is ignored.
    pub fn with_height_generator(config: Config, heights: G) -> Result<Self> {
        config.validate()?;

        Ok(Self::build(config.max_level(), heights))
    }

    fn build(max_level: usize, heights: G) -> Self {
        debug_assert!(max_level > 0 && max_level <= MAX_HEIGHT);
        debug!(max_level, "creating skip list");

        SkipList {
            nodes: Arena::with_head(Node::new(K::min_value(), max_level)),
            level: 1,
            max_level,
            len: 0,
            heights,
        }
    }
}

impl<K, G> SkipList<K, G> {
    /// The number of stored keys, counting every duplicate.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len < 1
    }

    /// The number of levels currently in use, always in `1..=max_level`.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Removes every key. The list keeps its configuration.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        self.nodes.truncate_to_head();
        self.nodes[HEAD].levels.iter_mut().for_each(|next| *next = None);
        self.level = 1;
        self.len = 0;
    }

    /// Drops the empty levels at the top, never going below one level.
    fn shrink(&mut self) {
        let before = self.level;

        while self.level > 1 && self.nodes[HEAD].levels[self.level - 1].is_none() {
            self.level -= 1;
        }

        if self.level != before {
            debug!(from = before, to = self.level, "lowered skip list level");
        }
    }
}

impl<K, G> SkipList<K, G>
where
    K: PartialOrd,
    G: GeneratesHeight,
{
    /// Moves right along `level`, starting at `node`, for as long as the next
    /// key is smaller than `target`.
    ///
    /// The returned node's successor on `level` is either missing or holds a key
    /// `>= target`. Only `level` is looked at.
    fn find_next(&self, node: NodeId, level: usize, target: &K) -> NodeId {
        let mut curr = node;

        while let Some(next) = self.nodes[curr].levels[level] {
            if self.nodes[next].key < *target {
                curr = next;
            } else {
                break;
            }
        }

        curr
    }

    /// The successor of `node` on `level`, if it holds `key`.
    fn next_if_eq(&self, node: NodeId, level: usize, key: &K) -> Option<NodeId> {
        self.nodes[node].levels[level].filter(|next| self.nodes[*next].key == *key)
    }

    /// Returns whether a node holding `target` is stored.
    #[instrument(level = "trace", skip_all)]
    pub fn search(&self, target: &K) -> bool {
        let mut curr = HEAD;

        for level in (0..self.level).rev() {
            curr = self.find_next(curr, level, target);

            if self.next_if_eq(curr, level, target).is_some() {
                trace!(level, "found key");
                return true;
            }
        }

        false
    }

    /// Inserts `key`, next to any equal keys already stored.
    ///
    /// Keys that are not comparable with themselves, such as `NaN`, can not be
    /// ordered and are dropped. Use [try_add](SkipList::try_add) to be told.
    pub fn add(&mut self, key: K) {
        if let Err(err) = self.try_add(key) {
            warn!(%err, "dropping key");
        }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn try_add(&mut self, key: K) -> Result<()> {
        if key.partial_cmp(&key).is_none() {
            return Err(SkipListError::IncomparableKey);
        }

        let height = self.heights.gen_height(self.max_level).clamp(1, self.max_level);

        if height > self.level {
            debug!(from = self.level, to = height, "raised skip list level");
            self.level = height;
        }

        let prev = self.find_predecessors(&key);
        let node = self.nodes.alloc(Node::new(key, height));

        self.link_node(node, &prev);
        self.len += 1;

        trace!(height, len = self.len, "inserted key");

        Ok(())
    }

    /// Collects, for every active level, the last node with a key smaller than `key`.
    fn find_predecessors(&self, key: &K) -> [NodeId; MAX_HEIGHT] {
        let mut prev = [HEAD; MAX_HEIGHT];
        let mut curr = HEAD;

        for level in (0..self.level).rev() {
            curr = self.find_next(curr, level, key);
            prev[level] = curr;
        }

        prev
    }

    /// Splices `node` in after `prev[i]` on each level `i` of its tower.
    fn link_node(&mut self, node: NodeId, prev: &[NodeId; MAX_HEIGHT]) {
        for level in 0..self.nodes[node].height() {
            let next = self.nodes[prev[level]].levels[level];

            self.nodes[node].levels[level] = next;
            self.nodes[prev[level]].levels[level] = Some(node);
        }
    }

    /// Removes one occurrence of `key`, returning whether there was one.
    ///
    /// Every level unlinks the first node holding `key` it meets. With
    /// duplicates of different heights, the upper levels may drop a different
    /// node than the lower ones. The node unlinked on level `0` is the one that
    /// leaves the list; the other keeps the levels below where it was cut.
    #[instrument(level = "trace", skip_all)]
    pub fn erase(&mut self, key: &K) -> bool {
        let mut removed = false;
        let mut curr = HEAD;

        for level in (0..self.level).rev() {
            curr = self.find_next(curr, level, key);

            if let Some(target) = self.next_if_eq(curr, level, key) {
                self.unlink_level(curr, target, level);
                removed = true;
            }
        }

        self.shrink();

        removed
    }

    /// Unlinks `node` from `level`. Levels are unlinked top down, so the tower
    /// is cut at `level`; an empty tower means the node is gone from the list.
    fn unlink_level(&mut self, prev: NodeId, node: NodeId, level: usize) {
        let next = self.nodes[node].levels[level];
        self.nodes[prev].levels[level] = next;

        let tower = &mut self.nodes[node].levels;
        tower.truncate(level);

        if tower.is_empty() {
            self.nodes.release(node);
            self.len -= 1;
            trace!(len = self.len, "removed key");
        }
    }
}

impl<K> Default for SkipList<K, CoinFlip>
where
    K: MinValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, G> Debug for SkipList<K, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len)
            .field("level", &self.level)
            .field("max_level", &self.max_level)
            .finish()
    }
}
