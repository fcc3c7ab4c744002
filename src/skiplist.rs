use crate::internal::utils::CoinFlip;
use crate::key::MinValue;
use crate::SkipList;

/// The operations of an ordered set that may hold a key more than once.
pub trait OrderedSet<K> {
    fn new() -> Self;

    fn search(&self, target: &K) -> bool;

    fn add(&mut self, key: K);

    fn erase(&mut self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() < 1
    }
}

impl<K> OrderedSet<K> for SkipList<K, CoinFlip>
where
    K: MinValue + PartialOrd,
{
    fn new() -> Self {
        SkipList::new()
    }

    fn search(&self, target: &K) -> bool {
        SkipList::search(self, target)
    }

    fn add(&mut self, key: K) {
        SkipList::add(self, key)
    }

    fn erase(&mut self, key: &K) -> bool {
        SkipList::erase(self, key)
    }

    fn len(&self) -> usize {
        SkipList::len(self)
    }
}
