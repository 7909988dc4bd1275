use std::hash::BuildHasherDefault;

use hashbrown::HashSet as HbHashSet;

use crate::board::BoardState;

type FastHasher = BuildHasherDefault<ahash::AHasher>;

/// Key for a search node: the board plus which hand slots are still unplayed.
/// Only meaningful while the hand's cards stay fixed.
pub type NodeKey = (BoardState, u8);

#[derive(Debug, Clone, Copy, Default)]
pub struct DeadStats {
    pub probes: u64,
    pub hits: u64,
    pub inserts: u64,
}

/// Positions already proven to have no solution.
#[derive(Debug, Default)]
pub struct DeadTable {
    set: HbHashSet<NodeKey, FastHasher>,
    stats: DeadStats,
}

impl DeadTable {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            set: HbHashSet::with_capacity_and_hasher(cap, FastHasher::default()),
            stats: DeadStats::default(),
        }
    }

    #[inline]
    pub fn contains(&mut self, key: &NodeKey) -> bool {
        self.stats.probes += 1;
        let hit = self.set.contains(key);
        if hit {
            self.stats.hits += 1;
        }
        hit
    }

    #[inline]
    pub fn insert(&mut self, key: NodeKey) {
        if self.set.insert(key) {
            self.stats.inserts += 1;
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.set.clear();
        self.stats = DeadStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> DeadStats {
        self.stats
    }
}
