//! Concurrency-safe transposition table for perft subtree counts.
//!
//! Entries are keyed by (Zobrist hash, remaining depth) and store the
//! subtree's node count. The table is striped across independently locked
//! shards so parallel workers can probe and store without contending on a
//! single lock. Lookups verify the full key; a hit can therefore only come
//! from the same position fingerprint at the same depth, which keeps counts
//! identical to an untabled search.

use std::mem;

use parking_lot::Mutex;

const SHARD_COUNT: usize = 64;

#[derive(Clone, Copy)]
struct Entry {
    hash: u64,
    depth: u32,
    nodes: u64,
}

/// Fixed-capacity, mutex-striped map from (position hash, depth) to a
/// perft node count.
pub struct PerftTable {
    shards: Vec<Mutex<Vec<Option<Entry>>>>,
    slot_mask: usize,
}

impl PerftTable {
    /// Create a table using roughly `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<Entry>>();
        let mut num_slots = (size_mb * 1024 * 1024) / entry_size;
        num_slots = num_slots.next_power_of_two() / 2;
        if num_slots < SHARD_COUNT {
            num_slots = SHARD_COUNT;
        }
        let slots_per_shard = num_slots / SHARD_COUNT;

        let shards = (0..SHARD_COUNT)
            .map(|_| Mutex::new(vec![None; slots_per_shard]))
            .collect();

        PerftTable {
            shards,
            slot_mask: slots_per_shard - 1,
        }
    }

    #[inline]
    fn locate(&self, hash: u64) -> (usize, usize) {
        let shard = (hash as usize) & (SHARD_COUNT - 1);
        let slot = ((hash >> 6) as usize) & self.slot_mask;
        (shard, slot)
    }

    /// Look up the node count stored for this position and depth.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: usize) -> Option<u64> {
        let (shard, slot) = self.locate(hash);
        let guard = self.shards[shard].lock();
        match guard[slot] {
            Some(entry) if entry.hash == hash && entry.depth == depth as u32 => Some(entry.nodes),
            _ => None,
        }
    }

    /// Store a node count. On a slot collision the deeper entry wins; a
    /// same-position entry is always refreshed.
    pub fn store(&self, hash: u64, depth: usize, nodes: u64) {
        let (shard, slot) = self.locate(hash);
        let mut guard = self.shards[shard].lock();
        let replace = match guard[slot] {
            None => true,
            Some(existing) => existing.hash == hash || depth as u32 >= existing.depth,
        };
        if replace {
            guard[slot] = Some(Entry {
                hash,
                depth: depth as u32,
                nodes,
            });
        }
    }
}
