use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use log::trace;

use crate::constants::{CACHE_MASK, CACHE_SETS, CACHE_WAYS};
use crate::integer::{Reciprocal, U256};

use super::pinned;

/// One way of a set. A zero modulus marks an empty way, which is sound
/// because the reciprocal engine never caches the modulus `0`. Ways are
/// ordered newest first.
#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    modulus: U256,
    reciprocal: Reciprocal,
}

#[derive(Debug, Default)]
struct CacheSet {
    ways: RwLock<[Entry; CACHE_WAYS]>,
}

/// A set-associative cache from moduli to their reciprocals.
///
/// Every set owns its own reader/writer lock, so threads working with
/// moduli in different sets never contend. Within a full set the oldest
/// entry is evicted first; hits do not reorder entries.
///
/// The pinned modulus (see [`pinned`](super::pinned)) is answered without
/// taking any lock and is never stored.
pub struct ReciprocalCache {
    sets: Box<[CacheSet]>,
    hit: AtomicU64,
    miss: AtomicU64,
}

impl ReciprocalCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            sets: (0..CACHE_SETS).map(|_| CacheSet::default()).collect(),
            hit: AtomicU64::new(0),
            miss: AtomicU64::new(0),
        }
    }

    /// Returns the `(hit, miss)` counters.
    ///
    /// The counters are updated without ordering guarantees and are only
    /// approximate while other threads use the cache.
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hit.load(Ordering::Relaxed),
            self.miss.load(Ordering::Relaxed),
        )
    }

    /// Looks up the reciprocal of `m`.
    pub fn lookup(&self, m: &U256) -> Option<Reciprocal> {
        if let Some((fixed_m, fixed_r)) = pinned() {
            if *m == fixed_m {
                return Some(fixed_r);
            }
        }

        if CACHE_WAYS == 0 {
            return None;
        }

        let ways = self.sets[set_index(m)]
            .ways
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        match ways.iter().find(|entry| entry.modulus == *m) {
            Some(entry) => {
                self.hit.fetch_add(1, Ordering::Relaxed);
                Some(entry.reciprocal)
            }
            None => {
                self.miss.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Stores the reciprocal of `m`, evicting the oldest entry of a full set.
    ///
    /// `m` must not be zero.
    pub fn insert(&self, m: &U256, reciprocal: Reciprocal) {
        debug_assert!(!m.is_zero(), "a zero modulus marks an empty way");

        if CACHE_WAYS == 0 || pinned().is_some_and(|(fixed_m, _)| *m == fixed_m) {
            return;
        }

        let index = set_index(m);
        let mut ways = self.sets[index]
            .ways
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let entry = Entry {
            modulus: *m,
            reciprocal,
        };

        // Newest in way 0, oldest in the last way. Empty ways trail the
        // occupied ones, so the shift drops an empty way until the set is full.
        if let Some(oldest) = ways.last().filter(|way| !way.modulus.is_zero()) {
            trace!("cache set {index} evicts modulus {}", oldest.modulus);
        }
        ways.rotate_right(1);
        if let Some(newest) = ways.first_mut() {
            *newest = entry;
        }
    }
}

impl Default for ReciprocalCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReciprocalCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hit, miss) = self.stats();
        f.debug_struct("ReciprocalCache")
            .field("sets", &CACHE_SETS)
            .field("ways", &CACHE_WAYS)
            .field("hit", &hit)
            .field("miss", &miss)
            .finish()
    }
}

/// XOR-folds the limbs of `m` down to a set index.
#[inline]
pub(crate) fn set_index(m: &U256) -> usize {
    ((m[0] ^ m[1] ^ m[2] ^ m[3]) & CACHE_MASK) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distinct moduli that all fold to set `set`.
    fn colliding(set: u64, count: u64) -> Vec<U256> {
        (1..=count)
            .map(|k| U256::from_limbs([k << 8, k << 8, set, 0x1000 + k]))
            .map(|m| U256::from_limbs([m[0], m[1], m[2] ^ (m[3] & CACHE_MASK), m[3]]))
            .collect()
    }

    fn fake_reciprocal(k: u64) -> Reciprocal {
        Reciprocal::from_limbs([k, k + 1, k + 2, k + 3, k + 4])
    }

    #[test]
    fn test_round_trip() {
        let cache = ReciprocalCache::new();
        let m = U256::from_limbs([7, 8, 9, 10]);
        assert_eq!(cache.lookup(&m), None);
        cache.insert(&m, fake_reciprocal(3));
        assert_eq!(cache.lookup(&m), Some(fake_reciprocal(3)));
        assert_eq!(cache.stats(), (1, 1));
    }

    #[test]
    fn test_colliding_moduli_share_a_set() {
        for m in colliding(42, 6) {
            assert_eq!(set_index(&m), 42);
        }
    }

    #[test]
    fn test_fifo_eviction() {
        let cache = ReciprocalCache::new();
        let moduli = colliding(17, CACHE_WAYS as u64 + 1);

        for (k, m) in moduli.iter().enumerate() {
            cache.insert(m, fake_reciprocal(k as u64));
        }

        assert_eq!(cache.lookup(&moduli[0]), None);
        for (k, m) in moduli.iter().enumerate().skip(1) {
            assert_eq!(cache.lookup(m), Some(fake_reciprocal(k as u64)));
        }
    }

    #[test]
    fn test_only_first_inserted_is_evicted() {
        let cache = ReciprocalCache::new();
        let moduli = colliding(0, CACHE_WAYS as u64 + 1);

        for (k, m) in moduli.iter().enumerate() {
            cache.insert(m, fake_reciprocal(k as u64));
        }

        let present: Vec<bool> = moduli.iter().map(|m| cache.lookup(m).is_some()).collect();
        let mut expected = vec![true; CACHE_WAYS + 1];
        expected[0] = false;
        assert_eq!(present, expected);
    }

    #[test]
    fn test_partial_set_keeps_everything() {
        let cache = ReciprocalCache::new();
        let moduli = colliding(5, CACHE_WAYS as u64);

        for (k, m) in moduli.iter().enumerate() {
            cache.insert(m, fake_reciprocal(k as u64));
            for (j, earlier) in moduli.iter().enumerate().take(k + 1) {
                assert_eq!(cache.lookup(earlier), Some(fake_reciprocal(j as u64)));
            }
        }

        let ways = cache.sets[5].ways.read().unwrap();
        let order: Vec<U256> = ways.iter().map(|entry| entry.modulus).collect();
        let newest_first: Vec<U256> = moduli.iter().rev().copied().collect();
        assert_eq!(order, newest_first);
    }

    #[test]
    fn test_hits_do_not_reorder() {
        let cache = ReciprocalCache::new();
        let moduli = colliding(99, CACHE_WAYS as u64 + 1);

        for (k, m) in moduli.iter().take(CACHE_WAYS).enumerate() {
            cache.insert(m, fake_reciprocal(k as u64));
        }
        // Touching the oldest entry does not protect it.
        assert!(cache.lookup(&moduli[0]).is_some());
        cache.insert(&moduli[CACHE_WAYS], fake_reciprocal(CACHE_WAYS as u64));
        assert_eq!(cache.lookup(&moduli[0]), None);
    }

    #[test]
    fn test_sets_are_independent() {
        let cache = ReciprocalCache::new();
        let a = colliding(1, CACHE_WAYS as u64 + 1);
        let b = colliding(2, 1);

        cache.insert(&b[0], fake_reciprocal(100));
        for (k, m) in a.iter().enumerate() {
            cache.insert(m, fake_reciprocal(k as u64));
        }
        assert_eq!(cache.lookup(&b[0]), Some(fake_reciprocal(100)));
    }

    #[cfg(feature = "fixed-modulus")]
    #[test]
    fn test_pinned_bypasses_sets() {
        let cache = ReciprocalCache::new();
        let (fixed_m, fixed_r) = pinned().unwrap();

        cache.insert(&fixed_m, fake_reciprocal(1));
        assert_eq!(cache.lookup(&fixed_m), Some(fixed_r));
        assert_eq!(cache.stats(), (0, 0));

        let ways = cache.sets[set_index(&fixed_m)].ways.read().unwrap();
        assert!(ways.iter().all(|entry| entry.modulus.is_zero()));
    }
}
