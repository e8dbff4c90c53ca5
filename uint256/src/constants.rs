//! Build-time configuration of the reciprocal cache and the pinned modulus.
//!
//! Total cache size is roughly `(24 + 72 * CACHE_WAYS) * CACHE_SETS` bytes,
//! 96 KiB with the values below. `CACHE_WAYS = 5 + 8n` keeps the way storage
//! of a set a whole number of 64-byte cachelines.

use crate::integer::U256;

/// Number of bits of the folded modulus used to select a cache set.
pub const CACHE_INDEX_BITS: u32 = 8;

/// Number of independent sets, each behind its own lock.
pub const CACHE_SETS: usize = 1 << CACHE_INDEX_BITS;

/// Mask applied to the folded modulus to obtain a set index.
pub const CACHE_MASK: u64 = (CACHE_SETS - 1) as u64;

/// Entries per set. Zero disables the cache.
pub const CACHE_WAYS: usize = 5;

/// The modulus answered by the lock-free fast path when the
/// `fixed-modulus` feature is enabled.
///
/// `0xffffffff00000001_0000000000000000_00000000ffffffff_ffffffffffffffff`
pub const FIXED_MODULUS: U256 = U256::from_limbs([
    0xffffffffffffffff,
    0x00000000ffffffff,
    0x0000000000000000,
    0xffffffff00000001,
]);
