//! Interface to the external discrete log search that turns an embedded plaintext point back
//! into its integer. No solver ships with this crate.

use crate::curve::Point;
use crate::encrypt::elgamal::PLAINTEXT_BITS;
use crate::Error;
use ark_std::ops::Range;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Exclusive upper bound of the plaintext space, `2^40`.
pub const PLAINTEXT_BOUND: u64 = 1 << PLAINTEXT_BITS;

pub trait DiscreteLog {
    /// Looks for `m` in `range` such that `m * Base8 == embedded`.
    fn search(&self, embedded: &Point, range: Range<u64>) -> Option<u64>;
}

/// Splits `range` into at most `workers` contiguous chunks of `ceil(len / workers)` values.
pub fn shard(range: Range<u64>, workers: usize) -> Vec<Range<u64>> {
    let len = range.end.saturating_sub(range.start);
    if len == 0 {
        return Vec::new();
    }
    let workers = (workers.max(1) as u64).min(len);
    let chunk = len.div_ceil(workers);
    (0..workers)
        .map(|i| {
            let start = range.start + i * chunk;
            start..start.saturating_add(chunk).min(range.end)
        })
        .filter(|shard| !shard.is_empty())
        .collect()
}

/// Runs `solver` over every shard of `range` and returns the first plaintext found.
pub fn search_sharded<S: DiscreteLog + Sync>(
    solver: &S,
    embedded: &Point,
    range: Range<u64>,
    workers: usize,
) -> Result<u64, Error> {
    let shards = shard(range, workers);
    log::trace!("searching discrete log over {} shards", shards.len());

    #[cfg(not(feature = "parallel"))]
    let found = shards
        .into_iter()
        .find_map(|shard| solver.search(embedded, shard));

    #[cfg(feature = "parallel")]
    let found = shards
        .into_par_iter()
        .find_map_any(|shard| solver.search(embedded, shard));

    found.ok_or(Error::DiscreteLogNotFound)
}
