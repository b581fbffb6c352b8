//! Rayon-based parallelisation utilities.
//!
//! Simulation work is split into fixed-size chunks of iterations. Each chunk
//! is self-contained (it owns its random stream), so the merged output is the
//! same whether chunks run on one thread or many.

use rayon::prelude::*;

/// Iterations per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Minimum iterations before chunks are spread across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2_048;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Minimum work items before using parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Always run sequentially.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Half-open index range of one chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Position of the chunk, used to derive its random stream.
    pub index: usize,
    /// First iteration.
    pub start: usize,
    /// One past the last iteration.
    pub end: usize,
}

impl Chunk {
    /// Iterations in the chunk.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// `true` for an empty chunk.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Split `total` iterations into chunks of at most `chunk_size`.
pub fn chunks(total: usize, chunk_size: usize) -> Vec<Chunk> {
    let size = chunk_size.max(1);
    (0..total.div_ceil(size))
        .map(|index| {
            let start = index * size;
            Chunk {
                index,
                start,
                end: (start + size).min(total),
            }
        })
        .collect()
}

/// Map each chunk through `processor`, in parallel when `total` meets the
/// threshold. Results come back in chunk order either way.
pub fn map_chunks<R, F>(
    total: usize,
    chunk_size: usize,
    config: &ParallelConfig,
    processor: F,
) -> Vec<R>
where
    R: Send,
    F: Fn(Chunk) -> R + Sync + Send,
{
    let work = chunks(total, chunk_size);
    if config.should_parallelize(total) {
        work.into_par_iter().map(processor).collect()
    } else {
        work.into_iter().map(processor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_cover_range() {
        let parts = chunks(1_000, 256);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[3], Chunk { index: 3, start: 768, end: 1_000 });
        assert_eq!(parts.iter().map(Chunk::len).sum::<usize>(), 1_000);
    }

    #[test]
    fn test_chunks_edge_cases() {
        assert!(chunks(0, 256).is_empty());
        assert_eq!(chunks(5, 0).len(), 5);
    }

    #[test]
    fn test_map_chunks_order_is_stable() {
        let sequential = map_chunks(10_000, 64, &ParallelConfig::sequential(), |c| c.start);
        let parallel = map_chunks(10_000, 64, &ParallelConfig::new(1), |c| c.start);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(!config.should_parallelize(100));
        assert!(config.should_parallelize(DEFAULT_PARALLEL_THRESHOLD));
        assert!(!ParallelConfig::sequential().should_parallelize(usize::MAX - 1));
    }
}
