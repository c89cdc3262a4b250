// ABOUTME: Caller-owned LRU memo for health scores keyed by an input fingerprint
// ABOUTME: SHA-256 over the scoring input and configuration, hex encoded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use crate::config::ScoringConfig;
use crate::scoring::score_product;
use lru::LruCache;
use nutriscan_core::models::ScoringInput;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;

/// Hit and miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that computed a fresh score
    pub misses: u64,
}

/// LRU memo around [`score_product`]
///
/// Scoring is pure, so a fingerprint of the input and the configuration fully
/// determines the score. The cache is an explicit value owned by the caller;
/// nothing in the engines reads it.
#[derive(Debug)]
pub struct ScoreCache {
    entries: LruCache<String, u8>,
    stats: CacheStats,
}

impl ScoreCache {
    /// Capacity used by [`ScoreCache::default`] and when zero is requested
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Cache holding at most `capacity` scores; zero falls back to the default
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Fingerprint of a scoring request
    ///
    /// Uses the `Debug` rendering so that NaN and infinities stay distinct from
    /// missing values.
    #[must_use]
    pub fn fingerprint(input: &ScoringInput, config: &ScoringConfig) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{input:?}").as_bytes());
        hasher.update(b"\x1f");
        hasher.update(format!("{config:?}").as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Cached score, computing and storing it on a miss
    pub fn get_or_score(&mut self, input: &ScoringInput, config: &ScoringConfig) -> u8 {
        let key = Self::fingerprint(input, config);
        if let Some(score) = self.entries.get(&key) {
            self.stats.hits += 1;
            tracing::trace!(fingerprint = %key, score = *score, "Score cache hit");
            return *score;
        }

        self.stats.misses += 1;
        let score = score_product(input, config);
        self.entries.put(key, score);
        score
    }

    /// Number of cached scores
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no scores
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached scores
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Hit and miss counters since creation or the last [`clear`](Self::clear)
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every cached score and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY.get())
    }
}
