//! Memoization for repeated width lookups
//!
//! Subtitle pipelines measure the same lines over and over (repeated
//! cues, retries during layout), so both a shareable [`WidthCache`]
//! and a process-wide [`cached_calc`] are provided. The cache is
//! purely a shortcut: results are identical to [`calc`].

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use once_cell::sync::Lazy;

use crate::calc;

/// Number of strings remembered by [`WidthCache::default`] and [`cached_calc`].
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Bounded memo of [`calc`] results, keyed by the input string.
///
/// Least recently measured strings are evicted first.
#[derive(Debug)]
pub struct WidthCache {
    entries: Option<LruCache<String, f64>>,
}

impl WidthCache {
    /// Create a cache remembering up to `capacity` strings.
    ///
    /// A capacity of 0 disables memoization; every call recomputes.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    /// Visual width of `text`, from the cache when possible.
    pub fn calc(&mut self, text: &str) -> f64 {
        let entries = match self.entries.as_mut() {
            Some(entries) => entries,
            None => return calc(text),
        };
        if let Some(&width) = entries.get(text) {
            return width;
        }
        let width = calc(text);
        entries.put(text.to_owned(), width);
        width
    }

    /// Number of strings currently cached.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of strings the cache will hold.
    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.cap().get())
    }

    /// Forget every cached width.
    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

static SHARED: Lazy<Mutex<WidthCache>> = Lazy::new(|| Mutex::new(WidthCache::default()));

/// Like [`calc`], remembering recent results in a process-wide cache.
///
/// Safe to call from any thread.
pub fn cached_calc(text: &str) -> f64 {
    let mut cache = match SHARED.lock() {
        Ok(guard) => guard,
        // The cache only ever holds finished results, so it stays usable
        // after a panic in some other holder of the lock.
        Err(poisoned) => poisoned.into_inner(),
    };
    cache.calc(text)
}
