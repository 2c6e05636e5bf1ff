// ABOUTME: Pre-compiled CSS selector cache for O(1) selector lookup.
// ABOUTME: Eliminates repeated parsing of CSS selectors across queries.

//! Selector caching for efficient repeated DOM queries.
//!
//! CSS selector parsing is expensive relative to the actual DOM matching.
//! This module provides a thread-safe cache that compiles selectors once
//! and reuses them for all subsequent queries. Invalid selector strings
//! are cached too, so repeated misuse stays cheap.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::error::QueryError;

/// Thread-safe cache of compiled CSS selectors.
///
/// Uses a RwLock for read-heavy workloads: most accesses are cache hits
/// (reads), with occasional cache misses requiring writes.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Selector)` if the selector is valid, `None` if invalid.
/// Subsequent calls with the same selector string return the cached result.
///
/// # Thread Safety
///
/// This function is safe to call from multiple threads. Cache reads use a
/// shared lock; cache writes use an exclusive lock.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    // Fast path: check read lock for cached value
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    // Slow path: compile and cache
    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Double-check after acquiring write lock (another thread may have inserted)
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Precompiles a batch of selectors into the cache.
///
/// Call this during initialization when the selector set is known up front
/// to warm the cache and avoid lock contention during queries.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE.write().unwrap();
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            let compiled = Selector::parse(css).ok();
            cache.insert(css.to_string(), compiled);
        }
    }
}

/// Compiles a selector through the cache, mapping invalid strings to an error.
pub(crate) fn compile(css: &str) -> Result<Selector, QueryError> {
    get_or_compile(css).ok_or_else(|| QueryError::selector(css))
}
