//! Argument-keyed memoization

use crate::cache::LruCache;
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;

enum Store<R> {
    Unbounded(HashMap<String, R>),
    Bounded(LruCache<R>),
}

/// Cache the results of `f` keyed by the JSON serialization of its arguments
///
/// Structurally equal arguments return the cached result without calling
/// `f` again. [`Memoized::new`] never evicts, so its memory grows with the
/// number of distinct arguments; [`Memoized::bounded`] keeps only the most
/// recently used results. Arguments that fail to serialize bypass the
/// cache.
pub struct Memoized<A: ?Sized, R, F> {
    f: F,
    store: Store<R>,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Memoize without eviction
    pub fn new(f: F) -> Self {
        Self {
            f,
            store: Store::Unbounded(HashMap::new()),
            _args: PhantomData,
        }
    }

    /// Memoize keeping at most `capacity` results
    pub fn bounded(f: F, capacity: usize) -> Self {
        Self {
            f,
            store: Store::Bounded(LruCache::new(capacity)),
            _args: PhantomData,
        }
    }

    /// Return the cached result for `args`, computing it on first use
    pub fn call(&mut self, args: &A) -> R {
        let Ok(key) = serde_json::to_string(args) else {
            return (self.f)(args);
        };

        match &mut self.store {
            Store::Unbounded(map) => map.entry(key).or_insert_with(|| (self.f)(args)).clone(),
            Store::Bounded(cache) => {
                if let Some(entry) = cache.get(&key) {
                    return entry.value.clone();
                }
                let value = (self.f)(args);
                cache.set(key, value.clone());
                value
            }
        }
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Unbounded(map) => map.len(),
            Store::Bounded(cache) => cache.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every cached result
    pub fn clear(&mut self) {
        match &mut self.store {
            Store::Unbounded(map) => map.clear(),
            Store::Bounded(cache) => cache.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_structurally_equal_args_hit_cache() {
        let calls = Cell::new(0);
        let mut square = Memoized::new(|x: &(i32, String)| {
            calls.set(calls.get() + 1);
            x.0 * x.0
        });

        assert_eq!(square.call(&(3, "a".to_string())), 9);
        assert_eq!(square.call(&(3, "a".to_string())), 9);
        assert_eq!(square.call(&(3, "b".to_string())), 9);

        assert_eq!(calls.get(), 2);
        assert_eq!(square.len(), 2);
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut double = Memoized::new(|x: &u32| x * 2);
        for i in 0..500 {
            double.call(&i);
        }
        assert_eq!(double.len(), 500);

        double.clear();
        assert!(double.is_empty());
    }

    #[test]
    fn test_bounded_evicts_least_recent() {
        let calls = Cell::new(0);
        let mut negate = Memoized::bounded(
            |x: &i64| {
                calls.set(calls.get() + 1);
                -x
            },
            2,
        );

        negate.call(&1);
        negate.call(&2);
        negate.call(&1);
        negate.call(&3); // evicts 2
        assert_eq!(negate.len(), 2);
        assert_eq!(calls.get(), 3);

        negate.call(&1);
        assert_eq!(calls.get(), 3);
        negate.call(&2);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_unsized_args() {
        let mut len = Memoized::new(|s: &str| s.len());
        assert_eq!(len.call("hello"), 5);
        assert_eq!(len.len(), 1);
    }
}
