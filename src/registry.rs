//! Key → factory registry shared by the generator and formatter plugins.
//!
//! A [`Registry`] maps a string key to a zero-argument constructor. Lookups
//! build a fresh instance on every call. Registering an existing key replaces
//! the previous factory.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Constructor stored for a key.
pub type Factory<T> = fn() -> Box<T>;

/// A string-keyed map of factories producing boxed `T`s.
///
/// Lookups take a shared lock and may run concurrently; registration takes
/// the write lock.
///
/// # Example
///
/// ```
/// use payout_report::registry::Registry;
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// fn english() -> Box<dyn Greeter> {
///     Box::new(English)
/// }
///
/// let registry: Registry<dyn Greeter> = Registry::new();
/// registry.register("en", english);
/// assert_eq!(registry.get("en").unwrap().greet(), "hello");
/// assert!(registry.get("fr").is_none());
/// ```
pub struct Registry<T: ?Sized> {
    factories: RwLock<HashMap<String, Factory<T>>>,
}

impl<T: ?Sized> Registry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry seeded with the given entries.
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Factory<T>)>,
        K: Into<String>,
    {
        let factories = entries
            .into_iter()
            .map(|(key, factory)| (key.into(), factory))
            .collect();
        Self {
            factories: RwLock::new(factories),
        }
    }

    /// Registers a factory, replacing any previous one for the key.
    pub fn register(&self, key: impl Into<String>, factory: Factory<T>) {
        let mut factories = self.factories.write().unwrap_or_else(PoisonError::into_inner);
        factories.insert(key.into(), factory);
    }

    /// Builds a new instance for the key, or `None` if it is not registered.
    pub fn get(&self, key: &str) -> Option<Box<T>> {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        factories.get(key).map(|factory| factory())
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = factories.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
