use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory ordered key-value map store.
///
/// Wraps a `BTreeMap<K, V>` behind a shared `RwLock` so every helper is a
/// single atomic step. Iteration follows ascending key order. Values leave the
/// store as clones; nothing hands out a reference into the map.
#[derive(Clone)]
pub struct OrderedMapStore<K, V> {
    inner: Arc<RwLock<BTreeMap<K, V>>>,
}

impl<K, V> Default for OrderedMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(BTreeMap::new())) }
    }
}

impl<K, V> OrderedMapStore<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// List all entries as `(key, value)` pairs in key order.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// All values in key order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite a value; returns the previous value if any.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut map = self.inner.write().await;
        map.insert(key, value)
    }

    /// Remove a key; returns the removed value.
    pub async fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut map = self.inner.write().await;
        map.remove(key)
    }

    /// Replace the value under an existing key with `f(old)` while holding the
    /// write guard. Returns the new value, or `None` if the key is absent
    /// (in which case `f` is not called).
    pub async fn replace<Q, F>(&self, key: &Q, f: F) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnOnce(&V) -> V,
    {
        let mut map = self.inner.write().await;
        let slot = map.get_mut(key)?;
        *slot = f(slot);
        Some(slot.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
