use crate::store::builder::Builder;
use crate::store::entry::Entry;
use crate::store::expiry::Expiry;
use crate::store::ttl::Ttl;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, trace};

pub(crate) mod builder;
mod entry;
mod expiry;
pub(crate) mod ttl;

pub(crate) type RandomState = ahash::RandomState;

/// Thread-safe key-value store that evicts entries once their time-to-live has elapsed.
///
/// Every entry with a finite [`Ttl`] gets its own expiry task on a tokio runtime. Overwriting or
/// removing an entry aborts its task, and each entry carries a generation number so that a task
/// which already woke up before it was aborted cannot evict a newer value.
///
/// Wrap the store in a [`std::sync::Arc`] to share it between threads. All operations only
/// require shared references. Dropping the store aborts all pending expiry tasks.
#[derive(Debug)]
pub struct Store<K, V, S = RandomState> {
    inner: Arc<Inner<K, V, S>>,
}

#[derive(Debug)]
struct Inner<K, V, S> {
    state: RwLock<State<K, V, S>>,
    default_ttl: Ttl,
    runtime: Handle,
}

#[derive(Debug)]
struct State<K, V, S> {
    entries: HashMap<K, Entry<V>, S>,
    next_generation: u64,
}

impl<K, V> Store<K, V, RandomState> {
    /// Creates a store whose entries never expire unless inserted with an explicit TTL.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime. Use [`Builder::with_runtime`] to pass a runtime
    /// explicitly.
    pub fn new() -> Self {
        Builder::new().build()
    }

    /// Creates a store that applies `ttl` to every entry inserted with [`Store::insert`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_default_ttl(ttl: impl Into<Ttl>) -> Self {
        Builder::new().with_default_ttl(ttl).build()
    }
}

impl<K, V> Default for Store<K, V, RandomState> {
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Store<K, V, S> {
    pub(crate) fn from_parts(
        default_ttl: Ttl,
        capacity: usize,
        hash_builder: S,
        runtime: Handle,
    ) -> Self {
        let state = State {
            entries: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            next_generation: 0,
        };

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                default_ttl,
                runtime,
            }),
        }
    }

    pub fn default_ttl(&self) -> Ttl {
        self.inner.default_ttl
    }

    /// Returns the number of entries, including expired ones whose task has not run yet.
    pub fn len(&self) -> usize {
        self.inner.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.read().entries.is_empty()
    }

    /// Removes all entries and cancels their pending expiry tasks.
    pub fn clear(&self) {
        let values: Vec<V> = {
            let mut state = self.inner.state.write();
            state
                .entries
                .drain()
                .map(|(_, entry)| entry.into_value())
                .collect()
        };

        debug!(cleared = values.len(), "cleared store");
    }
}

impl<K, V, S> Store<K, V, S>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
    S: BuildHasher + Send + Sync + 'static,
{
    /// Inserts a key-value pair that expires after the store's default TTL.
    ///
    /// If the store did not have this key present, [`None`] is returned. Otherwise the value is
    /// replaced, its pending expiry is cancelled, and the old value is returned.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.insert_with_ttl(key, value, self.inner.default_ttl)
    }

    /// Inserts a key-value pair that expires after `ttl`, or never for [`Ttl::Never`].
    pub fn insert_with_ttl(&self, key: K, value: V, ttl: impl Into<Ttl>) -> Option<V> {
        let ttl = ttl.into();

        let mut state = self.inner.state.write();
        state.next_generation += 1;
        let generation = state.next_generation;

        let previous = state.entries.remove(&key).map(Entry::into_value);

        let expiry = ttl.delay().map(|delay| {
            trace!(generation, ?delay, "scheduling expiry");

            let inner = Arc::downgrade(&self.inner);
            let key = key.clone();
            Expiry::schedule(&self.inner.runtime, delay, move || {
                if let Some(inner) = inner.upgrade() {
                    inner.expire(&key, generation);
                }
            })
        });

        state
            .entries
            .insert(key, Entry::new(value, generation, expiry));
        drop(state);

        previous
    }
}

impl<K, V, S> Store<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns the value corresponding to the key.
    ///
    /// This method clones the value. Consider wrapping your values in [`std::sync::Arc`] if
    /// cloning is too expensive for your use-case.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let state = self.inner.state.read();
        state.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.state.read().entries.contains_key(key)
    }

    /// Removes a key from the store and cancels its pending expiry, returning the value if the
    /// key was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let mut state = self.inner.state.write();
        state.entries.remove(key).map(Entry::into_value)
    }
}

impl<K, V, S> Inner<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Evicts `key` if it still holds the entry written with `generation`.
    fn expire(&self, key: &K, generation: u64) {
        let mut state = self.state.write();

        let current = state.entries.get(key).map(Entry::generation);
        if current != Some(generation) {
            drop(state);
            trace!(generation, ?current, "ignoring stale expiry");
            return;
        }

        let expired = state.entries.remove(key);
        drop(state);
        drop(expired);

        trace!(generation, "entry expired");
    }
}
