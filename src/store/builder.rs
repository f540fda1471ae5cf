use crate::Error;
use crate::store::{RandomState, Store};
use crate::store::ttl::Ttl;
use std::hash::BuildHasher;
use tokio::runtime::Handle;

/// Configures and creates a [`Store`].
///
/// ```rust
/// use std::time::Duration;
/// use ttl_store::{Builder, Store, Ttl};
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
///
/// let store: Store<String, u32> = Builder::new()
///     .with_default_ttl(Duration::from_secs(30))
///     .with_capacity(1_000)
///     .with_runtime(runtime.handle().clone())
///     .build();
///
/// assert_eq!(store.default_ttl(), Ttl::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct Builder<S = RandomState> {
    default_ttl: Ttl,
    capacity: usize,
    hash_builder: S,
    runtime: Option<Handle>,
}

impl Builder<RandomState> {
    pub fn new() -> Self {
        Self {
            default_ttl: Ttl::default(),
            capacity: 0,
            hash_builder: RandomState::default(),
            runtime: None,
        }
    }
}

impl Default for Builder<RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Builder<S> {
    /// Sets the TTL applied by [`Store::insert`].
    pub fn with_default_ttl(mut self, ttl: impl Into<Ttl>) -> Self {
        self.default_ttl = ttl.into();
        self
    }

    /// Preallocates room for at least `capacity` entries. This is not a size limit.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Uses `hash_builder` to hash the keys.
    pub fn with_hasher<T>(self, hash_builder: T) -> Builder<T> {
        Builder {
            default_ttl: self.default_ttl,
            capacity: self.capacity,
            hash_builder,
            runtime: self.runtime,
        }
    }

    /// Schedules expiry tasks on `runtime` instead of the runtime the store is built in.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Creates the store.
    ///
    /// Returns [`Error::MissingRuntime`] if no runtime was configured and this is called outside
    /// a tokio runtime.
    pub fn try_build<K, V>(self) -> Result<Store<K, V, S>, Error>
    where
        S: BuildHasher,
    {
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(|_| Error::MissingRuntime)?,
        };

        Ok(Store::from_parts(
            self.default_ttl,
            self.capacity,
            self.hash_builder,
            runtime,
        ))
    }

    /// Creates the store.
    ///
    /// # Panics
    ///
    /// Panics if no runtime was configured and this is called outside a tokio runtime.
    pub fn build<K, V>(self) -> Store<K, V, S>
    where
        S: BuildHasher,
    {
        match self.try_build() {
            Ok(store) => store,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn it_fails_outside_a_runtime() {
        // when
        let result = Builder::new().try_build::<String, u32>();

        // then
        assert!(matches!(result, Err(Error::MissingRuntime)));
    }

    #[test]
    #[should_panic(expected = "no tokio runtime available")]
    fn it_panics_on_build_outside_a_runtime() {
        let _store: Store<String, u32> = Builder::new().build();
    }

    #[test]
    fn it_uses_an_injected_runtime() {
        // given
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();

        // when
        let store: Store<String, u32> = Builder::new()
            .with_runtime(runtime.handle().clone())
            .try_build()
            .unwrap();
        store.insert(String::from("key1"), 1);

        // then
        assert_eq!(store.get("key1"), Some(1));
    }

    #[tokio::test]
    async fn it_uses_the_ambient_runtime() {
        // when
        let store: Result<Store<String, u32>, _> = Builder::new().try_build();

        // then
        assert!(store.is_ok());
    }

    #[tokio::test]
    async fn it_applies_configuration() {
        // when
        let store: Store<String, u32> = Builder::new()
            .with_default_ttl(Duration::from_millis(250))
            .with_capacity(64)
            .build();

        // then
        assert_eq!(store.default_ttl(), Ttl::After(Duration::from_millis(250)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn it_works_with_custom_hasher() {
        // given
        use std::collections::hash_map::RandomState;
        let store: Store<&str, &str, RandomState> =
            Builder::new().with_hasher(RandomState::new()).build();

        // when
        store.insert("key1", "value1");

        // then
        assert_eq!(store.get("key1"), Some("value1"));
    }
}
