//! A thread-safe, in-memory key-value store with a time-to-live per entry.
//!
//! Each entry inserted with a finite [`Ttl`] is evicted by its own expiry task once the TTL has
//! elapsed. Expiry tasks run on a tokio runtime, either the one the store is created in or one
//! passed to [`Builder::with_runtime`].
//!
//! # Features
//!
//! - Thread-safe by default - no need for explicit synchronization
//! - Per-entry TTLs with a store-wide default
//! - Overwriting, removing or clearing entries cancels their pending expiry
//! - A late expiry never evicts a newer value written under the same key
//! - No unsafe code
//!
//! # Examples
//!
//! Basic usage with a per-entry TTL:
//!
//! ```rust
//! use std::time::Duration;
//! use ttl_store::Store;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Store::new();
//!
//!     store.insert_with_ttl("session", "token", Duration::from_millis(50));
//!     assert_eq!(store.get("session"), Some("token"));
//!
//!     tokio::time::sleep(Duration::from_millis(100)).await;
//!     assert_eq!(store.get("session"), None);
//! }
//! ```
//!
//! Using a default TTL and opting single entries out of expiry:
//!
//! ```rust
//! use std::time::Duration;
//! use ttl_store::{Store, Ttl};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Store::with_default_ttl(Duration::from_secs(60));
//!
//!     store.insert("rate-limit:alice", 3);
//!     store.insert_with_ttl("config:version", 7, Ttl::Never);
//!
//!     // Updating returns the old value and restarts the TTL.
//!     let old_value = store.insert("rate-limit:alice", 4);
//!     assert_eq!(old_value, Some(3));
//!
//!     store.remove("rate-limit:alice");
//!     assert_eq!(store.get("rate-limit:alice"), None);
//!
//!     store.clear();
//!     assert!(store.is_empty());
//! }
//! ```
//!
//! Sharing the store between threads:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use ttl_store::{Builder, Store};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let store: Arc<Store<String, String>> =
//!     Arc::new(Builder::new().with_runtime(runtime.handle().clone()).build());
//!
//! let store_in_arc = Arc::clone(&store);
//! let handle = thread::spawn(move || {
//!     store_in_arc.insert(String::from("key"), String::from("value"));
//! });
//!
//! handle.join().unwrap();
//!
//! assert_eq!(store.get("key"), Some(String::from("value")));
//! ```

#![forbid(unsafe_code)]
mod error;
pub mod store;

pub use error::Error;
pub use store::Store;
pub use store::builder::Builder;
pub use store::ttl::Ttl;
