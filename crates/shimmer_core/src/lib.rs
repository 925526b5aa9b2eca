//! Shimmer Core Primitives
//!
//! This crate provides the foundational primitives shared by the Shimmer
//! presentation-effects runtime:
//!
//! - **Easing Curves**: Interpolation shaping for timed transitions
//! - **Transition Hints**: Plain-data descriptions of smooth property changes
//! - **Key-Value Storage**: Durable, origin-scoped persistence behind a trait
//!
//! # Example
//!
//! ```rust
//! use shimmer_core::{KvStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.set("darkModeEnabled", "true").unwrap();
//! assert_eq!(store.get("darkModeEnabled").unwrap().as_deref(), Some("true"));
//! ```

pub mod easing;
pub mod store;
pub mod transition;

pub use easing::Easing;
pub use store::{FileStore, KvStore, MemoryStore, StoreError};
pub use transition::Transition;
