//! Keyed mutual exclusion.
//!
//! A [`LockRegistry`] maps a [`LockKey`] (a type or an integer) to a lock that
//! is created on first use and shared by everyone who asks for the same key.
//! Two [`Strategy`]s share one contract:
//!
//! - [`Strategy::Blocking`] suspends the waiting thread and reports re-entry
//!   from the holding thread as [`LockReentrancy`](crate::DaylogError::LockReentrancy).
//! - [`Strategy::Spin`] busy-waits. Re-entry from the holding thread hangs
//!   forever; keep spin sections short and non-reentrant.
//!
//! Acquisition has no timeout. A guard releases its lock when dropped.
//!
//! # Example
//!
//! ```
//! use daylog::lock::{LockKey, LockRegistry};
//!
//! struct Console;
//!
//! let registry = LockRegistry::new();
//! let guard = registry.blocking(LockKey::of::<Console>()).unwrap();
//! assert!(registry.blocking(LockKey::of::<Console>()).is_err());
//! drop(guard);
//! ```

mod key;
mod primitive;
mod registry;

pub use key::LockKey;
pub use registry::{LockEntry, LockGuard, LockRegistry, Strategy};
