//! Keyed lock registry and scoped guards.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::key::LockKey;
use super::primitive::{BlockingLock, SpinLock};
use crate::error::{DaylogError, Result};

/// How a keyed lock waits for ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Suspend the thread on an OS mutex. Re-entry is reported as
    /// [`DaylogError::LockReentrancy`].
    Blocking,
    /// Busy-wait on a flag. Only for short, non-reentrant sections: re-entry
    /// from the holding thread spins forever and is not detected.
    Spin,
}

enum Primitive {
    Blocking(BlockingLock),
    Spin(SpinLock),
}

/// One lazily created lock, shared by every holder of its key.
pub struct LockEntry {
    key: LockKey,
    primitive: Primitive,
}

impl LockEntry {
    fn new(key: LockKey, strategy: Strategy) -> Self {
        let primitive = match strategy {
            Strategy::Blocking => Primitive::Blocking(BlockingLock::new()),
            Strategy::Spin => Primitive::Spin(SpinLock::new()),
        };
        Self { key, primitive }
    }

    pub fn key(&self) -> LockKey {
        self.key
    }

    pub fn strategy(&self) -> Strategy {
        match self.primitive {
            Primitive::Blocking(_) => Strategy::Blocking,
            Primitive::Spin(_) => Strategy::Spin,
        }
    }
}

impl fmt::Debug for LockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockEntry")
            .field("key", &self.key)
            .field("strategy", &self.strategy())
            .finish()
    }
}

/// Exclusive ownership of a keyed lock, released on drop.
///
/// Guards stay on the thread that acquired them.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard {
    entry: Arc<LockEntry>,
    _not_send: PhantomData<*const ()>,
}

impl LockGuard {
    fn new(entry: Arc<LockEntry>) -> Self {
        Self {
            entry,
            _not_send: PhantomData,
        }
    }

    pub fn key(&self) -> LockKey {
        self.entry.key
    }

    pub fn strategy(&self) -> Strategy {
        self.entry.strategy()
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        match &self.entry.primitive {
            // SAFETY: a guard exists only after this thread locked the entry,
            // and it unlocks exactly once.
            Primitive::Blocking(lock) => unsafe { lock.unlock() },
            Primitive::Spin(lock) => lock.unlock(),
        }
    }
}

impl fmt::Debug for LockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockGuard")
            .field("key", &self.entry.key)
            .field("strategy", &self.entry.strategy())
            .finish()
    }
}

/// Maps a key and strategy to its lock, creating it on first use.
///
/// A key has one blocking lock and one spin lock, and they are independent of
/// each other. Entries live as long as the registry.
#[derive(Default)]
pub struct LockRegistry {
    entries: RwLock<HashMap<(LockKey, Strategy), Arc<LockEntry>>>,
}

impl LockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, for callers that do not pass one around.
    pub fn global() -> Arc<LockRegistry> {
        static GLOBAL: OnceLock<Arc<LockRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(LockRegistry::new())))
    }

    /// The entry for `key`, created if absent.
    pub fn entry(&self, key: LockKey, strategy: Strategy) -> Arc<LockEntry> {
        if let Some(entry) = self.entries.read().get(&(key, strategy)) {
            return Arc::clone(entry);
        }

        let mut entries = self.entries.write();
        let entry = entries.entry((key, strategy)).or_insert_with(|| {
            tracing::debug!("Creating {:?} lock for {}", strategy, key);
            Arc::new(LockEntry::new(key, strategy))
        });
        Arc::clone(entry)
    }

    /// Wait until `key` is held under `strategy`.
    ///
    /// Blocking re-entry from the holding thread fails with
    /// [`DaylogError::LockReentrancy`]. Spin re-entry never returns.
    pub fn acquire(&self, key: LockKey, strategy: Strategy) -> Result<LockGuard> {
        let entry = self.entry(key, strategy);
        match &entry.primitive {
            Primitive::Blocking(lock) => {
                if lock.held_by_current() {
                    return Err(DaylogError::LockReentrancy { key });
                }
                lock.lock();
            }
            Primitive::Spin(lock) => lock.lock(),
        }
        Ok(LockGuard::new(entry))
    }

    /// Take `key` only if it is free right now.
    ///
    /// Returns `Ok(None)` when another holder has it. Blocking re-entry is
    /// still an error.
    pub fn try_acquire(&self, key: LockKey, strategy: Strategy) -> Result<Option<LockGuard>> {
        let entry = self.entry(key, strategy);
        let taken = match &entry.primitive {
            Primitive::Blocking(lock) => {
                if lock.held_by_current() {
                    return Err(DaylogError::LockReentrancy { key });
                }
                lock.try_lock()
            }
            Primitive::Spin(lock) => lock.try_lock(),
        };
        Ok(taken.then(|| LockGuard::new(entry)))
    }

    /// Blocking acquisition of `key`.
    pub fn blocking(&self, key: LockKey) -> Result<LockGuard> {
        self.acquire(key, Strategy::Blocking)
    }

    /// Spin acquisition of `key`.
    pub fn spin(&self, key: LockKey) -> LockGuard {
        let entry = self.entry(key, Strategy::Spin);
        if let Primitive::Spin(lock) = &entry.primitive {
            lock.lock();
        }
        LockGuard::new(entry)
    }

    /// Whether the spin lock for `key` is currently held by anyone.
    pub fn is_spin_locked(&self, key: LockKey) -> bool {
        match self.entries.read().get(&(key, Strategy::Spin)) {
            Some(entry) => matches!(&entry.primitive, Primitive::Spin(lock) if lock.is_locked()),
            None => false,
        }
    }

    /// Number of locks created so far.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for LockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockRegistry")
            .field("entries", &self.len())
            .finish()
    }
}
