//! The two exclusion primitives behind a keyed lock.

use std::hint;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::lock_api::RawMutex as _;
use parking_lot::RawMutex;

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static OWNER_TOKEN: u64 = NEXT_OWNER.fetch_add(1, Ordering::Relaxed);
}

/// Per-thread token; never zero.
fn owner_token() -> u64 {
    OWNER_TOKEN.with(|token| *token)
}

/// OS-backed mutex that remembers which thread holds it.
pub(crate) struct BlockingLock {
    raw: RawMutex,
    owner: AtomicU64,
}

impl BlockingLock {
    pub(crate) const fn new() -> Self {
        Self {
            raw: RawMutex::INIT,
            owner: AtomicU64::new(0),
        }
    }

    /// Whether the calling thread is the current holder.
    pub(crate) fn held_by_current(&self) -> bool {
        self.owner.load(Ordering::Acquire) == owner_token()
    }

    /// Block until held. The caller checks re-entry first.
    pub(crate) fn lock(&self) {
        self.raw.lock();
        self.owner.store(owner_token(), Ordering::Release);
    }

    pub(crate) fn try_lock(&self) -> bool {
        if self.raw.try_lock() {
            self.owner.store(owner_token(), Ordering::Release);
            true
        } else {
            false
        }
    }

    /// # Safety
    ///
    /// The calling thread must hold the lock.
    pub(crate) unsafe fn unlock(&self) {
        self.owner.store(0, Ordering::Release);
        // SAFETY: held by this thread per the caller's contract.
        unsafe { self.raw.unlock() };
    }
}

/// Busy-wait flag. Re-entry from the holder spins forever.
pub(crate) struct SpinLock {
    held: AtomicBool,
}

impl SpinLock {
    pub(crate) const fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }

    pub(crate) fn lock(&self) {
        while self
            .held
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.held.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    pub(crate) fn try_lock(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    pub(crate) fn unlock(&self) {
        self.held.store(false, Ordering::Release);
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.held.load(Ordering::Relaxed)
    }
}
