//! Mutual exclusion of delivery attempts.

use crate::PreconditionError;
use std::{
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
    thread::{self, ThreadId},
};

/// Serializes delivery attempts.
///
/// Attempts from different threads wait for one another. An attempt made on the thread
/// that already holds the lock, which is how a receiver calling back into the relay
/// manifests, is rejected with [`PreconditionError::Reentrant`] instead of deadlocking.
#[derive(Debug, Default)]
pub struct DeliveryLock {
    owner: Mutex<Option<ThreadId>>,
    released: Condvar,
}

impl DeliveryLock {
    /// Creates an unlocked lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for the current thread, blocking while another thread holds it.
    pub fn acquire(&self) -> Result<DeliveryGuard<'_>, PreconditionError> {
        let current = thread::current().id();
        let mut owner = self.owner();
        loop {
            match *owner {
                None => break,
                Some(holder) if holder == current => return Err(PreconditionError::Reentrant),
                Some(_) => {
                    owner = self.released.wait(owner).unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
        *owner = Some(current);
        Ok(DeliveryGuard { lock: self })
    }

    /// Returns `true` if an attempt is in progress.
    pub fn is_locked(&self) -> bool {
        self.owner().is_some()
    }

    fn owner(&self) -> MutexGuard<'_, Option<ThreadId>> {
        self.owner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds a [`DeliveryLock`] until dropped.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct DeliveryGuard<'a> {
    lock: &'a DeliveryLock,
}

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        *self.lock.owner() = None;
        self.lock.released.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    #[test]
    fn test_reentrant_acquire_is_rejected() {
        let lock = DeliveryLock::new();
        let guard = lock.acquire().unwrap();
        assert!(lock.is_locked());
        assert_eq!(lock.acquire().unwrap_err(), PreconditionError::Reentrant);

        drop(guard);
        assert!(!lock.is_locked());
        assert!(lock.acquire().is_ok());
    }

    #[test]
    fn test_other_threads_wait() {
        let lock = Arc::new(DeliveryLock::new());
        let inside = Arc::new(AtomicUsize::new(0));

        let handles = (0..4)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let inside = Arc::clone(&inside);
                thread::spawn(move || {
                    let _guard = lock.acquire().unwrap();
                    assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
                    thread::sleep(Duration::from_millis(5));
                    inside.fetch_sub(1, Ordering::SeqCst);
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(!lock.is_locked());
    }
}
