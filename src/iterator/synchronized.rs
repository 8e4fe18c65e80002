//! Mutex-guarded cursor shared between threads
//!
//! `Synchronized` is the only shared owner in a cursor chain. Every pull goes
//! through one lock, so clones handed to worker threads never observe the
//! same element twice.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{size, Cursor, KnownSize};
use crate::optional::{Empty, Optional, Present};

pub struct Synchronized<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for Synchronized<C> {
    fn clone(&self) -> Self {
        Synchronized { inner: Arc::clone(&self.inner) }
    }
}

impl<C: Cursor> Synchronized<C> {
    pub fn new(cursor: C) -> Self {
        Synchronized { inner: Arc::new(Mutex::new(cursor)) }
    }

    /// Pulls the next element under the lock.
    ///
    /// A lock poisoned by a panicking pull is reported as exhaustion.
    pub fn pull(&self) -> Optional<C::Item> {
        match self.lock() {
            Present(mut cursor) => cursor.next(),
            Empty => Empty,
        }
    }

    /// Runs `f` on the cursor while holding the lock.
    ///
    /// Returns `Empty` without calling `f` if the lock is poisoned.
    pub fn locked<R, F>(&self, f: F) -> Optional<R>
    where
        F: FnOnce(&mut C) -> R,
    {
        match self.lock() {
            Present(mut cursor) => Present(f(&mut cursor)),
            Empty => Empty,
        }
    }

    fn lock(&self) -> Optional<MutexGuard<'_, C>> {
        match self.inner.lock() {
            Ok(guard) => Present(guard),
            Err(_) => {
                log::warn!("synchronized cursor lock poisoned; treating source as exhausted");
                Empty
            }
        }
    }
}

impl<C: Cursor> Cursor for Synchronized<C> {
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        self.pull()
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        let sized = match self.lock() {
            Present(cursor) => size(&*cursor).is_present(),
            Empty => false,
        };
        if sized {
            Present(self)
        } else {
            Empty
        }
    }
}

impl<C: Cursor> KnownSize for Synchronized<C> {
    fn size(&self) -> usize {
        match self.lock() {
            Present(cursor) => size(&*cursor).or_else(0),
            Empty => 0,
        }
    }
}
