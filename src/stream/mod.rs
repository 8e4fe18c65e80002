//! Single-use Stream pipeline over a cursor
//!
//! Intermediate operations wrap the current cursor in an adapter from
//! [`core`] and return a new `Stream`. Terminal operations drain the cursor,
//! sequentially by default or through the fork-join executor in [`parallel`]
//! once [`Stream::parallel`] has been called.

pub mod core;
pub mod parallel;

pub use self::core::{Filter, Limit, Map, Peek, Skip, TakeWhile};

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use self::parallel::ForkJoin;
use crate::error::{FluentError, FluentResult};
use crate::iterator::{self, size, Cursor, Iterable, IterCursor, Synchronized, VecCursor};
use crate::optional::{Empty, Present};
use crate::stream_configuration::{BufferConfig, ParallelConfig};

/// Execution mode of a [`Stream`]
pub trait Mode: sealed::Sealed {
    fn is_parallel(&self) -> bool;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Sequential {}
    impl Sealed for super::Parallel {}
}

/// Terminal operations run on the calling thread, in upstream order
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

/// Terminal operations fork worker threads sharing one guarded cursor
#[derive(Debug, Clone, Default)]
pub struct Parallel {
    config: ParallelConfig,
}

impl Mode for Sequential {
    fn is_parallel(&self) -> bool {
        false
    }
}

impl Mode for Parallel {
    fn is_parallel(&self) -> bool {
        true
    }
}

/// Lazy sequence of elements processed through a pipeline of operations
///
/// A stream can be used only once: every operation consumes it.
pub struct Stream<C, M = Sequential> {
    cursor: C,
    mode: M,
    buffer: BufferConfig,
}

impl<T> Stream<VecCursor<T>> {
    /// Stream over the elements of a vector.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Stream::from_cursor(iterator::from_vec(elements))
    }
}

impl<C: Cursor> Stream<C> {
    pub fn from_cursor(cursor: C) -> Self {
        Stream { cursor, mode: Sequential, buffer: BufferConfig::default() }
    }
}

impl<I: Iterator> Stream<IterCursor<I>> {
    /// Stream over a std iterator. The stream has no known size.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        Stream::from_cursor(iterator::from_iter(iter))
    }
}

/// Stream over a fresh cursor of `iterable`.
pub fn from_iterable<I: Iterable + ?Sized>(iterable: &I) -> Stream<I::Cursor> {
    Stream::from_cursor(iterable.cursor())
}

/// Maps the elements of `stream` through `mapper`, changing their type.
pub fn map<C, M, F, R>(stream: Stream<C, M>, mapper: F) -> Stream<Map<C, F>, M>
where
    C: Cursor,
    M: Mode,
    F: FnMut(C::Item) -> R,
{
    stream.map(mapper)
}

/// Shortcut for `map(Stream::from_vec(input), mapper)`.
pub fn map_array<I, O, F>(input: Vec<I>, mapper: F) -> Stream<Map<VecCursor<I>, F>>
where
    F: FnMut(I) -> O,
{
    Stream::from_vec(input).map(mapper)
}

// ================================
// Intermediate Operations
// ================================

impl<C: Cursor, M: Mode> Stream<C, M> {
    fn wrap<D: Cursor>(self, adapt: impl FnOnce(C) -> D) -> Stream<D, M> {
        Stream { cursor: adapt(self.cursor), mode: self.mode, buffer: self.buffer }
    }

    pub fn is_parallel(&self) -> bool {
        self.mode.is_parallel()
    }

    /// Capacity used when collecting a stream whose size is unknown.
    pub fn with_buffer(mut self, buffer: BufferConfig) -> Self {
        self.buffer = buffer;
        self
    }

    /// Discards the first `n` elements.
    pub fn skip(self, n: usize) -> Stream<Skip<C>, M> {
        self.wrap(|c| Skip::new(c, n))
    }

    /// Truncates the stream to at most `max` elements.
    pub fn limit(self, max: usize) -> Stream<Limit<C>, M> {
        self.wrap(|c| Limit::new(c, max))
    }

    /// Keeps only the elements matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Stream<Filter<C, P>, M>
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.wrap(|c| Filter::new(c, predicate))
    }

    pub fn map<F, R>(self, mapper: F) -> Stream<Map<C, F>, M>
    where
        F: FnMut(C::Item) -> R,
    {
        self.wrap(|c| Map::new(c, mapper))
    }

    /// Calls `consumer` on every element as it passes through.
    pub fn peek<F>(self, consumer: F) -> Stream<Peek<C, F>, M>
    where
        F: FnMut(&C::Item),
    {
        self.wrap(|c| Peek::new(c, consumer))
    }

    /// Yields elements while `predicate` holds and ends the stream at the first
    /// element that fails it. Later matching elements are never yielded.
    pub fn take_while<P>(self, predicate: P) -> Stream<TakeWhile<C, P>, M>
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.wrap(|c| TakeWhile::new(c, predicate))
    }

    /// Switches terminal operations to parallel execution with default config.
    pub fn parallel(self) -> Stream<C, Parallel> {
        self.parallel_with(ParallelConfig::default())
    }

    pub fn parallel_with(self, config: ParallelConfig) -> Stream<C, Parallel> {
        Stream { cursor: self.cursor, mode: Parallel { config }, buffer: self.buffer }
    }
}

// ================================
// Sequential Terminal Operations
// ================================

impl<C: Cursor> Stream<C, Sequential> {
    /// Calls `consumer(index, element)` for every element, in order.
    pub fn for_each<F>(self, mut consumer: F)
    where
        F: FnMut(usize, C::Item),
    {
        let mut cursor = self.cursor;
        let mut index = 0;
        while let Present(item) = cursor.next() {
            consumer(index, item);
            index += 1;
        }
    }

    pub fn count(self) -> usize {
        let mut counter = 0;
        self.for_each(|_, _| counter += 1);
        counter
    }

    /// Collects the elements, preallocating when the size is known.
    pub fn to_vec(self) -> Vec<C::Item> {
        let buffer = self.buffer;
        let mut cursor = self.cursor;
        match size(&cursor) {
            Present(n) => {
                let mut out = Vec::with_capacity(n);
                while out.len() < n {
                    match cursor.next() {
                        Present(item) => out.push(item),
                        Empty => break,
                    }
                }
                out
            }
            Empty => {
                log::debug!(
                    "collecting stream of unknown size from capacity {}",
                    buffer.initial_capacity
                );
                let mut out = Vec::with_capacity(buffer.initial_capacity);
                while let Present(item) = cursor.next() {
                    out.push(item);
                }
                out
            }
        }
    }

    /// Like [`for_each`](Self::for_each), reporting a consumer panic as an error.
    pub fn try_for_each<F>(self, consumer: F) -> FluentResult<()>
    where
        F: FnMut(usize, C::Item),
    {
        panic::catch_unwind(AssertUnwindSafe(|| self.for_each(consumer)))
            .map_err(|payload| FluentError::from_panic(&*payload))
    }

    pub fn try_count(self) -> FluentResult<usize> {
        panic::catch_unwind(AssertUnwindSafe(|| self.count()))
            .map_err(|payload| FluentError::from_panic(&*payload))
    }

    pub fn try_to_vec(self) -> FluentResult<Vec<C::Item>> {
        panic::catch_unwind(AssertUnwindSafe(|| self.to_vec()))
            .map_err(|payload| FluentError::from_panic(&*payload))
    }

    /// Returns the composed cursor.
    pub fn iterator(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> IntoIterator for Stream<C, Sequential> {
    type Item = C::Item;
    type IntoIter = iterator::IntoStd<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor.into_std()
    }
}

// ================================
// Parallel Terminal Operations
// ================================

impl<C> Stream<C, Parallel>
where
    C: Cursor + Send,
    C::Item: Send,
{
    pub fn config(&self) -> &ParallelConfig {
        &self.mode.config
    }

    /// Calls `consumer(index, element)` from worker threads.
    ///
    /// The index is the element's retrieval position. With a known size it is
    /// also its position in the source. Consumer calls may run in any order.
    ///
    /// # Panics
    ///
    /// Re-raises the first consumer panic once every worker has joined.
    pub fn for_each<F>(self, consumer: F)
    where
        F: Fn(usize, C::Item) + Sync,
    {
        ForkJoin::new(self.cursor, self.mode.config)
            .run(consumer)
            .unwrap_or_else(|payload| panic::resume_unwind(payload))
    }

    pub fn count(self) -> usize {
        self.run_count().unwrap_or_else(|payload| panic::resume_unwind(payload))
    }

    /// Collects the elements. With a known size they keep source order;
    /// otherwise order is unspecified.
    pub fn to_vec(self) -> Vec<C::Item> {
        self.run_to_vec().unwrap_or_else(|payload| panic::resume_unwind(payload))
    }

    pub fn try_for_each<F>(self, consumer: F) -> FluentResult<()>
    where
        F: Fn(usize, C::Item) + Sync,
    {
        ForkJoin::new(self.cursor, self.mode.config)
            .run(consumer)
            .map_err(|payload| FluentError::from_panic(&*payload))
    }

    pub fn try_count(self) -> FluentResult<usize> {
        self.run_count().map_err(|payload| FluentError::from_panic(&*payload))
    }

    pub fn try_to_vec(self) -> FluentResult<Vec<C::Item>> {
        self.run_to_vec().map_err(|payload| FluentError::from_panic(&*payload))
    }

    fn run_count(self) -> thread::Result<usize> {
        let counter = AtomicUsize::new(0);
        ForkJoin::new(self.cursor, self.mode.config).run(|_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        })?;
        Ok(counter.into_inner())
    }

    fn run_to_vec(self) -> thread::Result<Vec<C::Item>> {
        let capacity = self.buffer.initial_capacity;
        let job = ForkJoin::new(self.cursor, self.mode.config);
        match job.size() {
            Present(n) => {
                // One uncontended slot per ticket.
                let slots: Vec<Mutex<Option<C::Item>>> = (0..n).map(|_| Mutex::new(None)).collect();
                job.run(|index, item| {
                    *slots[index].lock().unwrap_or_else(PoisonError::into_inner) = Some(item);
                })?;
                Ok(slots
                    .into_iter()
                    .filter_map(|slot| slot.into_inner().unwrap_or_else(PoisonError::into_inner))
                    .collect())
            }
            Empty => {
                let out = Mutex::new(Vec::with_capacity(capacity));
                job.run(|_, item| {
                    out.lock().unwrap_or_else(PoisonError::into_inner).push(item);
                })?;
                Ok(out.into_inner().unwrap_or_else(PoisonError::into_inner))
            }
        }
    }

    /// Returns the composed cursor behind the shared guard.
    pub fn iterator(self) -> Synchronized<C> {
        Synchronized::new(self.cursor)
    }
}
