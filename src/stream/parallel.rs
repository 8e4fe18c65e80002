//! Fork-join execution for parallel terminal operations
//!
//! The composed cursor is wrapped in a [`Synchronized`] guard and shared by a
//! bounded set of scoped worker threads. Pulls are serialized by the guard;
//! consumer calls are not.
//!
//! - Known size `n`: tickets `0..n` are handed out under the guard together
//!   with the pull, so ticket `k` always carries the `k`-th element and the
//!   consumer receives the ticket as its index.
//! - Unknown size: workers pull until one sees `Empty`, which raises the
//!   shared completion flag. Indices are taken under the guard as well.
//!
//! The first panicking worker raises a halt flag so the others stop pulling.
//! Its payload is returned after every worker has joined.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crate::iterator::{size, Cursor, Synchronized};
use crate::optional::{Empty, Optional, Present};
use crate::stream_configuration::ParallelConfig;

type Payload = Box<dyn Any + Send + 'static>;

pub(crate) struct ForkJoin<C> {
    source: Synchronized<C>,
    config: ParallelConfig,
}

impl<C> ForkJoin<C>
where
    C: Cursor + Send,
    C::Item: Send,
{
    pub(crate) fn new(cursor: C, config: ParallelConfig) -> Self {
        Self { source: Synchronized::new(cursor), config }
    }

    pub(crate) fn size(&self) -> Optional<usize> {
        size(&self.source)
    }

    /// Runs `consumer` over every element and blocks until all workers join.
    pub(crate) fn run<F>(&self, consumer: F) -> thread::Result<()>
    where
        F: Fn(usize, C::Item) + Sync,
    {
        let plan = self.size();
        let units = plan.into_option();
        if units == Some(0) {
            return Ok(());
        }
        let workers = self.config.workers_for(units);
        log::debug!(
            "parallel run: {} workers, {}",
            workers,
            match units {
                Some(n) => format!("{} known elements", n),
                None => "unknown size".to_string(),
            }
        );

        let run = Run {
            source: &self.source,
            consumer: &consumer,
            tickets: AtomicUsize::new(0),
            index: AtomicUsize::new(0),
            exhausted: AtomicBool::new(false),
            halted: AtomicBool::new(false),
        };

        let outcome = crossbeam::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for id in 0..workers {
                let mut builder = scope.builder();
                if let Some(name) = &self.config.thread_name {
                    builder = builder.name(format!("{}-{}", name, id));
                }
                let run = &run;
                match builder.spawn(move |_| run.guarded(units)) {
                    Ok(handle) => handles.push(handle),
                    Err(e) => log::warn!("failed to spawn parallel worker {}: {}", id, e),
                }
            }

            let mut first: Option<Payload> = None;
            if handles.is_empty() {
                if let Err(payload) = run.guarded(units) {
                    first = Some(payload);
                }
            }
            for handle in handles {
                let joined = match handle.join() {
                    Ok(result) => result,
                    Err(payload) => Err(payload),
                };
                if let Err(payload) = joined {
                    first.get_or_insert(payload);
                }
            }
            first
        });

        match outcome {
            Ok(None) => Ok(()),
            Ok(Some(payload)) => Err(payload),
            Err(payload) => Err(payload),
        }
    }
}

/// State shared by the workers of one run
struct Run<'a, C, F> {
    source: &'a Synchronized<C>,
    consumer: &'a F,
    tickets: AtomicUsize,
    index: AtomicUsize,
    exhausted: AtomicBool,
    halted: AtomicBool,
}

impl<'a, C, F> Run<'a, C, F>
where
    C: Cursor,
    F: Fn(usize, C::Item),
{
    fn guarded(&self, units: Option<usize>) -> thread::Result<()> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| match units {
            Some(n) => self.known(n),
            None => self.unknown(),
        }));
        if result.is_err() {
            self.halted.store(true, Ordering::Release);
            log::warn!("parallel worker panicked; halting remaining workers");
        }
        result
    }

    fn known(&self, n: usize) {
        while !self.halted.load(Ordering::Acquire) {
            // Ticket and pull share one critical section so ticket k carries the k-th element.
            let unit = self.source.locked(|cursor| {
                let ticket = self.tickets.fetch_add(1, Ordering::Relaxed);
                if ticket < n {
                    Some((ticket, cursor.next()))
                } else {
                    None
                }
            });
            match unit {
                Present(Some((ticket, Present(item)))) => (self.consumer)(ticket, item),
                Present(Some((_, Empty))) => continue,
                _ => break,
            }
        }
    }

    fn unknown(&self) {
        while !self.exhausted.load(Ordering::Acquire) && !self.halted.load(Ordering::Acquire) {
            let pulled = self.source.locked(|cursor| {
                cursor.next().map(|item| (self.index.fetch_add(1, Ordering::Relaxed), item))
            });
            match pulled {
                Present(Present((index, item))) => (self.consumer)(index, item),
                _ => {
                    self.exhausted.store(true, Ordering::Release);
                    break;
                }
            }
        }
    }
}
