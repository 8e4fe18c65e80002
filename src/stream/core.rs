//! Lazy cursor adapters behind the Stream intermediate operations
//!
//! Each adapter owns exactly one upstream cursor. `Map` and `Peek` keep the
//! upstream size, `Skip` and `Limit` derive theirs from it, `Filter` and
//! `TakeWhile` have none.

use crate::iterator::{size, Cursor, KnownSize};
use crate::optional::{Empty, Optional, Present};

pub struct Skip<C> {
    source: C,
    count: usize,
    skipped: bool,
}

impl<C> Skip<C> {
    pub(crate) fn new(source: C, count: usize) -> Self {
        Self { source, count, skipped: false }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.count {
                if self.source.next().is_empty() {
                    return Empty;
                }
            }
        }
        self.source.next()
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        match size(&self.source) {
            Present(_) => Present(self),
            Empty => Empty,
        }
    }
}

impl<C: Cursor> KnownSize for Skip<C> {
    fn size(&self) -> usize {
        size(&self.source).map(|n| n.saturating_sub(self.count)).or_else(0)
    }
}

pub struct Limit<C> {
    source: C,
    max: usize,
    current: usize,
}

impl<C> Limit<C> {
    pub(crate) fn new(source: C, max: usize) -> Self {
        Self { source, max, current: 0 }
    }
}

impl<C: Cursor> Cursor for Limit<C> {
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        if self.current < self.max {
            self.current += 1;
            self.source.next()
        } else {
            Empty
        }
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        match size(&self.source) {
            Present(_) => Present(self),
            Empty => Empty,
        }
    }
}

impl<C: Cursor> KnownSize for Limit<C> {
    fn size(&self) -> usize {
        size(&self.source).map(|n| n.min(self.max)).or_else(0)
    }
}

pub struct Filter<C, P> {
    source: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) fn new(source: C, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        loop {
            match self.source.next() {
                Present(item) => {
                    if (self.predicate)(&item) {
                        return Present(item);
                    }
                }
                Empty => return Empty,
            }
        }
    }
}

pub struct Map<C, F> {
    source: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(crate) fn new(source: C, f: F) -> Self {
        Self { source, f }
    }
}

impl<C, F, R> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Optional<R> {
        self.source.next().map(&mut self.f)
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        self.source.known_size()
    }
}

pub struct Peek<C, F> {
    source: C,
    consumer: F,
}

impl<C, F> Peek<C, F> {
    pub(crate) fn new(source: C, consumer: F) -> Self {
        Self { source, consumer }
    }
}

impl<C, F> Cursor for Peek<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        let item = self.source.next();
        if let Present(value) = &item {
            (self.consumer)(value);
        }
        item
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        self.source.known_size()
    }
}

/// Yields while the predicate holds and stops for good at the first miss
pub struct TakeWhile<C, P> {
    source: C,
    predicate: P,
    done: bool,
}

impl<C, P> TakeWhile<C, P> {
    pub(crate) fn new(source: C, predicate: P) -> Self {
        Self { source, predicate, done: false }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        if self.done {
            return Empty;
        }
        match self.source.next() {
            Present(item) if (self.predicate)(&item) => Present(item),
            _ => {
                self.done = true;
                Empty
            }
        }
    }
}
