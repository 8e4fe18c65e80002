//! Pull-based iteration protocol
//!
//! A [`Cursor`] yields elements one at a time through `next`, returning
//! `Empty` permanently once exhausted. A cursor may additionally carry the
//! [`KnownSize`] capability, queried through [`size`].

pub mod constructors;
pub mod map;
pub mod synchronized;

pub use constructors::{
    empty, from_iter, from_vec, func, single, ArrayCursor, ArrayIterable, EmptyCursor,
    FuncCursor, IterCursor, SingleCursor, VecCursor,
};
pub use map::{from_map, map_keys, map_values, MapCursor, MapEntry};
pub use synchronized::Synchronized;

use crate::optional::{Empty, Optional, Present};

/// Stateful cursor over a logical sequence
///
/// Each `next` either returns `Present(item)` and advances exactly once, or
/// returns `Empty`. Once `Empty` has been returned every later call returns
/// `Empty` too.
pub trait Cursor {
    type Item;

    fn next(&mut self) -> Optional<Self::Item>;

    /// Capability query for the exact element count.
    ///
    /// Returns `Empty` unless the cursor knows its size without consuming.
    fn known_size(&self) -> Optional<&dyn KnownSize> {
        Empty
    }

    /// Exposes this cursor as a std [`Iterator`].
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd { cursor: self }
    }
}

/// Exact element count of a bounded cursor
///
/// Sources report their original cardinality, not the remaining count.
pub trait KnownSize {
    fn size(&self) -> usize;
}

/// Types that can hand out a fresh cursor over their elements
pub trait Iterable {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;
}

/// Reported size of `cursor` if it has the [`KnownSize`] capability.
pub fn size<C: Cursor + ?Sized>(cursor: &C) -> Optional<usize> {
    cursor.known_size().map(|sized| sized.size())
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        (**self).next()
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        (**self).known_size()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        (**self).next()
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        (**self).known_size()
    }
}

/// std [`Iterator`] over a cursor, see [`Cursor::into_std`]
#[derive(Debug, Clone)]
pub struct IntoStd<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for IntoStd<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.next() {
            Present(item) => Some(item),
            Empty => None,
        }
    }
}

impl<T: Clone> Iterable for Vec<T> {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        from_vec(self.clone())
    }
}

impl<T: Clone> Iterable for [T] {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        from_vec(self.to_vec())
    }
}
