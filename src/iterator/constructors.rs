//! Cursor constructors: empty, single, array, func, iter

use std::iter::Fuse;
use std::marker::PhantomData;

use super::{Cursor, Iterable, KnownSize};
use crate::optional::{Empty, Optional, Present};

// ================================
// Bounded Sources
// ================================

/// Cursor that never yields
#[derive(Debug, Clone, Copy)]
pub struct EmptyCursor<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        Empty
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        Present(self)
    }
}

impl<T> KnownSize for EmptyCursor<T> {
    fn size(&self) -> usize {
        0
    }
}

/// Cursor over exactly one item
#[derive(Debug, Clone)]
pub struct SingleCursor<T> {
    item: Optional<T>,
}

impl<T> Cursor for SingleCursor<T> {
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        self.item.take()
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        Present(self)
    }
}

// Size stays 1 after the item is consumed.
impl<T> KnownSize for SingleCursor<T> {
    fn size(&self) -> usize {
        1
    }
}

/// Cursor over the elements of a vector, in order
#[derive(Debug, Clone)]
pub struct ArrayCursor<T> {
    data: std::vec::IntoIter<T>,
    len: usize,
}

impl<T> ArrayCursor<T> {
    pub fn new(data: Vec<T>) -> Self {
        let len = data.len();
        Self { data: data.into_iter(), len }
    }
}

impl<T> Cursor for ArrayCursor<T> {
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        self.data.next().into()
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        Present(self)
    }
}

impl<T> KnownSize for ArrayCursor<T> {
    fn size(&self) -> usize {
        self.len
    }
}

/// Cursor picked by [`from_vec`] according to the element count
#[derive(Debug, Clone)]
pub enum VecCursor<T> {
    Empty(EmptyCursor<T>),
    Single(SingleCursor<T>),
    Array(ArrayCursor<T>),
}

impl<T> Cursor for VecCursor<T> {
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        match self {
            VecCursor::Empty(c) => c.next(),
            VecCursor::Single(c) => c.next(),
            VecCursor::Array(c) => c.next(),
        }
    }

    fn known_size(&self) -> Optional<&dyn KnownSize> {
        match self {
            VecCursor::Empty(c) => c.known_size(),
            VecCursor::Single(c) => c.known_size(),
            VecCursor::Array(c) => c.known_size(),
        }
    }
}

/// Reusable [`Iterable`] over an owned vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayIterable<T>(pub Vec<T>);

impl<T: Clone> Iterable for ArrayIterable<T> {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        from_vec(self.0.clone())
    }
}

impl<T> From<Vec<T>> for ArrayIterable<T> {
    fn from(value: Vec<T>) -> Self {
        ArrayIterable(value)
    }
}

// ================================
// Function-based Sources
// ================================

/// Cursor delegating every pull to a function
///
/// Has no size capability. Sticky exhaustion is up to the function.
#[derive(Clone)]
pub struct FuncCursor<F> {
    f: F,
}

impl<T, F> Cursor for FuncCursor<F>
where
    F: FnMut() -> Optional<T>,
{
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        (self.f)()
    }
}

/// Cursor over a std iterator, fused so exhaustion is sticky
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Optional<I::Item> {
        self.iter.next().into()
    }
}

// ================================
// Constructor Functions
// ================================

pub fn empty<T>() -> EmptyCursor<T> {
    EmptyCursor::default()
}

pub fn single<T>(item: T) -> SingleCursor<T> {
    SingleCursor { item: Present(item) }
}

/// Builds the cheapest cursor for `elements`: empty, single-item or array.
pub fn from_vec<T>(mut elements: Vec<T>) -> VecCursor<T> {
    match elements.len() {
        0 => VecCursor::Empty(empty()),
        1 => match elements.pop() {
            Some(item) => VecCursor::Single(single(item)),
            None => VecCursor::Empty(empty()),
        },
        _ => VecCursor::Array(ArrayCursor::new(elements)),
    }
}

pub fn func<T, F>(f: F) -> FuncCursor<F>
where
    F: FnMut() -> Optional<T>,
{
    FuncCursor { f }
}

pub fn from_iter<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor { iter: iter.into_iter().fuse() }
}
