//! Hash-backed set consuming the `Iterable` contract

use std::collections::HashSet;
use std::hash::Hash;

use crate::iterator::{from_vec, Cursor, Iterable, VecCursor};
use crate::optional::Present;

pub trait Set<T> {
    fn contains(&self, element: &T) -> bool;

    /// True if every element of `iterable` is in the set.
    fn contains_all<I>(&self, iterable: &I) -> bool
    where
        I: Iterable<Item = T> + ?Sized;

    fn add(&mut self, element: T);

    fn add_all<I>(&mut self, iterable: &I)
    where
        I: Iterable<Item = T> + ?Sized;

    fn remove(&mut self, element: &T);

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn for_each<F: FnMut(&T)>(&self, f: F);
}

/// [`Set`] over a `HashSet`. Its cursor iterates a snapshot of the elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSet<T: Eq + Hash> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> MapSet<T> {
    pub fn new() -> Self {
        Self { elements: HashSet::new() }
    }
}

impl<T: Eq + Hash> Default for MapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Set<T> for MapSet<T> {
    fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    fn contains_all<I>(&self, iterable: &I) -> bool
    where
        I: Iterable<Item = T> + ?Sized,
    {
        let mut cursor = iterable.cursor();
        while let Present(element) = cursor.next() {
            if !self.elements.contains(&element) {
                return false;
            }
        }
        true
    }

    fn add(&mut self, element: T) {
        self.elements.insert(element);
    }

    fn add_all<I>(&mut self, iterable: &I)
    where
        I: Iterable<Item = T> + ?Sized,
    {
        let mut cursor = iterable.cursor();
        while let Present(element) = cursor.next() {
            self.elements.insert(element);
        }
    }

    fn remove(&mut self, element: &T) {
        self.elements.remove(element);
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.elements.iter().for_each(f);
    }
}

impl<T: Eq + Hash + Clone> Iterable for MapSet<T> {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        from_vec(self.elements.iter().cloned().collect())
    }
}

impl<T: Eq + Hash> FromIterator<T> for MapSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}
