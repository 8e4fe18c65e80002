//! Optional values
//!
//! `Optional<T>` is either `Present(T)` or `Empty`. It is the return type of
//! every cursor pull and of the `size` capability query, so the combinators
//! here are what the stream adapters are written in.

use std::fmt;

use crate::error::{FluentError, FluentResult};
use crate::outcome::Outcome;

/// A value that is either present or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    Present(T),
    Empty,
}

pub use Optional::{Empty, Present};

/// Wraps `value` in `Present`.
pub fn present<T>(value: T) -> Optional<T> {
    Present(value)
}

/// Returns an empty `Optional`.
pub fn empty<T>() -> Optional<T> {
    Empty
}

/// Heterogeneous map kept as a free function; same as `Optional::map`.
pub fn map_optional<T, R, F>(o: Optional<T>, mapper: F) -> Optional<R>
where
    F: FnOnce(T) -> R,
{
    o.map(mapper)
}

/// `Present` for `Some(&value)`, `Empty` for `None`.
pub fn of_nullable<T>(reference: Option<&T>) -> Optional<&T> {
    match reference {
        Some(r) => Present(r),
        None => Empty,
    }
}

impl<T> Optional<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with [`FluentError::EmptyValueAccess`] if the option is empty.
    /// Check with [`is_present`](Self::is_present) or use
    /// [`try_get`](Self::try_get) when absence is expected.
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Present(value) => value,
            Empty => panic!("{}", FluentError::EmptyValueAccess),
        }
    }

    pub fn try_get(self) -> FluentResult<T> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(FluentError::EmptyValueAccess),
        }
    }

    /// Applies `mapper` to the value if present. `mapper` is never called on `Empty`.
    pub fn map<R, F>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Present(value) => Present(mapper(value)),
            Empty => Empty,
        }
    }

    pub fn or_else(self, other: T) -> T {
        match self {
            Present(value) => value,
            Empty => other,
        }
    }

    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(value) => value,
            Empty => supplier(),
        }
    }

    /// Returns `self` if present, otherwise the supplier's option.
    pub fn or<F>(self, supplier: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Present(_) => self,
            Empty => supplier(),
        }
    }

    /// Lifts into an `Outcome`: `Present` becomes `Ok`, `Empty` becomes `Err(error)`.
    pub fn or_error<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Present(value) => Outcome::Ok(value),
            Empty => Outcome::Err(error),
        }
    }

    pub fn if_present<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Present(value) = self {
            consumer(value);
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) if predicate(&value) => Present(value),
            _ => Empty,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Empty => Empty,
        }
    }

    /// Takes the value out, leaving `Empty` behind.
    pub fn take(&mut self) -> Optional<T> {
        std::mem::replace(self, Empty)
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Present(v),
            None => Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Present(v) => Some(v),
            Empty => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Present[{}]", value),
            Empty => write!(f, "Empty[]"),
        }
    }
}
