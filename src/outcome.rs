//! Success/failure values
//!
//! `Outcome<T, E>` mirrors `Optional` with an error channel. The error payload
//! is opaque: it is propagated by `map`, handed to `map_err` for recovery and
//! never inspected.

use std::fmt;

use crate::error::{BoxError, FluentError, FluentResult};
use crate::optional::{Empty, Optional, Present};

/// Output of a computation that succeeded with `T` or failed with `E`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = BoxError> {
    Ok(T),
    Err(E),
}

pub fn ok_value<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

pub fn err_value<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Heterogeneous map kept as a free function; same as `Outcome::map`.
pub fn map_outcome<T, R, E, F>(r: Outcome<T, E>, mapper: F) -> Outcome<R, E>
where
    F: FnOnce(T) -> R,
{
    r.map(mapper)
}

/// Runs a fallible call and adapts its result.
///
/// Any error produces `Err`, whatever else the call computed.
pub fn from_call<T, E, F>(call: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    call().into()
}

impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    pub fn ok(self) -> Optional<T> {
        match self {
            Outcome::Ok(value) => Present(value),
            Outcome::Err(_) => Empty,
        }
    }

    pub fn err(self) -> Optional<E> {
        match self {
            Outcome::Ok(_) => Empty,
            Outcome::Err(error) => Present(error),
        }
    }

    /// Maps the success value; an `Err` is passed through untouched.
    pub fn map<R, F>(self, mapper: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(mapper(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers an `Err` into `Ok` by applying `mapper` to the error.
    pub fn map_err<F>(self, mapper: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(_) => self,
            Outcome::Err(error) => Outcome::Ok(mapper(error)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`FluentError::ResultIsError`] on `Err`.
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", FluentError::ResultIsError),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with [`FluentError::ResultIsOk`] on `Ok`.
    #[track_caller]
    pub fn get_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("{}", FluentError::ResultIsOk),
            Outcome::Err(error) => error,
        }
    }

    pub fn try_get(self) -> FluentResult<T> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(_) => Err(FluentError::ResultIsError),
        }
    }

    pub fn try_get_err(self) -> FluentResult<E> {
        match self {
            Outcome::Ok(_) => Err(FluentError::ResultIsOk),
            Outcome::Err(error) => Ok(error),
        }
    }

    pub fn or_else(self, other: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => other,
        }
    }

    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => supplier(),
        }
    }

    pub fn or<F>(self, supplier: F) -> Outcome<T, E>
    where
        F: FnOnce() -> Outcome<T, E>,
    {
        match self {
            Outcome::Ok(_) => self,
            Outcome::Err(_) => supplier(),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok[{}]", value),
            Outcome::Err(error) => write!(f, "Err[{}]", error),
        }
    }
}
