pub mod error;
pub mod optional;
pub mod outcome;
pub mod iterator;
pub mod stream;
pub mod stream_configuration;

pub mod array;
pub mod set;

pub use error::{BoxError, FluentError, FluentResult};
pub use optional::{Empty, Optional, Present};
pub use outcome::Outcome;
pub use iterator::{Cursor, Iterable, KnownSize};
pub use stream::{Parallel, Sequential, Stream};
pub use stream_configuration::{BufferConfig, ParallelConfig};

/// Cursor over the given elements, using the same dispatch as `iterator::from_vec`.
#[macro_export]
macro_rules! cursor_of {
    ($($item:expr),* $(,)?) => {
        $crate::iterator::from_vec(vec![$($item),*])
    };
}

/// Stream over the given elements.
#[macro_export]
macro_rules! stream_of {
    ($($item:expr),* $(,)?) => {
        $crate::stream::Stream::from_vec(vec![$($item),*])
    };
}
