//! Immutable generic pairs.
//!
//! A [`Pair`] holds a first and a second component of arbitrary types and
//! picks its capabilities up from them: ordering, hashing and
//! serialization are available exactly when both components support them.
//! The [`cmp`], [`hash`] and [`convert`] modules expose the helpers behind
//! those impls for use on loose, possibly absent components as well, and
//! [`deser`] writes pairs out behind a stable format version tag.

pub mod cmp;
pub mod convert;
pub mod deser;
pub mod error;
pub mod hash;
pub mod header;
mod pair;

pub use error::Error;
pub use pair::Pair;

pub type Result<T> = std::result::Result<T, Error>;
