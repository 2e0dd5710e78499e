//! an optional value that keeps its payload inline, right next to an
//! engagement flag. no niche of `T`, no sentinel value, no heap.
//!
//! `Optional<T>` gives you two ways in: the checked ones (`value`,
//! `value_mut`, `into_value`) that hand back a [`BadOptionalAccess`], and the
//! unsafe `*_unchecked` ones that trust the caller and skip the flag check.
//!
//! nothing is logged by default. the `log` feature makes a failed checked
//! access (or a panicking deref) emit one `debug` record through the `log`
//! facade, naming the payload type.
#![no_std]

mod error;
mod optional;
mod storage;

pub use error::BadOptionalAccess;
pub use optional::Optional;
