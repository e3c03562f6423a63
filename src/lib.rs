//! Multi-pass adapters for single-pass lazy key-value sequences.
//!
//! A [`Rewindable`] doesn't wrap a live sequence, but the recipe for one:
//! a [`Factory`] and the arguments to call it with.
//! Rewinding drops the live sequence, and the next forward operation realizes a fresh one.
//!
//! ```
//! use rewindable::{call_rewindable, LazySequence, Pairs};
//!
//! let mut tripled = call_rewindable(|values: &[i32; 3]| Pairs::indexed(values.map(|v| v * 3)), [1, 2, 3]);
//!
//! assert_eq!(tripled.replay().map(|(_, v)| v).collect::<Vec<_>>(), [3, 6, 9]);
//! assert_eq!(tripled.replay().map(|(_, v)| v).collect::<Vec<_>>(), [3, 6, 9]);
//! ```
//!
//! # Threading
//!
//! Nothing here is synchronised. Each sequence has a single owner that drives it by `&mut` reference.
#![no_std]
#![doc(html_root_url = "https://docs.rs/rewindable/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;

mod pairs;
mod product;
mod rewindable;
mod sequence;

pub use pairs::Pairs;
pub use product::{product, Product};
pub use rewindable::{Factory, FnFactory, Rewindable, TryFnFactory};
pub use sequence::{Entries, LazySequence, Rewind};

use tap::Pipe;

/// Binds an **infallible** `factory` once, returning a constructor of [`Rewindable`]s over it.
///
/// Each call of the returned function captures its argument for replay.
pub fn make_rewindable<A, F, S>(factory: F) -> impl Fn(A) -> Rewindable<A, FnFactory<F>>
where
	F: Clone + Fn(&A) -> S,
	S: LazySequence,
{
	move |args| call_rewindable(factory.clone(), args)
}

/// Binds a **fallible** `factory` once, returning a constructor of [`Rewindable`]s over it.
pub fn try_make_rewindable<A, F, S, E>(factory: F) -> impl Fn(A) -> Rewindable<A, TryFnFactory<F>>
where
	F: Clone + Fn(&A) -> Result<S, E>,
	S: LazySequence,
{
	move |args| try_call_rewindable(factory.clone(), args)
}

/// Wraps an **infallible** `factory` and its `args` into a [`Rewindable`] in one go.
///
/// `factory` isn't called until the first forward operation.
pub fn call_rewindable<A, F, S>(factory: F, args: A) -> Rewindable<A, FnFactory<F>>
where
	F: Fn(&A) -> S,
	S: LazySequence,
{
	FnFactory(factory).pipe(|factory| Rewindable::new(factory, args))
}

/// Wraps a **fallible** `factory` and its `args` into a [`Rewindable`] in one go.
///
/// `factory` isn't called until the first forward operation,
/// and its errors are surfaced by the `try_…` methods of the result.
pub fn try_call_rewindable<A, F, S, E>(factory: F, args: A) -> Rewindable<A, TryFnFactory<F>>
where
	F: Fn(&A) -> Result<S, E>,
	S: LazySequence,
{
	TryFnFactory(factory).pipe(|factory| Rewindable::new(factory, args))
}
