//! Multi-pass sequences that replay a factory instead of buffering elements.

use crate::{Entries, LazySequence, Rewind};
use core::{convert::Infallible, fmt};
use log::trace;

/// A recipe for single-pass [`LazySequence`]s.
///
/// Implement this on a unit struct to bind a sequence-producing function once,
/// or wrap a closure in [`FnFactory`] or [`TryFnFactory`].
///
/// Rewinding only makes sense if [`realize`](`Factory::realize`) is effectively pure,
/// i.e. calling it again with the same arguments produces an equivalent sequence.
/// That's a contract on the implementor and isn't checked.
pub trait Factory<A> {
	/// The sequence produced on each realization.
	type Sequence: LazySequence;
	/// The error returned by a failed realization.
	type Error;

	/// Produces a fresh sequence from `args`.
	///
	/// # Errors
	///
	/// Iff the sequence can't be produced from `args`.
	fn realize(&self, args: &A) -> Result<Self::Sequence, Self::Error>;
}

/// An infallible closure [`Factory`].
#[derive(Clone, Copy)]
pub struct FnFactory<F>(pub F);

/// A fallible closure [`Factory`].
#[derive(Clone, Copy)]
pub struct TryFnFactory<F>(pub F);

impl<A, F, S> Factory<A> for FnFactory<F>
where
	F: Fn(&A) -> S,
	S: LazySequence,
{
	type Sequence = S;
	type Error = Infallible;

	fn realize(&self, args: &A) -> Result<S, Infallible> {
		Ok(self.0(args))
	}
}

impl<A, F, S, E> Factory<A> for TryFnFactory<F>
where
	F: Fn(&A) -> Result<S, E>,
	S: LazySequence,
{
	type Sequence = S;
	type Error = E;

	fn realize(&self, args: &A) -> Result<S, E> {
		self.0(args)
	}
}

/// A rewindable [`LazySequence`] that's recreated by calling its [`Factory`] again.
///
/// No sequence exists right after construction or [`rewind`](`Rewindable::rewind`).
/// The first forward operation after that **realizes** a new one,
/// by calling the factory with the captured arguments exactly once.
///
/// Elements are never buffered, so infinite sequences stay rewindable in constant memory.
///
/// # Side Effects
///
/// Anything the factory or the produced sequence does on the side happens again on each replay.
///
/// # Errors
///
/// A failed realization is returned unchanged by the `try_…` method that triggered it,
/// and leaves no sequence behind: the next forward operation calls the factory again.
/// For infallible factories, [`Rewindable`] is itself a [`LazySequence`] and [`Rewind`].
pub struct Rewindable<A, F: Factory<A>> {
	factory: F,
	args: A,
	inner: Option<F::Sequence>,
}

impl<A, F: Factory<A>> Rewindable<A, F> {
	/// Captures `factory` and `args` without calling the former.
	#[must_use]
	pub const fn new(factory: F, args: A) -> Self {
		Self {
			factory,
			args,
			inner: None,
		}
	}

	/// Discards the current sequence, if any.
	///
	/// This is idempotent and doesn't call the factory.
	pub fn rewind(&mut self) {
		if self.inner.take().is_some() {
			trace!("Discarded realized sequence.");
		}
	}

	/// Checks whether a sequence is currently realized.
	#[must_use]
	pub fn is_realized(&self) -> bool {
		self.inner.is_some()
	}

	/// Retrieves the current sequence, realizing it first if necessary.
	///
	/// # Errors
	///
	/// Iff realization was necessary and failed.
	pub fn try_realize(&mut self) -> Result<&mut F::Sequence, F::Error> {
		let inner = match self.inner.take() {
			Some(inner) => inner,
			None => match self.factory.realize(&self.args) {
				Ok(inner) => {
					trace!("Realized sequence.");
					inner
				}
				Err(error) => {
					trace!("Realization failed.");
					return Err(error);
				}
			},
		};
		Ok(self.inner.insert(inner))
	}

	/// Checks whether there is a current pair, realizing the sequence first if necessary.
	///
	/// # Errors
	///
	/// Iff realization was necessary and failed.
	pub fn try_has_next(&mut self) -> Result<bool, F::Error> {
		self.try_realize().map(LazySequence::has_next)
	}

	/// Retrieves the current pair, realizing the sequence first if necessary.
	///
	/// # Errors
	///
	/// Iff realization was necessary and failed.
	#[allow(clippy::type_complexity)]
	pub fn try_current(
		&mut self,
	) -> Result<
		Option<(
			&<F::Sequence as LazySequence>::Key,
			&<F::Sequence as LazySequence>::Value,
		)>,
		F::Error,
	> {
		self.try_realize().map(LazySequence::current)
	}

	/// Retrieves the current key, realizing the sequence first if necessary.
	///
	/// # Errors
	///
	/// Iff realization was necessary and failed.
	pub fn try_current_key(
		&mut self,
	) -> Result<Option<&<F::Sequence as LazySequence>::Key>, F::Error> {
		self.try_realize().map(LazySequence::current_key)
	}

	/// Retrieves the current value, realizing the sequence first if necessary.
	///
	/// # Errors
	///
	/// Iff realization was necessary and failed.
	pub fn try_current_value(
		&mut self,
	) -> Result<Option<&<F::Sequence as LazySequence>::Value>, F::Error> {
		self.try_realize().map(LazySequence::current_value)
	}

	/// Moves past the current pair, realizing the sequence first if necessary.
	///
	/// # Errors
	///
	/// Iff realization was necessary and failed.
	pub fn try_advance(&mut self) -> Result<(), F::Error> {
		self.try_realize().map(LazySequence::advance)
	}
}

impl<A, F: Factory<A, Error = Infallible>> Rewindable<A, F> {
	/// Retrieves the current sequence, realizing it first if necessary.
	pub fn realize(&mut self) -> &mut F::Sequence {
		unwrap_infallible(self.try_realize())
	}

	/// Rewinds, then drains a fresh sequence as [`Iterator`].
	pub fn replay(&mut self) -> Entries<'_, Self> {
		self.rewind();
		self.entries()
	}
}

impl<A, F: Factory<A, Error = Infallible>> LazySequence for Rewindable<A, F> {
	type Key = <F::Sequence as LazySequence>::Key;
	type Value = <F::Sequence as LazySequence>::Value;

	fn current(&mut self) -> Option<(&Self::Key, &Self::Value)> {
		self.realize().current()
	}

	fn advance(&mut self) {
		self.realize().advance()
	}
}

impl<A, F: Factory<A, Error = Infallible>> Rewind for Rewindable<A, F> {
	fn rewind(&mut self) {
		Rewindable::rewind(self)
	}
}

impl<A: fmt::Debug, F: Factory<A>> fmt::Debug for Rewindable<A, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Rewindable")
			.field("args", &self.args)
			.field("realized", &self.is_realized())
			.finish_non_exhaustive()
	}
}

fn unwrap_infallible<T>(infallible: Result<T, Infallible>) -> T {
	match infallible {
		Ok(value) => value,
		Err(never) => match never {},
	}
}
