//! The pull-based key-value sequence protocol shared by everything in this crate.

use alloc::boxed::Box;
use core::iter::FusedIterator;

/// A lazy, single-pass sequence of key-value pairs.
///
/// All forward operations take `&mut self`, so implementations are free to defer any work
/// (including producing their first element) until they're first asked about it.
///
/// Once [`current`](`LazySequence::current`) returns [`None`], the sequence is exhausted
/// and [`advance`](`LazySequence::advance`) is a no-op.
pub trait LazySequence {
	/// The key type.
	type Key;
	/// The value type.
	type Value;

	/// Retrieves the current key-value pair, iff the sequence isn't exhausted.
	fn current(&mut self) -> Option<(&Self::Key, &Self::Value)>;

	/// Moves past the current pair.
	fn advance(&mut self);

	/// Checks whether there is a current pair.
	fn has_next(&mut self) -> bool {
		self.current().is_some()
	}

	/// Retrieves the current key, iff the sequence isn't exhausted.
	fn current_key(&mut self) -> Option<&Self::Key> {
		self.current().map(|(key, _)| key)
	}

	/// Retrieves the current value, iff the sequence isn't exhausted.
	fn current_value(&mut self) -> Option<&Self::Value> {
		self.current().map(|(_, value)| value)
	}

	/// Drains the remaining pairs of this sequence as [`Iterator`], cloning each of them.
	fn entries(&mut self) -> Entries<'_, Self>
	where
		Self: Sized,
	{
		Entries { sequence: self }
	}
}

/// A [`LazySequence`] that can be restarted from the top.
pub trait Rewind: LazySequence {
	/// Restarts this sequence.
	///
	/// This may discard state and recompute any number of elements on the next forward operation.
	fn rewind(&mut self);
}

impl<S: ?Sized + LazySequence> LazySequence for &mut S {
	type Key = S::Key;
	type Value = S::Value;

	fn current(&mut self) -> Option<(&Self::Key, &Self::Value)> {
		(**self).current()
	}

	fn advance(&mut self) {
		(**self).advance()
	}
}

impl<S: ?Sized + Rewind> Rewind for &mut S {
	fn rewind(&mut self) {
		(**self).rewind()
	}
}

impl<S: ?Sized + LazySequence> LazySequence for Box<S> {
	type Key = S::Key;
	type Value = S::Value;

	fn current(&mut self) -> Option<(&Self::Key, &Self::Value)> {
		(**self).current()
	}

	fn advance(&mut self) {
		(**self).advance()
	}
}

impl<S: ?Sized + Rewind> Rewind for Box<S> {
	fn rewind(&mut self) {
		(**self).rewind()
	}
}

/// Drains a [`LazySequence`] by cloning out its current pair before each advance.
///
/// Created by [`LazySequence::entries`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Entries<'a, S> {
	sequence: &'a mut S,
}

impl<S: LazySequence> Iterator for Entries<'_, S>
where
	S::Key: Clone,
	S::Value: Clone,
{
	type Item = (S::Key, S::Value);

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self
			.sequence
			.current()
			.map(|(key, value)| (key.clone(), value.clone()))?;
		self.sequence.advance();
		Some(entry)
	}
}

impl<S: LazySequence> FusedIterator for Entries<'_, S>
where
	S::Key: Clone,
	S::Value: Clone,
{
}
