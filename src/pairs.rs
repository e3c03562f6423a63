//! [`Iterator`]-backed [`LazySequence`]s.

use crate::LazySequence;
use core::iter::Enumerate;

/// Adapts an [`Iterator`] of key-value pairs into a [`LazySequence`].
///
/// One element of lookahead is held as the current pair.
/// The first one is only pulled from the iterator on the first forward operation,
/// so constructing a [`Pairs`] doesn't run any of the iterator's closures.
///
/// Once exhausted, the wrapped iterator is not polled again.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Pairs<I: Iterator> {
	iter: I,
	current: Option<I::Item>,
	primed: bool,
}

impl<I: Iterator> Pairs<I> {
	/// Wraps `pairs` without pulling from it.
	pub fn new(pairs: impl IntoIterator<IntoIter = I>) -> Self {
		Self {
			iter: pairs.into_iter(),
			current: None,
			primed: false,
		}
	}

	fn prime(&mut self) {
		if !self.primed {
			self.primed = true;
			self.current = self.iter.next();
		}
	}
}

impl<J: Iterator> Pairs<Enumerate<J>> {
	/// Wraps `values`, keying them by their position, starting at `0`.
	pub fn indexed(values: impl IntoIterator<IntoIter = J>) -> Self {
		Self::new(values.into_iter().enumerate())
	}
}

impl<I, K, V> LazySequence for Pairs<I>
where
	I: Iterator<Item = (K, V)>,
{
	type Key = K;
	type Value = V;

	fn current(&mut self) -> Option<(&K, &V)> {
		self.prime();
		self.current.as_ref().map(|(key, value)| (key, value))
	}

	fn advance(&mut self) {
		self.prime();
		if self.current.is_some() {
			self.current = self.iter.next();
		}
	}
}
