//! Cartesian products over a rewindable inner sequence.

use crate::{LazySequence, Rewind};

/// The cartesian product of two [`LazySequence`]s, created by [`product`].
///
/// Keys and values are paired up as `(outer, inner)` tuples, with the inner sequence varying fastest.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Product<O: LazySequence, I: LazySequence> {
	outer: O,
	inner: I,
	#[allow(clippy::type_complexity)]
	current: Option<((O::Key, I::Key), (O::Value, I::Value))>,
	started: bool,
}

/// Creates the cartesian product of `outer` and `inner`.
///
/// `inner` is rewound before its first pair is requested and again each time `outer` advances,
/// which is why it must implement [`Rewind`].
/// Neither sequence is buffered. Each current pair is cloned out of both once.
///
/// An empty `inner` with an infinite `outer` makes the first forward operation loop forever.
pub fn product<O, I>(outer: O, inner: I) -> Product<O, I>
where
	O: LazySequence,
	I: Rewind,
{
	Product {
		outer,
		inner,
		current: None,
		started: false,
	}
}

impl<O, I> Product<O, I>
where
	O: LazySequence,
	I: Rewind,
	O::Key: Clone,
	O::Value: Clone,
	I::Key: Clone,
	I::Value: Clone,
{
	fn start(&mut self) {
		if !self.started {
			self.started = true;
			self.inner.rewind();
			self.settle();
		}
	}

	/// Skips ahead in `outer` until `inner` has a current pair (or `outer` runs out).
	fn settle(&mut self) {
		self.current = loop {
			let Some((outer_key, outer_value)) = self.outer.current() else {
				break None;
			};
			if let Some((inner_key, inner_value)) = self.inner.current() {
				break Some((
					(outer_key.clone(), inner_key.clone()),
					(outer_value.clone(), inner_value.clone()),
				));
			}
			self.outer.advance();
			self.inner.rewind();
		};
	}
}

impl<O, I> LazySequence for Product<O, I>
where
	O: LazySequence,
	I: Rewind,
	O::Key: Clone,
	O::Value: Clone,
	I::Key: Clone,
	I::Value: Clone,
{
	type Key = (O::Key, I::Key);
	type Value = (O::Value, I::Value);

	fn current(&mut self) -> Option<(&Self::Key, &Self::Value)> {
		self.start();
		self.current.as_ref().map(|(key, value)| (key, value))
	}

	fn advance(&mut self) {
		self.start();
		if self.current.is_some() {
			self.inner.advance();
			self.settle();
		}
	}
}
