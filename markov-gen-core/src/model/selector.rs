use rand::Rng;

/// Source of the uniform choices made during a walk.
///
/// Every [`rand::Rng`] is a selector. Tests can implement it directly to
/// script the exact sequence of choices.
pub trait Selector {
	/// Returns an index in `0..len`. `len` is never zero.
	///
	/// An index outside that range makes the walk panic.
	fn select(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Selector for R {
	fn select(&mut self, len: usize) -> usize {
		self.random_range(0..len)
	}
}
