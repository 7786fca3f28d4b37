/// Loading phase of the sandboxed renderer.
///
/// Starts in [`LoadingPhase::Loading`] and moves to [`LoadingPhase::Ready`]
/// when the sandbox reports its first load. There is no way back and no
/// timeout: a sandbox that never reports keeps the host loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingPhase {
	#[default]
	Loading,
	Ready,
}

impl LoadingPhase {
	/// Move to `Ready`. Returns `true` only for the transition itself.
	pub fn mark_ready(&mut self) -> bool {
		let transitioned = *self == LoadingPhase::Loading;
		*self = LoadingPhase::Ready;
		transitioned
	}

	pub fn is_ready(self) -> bool {
		self == LoadingPhase::Ready
	}

	/// Whether the loading indicator overlay should be visible.
	pub fn shows_indicator(self) -> bool {
		!self.is_ready()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn becomes_ready_once() {
		let mut phase = LoadingPhase::default();
		assert!(phase.shows_indicator());

		assert!(phase.mark_ready());
		assert!(phase.is_ready());
		assert!(!phase.shows_indicator());

		assert!(!phase.mark_ready());
		assert_eq!(phase, LoadingPhase::Ready);
	}
}
