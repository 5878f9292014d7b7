//! Edge-triggered viewport watching.
//!
//! [`ViewportWatcher`] is the headless stand-in for the browser's
//! `IntersectionObserver`: targets are registered once, and each
//! [`poll`](ViewportWatcher::poll) after a scroll or layout change reports
//! only the targets whose intersection state flipped since the previous
//! poll. Entries come back in registration order, so registering targets in
//! document order keeps downstream traversal deterministic.


use crate::document::{Document, NodeId};

/// What counts as "intersecting" for a watcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
	/// At least this fraction of the target's height is inside the viewport.
	VisibleFraction(f64),
	/// The target's vertical extent spans the horizontal line this many
	/// pixels below the viewport top (edge-inclusive).
	LineContained(i32),
}

/// A state change reported by [`ViewportWatcher::poll`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchEntry {
	/// The target that changed state.
	pub node: NodeId,
	/// The target's new intersection state.
	pub is_intersecting: bool,
	/// Fraction of the target currently visible (1.0 or 0.0 for
	/// line-containment triggers).
	pub fraction: f64,
}

#[derive(Debug)]
struct Target {
	node: NodeId,
	intersecting: bool,
}

/// Watches a set of elements for viewport-intersection state changes.
#[derive(Debug)]
pub struct ViewportWatcher {
	trigger: Trigger,
	targets: Vec<Target>,
}

impl ViewportWatcher {
	/// Creates a watcher with the given trigger and no targets.
	pub fn new(trigger: Trigger) -> Self {
		Self {
			trigger,
			targets: Vec::new(),
		}
	}

	/// Registers a target. Targets start as not intersecting, so an
	/// already-visible element produces an entry on the next poll, matching
	/// the browser observer's initial callback. Re-registering is a no-op.
	pub fn observe(&mut self, node: NodeId) {
		if !self.targets.iter().any(|t| t.node == node) {
			self.targets.push(Target {
				node,
				intersecting: false,
			});
		}
	}

	/// Drops a target from the watch set.
	pub fn unobserve(&mut self, node: NodeId) {
		self.targets.retain(|t| t.node != node);
	}

	/// Number of watched targets.
	pub fn len(&self) -> usize {
		self.targets.len()
	}

	/// Whether the watch set is empty.
	pub fn is_empty(&self) -> bool {
		self.targets.is_empty()
	}

	/// Re-measures every target and returns the ones whose intersection
	/// state changed, in registration order.
	pub fn poll(&mut self, doc: &Document) -> Vec<WatchEntry> {
		let mut entries = Vec::new();
		for target in &mut self.targets {
			let (is_intersecting, fraction) = measure(doc, target.node, self.trigger);
			if is_intersecting != target.intersecting {
				target.intersecting = is_intersecting;
				entries.push(WatchEntry {
					node: target.node,
					is_intersecting,
					fraction,
				});
			}
		}
		if !entries.is_empty() {
			tracing::trace!(changed = entries.len(), "viewport watcher state changes");
		}
		entries
	}

	/// The targets currently intersecting, in registration order.
	///
	/// Reflects state as of the last [`poll`](Self::poll).
	pub fn intersecting(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.targets
			.iter()
			.filter(|t| t.intersecting)
			.map(|t| t.node)
	}
}

/// Measures one target against the viewport. Targets without geometry (or
/// detached from the tree) never intersect.
fn measure(doc: &Document, node: NodeId, trigger: Trigger) -> (bool, f64) {
	let Some(client) = doc.client_rect(node) else {
		return (false, 0.0);
	};
	let viewport = doc.viewport().rect();
	match trigger {
		Trigger::VisibleFraction(threshold) => {
			let fraction = client.visible_fraction(viewport);
			(fraction >= threshold, fraction)
		}
		Trigger::LineContained(offset) => {
			let contained = client.contains_y(offset);
			(contained, if contained { 1.0 } else { 0.0 })
		}
	}
}
