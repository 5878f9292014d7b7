//! One-way reveal animation for cards and section headings.
//!
//! Matched elements start hidden (transparent, offset downward) and
//! transition to visible the first time enough of them enters the
//! viewport. Revealed elements leave the watch set for good; scrolling
//! away never re-hides them.

#[cfg(test)]
mod tests;

use vitrine_dom::{Document, SelectorError, Trigger, ViewportWatcher};

/// Elements eligible for the reveal animation.
pub const REVEAL_SELECTOR: &str = ".card, section h2";

/// Fraction of an element's height that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

const HIDDEN_OFFSET: &str = "translateY(20px)";
const REVEALED_OFFSET: &str = "translateY(0)";
const TRANSITION: &str = "all 0.6s ease";

/// Watches reveal targets and flips them visible on first intersection.
#[derive(Debug)]
pub struct RevealAnimator {
	watcher: ViewportWatcher,
}

impl RevealAnimator {
	/// Hides every element matching `selector` and registers it for
	/// reveal. Call once at page-ready, after the gallery has rendered.
	pub fn init(doc: &mut Document, selector: &str) -> Result<Self, SelectorError> {
		let mut watcher = ViewportWatcher::new(Trigger::VisibleFraction(REVEAL_THRESHOLD));
		for node in doc.select_all(selector)? {
			doc.set_style(node, "opacity", "0");
			doc.set_style(node, "transform", HIDDEN_OFFSET);
			doc.set_style(node, "transition", TRANSITION);
			watcher.observe(node);
		}
		tracing::debug!(targets = watcher.len(), "reveal animation registered");
		Ok(Self { watcher })
	}

	/// Reveals any watched element that crossed the visibility threshold.
	pub fn on_scroll(&mut self, doc: &mut Document) {
		for entry in self.watcher.poll(doc) {
			if entry.is_intersecting {
				doc.set_style(entry.node, "opacity", "1");
				doc.set_style(entry.node, "transform", REVEALED_OFFSET);
				// Revealed is terminal; stop watching.
				self.watcher.unobserve(entry.node);
			}
		}
	}

	/// Number of elements still waiting to be revealed.
	pub fn pending(&self) -> usize {
		self.watcher.len()
	}
}
