//! Navigation: smooth anchor scrolling and active-link highlighting.
//!
//! Active-link tracking is watcher-driven rather than a raw per-scroll
//! rescan: each link's target section is registered with a line-containment
//! watch on the fixed reference line, and recomputation only runs when some
//! section's state actually flipped. The observable outcome is unchanged —
//! the link whose section spans the reference line is the sole active one.

#[cfg(test)]
mod tests;

use vitrine_dom::{Document, NodeId, ScrollBehavior, SelectorError, Trigger, ViewportWatcher};

/// Selector for the navigation links.
pub const NAV_LINKS_SELECTOR: &str = ".navbar-nav .nav-link";

/// Class marking the active navigation link.
pub const ACTIVE_CLASS: &str = "active";

/// Reference line for active-link tracking, in pixels below the viewport
/// top.
pub const ACTIVE_OFFSET: i32 = 100;

/// Tracks which navigation link corresponds to the section in view.
#[derive(Debug)]
pub struct NavController {
	/// `(link, section)` pairs, in document order of the links.
	pairs: Vec<(NodeId, NodeId)>,
	watcher: ViewportWatcher,
}

impl NavController {
	/// Collects nav links and their target sections from the document.
	///
	/// Links without a resolvable in-page target are ignored; they are
	/// page-structure mismatches, not errors.
	pub fn new(doc: &Document) -> Result<Self, SelectorError> {
		let mut pairs = Vec::new();
		let mut watcher = ViewportWatcher::new(Trigger::LineContained(ACTIVE_OFFSET));
		for link in doc.select_all(NAV_LINKS_SELECTOR)? {
			let Some(section) = anchor_target(doc, link) else {
				tracing::debug!(href = doc.attr(link, "href"), "nav link without a section");
				continue;
			};
			watcher.observe(section);
			pairs.push((link, section));
		}
		tracing::debug!(links = pairs.len(), "navigation tracking wired");
		Ok(Self { pairs, watcher })
	}

	/// Re-evaluates the active link after a scroll.
	///
	/// When no tracked section spans the reference line, the previous
	/// active link is left in place.
	pub fn on_scroll(&mut self, doc: &mut Document) {
		if self.watcher.poll(doc).is_empty() {
			return;
		}
		let in_view: Vec<NodeId> = self.watcher.intersecting().collect();
		let hit = self
			.pairs
			.iter()
			.find(|(_, section)| in_view.contains(section))
			.map(|&(link, _)| link);
		if let Some(active) = hit {
			for &(link, _) in &self.pairs {
				doc.remove_class(link, ACTIVE_CLASS);
			}
			doc.add_class(active, ACTIVE_CLASS);
		}
	}

	/// The currently active link, if any.
	pub fn active_link(&self, doc: &Document) -> Option<NodeId> {
		self.pairs
			.iter()
			.map(|&(link, _)| link)
			.find(|&link| doc.has_class(link, ACTIVE_CLASS))
	}
}

/// Handles a click on an in-page anchor link.
///
/// Returns `true` when default navigation must be suppressed, i.e. for any
/// anchor whose `href` is an in-page fragment, whether or not the target
/// exists. A missing target suppresses the jump and does nothing else.
pub fn handle_anchor_click(doc: &mut Document, link: NodeId) -> bool {
	let Some(href) = doc.attr(link, "href").map(str::to_owned) else {
		return false;
	};
	let Some(fragment) = href.strip_prefix('#') else {
		return false;
	};
	match doc.get_element_by_id(fragment) {
		Some(target) => {
			doc.scroll_into_view(target, ScrollBehavior::Smooth);
		}
		None => {
			tracing::debug!(href = %href, "anchor target missing; click ignored");
		}
	}
	true
}

fn anchor_target(doc: &Document, link: NodeId) -> Option<NodeId> {
	let fragment = doc.attr(link, "href")?.strip_prefix('#')?;
	if fragment.is_empty() {
		return None;
	}
	doc.get_element_by_id(fragment)
}
