//! Single-slot, auto-expiring page alerts.
//!
//! Alerts mount as the first child of a fixed anchor section and expire
//! after a display time of ticked page time. The slot holds at most one
//! alert: showing a new one removes any still-pending one first
//! (replacement, not stacking), which keeps the visible state
//! deterministic under rapid submissions.


use std::time::Duration;

use vitrine_dom::{Document, NodeId};

/// Id of the section alerts are inserted into.
pub const ALERT_ANCHOR: &str = "contact";

/// How long an alert stays mounted without being dismissed.
pub const DISPLAY_TIME: Duration = Duration::from_secs(5);

/// Visual severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	/// A confirmation, e.g. an acknowledged submission.
	Success,
	/// A recoverable problem the visitor should fix.
	Warning,
}

impl Level {
	/// The style class carrying this level's appearance.
	pub fn class(self) -> &'static str {
		match self {
			Level::Success => "alert-success",
			Level::Warning => "alert-warning",
		}
	}
}

/// A message to surface near the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
	/// Text shown to the visitor.
	pub message: String,
	/// Visual severity.
	pub level: Level,
}

impl Alert {
	/// A success-level alert.
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			level: Level::Success,
		}
	}

	/// A warning-level alert.
	pub fn warning(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			level: Level::Warning,
		}
	}
}

#[derive(Debug)]
struct Mounted {
	node: NodeId,
	remaining: Duration,
}

/// Owns the alert slot: mounting, replacement, expiry.
#[derive(Debug)]
pub struct AlertCenter {
	anchor_id: String,
	display_time: Duration,
	mounted: Option<Mounted>,
}

impl AlertCenter {
	/// Creates an alert center anchored at the element with `anchor_id`.
	pub fn new(anchor_id: &str) -> Self {
		Self {
			anchor_id: anchor_id.to_string(),
			display_time: DISPLAY_TIME,
			mounted: None,
		}
	}

	/// Overrides the auto-expiry time.
	pub fn with_display_time(mut self, display_time: Duration) -> Self {
		self.display_time = display_time;
		self
	}

	/// Mounts `alert` at the anchor, replacing any pending alert.
	///
	/// Returns the mounted element, or `None` when the anchor is missing
	/// (the alert is dropped silently).
	pub fn show(&mut self, doc: &mut Document, alert: Alert) -> Option<NodeId> {
		self.dismiss(doc);

		let Some(anchor) = doc.get_element_by_id(&self.anchor_id) else {
			tracing::debug!(anchor_id = %self.anchor_id, "alert anchor missing; alert dropped");
			return None;
		};

		let node = doc.create_element("div");
		doc.set_classes(node, "alert alert-dismissible fade show");
		doc.add_class(node, alert.level.class());
		doc.set_attr(node, "role", "alert");
		doc.set_text(node, &alert.message);

		let close = doc.create_element("button");
		doc.set_classes(close, "btn-close");
		doc.set_attr(close, "type", "button");
		doc.set_attr(close, "data-bs-dismiss", "alert");
		doc.append_child(node, close);

		doc.prepend(anchor, node);
		self.mounted = Some(Mounted {
			node,
			remaining: self.display_time,
		});
		Some(node)
	}

	/// Dismisses the pending alert when `target` is its close button.
	///
	/// Returns `true` when the click was consumed. Clicks anywhere else
	/// (including inside a stale, already-unmounted alert) fall through.
	pub fn handle_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
		let Some(mounted) = self.active() else {
			return false;
		};
		if doc.attr(target, "data-bs-dismiss") != Some("alert") {
			return false;
		}
		let inside = std::iter::successors(Some(target), |&n| doc.parent(n)).any(|n| n == mounted);
		if inside {
			self.dismiss(doc);
		}
		inside
	}

	/// Unmounts the pending alert, if any.
	pub fn dismiss(&mut self, doc: &mut Document) {
		if let Some(mounted) = self.mounted.take() {
			doc.remove(mounted.node);
		}
	}

	/// Advances alert time; the pending alert unmounts once its display
	/// time runs out.
	pub fn tick(&mut self, doc: &mut Document, elapsed: Duration) {
		let expired = match &mut self.mounted {
			Some(mounted) if elapsed >= mounted.remaining => true,
			Some(mounted) => {
				mounted.remaining -= elapsed;
				false
			}
			None => false,
		};
		if expired {
			self.dismiss(doc);
		}
	}

	/// The mounted alert element, if one is pending.
	pub fn active(&self) -> Option<NodeId> {
		self.mounted.as_ref().map(|m| m.node)
	}
}
