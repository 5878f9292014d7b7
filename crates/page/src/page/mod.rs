//! Page lifecycle: wiring at page-ready, event dispatch afterwards.
//!
//! [`Page::ready`] runs the fixed initialization order (gallery render,
//! then reveal registration, then navigation tracking) and performs the
//! initial watcher pass so above-the-fold content settles immediately.
//! After that every behavior runs to completion on its own event through
//! [`Page::dispatch`]; there is no cross-behavior call, only shared reads
//! of the document.

use std::time::Duration;

use vitrine_dom::{Document, NodeId};

use crate::alerts::{ALERT_ANCHOR, AlertCenter};
use crate::contact::{self, CONTACT_FORM, SubmitOutcome};
use crate::error::Result;
use crate::gallery::{self, PROJECTS_CONTAINER};
use crate::nav::{self, NavController};
use crate::projects::{self, Project};
use crate::reveal::{REVEAL_SELECTOR, RevealAnimator};

/// A page event, in the order the host dispatches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	/// A click on an element.
	Click {
		/// The clicked element.
		target: NodeId,
	},
	/// A form submission.
	Submit {
		/// The submitted form.
		form: NodeId,
	},
	/// The viewport scrolled (any amount).
	Scrolled,
	/// Page time advanced.
	Tick(Duration),
}

/// What dispatching one event did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
	/// Whether the event's default action (navigation jump, form
	/// submission) was suppressed.
	pub default_prevented: bool,
	/// The submit outcome, when the event was a contact-form submission.
	pub submit: Option<SubmitOutcome>,
}

/// The wired page: document plus the four behaviors.
#[derive(Debug)]
pub struct Page {
	doc: Document,
	projects: Vec<Project>,
	alerts: AlertCenter,
	nav: Option<NavController>,
	reveal: Option<RevealAnimator>,
}

impl Page {
	/// Creates a page over `doc` with the built-in project list.
	pub fn new(doc: Document) -> Self {
		Self::with_projects(doc, projects::builtin())
	}

	/// Creates a page over `doc` with an explicit project list.
	pub fn with_projects(doc: Document, projects: Vec<Project>) -> Self {
		Self {
			doc,
			projects,
			alerts: AlertCenter::new(ALERT_ANCHOR),
			nav: None,
			reveal: None,
		}
	}

	/// Wires every behavior. Call once, at page-ready.
	pub fn ready(&mut self) -> Result<()> {
		gallery::render_projects(&mut self.doc, &self.projects, PROJECTS_CONTAINER);
		let mut reveal = RevealAnimator::init(&mut self.doc, REVEAL_SELECTOR)?;
		let mut nav = NavController::new(&self.doc)?;

		// Initial pass: above-the-fold targets reveal, the starting
		// section's link activates.
		reveal.on_scroll(&mut self.doc);
		nav.on_scroll(&mut self.doc);

		self.reveal = Some(reveal);
		self.nav = Some(nav);
		tracing::debug!("page ready");
		Ok(())
	}

	/// Routes one event to its behavior and runs it to completion.
	pub fn dispatch(&mut self, event: Event) -> Dispatch {
		match event {
			Event::Click { target } => {
				if self.alerts.handle_click(&mut self.doc, target) {
					return Dispatch::default();
				}
				let prevented = self.doc.tag(target) == "a"
					&& nav::handle_anchor_click(&mut self.doc, target);
				Dispatch {
					default_prevented: prevented,
					submit: None,
				}
			}
			Event::Submit { form } => {
				if self.doc.element_id(form) != Some(CONTACT_FORM) {
					return Dispatch::default();
				}
				let outcome = contact::handle_submit(&mut self.doc, &mut self.alerts);
				Dispatch {
					default_prevented: true,
					submit: Some(outcome),
				}
			}
			Event::Scrolled => {
				if let Some(nav) = &mut self.nav {
					nav.on_scroll(&mut self.doc);
				}
				if let Some(reveal) = &mut self.reveal {
					reveal.on_scroll(&mut self.doc);
				}
				Dispatch::default()
			}
			Event::Tick(elapsed) => {
				self.alerts.tick(&mut self.doc, elapsed);
				Dispatch::default()
			}
		}
	}

	/// The live document.
	pub fn document(&self) -> &Document {
		&self.doc
	}

	/// Mutable access to the document, for the host driving scroll and
	/// layout.
	pub fn document_mut(&mut self) -> &mut Document {
		&mut self.doc
	}

	/// The alert slot.
	pub fn alerts(&self) -> &AlertCenter {
		&self.alerts
	}
}
