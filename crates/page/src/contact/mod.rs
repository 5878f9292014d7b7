//! Contact form handling: read, validate, acknowledge.
//!
//! Submission runs Idle → Validating → {Rejected, Acknowledged}, re-entrant
//! per submit event. Validation is an ordered pipeline; the first failing
//! validator produces the rejection and the rest are skipped. No network
//! call is made anywhere here: an acknowledged submission is logged and
//! discarded, and a real backend would hook in after [`SubmitOutcome::Acknowledged`].


use std::sync::OnceLock;

use regex::Regex;
use vitrine_dom::Document;

use crate::alerts::{Alert, AlertCenter, Level};

/// Id of the contact form element.
pub const CONTACT_FORM: &str = "contact-form";

/// Ids of the form's input fields, in form order.
pub const FIELD_IDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Rejection message when any field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields!";

/// Rejection message when the email is malformed.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email!";

/// Acknowledgment message for a valid submission.
pub const SUCCESS_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon!";

/// One submission's field values, trimmed, captured at submit time.
///
/// Transient by design: validated, acknowledged, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
	/// Visitor name.
	pub name: String,
	/// Reply address.
	pub email: String,
	/// Message subject.
	pub subject: String,
	/// Message body.
	pub message: String,
}

impl Submission {
	/// Captures the current field values from the live document, trimmed.
	/// Missing fields read as empty.
	pub fn read(doc: &Document) -> Self {
		let field = |id: &str| {
			doc.get_element_by_id(id)
				.map(|node| doc.value(node).trim().to_string())
				.unwrap_or_default()
		};
		Self {
			name: field("name"),
			email: field("email"),
			subject: field("subject"),
			message: field("message"),
		}
	}
}

/// A terminal validation failure: what to tell the visitor, and how loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
	/// Message surfaced in the alert.
	pub message: &'static str,
	/// Alert severity.
	pub level: Level,
}

type Validator = fn(&Submission) -> Result<(), Rejection>;

/// The validation pipeline, in order. First failure wins.
const VALIDATORS: &[Validator] = &[required_fields, email_shape];

/// Runs the pipeline over a submission.
pub fn validate(submission: &Submission) -> Result<(), Rejection> {
	for validator in VALIDATORS {
		validator(submission)?;
	}
	Ok(())
}

fn required_fields(s: &Submission) -> Result<(), Rejection> {
	let filled = [&s.name, &s.email, &s.subject, &s.message]
		.into_iter()
		.all(|field| !field.is_empty());
	if filled {
		Ok(())
	} else {
		Err(Rejection {
			message: MISSING_FIELDS_MESSAGE,
			level: Level::Warning,
		})
	}
}

fn email_shape(s: &Submission) -> Result<(), Rejection> {
	if email_is_valid(&s.email) {
		Ok(())
	} else {
		Err(Rejection {
			message: INVALID_EMAIL_MESSAGE,
			level: Level::Warning,
		})
	}
}

/// `local@domain.tld` shape: non-whitespace local and domain parts around
/// one `@`, with a `.` in the domain.
pub fn email_is_valid(email: &str) -> bool {
	static SHAPE: OnceLock<Regex> = OnceLock::new();
	let shape = SHAPE.get_or_init(|| {
		Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
	});
	shape.is_match(email)
}

/// How a submit event resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Valid submission: success alert shown, fields cleared.
	Acknowledged,
	/// Validation failed: warning alert shown, fields left for correction.
	Rejected {
		/// The rejection message shown to the visitor.
		message: &'static str,
	},
}

/// Handles one submit event against the live document.
///
/// Reads and validates the fields, surfaces the outcome through `alerts`,
/// and clears the form only on acknowledgment.
pub fn handle_submit(doc: &mut Document, alerts: &mut AlertCenter) -> SubmitOutcome {
	let submission = Submission::read(doc);
	match validate(&submission) {
		Err(rejection) => {
			tracing::debug!(message = rejection.message, "submission rejected");
			alerts.show(
				doc,
				Alert {
					message: rejection.message.to_string(),
					level: rejection.level,
				},
			);
			SubmitOutcome::Rejected {
				message: rejection.message,
			}
		}
		Ok(()) => {
			alerts.show(doc, Alert::success(SUCCESS_MESSAGE));
			reset_fields(doc);
			// The submission is dropped here; a backend integration would
			// take over at this point instead.
			tracing::debug!(
				name = %submission.name,
				email = %submission.email,
				subject = %submission.subject,
				"submission acknowledged"
			);
			SubmitOutcome::Acknowledged
		}
	}
}

fn reset_fields(doc: &mut Document) {
	for id in FIELD_IDS {
		if let Some(node) = doc.get_element_by_id(id) {
			doc.clear_value(node);
		}
	}
}
