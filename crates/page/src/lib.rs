//! Portfolio page interactivity.
//!
//! Four independent behaviors share one page-load lifecycle and operate on
//! a [`vitrine_dom::Document`] as shared state:
//!
//! - **[`gallery`]** renders one card per project record into the gallery
//!   container, replacing any placeholder content.
//! - **[`contact`]** validates contact-form submissions through an ordered
//!   validator pipeline and acknowledges them with a transient alert
//!   instead of a network call.
//! - **[`nav`]** smooth-scrolls in-page anchor clicks and keeps exactly one
//!   navigation link highlighted as sections scroll past a fixed reference
//!   line.
//! - **[`reveal`]** fades eligible elements in the first time they become
//!   sufficiently visible, and never hides them again.
//!
//! [`Page`] owns the wiring: behaviors are registered at page-ready in a
//! fixed order, then each runs to completion on its own event via
//! [`Page::dispatch`].

pub mod alerts;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod nav;
pub mod page;
pub mod projects;
pub mod reveal;

pub use alerts::{Alert, AlertCenter, Level};
pub use contact::{SubmitOutcome, Submission};
pub use error::{PageError, Result};
pub use page::{Dispatch, Event, Page};
pub use projects::Project;
