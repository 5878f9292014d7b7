//! Headless document model for page-interactivity logic.
//!
//! Page behaviors (rendering, form handling, scroll tracking) are written
//! against this crate instead of a live browser: an arena-backed element
//! tree with ids, classes, attributes and inline styles, a small CSS
//! selector subset, pixel geometry with a scrollable viewport, and an
//! edge-triggered viewport watcher standing in for `IntersectionObserver`.
//!
//! The model is deliberately minimal. It carries exactly the surface the
//! behaviors read and write; anything a real engine would do beyond that
//! (layout computation, cascade, event bubbling) is out of scope, and
//! element geometry is assigned by the host instead of computed.

pub mod document;
pub mod layout;
pub mod selector;
pub mod watch;

pub use document::{Document, NodeId};
pub use layout::{Rect, ScrollBehavior, Viewport};
pub use selector::{Selector, SelectorError};
pub use watch::{Trigger, ViewportWatcher, WatchEntry};
