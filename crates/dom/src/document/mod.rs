//! Arena-backed element tree with the mutation surface page behaviors use.
//!
//! Nodes are created against a [`Document`] and addressed by [`NodeId`].
//! Removal detaches a subtree from the tree; arena slots are never reused,
//! so a stale `NodeId` stays safe to query (it simply reports as
//! disconnected). Ids are only meaningful for the document that issued
//! them.


use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::layout::{Rect, ScrollBehavior, Viewport};
use crate::selector::{Selector, SelectorError};

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Element {
	tag: String,
	id: Option<String>,
	classes: SmallVec<[String; 4]>,
	attrs: IndexMap<String, String>,
	style: IndexMap<String, String>,
	text: String,
	value: Option<String>,
	layout: Option<Rect>,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
}

impl Element {
	fn new(tag: &str) -> Self {
		Self {
			tag: tag.to_string(),
			id: None,
			classes: SmallVec::new(),
			attrs: IndexMap::new(),
			style: IndexMap::new(),
			text: String::new(),
			value: None,
			layout: None,
			parent: None,
			children: Vec::new(),
		}
	}
}

/// The live page: element tree plus viewport state.
#[derive(Debug)]
pub struct Document {
	nodes: Vec<Element>,
	root: NodeId,
	viewport: Viewport,
	last_scroll: Option<ScrollBehavior>,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates an empty document with a `body` root and a default viewport.
	pub fn new() -> Self {
		Self {
			nodes: vec![Element::new("body")],
			root: NodeId(0),
			viewport: Viewport::default(),
			last_scroll: None,
		}
	}

	/// The root element.
	pub fn root(&self) -> NodeId {
		self.root
	}

	/// The current viewport.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Mutable access to the viewport, for hosts that resize or reposition it.
	pub fn viewport_mut(&mut self) -> &mut Viewport {
		&mut self.viewport
	}

	fn node(&self, id: NodeId) -> &Element {
		&self.nodes[id.0]
	}

	fn node_mut(&mut self, id: NodeId) -> &mut Element {
		&mut self.nodes[id.0]
	}

	// --- tree construction and mutation ---

	/// Creates a detached element.
	pub fn create_element(&mut self, tag: &str) -> NodeId {
		self.nodes.push(Element::new(tag));
		NodeId(self.nodes.len() - 1)
	}

	/// Appends `child` as the last child of `parent`, detaching it from any
	/// previous parent first.
	pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
		self.detach(child);
		self.node_mut(child).parent = Some(parent);
		self.node_mut(parent).children.push(child);
	}

	/// Inserts `child` into `parent` before `reference`, or appends when
	/// `reference` is `None` or not a child of `parent`.
	pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
		self.detach(child);
		self.node_mut(child).parent = Some(parent);
		let children = &mut self.node_mut(parent).children;
		let at = reference
			.and_then(|r| children.iter().position(|&c| c == r))
			.unwrap_or(children.len());
		children.insert(at, child);
	}

	/// Inserts `child` as the first child of `parent`.
	pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
		let first = self.node(parent).children.first().copied();
		self.insert_before(parent, child, first);
	}

	/// Detaches `node` (and its subtree) from the tree.
	///
	/// The arena slots stay allocated, so repeated remove/rebuild cycles
	/// (re-renders, alert churn) grow the arena for the lifetime of the
	/// document. That is bounded by page-session scale here; slot reuse
	/// would be the next step if a host ever re-renders unboundedly.
	pub fn remove(&mut self, node: NodeId) {
		self.detach(node);
	}

	fn detach(&mut self, node: NodeId) {
		if let Some(parent) = self.node(node).parent {
			self.node_mut(parent).children.retain(|&c| c != node);
			self.node_mut(node).parent = None;
		}
	}

	/// Removes every child of `parent`. Like [`remove`](Self::remove), the
	/// detached subtrees keep their arena slots.
	pub fn clear_children(&mut self, parent: NodeId) {
		let children = std::mem::take(&mut self.node_mut(parent).children);
		for child in children {
			self.node_mut(child).parent = None;
		}
	}

	/// The children of `node`, in tree order.
	pub fn children(&self, node: NodeId) -> &[NodeId] {
		&self.node(node).children
	}

	/// The parent of `node`, if attached.
	pub fn parent(&self, node: NodeId) -> Option<NodeId> {
		self.node(node).parent
	}

	/// Whether `node` is reachable from the root.
	pub fn is_connected(&self, node: NodeId) -> bool {
		let mut current = node;
		loop {
			if current == self.root {
				return true;
			}
			match self.node(current).parent {
				Some(parent) => current = parent,
				None => return false,
			}
		}
	}

	// --- element state ---

	/// The element's tag name.
	pub fn tag(&self, node: NodeId) -> &str {
		&self.node(node).tag
	}

	/// Sets the element's `id`.
	pub fn set_id(&mut self, node: NodeId, id: &str) {
		self.node_mut(node).id = Some(id.to_string());
	}

	/// The element's `id`, if set.
	pub fn element_id(&self, node: NodeId) -> Option<&str> {
		self.node(node).id.as_deref()
	}

	/// Adds a class if not already present.
	pub fn add_class(&mut self, node: NodeId, class: &str) {
		let element = self.node_mut(node);
		if !element.classes.iter().any(|c| c == class) {
			element.classes.push(class.to_string());
		}
	}

	/// Adds each whitespace-separated class in `classes`.
	pub fn set_classes(&mut self, node: NodeId, classes: &str) {
		for class in classes.split_whitespace() {
			self.add_class(node, class);
		}
	}

	/// Removes a class if present.
	pub fn remove_class(&mut self, node: NodeId, class: &str) {
		self.node_mut(node).classes.retain(|c| c != class);
	}

	/// Whether the element carries `class`.
	pub fn has_class(&self, node: NodeId, class: &str) -> bool {
		self.node(node).classes.iter().any(|c| c == class)
	}

	/// The element's classes, in insertion order.
	pub fn classes(&self, node: NodeId) -> impl Iterator<Item = &str> {
		self.node(node).classes.iter().map(String::as_str)
	}

	/// Sets an attribute.
	pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
		self.node_mut(node)
			.attrs
			.insert(name.to_string(), value.to_string());
	}

	/// Reads an attribute.
	pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
		self.node(node).attrs.get(name).map(String::as_str)
	}

	/// Sets the element's text content.
	pub fn set_text(&mut self, node: NodeId, text: &str) {
		self.node_mut(node).text = text.to_string();
	}

	/// The element's own text content (not including descendants).
	pub fn text(&self, node: NodeId) -> &str {
		&self.node(node).text
	}

	/// Sets a form control's current value.
	pub fn set_value(&mut self, node: NodeId, value: &str) {
		self.node_mut(node).value = Some(value.to_string());
	}

	/// A form control's current value; empty when never set or cleared.
	pub fn value(&self, node: NodeId) -> &str {
		self.node(node).value.as_deref().unwrap_or("")
	}

	/// Clears a form control's value.
	pub fn clear_value(&mut self, node: NodeId) {
		self.node_mut(node).value = None;
	}

	/// Sets an inline style property.
	pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
		self.node_mut(node)
			.style
			.insert(property.to_string(), value.to_string());
	}

	/// Reads an inline style property.
	pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
		self.node(node).style.get(property).map(String::as_str)
	}

	// --- geometry and scrolling ---

	/// Assigns the element's page-coordinate geometry.
	///
	/// The headless model does no layout; the host decides where elements
	/// sit on the page.
	pub fn set_layout(&mut self, node: NodeId, rect: Rect) {
		self.node_mut(node).layout = Some(rect);
	}

	/// The element's page-coordinate geometry, if assigned.
	pub fn layout(&self, node: NodeId) -> Option<Rect> {
		self.node(node).layout
	}

	/// The element's rect in viewport coordinates.
	///
	/// `None` when the element has no assigned geometry or is detached.
	pub fn client_rect(&self, node: NodeId) -> Option<Rect> {
		if !self.is_connected(node) {
			return None;
		}
		self.node(node)
			.layout
			.map(|rect| self.viewport.to_viewport(rect))
	}

	/// Scrolls the viewport to the given vertical offset.
	pub fn scroll_to(&mut self, y: i32, behavior: ScrollBehavior) {
		self.viewport.scroll_y = y.max(0);
		self.last_scroll = Some(behavior);
	}

	/// Scrolls the element's top edge to the top of the viewport.
	///
	/// Returns `false` (and leaves the viewport alone) when the element has
	/// no geometry to scroll to.
	pub fn scroll_into_view(&mut self, node: NodeId, behavior: ScrollBehavior) -> bool {
		match self.node(node).layout {
			Some(rect) => {
				self.scroll_to(rect.top(), behavior);
				true
			}
			None => {
				tracing::trace!(tag = self.tag(node), "scroll_into_view target has no geometry");
				false
			}
		}
	}

	/// The behavior of the most recent programmatic scroll, if any.
	pub fn last_scroll(&self) -> Option<ScrollBehavior> {
		self.last_scroll
	}

	// --- queries ---

	/// Every connected element in document (preorder) order, root included.
	pub fn document_order(&self) -> Vec<NodeId> {
		let mut order = Vec::new();
		let mut stack = vec![self.root];
		while let Some(node) = stack.pop() {
			order.push(node);
			for &child in self.node(node).children.iter().rev() {
				stack.push(child);
			}
		}
		order
	}

	/// The first connected element with the given `id`.
	pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
		self.document_order()
			.into_iter()
			.find(|&node| self.node(node).id.as_deref() == Some(id))
	}

	/// Every connected element matching `selector`, in document order.
	pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
		self.document_order()
			.into_iter()
			.filter(|&node| selector.matches(self, node))
			.collect()
	}

	/// Parses `selector` and returns every match in document order.
	pub fn select_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
		Ok(self.select(&Selector::parse(selector)?))
	}

	/// Parses `selector` and returns the first match.
	pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
		Ok(self.select(&Selector::parse(selector)?).into_iter().next())
	}
}
