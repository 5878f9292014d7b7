//! Gallery rendering: one card per project record.
//!
//! Cards are constructed as element nodes, never by markup-string
//! concatenation, so record fields are always treated as text. The whole
//! batch is built before the container is touched: one clear, one append
//! pass, no per-card container rewrites.


use vitrine_dom::{Document, NodeId};

use crate::projects::Project;

/// Id of the element the gallery renders into.
pub const PROJECTS_CONTAINER: &str = "projects-container";

/// Renders `projects` into the element with id `container_id`, replacing
/// any existing children (placeholder content included).
///
/// Idempotent per call; an empty list leaves the container empty. A missing
/// container renders nothing.
pub fn render_projects(doc: &mut Document, projects: &[Project], container_id: &str) {
	let Some(container) = doc.get_element_by_id(container_id) else {
		tracing::debug!(container_id, "gallery container missing; nothing rendered");
		return;
	};

	let cards: Vec<NodeId> = projects
		.iter()
		.map(|project| build_card(doc, project))
		.collect();

	doc.clear_children(container);
	for card in cards {
		doc.append_child(container, card);
	}
	tracing::debug!(count = projects.len(), "gallery rendered");
}

/// Builds one detached card subtree.
fn build_card(doc: &mut Document, project: &Project) -> NodeId {
	let column = doc.create_element("div");
	doc.set_classes(column, "col-md-6 col-lg-4");

	let card = doc.create_element("div");
	doc.set_classes(card, "card h-100 project-card");
	doc.append_child(column, card);

	let image = doc.create_element("img");
	doc.set_classes(image, "card-img-top");
	doc.set_attr(image, "src", &project.image);
	doc.set_attr(image, "alt", &project.title);
	doc.append_child(card, image);

	let body = doc.create_element("div");
	doc.set_classes(body, "card-body d-flex flex-column");
	doc.append_child(card, body);

	let title = doc.create_element("h5");
	doc.set_classes(title, "card-title");
	doc.set_text(title, &project.title);
	doc.append_child(body, title);

	let text = doc.create_element("p");
	doc.set_classes(text, "card-text");
	doc.set_text(text, &project.description);
	doc.append_child(body, text);

	let badges = doc.create_element("div");
	doc.set_classes(badges, "mb-3 mt-auto");
	doc.append_child(body, badges);
	for tech in &project.technologies {
		let badge = doc.create_element("span");
		doc.set_classes(badge, "badge bg-secondary");
		doc.set_text(badge, tech);
		doc.append_child(badges, badge);
	}

	let footer = doc.create_element("div");
	doc.set_classes(footer, "card-footer bg-white");
	doc.append_child(card, footer);

	let code = doc.create_element("a");
	doc.set_classes(code, "btn btn-sm btn-primary");
	doc.set_attr(code, "href", &project.code_link);
	doc.set_text(code, "View Code");
	doc.append_child(footer, code);

	let demo = doc.create_element("a");
	doc.set_classes(demo, "btn btn-sm btn-outline-primary");
	doc.set_attr(demo, "href", &project.demo_link);
	doc.set_text(demo, "Live Demo");
	doc.append_child(footer, demo);

	column
}
