use pretty_assertions::assert_eq;
use vitrine_dom::{Document, NodeId, Rect, ScrollBehavior};

use super::{ACTIVE_CLASS, NavController, handle_anchor_click};

/// Navbar with three links and three stacked 600px sections.
fn page_doc() -> (Document, Vec<NodeId>, Vec<NodeId>) {
	let mut doc = Document::new();
	doc.viewport_mut().height = 800;

	let nav = doc.create_element("nav");
	doc.append_child(doc.root(), nav);
	let list = doc.create_element("ul");
	doc.set_classes(list, "navbar-nav");
	doc.append_child(nav, list);

	let mut links = Vec::new();
	let mut sections = Vec::new();
	for (i, id) in ["about", "projects", "contact"].iter().enumerate() {
		let link = doc.create_element("a");
		doc.set_classes(link, "nav-link");
		doc.set_attr(link, "href", &format!("#{id}"));
		doc.append_child(list, link);
		links.push(link);

		let section = doc.create_element("section");
		doc.set_id(section, id);
		doc.append_child(doc.root(), section);
		doc.set_layout(section, Rect::new(0, i as i32 * 600, 1280, 600));
		sections.push(section);
	}
	(doc, links, sections)
}

fn active_links(doc: &Document, links: &[NodeId]) -> Vec<bool> {
	links
		.iter()
		.map(|&link| doc.has_class(link, ACTIVE_CLASS))
		.collect()
}

#[test]
fn first_section_is_active_at_the_top() {
	let (mut doc, links, _) = page_doc();
	let mut nav = NavController::new(&doc).unwrap();
	nav.on_scroll(&mut doc);
	assert_eq!(active_links(&doc, &links), vec![true, false, false]);
}

#[test]
fn scrolling_moves_the_highlight() {
	let (mut doc, links, _) = page_doc();
	let mut nav = NavController::new(&doc).unwrap();
	nav.on_scroll(&mut doc);

	// Second section spans [600, 1200); its top reaches the 100px line
	// once scroll_y >= 500.
	doc.scroll_to(520, ScrollBehavior::Auto);
	nav.on_scroll(&mut doc);
	assert_eq!(active_links(&doc, &links), vec![false, true, false]);

	doc.scroll_to(1150, ScrollBehavior::Auto);
	nav.on_scroll(&mut doc);
	assert_eq!(active_links(&doc, &links), vec![false, false, true]);
}

#[test]
fn exactly_one_link_is_ever_active() {
	let (mut doc, links, _) = page_doc();
	let mut nav = NavController::new(&doc).unwrap();
	for scroll in [0, 300, 650, 900, 1400, 100, 0] {
		doc.scroll_to(scroll, ScrollBehavior::Auto);
		nav.on_scroll(&mut doc);
		let count = active_links(&doc, &links).iter().filter(|&&a| a).count();
		assert_eq!(count, 1, "scroll_y = {scroll}");
	}
}

#[test]
fn boundary_scroll_activates_the_section_on_the_line() {
	let (mut doc, links, _) = page_doc();
	let mut nav = NavController::new(&doc).unwrap();
	// scroll_y = 500 puts section two's top exactly on the 100px line;
	// section one's bottom also sits there. Document order of the links
	// decides: the first matching link wins.
	doc.scroll_to(500, ScrollBehavior::Auto);
	nav.on_scroll(&mut doc);
	assert_eq!(active_links(&doc, &links), vec![true, false, false]);
}

#[test]
fn gap_between_sections_keeps_previous_highlight() {
	let (mut doc, links, sections) = page_doc();
	// Move the last section far down, leaving a gap after section two.
	doc.set_layout(sections[2], Rect::new(0, 5000, 1280, 600));
	let mut nav = NavController::new(&doc).unwrap();
	nav.on_scroll(&mut doc);

	doc.scroll_to(700, ScrollBehavior::Auto);
	nav.on_scroll(&mut doc);
	assert_eq!(active_links(&doc, &links), vec![false, true, false]);

	// No section spans the line here; the highlight stays put.
	doc.scroll_to(2000, ScrollBehavior::Auto);
	nav.on_scroll(&mut doc);
	assert_eq!(active_links(&doc, &links), vec![false, true, false]);
}

#[test]
fn links_without_sections_are_ignored() {
	let (mut doc, _, _) = page_doc();
	let list = doc.query_selector(".navbar-nav").unwrap().unwrap();
	let dangling = doc.create_element("a");
	doc.set_classes(dangling, "nav-link");
	doc.set_attr(dangling, "href", "#nowhere");
	doc.append_child(list, dangling);

	let mut nav = NavController::new(&doc).unwrap();
	nav.on_scroll(&mut doc);
	assert!(!doc.has_class(dangling, ACTIVE_CLASS));
}

#[test]
fn anchor_click_scrolls_smoothly_and_prevents_default() {
	let (mut doc, links, sections) = page_doc();
	let prevented = handle_anchor_click(&mut doc, links[2]);
	assert!(prevented);
	assert_eq!(doc.viewport().scroll_y, doc.layout(sections[2]).unwrap().top());
	assert_eq!(doc.last_scroll(), Some(ScrollBehavior::Smooth));
}

#[test]
fn anchor_click_with_missing_target_is_a_no_op_but_still_prevented() {
	let (mut doc, _, _) = page_doc();
	let link = doc.create_element("a");
	doc.set_attr(link, "href", "#missing");
	doc.append_child(doc.root(), link);

	let prevented = handle_anchor_click(&mut doc, link);
	assert!(prevented);
	assert_eq!(doc.viewport().scroll_y, 0);
	assert_eq!(doc.last_scroll(), None);
}

#[test]
fn external_link_clicks_are_not_intercepted() {
	let (mut doc, _, _) = page_doc();
	let link = doc.create_element("a");
	doc.set_attr(link, "href", "https://example.com");
	doc.append_child(doc.root(), link);
	assert!(!handle_anchor_click(&mut doc, link));

	let no_href = doc.create_element("a");
	doc.append_child(doc.root(), no_href);
	assert!(!handle_anchor_click(&mut doc, no_href));
}
