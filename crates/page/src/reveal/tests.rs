use pretty_assertions::assert_eq;
use vitrine_dom::{Document, NodeId, Rect, ScrollBehavior};

use super::{REVEAL_SELECTOR, RevealAnimator};

/// A section heading above the fold and two cards far below it.
fn reveal_doc() -> (Document, NodeId, Vec<NodeId>) {
	let mut doc = Document::new();
	doc.viewport_mut().height = 800;

	let section = doc.create_element("section");
	doc.append_child(doc.root(), section);
	let heading = doc.create_element("h2");
	doc.append_child(section, heading);
	doc.set_layout(heading, Rect::new(0, 100, 1280, 40));

	let mut cards = Vec::new();
	for i in 0..2 {
		let card = doc.create_element("div");
		doc.set_classes(card, "card");
		doc.append_child(section, card);
		doc.set_layout(card, Rect::new(0, 2000 + i * 500, 400, 400));
		cards.push(card);
	}
	(doc, heading, cards)
}

fn is_hidden(doc: &Document, node: NodeId) -> bool {
	doc.style(node, "opacity") == Some("0")
}

fn is_revealed(doc: &Document, node: NodeId) -> bool {
	doc.style(node, "opacity") == Some("1") && doc.style(node, "transform") == Some("translateY(0)")
}

#[test]
fn init_hides_every_matched_element() {
	let (mut doc, heading, cards) = reveal_doc();
	let reveal = RevealAnimator::init(&mut doc, REVEAL_SELECTOR).unwrap();
	assert_eq!(reveal.pending(), 3);
	for node in std::iter::once(heading).chain(cards) {
		assert!(is_hidden(&doc, node));
		assert_eq!(doc.style(node, "transform"), Some("translateY(20px)"));
		assert_eq!(doc.style(node, "transition"), Some("all 0.6s ease"));
	}
}

#[test]
fn above_the_fold_elements_reveal_on_first_pass() {
	let (mut doc, heading, cards) = reveal_doc();
	let mut reveal = RevealAnimator::init(&mut doc, REVEAL_SELECTOR).unwrap();
	reveal.on_scroll(&mut doc);
	assert!(is_revealed(&doc, heading));
	assert!(is_hidden(&doc, cards[0]));
	assert_eq!(reveal.pending(), 2);
}

#[test]
fn element_reveals_at_ten_percent_visibility() {
	let (mut doc, _, cards) = reveal_doc();
	let mut reveal = RevealAnimator::init(&mut doc, REVEAL_SELECTOR).unwrap();
	reveal.on_scroll(&mut doc);

	// First card spans [2000, 2400); 39 of its 400px visible is below
	// the 10% threshold.
	doc.scroll_to(1239, ScrollBehavior::Auto);
	reveal.on_scroll(&mut doc);
	assert!(is_hidden(&doc, cards[0]));

	doc.scroll_to(1240, ScrollBehavior::Auto);
	reveal.on_scroll(&mut doc);
	assert!(is_revealed(&doc, cards[0]));
}

#[test]
fn reveal_is_one_way() {
	let (mut doc, heading, _) = reveal_doc();
	let mut reveal = RevealAnimator::init(&mut doc, REVEAL_SELECTOR).unwrap();
	reveal.on_scroll(&mut doc);
	assert!(is_revealed(&doc, heading));

	// Scroll the heading far out of view; it stays revealed.
	doc.scroll_to(10_000, ScrollBehavior::Auto);
	reveal.on_scroll(&mut doc);
	assert!(is_revealed(&doc, heading));
}

#[test]
fn all_targets_eventually_reveal_exactly_once() {
	let (mut doc, _, _) = reveal_doc();
	let mut reveal = RevealAnimator::init(&mut doc, REVEAL_SELECTOR).unwrap();
	for scroll in [0, 1500, 2200, 0] {
		doc.scroll_to(scroll, ScrollBehavior::Auto);
		reveal.on_scroll(&mut doc);
	}
	assert_eq!(reveal.pending(), 0);
}

#[test]
fn empty_match_set_is_fine() {
	let mut doc = Document::new();
	let mut reveal = RevealAnimator::init(&mut doc, REVEAL_SELECTOR).unwrap();
	assert_eq!(reveal.pending(), 0);
	reveal.on_scroll(&mut doc);
}
