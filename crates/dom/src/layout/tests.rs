use pretty_assertions::assert_eq;

use super::{Rect, Viewport};

#[test]
fn edges() {
	let r = Rect::new(10, 20, 30, 40);
	assert_eq!(r.left(), 10);
	assert_eq!(r.top(), 20);
	assert_eq!(r.right(), 40);
	assert_eq!(r.bottom(), 60);
	assert!(!r.is_empty());
	assert!(Rect::ZERO.is_empty());
}

#[test]
fn translate_moves_without_resizing() {
	let r = Rect::new(0, 100, 50, 50).translate(0, -30);
	assert_eq!(r, Rect::new(0, 70, 50, 50));
}

#[test]
fn contains_y_is_edge_inclusive() {
	let r = Rect::new(0, 100, 10, 200);
	assert!(r.contains_y(100));
	assert!(r.contains_y(300));
	assert!(r.contains_y(150));
	assert!(!r.contains_y(99));
	assert!(!r.contains_y(301));
}

#[test]
fn vertical_overlap_clamps_to_zero() {
	let a = Rect::new(0, 0, 10, 100);
	let below = Rect::new(0, 200, 10, 100);
	assert_eq!(a.vertical_overlap(below), 0);

	let partial = Rect::new(0, 50, 10, 100);
	assert_eq!(a.vertical_overlap(partial), 50);
}

#[test]
fn visible_fraction_of_partially_scrolled_element() {
	let viewport = Rect::new(0, 0, 1280, 800);
	// 400px element with its top 100px above the viewport.
	let element = Rect::new(0, -100, 400, 400);
	assert_eq!(element.visible_fraction(viewport), 0.75);
}

#[test]
fn visible_fraction_of_zero_height_element() {
	let viewport = Rect::new(0, 0, 1280, 800);
	assert_eq!(Rect::new(0, 400, 100, 0).visible_fraction(viewport), 1.0);
	assert_eq!(Rect::new(0, 900, 100, 0).visible_fraction(viewport), 0.0);
}

#[test]
fn viewport_converts_page_to_viewport_coordinates() {
	let mut vp = Viewport::new(1280, 800);
	vp.scroll_y = 250;
	let page = Rect::new(0, 300, 100, 100);
	assert_eq!(vp.to_viewport(page), Rect::new(0, 50, 100, 100));
}
