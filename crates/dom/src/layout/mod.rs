//! Pixel geometry: rectangles, the scrollable viewport, scroll behavior.
//!
//! Coordinates follow the page convention: the origin is the top-left
//! corner of the page, `x` grows rightward and `y` grows downward, all
//! measurements in CSS pixels. Element geometry is stored in page
//! coordinates; [`Viewport::to_viewport`] converts to viewport-relative
//! coordinates (what `getBoundingClientRect` would report).

#[cfg(test)]
mod tests;

/// A rectangular region of the page, in pixels.
///
/// `x`/`y` are the top-left corner; zero-sized rects are legal and mean
/// an element that occupies no vertical extent (a collapsed heading, a
/// detached node).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
	/// Horizontal position of the left edge.
	pub x: i32,
	/// Vertical position of the top edge.
	pub y: i32,
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}

impl Rect {
	/// A zero-sized rect at the origin.
	pub const ZERO: Self = Self {
		x: 0,
		y: 0,
		width: 0,
		height: 0,
	};

	/// Creates a new rect from its top-left corner and dimensions.
	pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// The `y` coordinate of the top edge.
	pub const fn top(self) -> i32 {
		self.y
	}

	/// The `y` coordinate just below the bottom edge.
	pub const fn bottom(self) -> i32 {
		self.y + self.height as i32
	}

	/// The `x` coordinate of the left edge.
	pub const fn left(self) -> i32 {
		self.x
	}

	/// The `x` coordinate just past the right edge.
	pub const fn right(self) -> i32 {
		self.x + self.width as i32
	}

	/// Whether the rect covers zero area.
	pub const fn is_empty(self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns this rect moved by the given offset.
	pub const fn translate(self, dx: i32, dy: i32) -> Self {
		Self {
			x: self.x + dx,
			y: self.y + dy,
			width: self.width,
			height: self.height,
		}
	}

	/// Whether the horizontal line at `y` crosses this rect.
	///
	/// Both edges are inclusive, matching the `top <= y && bottom >= y`
	/// test the active-link tracker performs.
	pub const fn contains_y(self, y: i32) -> bool {
		self.top() <= y && self.bottom() >= y
	}

	/// Vertical overlap with `other`, in pixels.
	pub fn vertical_overlap(self, other: Self) -> u32 {
		let top = self.top().max(other.top());
		let bottom = self.bottom().min(other.bottom());
		(bottom - top).max(0) as u32
	}

	/// The fraction of this rect's height that lies inside `other`.
	///
	/// A zero-height rect counts as fully visible when its top edge lies
	/// within `other`'s vertical extent, and invisible otherwise.
	pub fn visible_fraction(self, other: Self) -> f64 {
		if self.height == 0 {
			return if other.contains_y(self.top()) { 1.0 } else { 0.0 };
		}
		f64::from(self.vertical_overlap(other)) / f64::from(self.height)
	}
}

/// How a programmatic scroll moves the viewport.
///
/// The headless model applies both instantly; the distinction is recorded
/// so callers (and tests) can observe whether a scroll was requested as
/// animated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
	/// Jump directly to the target position.
	#[default]
	Auto,
	/// Animate toward the target position.
	Smooth,
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	/// Viewport width in pixels.
	pub width: u32,
	/// Viewport height in pixels.
	pub height: u32,
	/// Current vertical scroll offset; never negative.
	pub scroll_y: i32,
}

impl Viewport {
	/// Creates a viewport of the given size, scrolled to the top.
	pub const fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			scroll_y: 0,
		}
	}

	/// The viewport's own rect in viewport coordinates.
	pub const fn rect(self) -> Rect {
		Rect::new(0, 0, self.width, self.height)
	}

	/// Converts a page-coordinate rect to viewport coordinates.
	pub const fn to_viewport(self, page_rect: Rect) -> Rect {
		page_rect.translate(0, -self.scroll_y)
	}
}

impl Default for Viewport {
	fn default() -> Self {
		// A common laptop viewport; hosts override as needed.
		Self::new(1280, 800)
	}
}
