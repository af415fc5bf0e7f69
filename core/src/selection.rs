use std::fmt;

/// A rectangle picked by the user, as the two corners of the drag.
///
/// The corners are kept in the order they were drawn, so `top_left` may lie
/// below or to the right of `bottom_right` after an upward or leftward drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roi {
	pub top_left: (i32, i32),
	pub bottom_right: (i32, i32),
}

impl Roi {
	pub const fn new(top_left: (i32, i32), bottom_right: (i32, i32)) -> Self {
		Self {
			top_left,
			bottom_right,
		}
	}
}

impl fmt::Display for Roi {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (x1, y1) = self.top_left;
		let (x2, y2) = self.bottom_right;
		write!(f, "top-left ({x1}, {y1}), bottom-right ({x2}, {y2})")
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
	ButtonDown { x: i32, y: i32 },
	Move { x: i32, y: i32 },
	ButtonUp { x: i32, y: i32 },
}

/// Drag state driven by pointer events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	top_left: Option<(i32, i32)>,
	bottom_right: Option<(i32, i32)>,
	drawing: bool,
}

impl Selection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn handle(&mut self, event: PointerEvent) {
		match event {
			PointerEvent::ButtonDown { x, y } => {
				// bottom-right is kept until the next move or release
				self.drawing = true;
				self.top_left = Some((x, y));
			}
			PointerEvent::Move { x, y } if self.drawing => {
				self.bottom_right = Some((x, y));
			}
			PointerEvent::Move { .. } => {}
			PointerEvent::ButtonUp { x, y } => {
				self.drawing = false;
				self.bottom_right = Some((x, y));
			}
		}
	}

	#[inline]
	pub fn is_drawing(&self) -> bool {
		self.drawing
	}

	/// The rectangle spanned by both corners, once both have been set.
	pub fn rectangle(&self) -> Option<Roi> {
		Some(Roi::new(self.top_left?, self.bottom_right?))
	}

	/// Whether a drag has been released with both corners in place.
	pub fn is_complete(&self) -> bool {
		!self.drawing && self.rectangle().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_empty() {
		let selection = Selection::new();
		assert!(!selection.is_drawing());
		assert_eq!(selection.rectangle(), None);
		assert!(!selection.is_complete());
	}

	#[test]
	fn drag_ends_at_release_point_whatever_the_moves() {
		let mut selection = Selection::new();
		selection.handle(PointerEvent::ButtonDown { x: 10, y: 20 });
		for (x, y) in [(500, 3), (-4, 900), (31, 42)] {
			selection.handle(PointerEvent::Move { x, y });
		}
		selection.handle(PointerEvent::ButtonUp { x: 110, y: 220 });

		assert!(selection.is_complete());
		assert_eq!(
			selection.rectangle(),
			Some(Roi::new((10, 20), (110, 220)))
		);
	}

	#[test]
	fn move_updates_preview_only_while_drawing() {
		let mut selection = Selection::new();
		selection.handle(PointerEvent::Move { x: 5, y: 5 });
		assert_eq!(selection.rectangle(), None);

		selection.handle(PointerEvent::ButtonDown { x: 1, y: 2 });
		assert!(selection.is_drawing());
		assert_eq!(selection.rectangle(), None);

		selection.handle(PointerEvent::Move { x: 30, y: 40 });
		assert_eq!(selection.rectangle(), Some(Roi::new((1, 2), (30, 40))));
		assert!(!selection.is_complete());
	}

	#[test]
	fn button_down_keeps_previous_bottom_right() {
		let mut selection = Selection::new();
		selection.handle(PointerEvent::ButtonDown { x: 0, y: 0 });
		selection.handle(PointerEvent::ButtonUp { x: 50, y: 60 });
		selection.handle(PointerEvent::ButtonDown { x: 7, y: 8 });

		assert!(selection.is_drawing());
		assert_eq!(selection.rectangle(), Some(Roi::new((7, 8), (50, 60))));
		assert!(!selection.is_complete());
	}

	#[test]
	fn reversed_drag_is_not_normalized() {
		let mut selection = Selection::new();
		selection.handle(PointerEvent::ButtonDown { x: 300, y: 200 });
		selection.handle(PointerEvent::ButtonUp { x: 100, y: 50 });
		assert_eq!(
			selection.rectangle(),
			Some(Roi::new((300, 200), (100, 50)))
		);
	}

	#[test]
	fn display_names_both_corners() {
		let roi = Roi::new((1, 2), (3, 4));
		assert_eq!(roi.to_string(), "top-left (1, 2), bottom-right (3, 4)");
	}
}
