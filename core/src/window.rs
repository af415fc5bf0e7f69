use crate::{
	error::Result,
	selection::{PointerEvent, Roi},
	session::Surface,
};
use crossbeam_channel::{unbounded, Receiver};
use opencv::{
	core::{Mat, Point, Scalar},
	highgui, imgproc,
};

pub const WINDOW_NAME: &str = "Select ROI";

const OUTLINE_THICKNESS: i32 = 2;
const POLL_DELAY_MS: i32 = 1;

/// A highgui window that forwards left-button mouse input as [`PointerEvent`]s.
///
/// highgui invokes the mouse callback from inside `wait_key`, so events are
/// queued on a channel and handed out by [`Surface::poll`] on the same thread.
pub struct Window {
	name: String,
	events: Receiver<PointerEvent>,
}

impl Window {
	pub fn open(name: &str) -> Result<Self> {
		highgui::named_window(name, highgui::WINDOW_NORMAL)?;
		let (sender, events) = unbounded();
		let callback = highgui::set_mouse_callback(
			name,
			Some(Box::new(move |event, x, y, _flags| {
				if let Some(event) = pointer_event(event, x, y) {
					let _ = sender.send(event);
				}
			})),
		);
		if let Err(err) = callback {
			let _ = highgui::destroy_window(name);
			return Err(err.into());
		}
		Ok(Self {
			name: name.to_owned(),
			events,
		})
	}
}

fn pointer_event(event: i32, x: i32, y: i32) -> Option<PointerEvent> {
	match event {
		highgui::EVENT_LBUTTONDOWN => Some(PointerEvent::ButtonDown { x, y }),
		highgui::EVENT_MOUSEMOVE => Some(PointerEvent::Move { x, y }),
		highgui::EVENT_LBUTTONUP => Some(PointerEvent::ButtonUp { x, y }),
		_ => None,
	}
}

impl Surface for Window {
	type Frame = Mat;

	fn show(&mut self, frame: &mut Mat, overlay: Option<Roi>) -> Result<()> {
		if let Some(roi) = overlay {
			let (x1, y1) = roi.top_left;
			let (x2, y2) = roi.bottom_right;
			imgproc::rectangle_points(
				frame,
				Point::new(x1, y1),
				Point::new(x2, y2),
				Scalar::new(0.0, 255.0, 0.0, 0.0),
				OUTLINE_THICKNESS,
				imgproc::LINE_8,
				0,
			)?;
		}
		highgui::imshow(&self.name, &*frame)?;
		Ok(())
	}

	fn poll(&mut self, events: &mut Vec<PointerEvent>) -> Result<Option<char>> {
		let key = highgui::wait_key(POLL_DELAY_MS)?;
		events.extend(self.events.try_iter());
		Ok(u32::try_from(key).ok().and_then(char::from_u32))
	}

	fn close(&mut self) -> Result<()> {
		close_window(
			|| highgui::set_mouse_callback(&self.name, None),
			|| highgui::destroy_window(&self.name),
		)?;
		tracing::debug!(window = %self.name, "window closed");
		Ok(())
	}
}

/// Destroys the window even when unregistering the callback fails, reporting
/// the first error.
fn close_window<Unregister, Destroy>(unregister: Unregister, destroy: Destroy) -> Result<()>
where
	Unregister: FnOnce() -> opencv::Result<()>,
	Destroy: FnOnce() -> opencv::Result<()>,
{
	let unregistered = unregister();
	let destroyed = destroy();
	unregistered?;
	destroyed?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SelectorError;

	#[test]
	fn left_button_events_are_translated() {
		assert_eq!(
			pointer_event(highgui::EVENT_LBUTTONDOWN, 4, 5),
			Some(PointerEvent::ButtonDown { x: 4, y: 5 })
		);
		assert_eq!(
			pointer_event(highgui::EVENT_MOUSEMOVE, 6, 7),
			Some(PointerEvent::Move { x: 6, y: 7 })
		);
		assert_eq!(
			pointer_event(highgui::EVENT_LBUTTONUP, 8, 9),
			Some(PointerEvent::ButtonUp { x: 8, y: 9 })
		);
	}

	#[test]
	fn window_is_destroyed_when_unregistering_fails() {
		let mut destroyed = false;
		let result = close_window(
			|| Err(opencv::Error::new(opencv::core::StsError, "no such window")),
			|| {
				destroyed = true;
				Err(opencv::Error::new(opencv::core::StsError, "destroy failed"))
			},
		);

		assert!(destroyed);
		match result.unwrap_err() {
			SelectorError::OpenCv(err) => assert_eq!(err.message, "no such window"),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn close_succeeds_when_both_steps_do() {
		assert!(close_window(|| Ok(()), || Ok(())).is_ok());
	}

	#[test]
	fn other_mouse_events_are_ignored() {
		assert_eq!(pointer_event(highgui::EVENT_RBUTTONDOWN, 1, 1), None);
		assert_eq!(pointer_event(highgui::EVENT_MOUSEWHEEL, 1, 1), None);
	}
}
