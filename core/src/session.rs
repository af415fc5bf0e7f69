use crate::{
	error::{Result, SelectorError},
	record,
	selection::{PointerEvent, Roi, Selection},
};
use std::path::Path;

pub const QUIT_KEY: char = 'q';

/// Something that produces one frame per call, such as a camera.
pub trait FrameSource {
	type Frame;

	/// Reads the next frame. `Ok(None)` means the source produced nothing.
	fn read(&mut self) -> Result<Option<Self::Frame>>;

	fn release(&mut self) -> Result<()>;
}

/// A window that shows frames and collects user input.
pub trait Surface {
	type Frame;

	fn show(&mut self, frame: &mut Self::Frame, overlay: Option<Roi>) -> Result<()>;

	/// Waits briefly for input, pushing any pointer events into `events` and
	/// returning the key pressed, if any.
	fn poll(&mut self, events: &mut Vec<PointerEvent>) -> Result<Option<char>>;

	fn close(&mut self) -> Result<()>;
}

/// One interactive selection over a frame source and a surface.
///
/// Both are released when the session finishes, or when it is dropped
/// before finishing.
pub struct Session<Source, View>
where
	Source: FrameSource,
	View: Surface<Frame = Source::Frame>,
{
	source: Source,
	view: View,
	selection: Selection,
	torn_down: bool,
}

impl<Source, View> Session<Source, View>
where
	Source: FrameSource,
	View: Surface<Frame = Source::Frame>,
{
	pub fn new(source: Source, view: View) -> Self {
		Self {
			source,
			view,
			selection: Selection::new(),
			torn_down: false,
		}
	}

	/// Runs the selection loop, then saves the result to `record_path`.
	pub fn run<P: AsRef<Path>>(mut self, record_path: P) -> Option<Roi> {
		println!("press and drag to draw the ROI, press '{QUIT_KEY}' to quit");
		match self.capture_loop() {
			Ok(()) => {}
			Err(SelectorError::FrameRead) => {
				eprintln!("error: could not read from the camera");
			}
			Err(err) => {
				tracing::error!("selection loop failed: {err}");
				eprintln!("error: {err}");
			}
		}
		self.teardown();
		finish(self.selection.rectangle(), record_path.as_ref())
	}

	fn capture_loop(&mut self) -> Result<()> {
		let mut events = Vec::new();
		loop {
			let mut frame = match self.source.read() {
				Ok(Some(frame)) => frame,
				Ok(None) => return Err(SelectorError::FrameRead),
				Err(err) => {
					tracing::error!("frame read failed: {err}");
					return Err(SelectorError::FrameRead);
				}
			};
			self.view.show(&mut frame, self.selection.rectangle())?;

			let key = self.view.poll(&mut events)?;
			for event in events.drain(..) {
				tracing::trace!(?event, "pointer event");
				self.selection.handle(event);
			}

			if key == Some(QUIT_KEY) {
				tracing::debug!("quit key pressed");
				return Ok(());
			}
			if self.selection.is_complete() {
				tracing::debug!("drag completed");
				return Ok(());
			}
		}
	}

	fn teardown(&mut self) {
		if self.torn_down {
			return;
		}
		self.torn_down = true;
		if let Err(err) = self.source.release() {
			tracing::warn!("failed to release frame source: {err}");
		}
		if let Err(err) = self.view.close() {
			tracing::warn!("failed to close surface: {err}");
		}
	}
}

impl<Source, View> Drop for Session<Source, View>
where
	Source: FrameSource,
	View: Surface<Frame = Source::Frame>,
{
	fn drop(&mut self) {
		self.teardown();
	}
}

fn finish(roi: Option<Roi>, record_path: &Path) -> Option<Roi> {
	let Some(roi) = roi else {
		println!("no ROI selected");
		return None;
	};
	println!("selected ROI: {roi}");
	match record::append(record_path, &roi) {
		Ok(()) => println!("ROI saved to {}", record_path.display()),
		Err(err) => {
			tracing::error!(?err, "failed to save roi");
			eprintln!("error saving ROI: {err}");
		}
	}
	Some(roi)
}
