use crate::{
	error::{Result, SelectorError},
	session::FrameSource,
};
use opencv::{
	core::Mat,
	videoio::{
		VideoCapture, VideoCaptureTrait, VideoCaptureTraitConst, CAP_ANY, CAP_PROP_FRAME_HEIGHT,
		CAP_PROP_FRAME_WIDTH,
	},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
	pub width: i32,
	pub height: i32,
}

impl Resolution {
	pub const fn new(width: i32, height: i32) -> Self {
		Self { width, height }
	}
}

impl fmt::Display for Resolution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

pub const DEFAULT_RESOLUTION: Resolution = Resolution::new(1280, 720);

/// A camera opened through opencv's videoio backend.
pub struct Camera {
	capture: VideoCapture,
	resolution: Resolution,
}

impl Camera {
	/// Opens camera `index` and asks for `requested` frames.
	///
	/// Drivers are free to ignore the request, so the resolution actually in
	/// effect is read back and exposed through [`Camera::resolution`].
	pub fn open(index: i32, requested: Resolution) -> Result<Self> {
		let unavailable = |err: opencv::Error| {
			tracing::debug!("opening camera {index} failed: {err}");
			SelectorError::CameraUnavailable { index }
		};
		let mut capture = VideoCapture::new(index, CAP_ANY).map_err(unavailable)?;
		if !capture.is_opened().map_err(unavailable)? {
			return Err(SelectorError::CameraUnavailable { index });
		}

		request_resolution(requested, |prop, value| capture.set(prop, value));
		let resolution = Resolution::new(
			capture.get(CAP_PROP_FRAME_WIDTH)? as i32,
			capture.get(CAP_PROP_FRAME_HEIGHT)? as i32,
		);
		if resolution != requested {
			tracing::warn!(
				%requested,
				negotiated = %resolution,
				"camera ignored requested resolution"
			);
		}

		Ok(Self {
			capture,
			resolution,
		})
	}

	#[inline]
	pub fn resolution(&self) -> Resolution {
		self.resolution
	}
}

/// Asks for `requested`; a refused or failed request is only logged.
fn request_resolution<Set>(requested: Resolution, mut set: Set)
where
	Set: FnMut(i32, f64) -> opencv::Result<bool>,
{
	for (name, prop, value) in [
		("width", CAP_PROP_FRAME_WIDTH, requested.width),
		("height", CAP_PROP_FRAME_HEIGHT, requested.height),
	] {
		match set(prop, f64::from(value)) {
			Ok(true) => {}
			Ok(false) => tracing::debug!("camera refused frame {name} {value}"),
			Err(err) => tracing::warn!("failed to request frame {name} {value}: {err}"),
		}
	}
}

impl FrameSource for Camera {
	type Frame = Mat;

	fn read(&mut self) -> Result<Option<Mat>> {
		let mut frame = Mat::default();
		if self.capture.read(&mut frame)? {
			Ok(Some(frame))
		} else {
			Ok(None)
		}
	}

	fn release(&mut self) -> Result<()> {
		self.capture.release()?;
		tracing::debug!("camera released");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_resolution_request_still_tries_both_sides() {
		let mut requested = Vec::new();
		request_resolution(Resolution::new(1920, 1080), |prop, value| {
			requested.push((prop, value));
			Err(opencv::Error::new(opencv::core::StsError, "unsupported property"))
		});

		assert_eq!(
			requested,
			vec![(CAP_PROP_FRAME_WIDTH, 1920.0), (CAP_PROP_FRAME_HEIGHT, 1080.0)]
		);
	}

	#[test]
	fn resolution_displays_as_width_by_height() {
		assert_eq!(DEFAULT_RESOLUTION.to_string(), "1280x720");
		assert_eq!(Resolution::new(1920, 1080).to_string(), "1920x1080");
	}
}
