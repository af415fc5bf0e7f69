pub mod camera;
pub mod error;
pub mod record;
pub mod selection;
pub mod session;
pub mod window;

pub use opencv;

use self::{
	camera::{Camera, Resolution},
	selection::Roi,
	session::Session,
	window::{Window, WINDOW_NAME},
};
use std::path::Path;

pub const DEFAULT_RECORD_PATH: &str = "roi_selector.csv";

/// Opens camera `camera_index`, lets the user drag out a rectangle and
/// appends it to `record_path`.
///
/// Returns `None` when the camera cannot be opened or no rectangle was drawn.
pub fn select_roi<P>(camera_index: i32, resolution: Resolution, record_path: P) -> Option<Roi>
where
	P: AsRef<Path>,
{
	let camera = match Camera::open(camera_index, resolution) {
		Ok(camera) => camera,
		Err(err) => {
			tracing::error!(?err, "camera setup failed");
			eprintln!("error: {err}");
			return None;
		}
	};
	println!("camera resolution set to: {}", camera.resolution());

	let window = match Window::open(WINDOW_NAME) {
		Ok(window) => window,
		Err(err) => {
			tracing::error!(?err, "failed to create selection window");
			eprintln!("error: {err}");
			return None;
		}
	};

	Session::new(camera, window).run(record_path)
}
