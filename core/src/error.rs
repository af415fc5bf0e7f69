use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
	#[error("could not open camera {index}")]
	CameraUnavailable { index: i32 },
	#[error("could not read a frame from the camera")]
	FrameRead,
	#[error("failed to write roi record to {}", .path.display())]
	RecordWrite {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to read roi records from {}", .path.display())]
	RecordRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("malformed roi record on line {line}: {reason}")]
	MalformedRecord { line: usize, reason: String },
	#[error(transparent)]
	OpenCv(#[from] opencv::Error),
}

pub type Result<T, E = SelectorError> = std::result::Result<T, E>;
