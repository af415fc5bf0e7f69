use crate::{
	error::{Result, SelectorError},
	selection::Roi,
};
use itertools::Itertools;
use std::{
	fs::{self, OpenOptions},
	io::Write,
	path::Path,
	str::FromStr,
};

pub const HEADER: &str = "TopLeft_X,TopLeft_Y,BottomRight_X,BottomRight_Y";

/// Appends `roi` as one row, writing the header first if the file is new.
pub fn append<P>(path: P, roi: &Roi) -> Result<()>
where
	P: AsRef<Path>,
{
	append_impl(path.as_ref(), roi)
}

fn append_impl(path: &Path, roi: &Roi) -> Result<()> {
	let write_err = |source| SelectorError::RecordWrite {
		path: path.to_owned(),
		source,
	};
	let is_new = !path.exists();
	let mut file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(write_err)?;

	let (x1, y1) = roi.top_left;
	let (x2, y2) = roi.bottom_right;
	let mut row = String::new();
	if is_new {
		row.push_str(HEADER);
		row.push('\n');
	}
	row.push_str(&format!("{x1},{y1},{x2},{y2}\n"));
	file.write_all(row.as_bytes()).map_err(write_err)?;
	tracing::debug!(path = %path.display(), header = is_new, "appended roi record");
	Ok(())
}

/// Reads every recorded ROI back, in file order.
pub fn load<P>(path: P) -> Result<Vec<Roi>>
where
	P: AsRef<Path>,
{
	load_impl(path.as_ref())
}

fn load_impl(path: &Path) -> Result<Vec<Roi>> {
	let contents = fs::read_to_string(path).map_err(|source| SelectorError::RecordRead {
		path: path.to_owned(),
		source,
	})?;
	contents
		.lines()
		.enumerate()
		.map(|(idx, line)| (idx + 1, line.trim()))
		.filter(|(_, line)| !line.is_empty() && *line != HEADER)
		.map(|(line_no, line)| parse_row(line_no, line))
		.collect()
}

fn parse_row(line: usize, row: &str) -> Result<Roi> {
	let malformed = |reason: String| SelectorError::MalformedRecord { line, reason };
	let (x1, y1, x2, y2) = row
		.split(',')
		.map(str::trim)
		.map(|field| {
			i32::from_str(field).map_err(|_| malformed(format!("invalid number '{field}'")))
		})
		.collect::<Result<Vec<i32>>>()?
		.into_iter()
		.collect_tuple()
		.ok_or_else(|| malformed("expected four comma separated values".to_owned()))?;
	Ok(Roi::new((x1, y1), (x2, y2)))
}
