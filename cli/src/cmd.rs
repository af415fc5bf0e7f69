use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{ContextCompat, Result, WrapErr};
use itertools::Itertools;
use roi_selector_core::{camera::Resolution, DEFAULT_RECORD_PATH};
use std::{path::PathBuf, str::FromStr};

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
pub struct CliArgs {
	/// The diagnostics log level, overridden by RUST_LOG.
	#[arg(long, global = true, default_value = "warn")]
	pub log_level: String,
	#[command(subcommand)]
	pub command: CliSubcommands,
}

#[derive(Subcommand)]
pub enum CliSubcommands {
	/// Drag out a region of interest on a live camera feed.
	Select(SelectArgs),
	/// Print the regions of interest saved so far.
	History(HistoryArgs),
}

#[derive(Args)]
pub struct SelectArgs {
	/// The index of the camera to open.
	#[arg(short, long, default_value = "0")]
	pub camera: i32,
	/// The resolution to request from the camera (WIDTHxHEIGHT).
	#[arg(short, long, default_value = "1920x1080", value_parser = parse_resolution)]
	pub resolution: Resolution,
	/// The csv file to append the selection to.
	#[arg(short, long, default_value = DEFAULT_RECORD_PATH)]
	pub output: PathBuf,
}

#[derive(Args)]
pub struct HistoryArgs {
	/// The csv file to read selections from.
	#[arg(short, long, default_value = DEFAULT_RECORD_PATH)]
	pub output: PathBuf,
}

fn parse_resolution(arg: &str) -> Result<Resolution> {
	let (width, height) = arg
		.split(['x', 'X'])
		.map(str::trim)
		.map(|part| i32::from_str(part).wrap_err_with(|| format!("invalid dimension '{part}'")))
		.collect::<Result<Vec<i32>>>()
		.wrap_err("resolution should be formatted as WIDTHxHEIGHT")?
		.into_iter()
		.collect_tuple()
		.context("resolution should be formatted as WIDTHxHEIGHT")?;

	Ok(Resolution::new(width, height))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn select_defaults() {
		let args = CliArgs::try_parse_from(["roi-selector", "select"]).unwrap();
		assert_eq!(args.log_level, "warn");
		let CliSubcommands::Select(select) = args.command else {
			panic!("expected select subcommand");
		};
		assert_eq!(select.camera, 0);
		assert_eq!(select.resolution, Resolution::new(1920, 1080));
		assert_eq!(select.output, PathBuf::from("roi_selector.csv"));
	}

	#[test]
	fn select_overrides() {
		let args = CliArgs::try_parse_from([
			"roi-selector",
			"select",
			"-c",
			"2",
			"-r",
			"640x480",
			"-o",
			"rois.csv",
			"--log-level",
			"debug",
		])
		.unwrap();
		assert_eq!(args.log_level, "debug");
		let CliSubcommands::Select(select) = args.command else {
			panic!("expected select subcommand");
		};
		assert_eq!(select.camera, 2);
		assert_eq!(select.resolution, Resolution::new(640, 480));
		assert_eq!(select.output, PathBuf::from("rois.csv"));
	}

	#[test]
	fn bad_resolution_is_rejected() {
		for bad in ["1920", "1920x", "axb", "1x2x3"] {
			assert!(
				CliArgs::try_parse_from(["roi-selector", "select", "-r", bad]).is_err(),
				"{bad} should not parse"
			);
		}
	}

	#[test]
	fn history_reads_default_file() {
		let args = CliArgs::try_parse_from(["roi-selector", "history"]).unwrap();
		let CliSubcommands::History(history) = args.command else {
			panic!("expected history subcommand");
		};
		assert_eq!(history.output, PathBuf::from("roi_selector.csv"));
	}
}
