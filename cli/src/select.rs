use crate::cmd::SelectArgs;
use roi_selector_core::select_roi;

pub fn select(args: SelectArgs) {
	tracing::info!(
		camera = args.camera,
		resolution = %args.resolution,
		output = %args.output.display(),
		"starting roi selection"
	);
	match select_roi(args.camera, args.resolution, &args.output) {
		Some(roi) => tracing::info!(%roi, "roi selected"),
		None => tracing::info!("no roi selected"),
	}
}
