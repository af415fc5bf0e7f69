use crate::cmd::HistoryArgs;
use color_eyre::eyre::{Result, WrapErr};
use roi_selector_core::record;

pub fn history(args: HistoryArgs) -> Result<()> {
	let records = record::load(&args.output)
		.wrap_err_with(|| format!("failed to load roi records from {}", args.output.display()))?;
	if records.is_empty() {
		println!("no ROIs recorded in {}", args.output.display());
	}
	for (idx, roi) in records.iter().enumerate() {
		println!("roi #{idx}: {roi}");
	}
	Ok(())
}
