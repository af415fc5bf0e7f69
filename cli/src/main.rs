pub mod cmd;
pub mod history;
pub mod logging;
pub mod select;

use self::cmd::{CliArgs, CliSubcommands};
use clap::Parser;
use color_eyre::eyre::Result;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

fn main() -> Result<()> {
	color_eyre::install()?;
	let args = CliArgs::parse();
	logging::init_logging(&args.log_level);
	match args.command {
		CliSubcommands::Select(args) => {
			select::select(args);
			Ok(())
		}
		CliSubcommands::History(args) => history::history(args),
	}
}
