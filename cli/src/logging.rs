use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber, preferring RUST_LOG over `log_level`.
pub fn init_logging(log_level: &str) {
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
	let result = tracing_subscriber::registry()
		.with(env_filter)
		.with(
			fmt::layer()
				.with_target(true)
				.with_line_number(true)
				.with_writer(std::io::stderr),
		)
		.try_init();
	if result.is_ok() {
		tracing::debug!("logging initialized: level={log_level}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn init_twice_is_harmless() {
		init_logging("debug");
		init_logging("info");
		tracing::info!("still logging");
	}
}
