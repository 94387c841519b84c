use std::io;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// GUI crates are noisy at info level.
const DEFAULT_FILTER: &str = "info,eframe=warn,egui_glow=warn,winit=warn";
const VERBOSE_FILTER: &str = "debug,eframe=warn,egui_glow=warn,winit=warn";

pub fn configure_logging(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_log = fmt::layer().with_writer(io::stderr).with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).init();
}
