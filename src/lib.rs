//! # FabLab Box
//!
//! Command-line front end of the box generator. The geometry lives in
//! `fablabbox-camtools`; this crate loads a request, runs it and prints the
//! resulting shapes as JSON.

use std::path::Path;

use anyhow::Context;

pub use fablabbox_camtools::{
    BoxConfiguration, BoxError, BoxRequest, BoxVariant, ConfigError, OutputShape, StyleHint,
    TabbedBoxMaker,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so stdout carries only the generated JSON.
/// `RUST_LOG` narrows or widens the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(())
}

/// Load the request at `path` and generate every shape of its box.
pub fn generate_from_file(path: &Path) -> anyhow::Result<Vec<OutputShape>> {
    let request = BoxRequest::load_from_file(path)
        .with_context(|| format!("failed to load box request {}", path.display()))?;

    let shapes = TabbedBoxMaker::new(request)?
        .generate()
        .context("box generation aborted")?;

    Ok(shapes)
}

/// Shapes as pretty-printed JSON.
pub fn render_json(shapes: &[OutputShape]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(shapes).context("failed to serialize shapes")
}
