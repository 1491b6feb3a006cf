pub mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::app::settings::{load_settings, SeparatorChoice};
use crate::fs_op::path::join;
use crate::report::write_line;

/// Directory segment joined when no segments are given.
pub const DEFAULT_DIR: &str = "home/klundert";
/// File segment joined when no segments are given.
pub const DEFAULT_FILE: &str = "document.txt";

/// Everything one invocation needs, already parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Segments to join; empty means the two defaults.
    pub segments: Vec<String>,
    /// Overrides the separator from the settings file.
    pub separator: Option<SeparatorChoice>,
    pub config: Option<PathBuf>,
}

/// Join the requested segments and write the labelled result to `out`.
///
/// Returns the joined path so callers can log or inspect it.
pub fn run<W: Write>(opts: &RunOptions, out: &mut W) -> Result<String> {
    let settings = load_settings(opts.config.as_deref()).context("Failed to load settings")?;
    let sep = opts.separator.unwrap_or(settings.separator).resolve();

    let joined = if opts.segments.is_empty() {
        join([DEFAULT_DIR, DEFAULT_FILE], sep)
    } else {
        join(&opts.segments, sep)
    };
    tracing::debug!(%sep, segments = ?opts.segments, joined = %joined, "joined path");

    write_line(out, &settings.label, &joined).context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(joined)
}
