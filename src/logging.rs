//! Subscriber setup shared by the helper binaries.
//!
//! The library only talks to the `log` facade; binaries call [`init`] once so
//! those records land on stderr and stdout stays reserved for JSON output.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DIRECTIVE: &str = "gallery_catalog=info";

pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}
