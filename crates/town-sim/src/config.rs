//! TOML run configuration.
//!
//! The file mirrors [`SimConfig`] field for field.  Every section is
//! optional; anything missing keeps its default.
//!
//! ```toml
//! seed           = 7
//! initial_agents = 8
//!
//! [map]
//! width  = 1400.0
//! height = 1000.0
//!
//! [tuning]
//! promotion_threshold = 200.0
//!
//! [tuning.pk.design]
//! performance = 1.0
//! mood        = 0.8
//! skill       = 3.0
//! ```

use std::fs;
use std::path::Path;

use tracing::warn;

use town_core::SimConfig;

use crate::{SimError, SimResult};

/// Read a [`SimConfig`] from a TOML file.
pub fn load_config(path: &Path) -> SimResult<SimConfig> {
    let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Parse TOML text into a [`SimConfig`].
pub fn parse_config(text: &str) -> SimResult<SimConfig> {
    Ok(toml::from_str(text)?)
}

/// [`load_config`], falling back to the defaults when the file is missing
/// or invalid.
pub fn load_or_default(path: &Path) -> SimConfig {
    load_config(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "using default config");
        SimConfig::default()
    })
}
