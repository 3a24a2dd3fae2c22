//! JSON configuration for the decode + pyramid pipeline.

use crate::depth::DepthFormat;
use crate::error::Error;
use crate::pyramid::PyramidOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    /// Depth format name: `direct`, `redwood`, `tum`, `sun` or `nyu`.
    pub depth_format: String,
    #[serde(default)]
    pub pyramid: PyramidOptions,
}

impl PipelineConfig {
    /// Resolve the configured format name to its tag.
    pub fn format(&self) -> Result<DepthFormat, Error> {
        DepthFormat::from_name(&self.depth_format)
    }
}

/// Read a pipeline configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<PipelineConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}
