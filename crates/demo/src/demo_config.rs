// File: crates/demo/src/demo_config.rs
// Summary: Demo configuration (file + HOVER_* environment overrides).

use anyhow::{Context, Result};
use chrono::FixedOffset;
use hover_core::TooltipSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(flatten)]
    pub tooltip: TooltipSettings,
    /// Cursor positions sampled across the time range.
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

fn default_steps() -> usize { 8 }

impl DemoConfig {
    pub fn tooltip_settings(&self) -> Result<TooltipSettings> {
        self.tooltip.validate()?;
        Ok(self.tooltip.clone())
    }

    pub fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .with_context(|| format!("utc_offset_minutes out of range: {}", self.utc_offset_minutes))
    }
}

/// Bundled config, extension resolved by the `config` crate.
pub fn default_path() -> String {
    format!("{}/data/hover", env!("CARGO_MANIFEST_DIR"))
}

/// Load `path` (extension optional), or the bundled config when none is given.
pub fn load(path: Option<&str>) -> Result<DemoConfig> {
    let file = match path {
        Some(p) => ::config::File::with_name(p),
        None => ::config::File::with_name(&default_path()),
    };
    let settings = ::config::Config::builder()
        .add_source(file)
        .add_source(::config::Environment::with_prefix("HOVER").try_parsing(true))
        .build()?;
    Ok(settings.try_deserialize()?)
}
