// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub gateway_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.into(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".zkv").join("config.json"))
}

/// Missing file means defaults.
pub fn load_from(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

pub fn save_to(path: &Path, config: &CliConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("cannot write config at {}", path.display()))?;
    Ok(())
}

pub fn load_config() -> Result<CliConfig> {
    load_from(&config_path()?)
}

pub fn save_config(config: &CliConfig) -> Result<()> {
    save_to(&config_path()?, config)
}

/// `--gateway` wins over the config file.
pub fn gateway_url(flag: Option<&str>) -> Result<String> {
    let url = match flag {
        Some(url) => url.to_string(),
        None => load_config()?.gateway_url,
    };
    Ok(url.trim_end_matches('/').to_string())
}
