// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::config::{config_path, load_config, save_config};
use crate::output::{self, Tone};

const ALLOWED_KEYS: &[&str] = &["gateway_url"];

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut config = load_config()?;
    config.gateway_url = value.trim_end_matches('/').to_string();
    save_config(&config)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": config.gateway_url }));
    } else {
        output::say(Tone::Good, &format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let path = config_path()?;
    let config = load_config()?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": path.display().to_string(),
            "gateway_url": config.gateway_url,
        }));
    } else {
        output::label("path", &path.display().to_string());
        output::label("gateway_url", &config.gateway_url);
    }
    Ok(())
}
