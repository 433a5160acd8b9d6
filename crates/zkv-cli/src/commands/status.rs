// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use crate::output;

pub async fn run(gateway: &str) -> Result<()> {
    let client = reqwest::Client::new();

    let reachable = client
        .get(format!("{gateway}/v1/health"))
        .timeout(Duration::from_secs(3))
        .send()
        .await
        .map(|r| r.status().is_success())
        .unwrap_or(false);

    let info: Option<Value> = if reachable {
        match client.get(format!("{gateway}/v1/info")).send().await {
            Ok(resp) => resp.json().await.ok(),
            Err(_) => None,
        }
    } else {
        None
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "gateway": gateway,
            "reachable": reachable,
            "info": info,
        }));
        return Ok(());
    }

    let gateway_str = if reachable {
        format!("{} ({gateway})", "reachable".green())
    } else {
        format!("{} ({gateway})", "unreachable".red())
    };
    output::label("gateway", &gateway_str);
    if let Some(info) = info {
        if let (Some(system), Some(curve)) =
            (info["single"]["system"].as_str(), info["single"]["curve"].as_str())
        {
            output::label("VerifyProof", &format!("{system} on {curve}"));
        }
    }
    Ok(())
}
