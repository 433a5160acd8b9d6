// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use zkv_core::InvokeResponse;

use crate::commands::verify::read_value;
use crate::output::{self, Tone};

pub async fn run(gateway: &str, function: &str, args: &[String]) -> Result<()> {
    let args = args.iter().map(|a| read_value(a)).collect::<Result<Vec<_>>>()?;
    let url = format!("{gateway}/v1/invoke/{function}");

    let pb = output::spinner(&format!("invoking {function}..."));
    let resp = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "args": args }))
        .send()
        .await;
    pb.finish_and_clear();
    let resp = resp.map_err(|e| {
        output::fail_with_hint(
            &format!("cannot reach gateway at {gateway}: {e}"),
            "start zkv-gateway or run `zkv config set gateway_url URL`",
        )
    })?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        let reason = body["error"].as_str().unwrap_or("no error message");
        bail!("gateway returned {status}: {reason}");
    }

    let response: InvokeResponse = resp.json().await.context("invalid gateway response")?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&response)?);
    } else {
        if let Some(payload) = &response.payload {
            let text = match payload {
                Value::String(s) => s.clone(),
                other => serde_json::to_string_pretty(other)?,
            };
            output::label("payload", &text);
        }
        if let Some(kind) = response.kind {
            output::label("kind", kind.as_str());
        }
        if let Some(err) = &response.error {
            output::say(Tone::Bad, &format!("error: {err}"));
        }
    }

    if let Some(err) = response.error {
        bail!("{function} failed: {err}");
    }
    Ok(())
}
