// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{bail, Result};
use serde_json::json;
use zkv_core::{bundle, VerifierContract};

use crate::output::{self, Tone};

pub fn run(dir: &Path) -> Result<()> {
    let entries = bundle::scan_dir(dir)?;
    let contract = VerifierContract::default();

    let mut rows = Vec::new();
    let mut failed = 0usize;
    for entry in &entries {
        let pair = format!("{}_{}", entry.system, entry.curve);
        let Some(path) = &entry.path else {
            output::say(Tone::Caution, &format!("{pair}: no bundle found"));
            rows.push(json!({ "system": entry.system, "curve": entry.curve, "file": null }));
            continue;
        };

        let artifacts = match bundle::load(path) {
            Ok(b) => b,
            Err(e) => {
                failed += 1;
                output::say(Tone::Bad, &format!("{pair}: {e}"));
                rows.push(json!({
                    "system": entry.system,
                    "curve": entry.curve,
                    "file": path.display().to_string(),
                    "error": e.to_string(),
                }));
                continue;
            }
        };

        let pb = output::spinner(&format!("verifying {pair}..."));
        let record = contract
            .evaluate(
                entry.system.tag(),
                entry.curve.name(),
                &artifacts.proof,
                &artifacts.vk,
                &artifacts.witness_public,
            )
            .to_record();
        pb.finish_and_clear();

        if !record.success {
            failed += 1;
        }
        output::record(&pair, &record);
        rows.push(json!({
            "system": entry.system,
            "curve": entry.curve,
            "file": path.display().to_string(),
            "success": record.success,
            "message": record.message,
            "kind": record.kind,
        }));
    }

    if output::is_json() {
        output::json_output(json!({ "results": rows, "failed": failed }));
    }
    if failed > 0 {
        bail!("{failed} bundle(s) failed verification");
    }
    Ok(())
}
