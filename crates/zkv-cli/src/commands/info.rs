// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use zkv_core::VerifierContract;

use crate::output::{self, Tone};

pub fn run() -> Result<()> {
    let info = VerifierContract::default().info();

    if output::is_json() {
        output::json_output(serde_json::to_value(&info)?);
        return Ok(());
    }

    output::label("contract", &format!("{} v{}", info.name, info.version));
    output::say(Tone::Plain, &info.description);
    for pair in &info.supported {
        output::label("  supported", &format!("{} on {}", pair.system, pair.curve));
    }
    output::label("VerifyProof", &format!("{} on {}", info.single.system, info.single.curve));
    Ok(())
}
