// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use zkv_core::{bundle, ArtifactBundle, VerifierContract};

use crate::output::{self, Tone};

/// Where the three artifacts come from.
pub struct ArtifactSource {
    pub bundle: Option<PathBuf>,
    pub vk: Option<String>,
    pub proof: Option<String>,
    pub witness: Option<String>,
}

/// A leading `@` names a file holding the base64 text.
pub fn read_value(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(path)
            .with_context(|| format!("cannot read {path}"))?
            .trim()
            .to_string()),
        None => Ok(value.to_string()),
    }
}

fn required(name: &str, value: Option<&str>) -> Result<String> {
    match value {
        Some(v) => read_value(v),
        None => Err(output::fail_with_hint(
            &format!("missing --{name}"),
            "pass --bundle FILE or all of --vk, --proof and --witness",
        )),
    }
}

impl ArtifactSource {
    pub fn resolve(&self) -> Result<ArtifactBundle> {
        if let Some(path) = &self.bundle {
            return Ok(bundle::load(path)?);
        }
        Ok(ArtifactBundle {
            vk: required("vk", self.vk.as_deref())?,
            proof: required("proof", self.proof.as_deref())?,
            witness_public: required("witness", self.witness.as_deref())?,
        })
    }
}

pub fn run(system: &str, curve: &str, source: &ArtifactSource) -> Result<()> {
    let artifacts = source.resolve()?;

    let pb = output::spinner(&format!("verifying {system} proof on {curve}..."));
    let record = VerifierContract::default()
        .evaluate(system, curve, &artifacts.proof, &artifacts.vk, &artifacts.witness_public)
        .to_record();
    pb.finish_and_clear();

    if output::is_json() {
        output::json_output(serde_json::to_value(&record)?);
    } else {
        output::record(&format!("{system}/{curve}"), &record);
    }

    if !record.success {
        bail!("verification failed: {}", record.message);
    }
    output::say(Tone::Good, "proof verified");
    Ok(())
}
