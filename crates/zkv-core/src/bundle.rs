// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Artifact bundles: one JSON file holding the three base64 artifacts.
//!
//! Files are named `{system}_{curve}_{stamp}.json`, e.g.
//! `groth16_BLS12-377_2025-08-08_13-52-52.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::registry::{self, CurveId, ProofSystem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub vk: String,
    pub proof: String,
    #[serde(rename = "witnessPublic")]
    pub witness_public: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid bundle JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A supported pair and the bundle found for it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub system: ProofSystem,
    pub curve: CurveId,
    pub path: Option<PathBuf>,
}

pub fn file_name(system: ProofSystem, curve: CurveId, stamp: &str) -> String {
    format!("{}_{}_{stamp}.json", system.tag(), curve.name())
}

pub fn load(path: &Path) -> Result<ArtifactBundle, BundleError> {
    let data = fs::read_to_string(path).map_err(|source| BundleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| BundleError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, bundle: &ArtifactBundle) -> Result<(), BundleError> {
    let write_err = |source| BundleError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string_pretty(bundle).map_err(|source| BundleError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(write_err)
}

/// Find one bundle per supported pair in `dir`.
///
/// Names are matched by `{system}_{curve}_` prefix and `.json` suffix; the
/// first match in sorted order wins.
pub fn scan_dir(dir: &Path) -> Result<Vec<BundleEntry>, BundleError> {
    let read_err = |source| BundleError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();

    Ok(registry::supported_pairs()
        .iter()
        .map(|&(curve, system)| {
            let prefix = format!("{}_{}_", system.tag(), curve.name());
            let path = names
                .iter()
                .find(|n| n.starts_with(&prefix) && n.ends_with(".json"))
                .map(|n| dir.join(n));
            BundleEntry { system, curve, path }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArtifactBundle {
        ArtifactBundle {
            vk: "dms=".into(),
            proof: "cHJvb2Y=".into(),
            witness_public: "d2l0bmVzcw==".into(),
        }
    }

    #[test]
    fn json_uses_witness_public_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["witnessPublic"], "d2l0bmVzcw==");
        assert!(json.get("witness_public").is_none());
    }

    #[test]
    fn file_name_format() {
        assert_eq!(
            file_name(ProofSystem::Groth16, CurveId::Bls12_377, "2025-08-08_13-52-52"),
            "groth16_BLS12-377_2025-08-08_13-52-52.json"
        );
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("b.json");
        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"vk\": 1}").unwrap();
        assert!(matches!(load(&path), Err(BundleError::Json { .. })));
        assert!(matches!(
            load(&dir.path().join("missing.json")),
            Err(BundleError::Read { .. })
        ));
    }

    #[test]
    fn scan_picks_first_sorted_match_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "groth16_BN254_2025-02-01.json",
            "groth16_BN254_2025-01-01.json",
            "plonk_BLS12-381_x.json",
            "plonk_BLS12-381_x.txt",
            "groth16_BN2540_x.json",
        ] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }

        let entries = scan_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), registry::supported_pairs().len());

        let find = |system, curve| {
            entries
                .iter()
                .find(|e| e.system == system && e.curve == curve)
                .unwrap()
                .path
                .clone()
        };
        assert_eq!(
            find(ProofSystem::Groth16, CurveId::Bn254),
            Some(dir.path().join("groth16_BN254_2025-01-01.json"))
        );
        assert_eq!(
            find(ProofSystem::Plonk, CurveId::Bls12_381),
            Some(dir.path().join("plonk_BLS12-381_x.json"))
        );
        assert_eq!(find(ProofSystem::Groth16, CurveId::Bw6_761), None);
    }
}
