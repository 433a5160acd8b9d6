// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve and proof-system registry.
//!
//! Both tables are `static` and never mutated, so lookups need no locking.
//! Matching is exact and case-sensitive: `"bn254"` is an unknown curve.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{clip, VerifyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    #[serde(rename = "BN254")]
    Bn254,
    #[serde(rename = "BLS12-381")]
    Bls12_381,
    #[serde(rename = "BLS12-377")]
    Bls12_377,
    #[serde(rename = "BW6-761")]
    Bw6_761,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofSystem {
    Groth16,
    Plonk,
}

static CURVES: [(&str, CurveId); 4] = [
    ("BN254", CurveId::Bn254),
    ("BLS12-381", CurveId::Bls12_381),
    ("BLS12-377", CurveId::Bls12_377),
    ("BW6-761", CurveId::Bw6_761),
];

static SYSTEMS: [(&str, ProofSystem); 2] = [
    ("groth16", ProofSystem::Groth16),
    ("plonk", ProofSystem::Plonk),
];

/// Every (curve, system) pair with an engine binding, in table order.
static SUPPORTED: [(CurveId, ProofSystem); 7] = [
    (CurveId::Bn254, ProofSystem::Groth16),
    (CurveId::Bn254, ProofSystem::Plonk),
    (CurveId::Bls12_381, ProofSystem::Groth16),
    (CurveId::Bls12_381, ProofSystem::Plonk),
    (CurveId::Bls12_377, ProofSystem::Groth16),
    (CurveId::Bls12_377, ProofSystem::Plonk),
    (CurveId::Bw6_761, ProofSystem::Groth16),
];

impl CurveId {
    pub const ALL: [CurveId; 4] = [
        CurveId::Bn254,
        CurveId::Bls12_381,
        CurveId::Bls12_377,
        CurveId::Bw6_761,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurveId::Bn254 => "BN254",
            CurveId::Bls12_381 => "BLS12-381",
            CurveId::Bls12_377 => "BLS12-377",
            CurveId::Bw6_761 => "BW6-761",
        }
    }
}

impl ProofSystem {
    pub const ALL: [ProofSystem; 2] = [ProofSystem::Groth16, ProofSystem::Plonk];

    pub fn tag(self) -> &'static str {
        match self {
            ProofSystem::Groth16 => "groth16",
            ProofSystem::Plonk => "plonk",
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ProofSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub fn resolve_curve(name: &str) -> Result<CurveId, VerifyError> {
    CURVES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, id)| *id)
        .ok_or_else(|| VerifyError::UnknownCurve(clip(name)))
}

/// Resolve a proof-system tag. `curve` is only carried into the error.
pub fn resolve_proof_system(tag: &str, curve: CurveId) -> Result<ProofSystem, VerifyError> {
    SYSTEMS
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, system)| *system)
        .ok_or_else(|| VerifyError::UnsupportedProofSystem {
            system: clip(tag),
            curve,
        })
}

pub fn supports(curve: CurveId, system: ProofSystem) -> bool {
    SUPPORTED.contains(&(curve, system))
}

pub fn supported_pairs() -> &'static [(CurveId, ProofSystem)] {
    &SUPPORTED
}

/// A resolved, supported (curve, proof system) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub curve: CurveId,
    pub system: ProofSystem,
}

impl Binding {
    pub fn new(curve: CurveId, system: ProofSystem) -> Result<Self, VerifyError> {
        if !supports(curve, system) {
            return Err(VerifyError::UnsupportedProofSystem {
                system: system.tag().to_string(),
                curve,
            });
        }
        Ok(Self { curve, system })
    }

    /// Resolve the curve first, then the system, then check the pair.
    pub fn resolve(curve_name: &str, system_tag: &str) -> Result<Self, VerifyError> {
        let curve = resolve_curve(curve_name)?;
        let system = resolve_proof_system(system_tag, curve)?;
        Self::new(curve, system)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.system, self.curve)
    }
}
