// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkv verifier contract: the ledger-facing entry points.
//!
//! The contract holds no state beyond its immutable configuration, so one
//! instance can serve concurrent calls from any number of threads.

use serde::{Deserialize, Serialize};

use crate::dispatch::{self, VerificationRequest};
use crate::error::VerifyError;
use crate::registry::{self, Binding, CurveId, ProofSystem};
use crate::response::{ContractError, VerificationResult, VerifyProofResponse};

pub const CONTRACT_NAME: &str = "zkv-verifier";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractConfig {
    /// Binding used by the single-curve `VerifyProof` entry point.
    pub single: Binding,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            single: Binding {
                curve: CurveId::Bn254,
                system: ProofSystem::Groth16,
            },
        }
    }
}

impl ContractConfig {
    /// Build from textual curve and system tokens; unknown or unsupported
    /// pairs are rejected rather than defaulted.
    pub fn from_tokens(curve: &str, system: &str) -> Result<Self, VerifyError> {
        Ok(Self {
            single: Binding::resolve(curve, system)?,
        })
    }
}

/// Static description of what this contract verifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub supported: Vec<SupportedPair>,
    pub single: SupportedPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedPair {
    pub system: ProofSystem,
    pub curve: CurveId,
}

impl From<Binding> for SupportedPair {
    fn from(b: Binding) -> Self {
        Self { system: b.system, curve: b.curve }
    }
}

/// Fixed human-readable description of the supported proof systems and curves.
pub fn describe() -> String {
    let mut groth16 = Vec::new();
    let mut plonk = Vec::new();
    for &(curve, system) in registry::supported_pairs() {
        match system {
            ProofSystem::Groth16 => groth16.push(curve.name()),
            ProofSystem::Plonk => plonk.push(curve.name()),
        }
    }
    format!(
        "Verify zkSNARK proofs submitted as base64 artifacts. Groth16 on {}; PLONK on {}.",
        groth16.join(", "),
        plonk.join(", ")
    )
}

#[derive(Debug, Clone, Default)]
pub struct VerifierContract {
    config: ContractConfig,
}

impl VerifierContract {
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Canonical result for any (curve, system) pair.
    pub fn evaluate(
        &self,
        system: &str,
        curve: &str,
        proof: &str,
        verifying_key: &str,
        public_witness: &str,
    ) -> VerificationResult {
        dispatch::verify(&VerificationRequest {
            curve,
            system,
            proof,
            verifying_key,
            public_witness,
        })
    }

    /// `VerifyGroth16Proof(curveName, proof, vk, publicWitness)`.
    pub fn verify_groth16_proof(
        &self,
        curve: &str,
        proof: &str,
        verifying_key: &str,
        public_witness: &str,
    ) -> (String, Result<(), ContractError>) {
        self.evaluate(ProofSystem::Groth16.tag(), curve, proof, verifying_key, public_witness)
            .to_message_pair()
    }

    /// `VerifyPlonkProof(curveName, proof, vk, publicWitness)`.
    pub fn verify_plonk_proof(
        &self,
        curve: &str,
        proof: &str,
        verifying_key: &str,
        public_witness: &str,
    ) -> (String, Result<(), ContractError>) {
        self.evaluate(ProofSystem::Plonk.tag(), curve, proof, verifying_key, public_witness)
            .to_message_pair()
    }

    /// Bare-error variant of [`Self::verify_groth16_proof`].
    pub fn check_groth16_proof(
        &self,
        curve: &str,
        proof: &str,
        verifying_key: &str,
        public_witness: &str,
    ) -> Result<(), ContractError> {
        self.evaluate(ProofSystem::Groth16.tag(), curve, proof, verifying_key, public_witness)
            .to_error()
    }

    /// Bare-error variant of [`Self::verify_plonk_proof`].
    pub fn check_plonk_proof(
        &self,
        curve: &str,
        proof: &str,
        verifying_key: &str,
        public_witness: &str,
    ) -> Result<(), ContractError> {
        self.evaluate(ProofSystem::Plonk.tag(), curve, proof, verifying_key, public_witness)
            .to_error()
    }

    /// `VerifyProof(proof, vk, publicWitness)` on the configured binding.
    ///
    /// Every failure is folded into `success = false`; the outer error is
    /// always `Ok`.
    pub fn verify_proof(
        &self,
        proof: &str,
        verifying_key: &str,
        public_witness: &str,
    ) -> Result<VerifyProofResponse, ContractError> {
        Ok(dispatch::verify_with(self.config.single, proof, verifying_key, public_witness).to_record())
    }

    /// `GetContractInfo()`.
    pub fn get_contract_info(&self) -> Result<String, ContractError> {
        Ok(describe())
    }

    pub fn info(&self) -> ContractInfo {
        ContractInfo {
            name: CONTRACT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: describe(),
            supported: registry::supported_pairs()
                .iter()
                .map(|&(curve, system)| SupportedPair { system, curve })
                .collect(),
            single: self.config.single.into(),
        }
    }
}
