// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verification dispatcher.
//!
//! Resolve the binding, decode, deserialize, verify, classify. Each step
//! short-circuits, so nothing is decoded for an unknown curve and the
//! engine never sees an artifact that failed to parse.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};
use zkv_engine::{
    Groth16Bls12_377, Groth16Bls12_381, Groth16Bn254, Groth16Bw6_761, PlonkBls12_377,
    PlonkBls12_381, PlonkBn254, ProofSystemEngine, VerifyFailure,
};

use crate::artifact::{self, RawArtifacts};
use crate::codec;
use crate::error::{ArtifactKind, VerifyError};
use crate::registry::{Binding, CurveId, ProofSystem};
use crate::response::{Outcome, VerificationResult};

/// One verification call as the caller supplied it.
#[derive(Debug, Clone, Copy)]
pub struct VerificationRequest<'a> {
    pub curve: &'a str,
    pub system: &'a str,
    pub proof: &'a str,
    pub verifying_key: &'a str,
    pub public_witness: &'a str,
}

pub fn verify(request: &VerificationRequest<'_>) -> VerificationResult {
    match Binding::resolve(request.curve, request.system) {
        Ok(binding) => verify_with(
            binding,
            request.proof,
            request.verifying_key,
            request.public_witness,
        ),
        Err(err) => {
            let result = VerificationResult::failed(None, err);
            trace_result(&result);
            result
        }
    }
}

/// Verify against an already resolved binding.
pub fn verify_with(
    binding: Binding,
    proof: &str,
    verifying_key: &str,
    public_witness: &str,
) -> VerificationResult {
    let result = match decode_all(proof, verifying_key, public_witness) {
        Ok(raw) => run(binding, &raw),
        Err(err) => VerificationResult::failed(Some(binding), err),
    };
    trace_result(&result);
    result
}

pub fn decode_all(
    proof: &str,
    verifying_key: &str,
    public_witness: &str,
) -> Result<RawArtifacts, VerifyError> {
    Ok(RawArtifacts {
        proof: codec::decode(ArtifactKind::Proof, proof)?,
        verifying_key: codec::decode(ArtifactKind::VerifyingKey, verifying_key)?,
        public_witness: codec::decode(ArtifactKind::PublicWitness, public_witness)?,
    })
}

fn run(binding: Binding, raw: &RawArtifacts) -> VerificationResult {
    match (binding.system, binding.curve) {
        (ProofSystem::Groth16, CurveId::Bn254) => check::<Groth16Bn254>(binding, raw),
        (ProofSystem::Groth16, CurveId::Bls12_381) => check::<Groth16Bls12_381>(binding, raw),
        (ProofSystem::Groth16, CurveId::Bls12_377) => check::<Groth16Bls12_377>(binding, raw),
        (ProofSystem::Groth16, CurveId::Bw6_761) => check::<Groth16Bw6_761>(binding, raw),
        (ProofSystem::Plonk, CurveId::Bn254) => check::<PlonkBn254>(binding, raw),
        (ProofSystem::Plonk, CurveId::Bls12_381) => check::<PlonkBls12_381>(binding, raw),
        (ProofSystem::Plonk, CurveId::Bls12_377) => check::<PlonkBls12_377>(binding, raw),
        (ProofSystem::Plonk, curve @ CurveId::Bw6_761) => VerificationResult::failed(
            Some(binding),
            VerifyError::UnsupportedProofSystem {
                system: ProofSystem::Plonk.tag().to_string(),
                curve,
            },
        ),
    }
}

fn check<P: ProofSystemEngine>(binding: Binding, raw: &RawArtifacts) -> VerificationResult {
    let verdict = panic::catch_unwind(AssertUnwindSafe(
        || -> Result<Result<(), VerifyFailure>, VerifyError> {
            let typed = artifact::deserialize_all::<P>(binding, raw)?;
            Ok(P::verify(&typed.proof, &typed.verifying_key, &typed.public_witness))
        },
    ));

    match verdict {
        Ok(Ok(Ok(()))) => VerificationResult::verified(binding),
        Ok(Ok(Err(VerifyFailure::Rejected(reason)))) => VerificationResult::rejected(binding, reason),
        Ok(Ok(Err(VerifyFailure::Fault(reason)))) => {
            VerificationResult::failed(Some(binding), VerifyError::EngineFault(reason))
        }
        Ok(Err(err)) => VerificationResult::failed(Some(binding), err),
        Err(_) => VerificationResult::failed(
            Some(binding),
            VerifyError::EngineFault(format!("{binding} engine panicked")),
        ),
    }
}

fn trace_result(result: &VerificationResult) {
    let curve = result.binding.map(|b| b.curve.name()).unwrap_or("-");
    let system = result.binding.map(|b| b.system.tag()).unwrap_or("-");
    match &result.outcome {
        Outcome::Verified => info!(curve, system, outcome = "verified", "proof verified"),
        Outcome::Rejected { reason } => {
            info!(curve, system, outcome = "rejected", %reason, "proof rejected")
        }
        Outcome::Failed(err @ VerifyError::EngineFault(_)) => {
            warn!(curve, system, outcome = err.kind().as_str(), error = %err, "verification failed")
        }
        Outcome::Failed(err) => {
            debug!(curve, system, outcome = err.kind().as_str(), error = %err, "verification failed")
        }
    }
}
