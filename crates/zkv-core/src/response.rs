// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Result model and its caller-facing projections.
//!
//! Every entry point produces one [`VerificationResult`]. The bare error,
//! the `(message, error)` pair and the [`VerifyProofResponse`] record are
//! computed from it on demand and never built independently.

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;
use crate::registry::Binding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Verified,
    /// Well-formed artifacts that fail the verification equation.
    Rejected { reason: String },
    Failed(VerifyError),
}

/// Stable, machine-readable classification of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Verified,
    Rejected,
    UnknownCurve,
    UnsupportedProofSystem,
    DecodingError,
    MalformedArtifact,
    EngineFault,
}

impl OutcomeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Verified => "verified",
            OutcomeKind::Rejected => "rejected",
            OutcomeKind::UnknownCurve => "unknown_curve",
            OutcomeKind::UnsupportedProofSystem => "unsupported_proof_system",
            OutcomeKind::DecodingError => "decoding_error",
            OutcomeKind::MalformedArtifact => "malformed_artifact",
            OutcomeKind::EngineFault => "engine_fault",
        }
    }
}

impl VerifyError {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            VerifyError::UnknownCurve(_) => OutcomeKind::UnknownCurve,
            VerifyError::UnsupportedProofSystem { .. } => OutcomeKind::UnsupportedProofSystem,
            VerifyError::Decoding { .. } => OutcomeKind::DecodingError,
            VerifyError::MalformedArtifact { .. } => OutcomeKind::MalformedArtifact,
            VerifyError::EngineFault(_) => OutcomeKind::EngineFault,
        }
    }
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Verified => OutcomeKind::Verified,
            Outcome::Rejected { .. } => OutcomeKind::Rejected,
            Outcome::Failed(err) => err.kind(),
        }
    }
}

/// Error surfaced to callers for any non-verified outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("proof rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Failed(#[from] VerifyError),
}

impl ContractError {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ContractError::Rejected(_) => OutcomeKind::Rejected,
            ContractError::Failed(err) => err.kind(),
        }
    }
}

/// Structured record returned by the single-curve `VerifyProof` entry point.
///
/// `kind` separates a cryptographic rejection from unparseable input, which
/// `success` alone cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyProofResponse {
    pub success: bool,
    pub message: String,
    pub kind: OutcomeKind,
}

/// Canonical result of one verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// `None` only when the curve or system could not be resolved.
    pub binding: Option<Binding>,
    pub outcome: Outcome,
}

impl VerificationResult {
    pub fn verified(binding: Binding) -> Self {
        Self { binding: Some(binding), outcome: Outcome::Verified }
    }

    pub fn rejected(binding: Binding, reason: impl Into<String>) -> Self {
        Self {
            binding: Some(binding),
            outcome: Outcome::Rejected { reason: reason.into() },
        }
    }

    pub fn failed(binding: Option<Binding>, err: VerifyError) -> Self {
        Self { binding, outcome: Outcome::Failed(err) }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.outcome, Outcome::Verified)
    }

    pub fn kind(&self) -> OutcomeKind {
        self.outcome.kind()
    }

    /// Short human-readable message, e.g. `"verify groth16 proof success"`.
    pub fn message(&self) -> String {
        let system = self.binding.map(|b| b.system.tag());
        match (&self.outcome, system) {
            (Outcome::Verified, Some(tag)) => format!("verify {tag} proof success"),
            (Outcome::Verified, None) => "verify proof success".to_string(),
            (Outcome::Rejected { .. }, Some(tag)) => format!("verify {tag} proof failed"),
            (Outcome::Rejected { .. }, None) => "verify proof failed".to_string(),
            (Outcome::Failed(err), _) => match err {
                VerifyError::UnknownCurve(_) => "unknown curve".to_string(),
                VerifyError::UnsupportedProofSystem { .. } => "unsupported proof system".to_string(),
                VerifyError::Decoding { field, .. } => format!("decode {field} failed"),
                VerifyError::MalformedArtifact { kind, system, .. } => {
                    format!("read {system} {} failed", kind.noun())
                }
                VerifyError::EngineFault(_) => "engine fault".to_string(),
            },
        }
    }

    /// Bare-error projection.
    pub fn to_error(&self) -> Result<(), ContractError> {
        match &self.outcome {
            Outcome::Verified => Ok(()),
            Outcome::Rejected { reason } => Err(ContractError::Rejected(reason.clone())),
            Outcome::Failed(err) => Err(ContractError::Failed(err.clone())),
        }
    }

    /// `(message, error)` projection.
    pub fn to_message_pair(&self) -> (String, Result<(), ContractError>) {
        (self.message(), self.to_error())
    }

    /// `{success, message, kind}` projection.
    pub fn to_record(&self) -> VerifyProofResponse {
        VerifyProofResponse {
            success: self.is_verified(),
            message: self.message(),
            kind: self.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArtifactKind;
    use crate::registry::{CurveId, ProofSystem};
    use zkv_engine::ParseError;

    fn groth16_bn254() -> Binding {
        Binding { curve: CurveId::Bn254, system: ProofSystem::Groth16 }
    }

    fn plonk_bls() -> Binding {
        Binding { curve: CurveId::Bls12_381, system: ProofSystem::Plonk }
    }

    fn all_outcomes() -> Vec<VerificationResult> {
        vec![
            VerificationResult::verified(groth16_bn254()),
            VerificationResult::rejected(plonk_bls(), "pairing check failed"),
            VerificationResult::failed(None, VerifyError::UnknownCurve("NOT_A_CURVE".into())),
            VerificationResult::failed(
                None,
                VerifyError::UnsupportedProofSystem { system: "plonk".into(), curve: CurveId::Bn254 },
            ),
            VerificationResult::failed(
                Some(groth16_bn254()),
                VerifyError::Decoding { field: ArtifactKind::Proof, cause: "bad".into() },
            ),
            VerificationResult::failed(
                Some(groth16_bn254()),
                VerifyError::MalformedArtifact {
                    kind: ArtifactKind::VerifyingKey,
                    curve: CurveId::Bn254,
                    system: ProofSystem::Groth16,
                    cause: ParseError::Empty,
                },
            ),
            VerificationResult::failed(Some(plonk_bls()), VerifyError::EngineFault("boom".into())),
        ]
    }

    #[test]
    fn messages() {
        let messages: Vec<String> = all_outcomes().iter().map(|r| r.message()).collect();
        assert_eq!(
            messages,
            [
                "verify groth16 proof success",
                "verify plonk proof failed",
                "unknown curve",
                "unsupported proof system",
                "decode proof failed",
                "read groth16 verifyingkey failed",
                "engine fault",
            ]
        );
    }

    #[test]
    fn projections_agree() {
        for result in all_outcomes() {
            let error = result.to_error();
            let (message, paired) = result.to_message_pair();
            let record = result.to_record();

            assert_eq!(error, paired);
            assert_eq!(message, record.message);
            assert_eq!(record.success, error.is_ok());
            assert_eq!(record.kind, result.kind());
            if let Err(e) = error {
                assert_eq!(e.kind(), record.kind);
            }
        }
    }

    #[test]
    fn rejection_and_malformed_are_distinguishable() {
        let outcomes = all_outcomes();
        let rejected = outcomes[1].to_record();
        let malformed = outcomes[5].to_record();
        assert!(!rejected.success && !malformed.success);
        assert_ne!(rejected.kind, malformed.kind);
    }

    #[test]
    fn record_json_shape() {
        let record = VerificationResult::verified(groth16_bn254()).to_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "verify groth16 proof success",
                "kind": "verified"
            })
        );
    }

    #[test]
    fn kind_strings_match_serde() {
        for result in all_outcomes() {
            let kind = result.kind();
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }
}
