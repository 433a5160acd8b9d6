// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Failure taxonomy for verification calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use zkv_engine::ParseError;

use crate::registry::{CurveId, ProofSystem};

/// Which of the three caller-supplied artifacts a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    VerifyingKey,
    Proof,
    PublicWitness,
}

impl ArtifactKind {
    /// Name of the request field carrying this artifact.
    pub fn field(self) -> &'static str {
        match self {
            ArtifactKind::VerifyingKey => "vk",
            ArtifactKind::Proof => "proof",
            ArtifactKind::PublicWitness => "publicWitness",
        }
    }

    /// Human-readable noun used in response messages.
    pub fn noun(self) -> &'static str {
        match self {
            ArtifactKind::VerifyingKey => "verifyingkey",
            ArtifactKind::Proof => "proof",
            ArtifactKind::PublicWitness => "public witness",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// A verification call that could not reach a cryptographic verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("unknown curve {0:?}")]
    UnknownCurve(String),

    #[error("proof system {system:?} is not supported on curve {curve}")]
    UnsupportedProofSystem { system: String, curve: CurveId },

    #[error("failed to decode {field} from base64: {cause}")]
    Decoding { field: ArtifactKind, cause: String },

    #[error("failed to read {system} {} on {curve}: {cause}", kind.noun())]
    MalformedArtifact {
        kind: ArtifactKind,
        curve: CurveId,
        system: ProofSystem,
        cause: ParseError,
    },

    #[error("engine fault: {0}")]
    EngineFault(String),
}

const MAX_ECHO: usize = 32;

/// Caller tokens are echoed into errors; keep them short.
pub(crate) fn clip(token: &str) -> String {
    match token.char_indices().nth(MAX_ECHO) {
        Some((end, _)) => format!("{}…", &token[..end]),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_short_tokens() {
        assert_eq!(clip("BN254"), "BN254");
    }

    #[test]
    fn clip_truncates_long_tokens() {
        let long = "x".repeat(100);
        let clipped = clip(&long);
        assert!(clipped.starts_with(&"x".repeat(MAX_ECHO)));
        assert!(clipped.ends_with('…'));
        assert!(clipped.chars().count() == MAX_ECHO + 1);
    }

    #[test]
    fn malformed_message_names_kind_system_and_curve() {
        let err = VerifyError::MalformedArtifact {
            kind: ArtifactKind::PublicWitness,
            curve: CurveId::Bn254,
            system: ProofSystem::Groth16,
            cause: ParseError::Empty,
        };
        assert_eq!(
            err.to_string(),
            "failed to read groth16 public witness on BN254: empty input"
        );
    }
}
