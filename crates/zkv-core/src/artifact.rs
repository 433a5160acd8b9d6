// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Artifact deserializer: raw bytes to typed engine objects.

use zkv_engine::{ParseError, ProofSystemEngine};

use crate::error::{ArtifactKind, VerifyError};
use crate::registry::Binding;

/// Decoded but untyped artifacts for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArtifacts {
    pub proof: Vec<u8>,
    pub verifying_key: Vec<u8>,
    pub public_witness: Vec<u8>,
}

pub struct TypedArtifacts<P: ProofSystemEngine> {
    pub proof: P::Proof,
    pub verifying_key: P::VerifyingKey,
    pub public_witness: P::Witness,
}

fn malformed(binding: Binding, kind: ArtifactKind) -> impl FnOnce(ParseError) -> VerifyError {
    move |cause| VerifyError::MalformedArtifact {
        kind,
        curve: binding.curve,
        system: binding.system,
        cause,
    }
}

pub fn deserialize_proof<P: ProofSystemEngine>(
    binding: Binding,
    bytes: &[u8],
) -> Result<P::Proof, VerifyError> {
    P::read_proof(bytes).map_err(malformed(binding, ArtifactKind::Proof))
}

pub fn deserialize_verifying_key<P: ProofSystemEngine>(
    binding: Binding,
    bytes: &[u8],
) -> Result<P::VerifyingKey, VerifyError> {
    P::read_verifying_key(bytes).map_err(malformed(binding, ArtifactKind::VerifyingKey))
}

pub fn deserialize_public_witness<P: ProofSystemEngine>(
    binding: Binding,
    bytes: &[u8],
) -> Result<P::Witness, VerifyError> {
    P::read_witness(bytes).map_err(malformed(binding, ArtifactKind::PublicWitness))
}

/// Proof first, then verifying key, then witness; the first failure wins.
pub fn deserialize_all<P: ProofSystemEngine>(
    binding: Binding,
    raw: &RawArtifacts,
) -> Result<TypedArtifacts<P>, VerifyError> {
    Ok(TypedArtifacts {
        proof: deserialize_proof::<P>(binding, &raw.proof)?,
        verifying_key: deserialize_verifying_key::<P>(binding, &raw.verifying_key)?,
        public_witness: deserialize_public_witness::<P>(binding, &raw.public_witness)?,
    })
}
