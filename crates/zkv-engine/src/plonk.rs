// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PLONK binding over BLS12-381 using `dusk-plonk`.
//!
//! - **Verifying key**: `Verifier` bytes as produced by `Verifier::to_bytes`.
//!   Re-encoding must reproduce the input exactly.
//! - **Proof**: exactly `Proof::SIZE` bytes.
//! - **Public witness**: `field tag | n | n × scalar`, each scalar 32 bytes
//!   little-endian and canonical. The tag is the BLS12-381 scalar modulus,
//!   so these witnesses share their layout with the arkworks bindings.

use dusk_bytes::Serializable;
use dusk_plonk::prelude::{BlsScalar, Error as PlonkError, Proof, Verifier};

use crate::error::{ParseError, VerifyFailure};
use crate::framing;
use crate::ProofSystemEngine;

const SCALAR_SIZE: usize = 32;

/// PLONK verification over BLS12-381.
pub struct PlonkEngine;

impl PlonkEngine {
    pub fn write_verifying_key(verifier: &Verifier) -> Vec<u8> {
        verifier.to_bytes()
    }

    pub fn write_proof(proof: &Proof) -> Vec<u8> {
        proof.to_bytes().to_vec()
    }

    pub fn write_witness(inputs: &[BlsScalar]) -> Vec<u8> {
        framing::join_tagged(&field_tag(), inputs.iter().map(|s| s.to_bytes()))
    }
}

fn field_tag() -> Vec<u8> {
    framing::field_tag::<ark_bls12_381::Fr>()
}

fn read_scalar(chunk: &[u8]) -> Result<BlsScalar, ParseError> {
    let mut buf = [0u8; SCALAR_SIZE];
    buf.copy_from_slice(chunk);
    let scalar = Option::<BlsScalar>::from(BlsScalar::from_bytes(&buf))
        .ok_or_else(|| ParseError::Invalid("scalar not canonical".into()))?;
    if scalar.to_bytes() != buf {
        return Err(ParseError::Invalid("scalar not canonical".into()));
    }
    Ok(scalar)
}

fn classify(err: PlonkError) -> VerifyFailure {
    match err {
        PlonkError::ProofVerificationError | PlonkError::PairingCheckFailure => {
            VerifyFailure::Rejected("proof verification failed".into())
        }
        PlonkError::InconsistentPublicInputsLen { expected, provided } => VerifyFailure::Rejected(
            format!("verifier expects {expected} public inputs, witness has {provided}"),
        ),
        other => VerifyFailure::Fault(format!("{other:?}")),
    }
}

impl ProofSystemEngine for PlonkEngine {
    type VerifyingKey = Verifier;
    type Proof = Proof;
    type Witness = Vec<BlsScalar>;

    fn read_verifying_key(bytes: &[u8]) -> Result<Self::VerifyingKey, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::Empty);
        }
        let verifier = Verifier::try_from_bytes(bytes)
            .map_err(|e| ParseError::Invalid(format!("{e:?}")))?;
        let canonical = verifier.to_bytes();
        if canonical.as_slice() != bytes {
            if bytes.len() > canonical.len() && bytes.starts_with(&canonical) {
                return Err(ParseError::TrailingBytes(bytes.len() - canonical.len()));
            }
            return Err(ParseError::Invalid("verifier encoding is not canonical".into()));
        }
        Ok(verifier)
    }

    fn read_proof(bytes: &[u8]) -> Result<Self::Proof, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::Empty);
        }
        let array: [u8; Proof::SIZE] = bytes.try_into().map_err(|_| {
            if bytes.len() > Proof::SIZE {
                ParseError::TrailingBytes(bytes.len() - Proof::SIZE)
            } else {
                ParseError::Length {
                    expected: Proof::SIZE,
                    actual: bytes.len(),
                }
            }
        })?;
        Proof::from_bytes(&array).map_err(|e| ParseError::Invalid(format!("{e:?}")))
    }

    fn read_witness(bytes: &[u8]) -> Result<Self::Witness, ParseError> {
        let body = framing::strip_field_tag(bytes, &field_tag())?;
        framing::split_counted(body, SCALAR_SIZE)?
            .map(read_scalar)
            .collect()
    }

    fn verify(
        proof: &Self::Proof,
        vk: &Self::VerifyingKey,
        witness: &Self::Witness,
    ) -> Result<(), VerifyFailure> {
        vk.verify(proof, witness).map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witness_roundtrip() {
        let inputs = vec![BlsScalar::from(35u64), BlsScalar::from(7u64)];
        let bytes = PlonkEngine::write_witness(&inputs);
        assert_eq!(bytes.len(), SCALAR_SIZE + framing::COUNT_SIZE + 2 * SCALAR_SIZE);
        assert_eq!(PlonkEngine::read_witness(&bytes).unwrap(), inputs);
    }

    #[test]
    fn witness_rejects_non_canonical_scalar() {
        let bytes = framing::join_tagged(&field_tag(), [[0xffu8; SCALAR_SIZE]].iter());
        assert!(matches!(PlonkEngine::read_witness(&bytes), Err(ParseError::Invalid(_))));
    }

    #[test]
    fn bn254_witness_is_foreign() {
        let bn254 = framing::write_scalars(&[ark_bn254::Fr::from(35u64)]).unwrap();
        assert_eq!(PlonkEngine::read_witness(&bn254).unwrap_err(), ParseError::ForeignField);
    }

    #[test]
    fn proof_length_is_exact() {
        assert_eq!(PlonkEngine::read_proof(&[]).unwrap_err(), ParseError::Empty);
        assert_eq!(
            PlonkEngine::read_proof(&[0u8; 10]).unwrap_err(),
            ParseError::Length { expected: Proof::SIZE, actual: 10 }
        );
        let long = vec![0u8; Proof::SIZE + 3];
        assert_eq!(PlonkEngine::read_proof(&long).unwrap_err(), ParseError::TrailingBytes(3));
    }

    #[test]
    fn verifying_key_rejects_empty() {
        assert_eq!(PlonkEngine::read_verifying_key(&[]).err().unwrap(), ParseError::Empty);
    }

    #[test]
    fn verification_errors_are_classified() {
        assert!(matches!(
            classify(PlonkError::ProofVerificationError),
            VerifyFailure::Rejected(_)
        ));
        assert!(matches!(
            classify(PlonkError::InconsistentPublicInputsLen { expected: 1, provided: 2 }),
            VerifyFailure::Rejected(_)
        ));
    }
}
