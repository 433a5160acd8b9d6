// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 binding over any arkworks pairing.
//!
//! # Wire format
//!
//! All values use the arkworks canonical *compressed* encoding with point
//! validation enabled.
//!
//! - **Verifying key**: `alpha_g1 | beta_g2 | gamma_g2 | delta_g2 | n | n × G1`
//!   where `n` is a `u64` little-endian count of `gamma_abc_g1` points.
//! - **Proof**: `a (G1) | b (G2) | c (G1)`.
//! - **Public witness**: `field tag | n | n × scalar`.

use std::marker::PhantomData;

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_relations::r1cs::SynthesisError;
use ark_serialize::{CanonicalSerialize, SerializationError};
use ark_snark::SNARK;

use crate::error::{ParseError, VerifyFailure};
use crate::framing::{self, COUNT_SIZE};
use crate::ProofSystemEngine;

/// Groth16 verification over the pairing `E`.
pub struct Groth16Engine<E: Pairing>(PhantomData<E>);

impl<E: Pairing> Groth16Engine<E> {
    fn g1_size() -> usize {
        E::G1Affine::generator().compressed_size()
    }

    fn g2_size() -> usize {
        E::G2Affine::generator().compressed_size()
    }

    /// Compressed width of one public-witness element.
    pub fn scalar_size() -> usize {
        E::ScalarField::default().compressed_size()
    }

    pub fn write_verifying_key(vk: &VerifyingKey<E>) -> Result<Vec<u8>, SerializationError> {
        framing::write_compressed(vk)
    }

    pub fn write_proof(proof: &Proof<E>) -> Result<Vec<u8>, SerializationError> {
        framing::write_compressed(proof)
    }

    pub fn write_witness(inputs: &[E::ScalarField]) -> Result<Vec<u8>, SerializationError> {
        framing::write_scalars(inputs)
    }
}

impl<E: Pairing> ProofSystemEngine for Groth16Engine<E> {
    type VerifyingKey = PreparedVerifyingKey<E>;
    type Proof = Proof<E>;
    type Witness = Vec<E::ScalarField>;

    fn read_verifying_key(bytes: &[u8]) -> Result<Self::VerifyingKey, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::Empty);
        }
        // bound the gamma_abc_g1 length before arkworks allocates for it
        let header = Self::g1_size() + 3 * Self::g2_size();
        if bytes.len() < header + COUNT_SIZE {
            return Err(ParseError::UnexpectedEof);
        }
        if framing::split_counted(&bytes[header..], Self::g1_size())?.len() == 0 {
            return Err(ParseError::Invalid("verifying key has no gamma_abc_g1 points".into()));
        }
        let vk: VerifyingKey<E> = framing::read_exact(bytes)?;
        Ok(PreparedVerifyingKey::from(vk))
    }

    fn read_proof(bytes: &[u8]) -> Result<Self::Proof, ParseError> {
        framing::read_exact(bytes)
    }

    fn read_witness(bytes: &[u8]) -> Result<Self::Witness, ParseError> {
        framing::read_scalars(bytes)
    }

    fn verify(
        proof: &Self::Proof,
        vk: &Self::VerifyingKey,
        witness: &Self::Witness,
    ) -> Result<(), VerifyFailure> {
        match Groth16::<E>::verify_with_processed_vk(vk, witness, proof) {
            Ok(true) => Ok(()),
            Ok(false) => Err(VerifyFailure::Rejected("pairing check failed".into())),
            Err(SynthesisError::MalformedVerifyingKey) => Err(VerifyFailure::Rejected(format!(
                "verifying key expects {} public inputs, witness has {}",
                vk.vk.gamma_abc_g1.len().saturating_sub(1),
                witness.len()
            ))),
            Err(e) => Err(VerifyFailure::Fault(e.to_string())),
        }
    }
}
