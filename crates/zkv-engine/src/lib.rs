// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkv-engine
//!
//! Proof-system bindings behind the **zkv** verification contract.
//!
//! Each binding implements [`ProofSystemEngine`]: it reads a verifying key,
//! a proof and a public witness from raw bytes, then runs the
//! cryptographic check. The contract layer never touches curve arithmetic
//! or binary layouts directly; it only picks a binding.
//!
//! | Binding | Backend | Curves |
//! |---|---|---|
//! | [`Groth16Engine`] | `ark-groth16` | BN254, BLS12-381, BLS12-377, BW6-761 |
//! | [`PlonkEngine`] | `dusk-plonk` | BLS12-381 |
//! | [`PlonkKzgEngine`] | arkworks KZG | BN254, BLS12-377 |
//!
//! Public witnesses open with a tag naming their scalar field, so a witness
//! built for one curve never parses on another.
//!
//! ## Example
//!
//! ```rust,no_run
//! use zkv_engine::{Groth16Bn254, ProofSystemEngine};
//!
//! # fn example(vk: &[u8], proof: &[u8], witness: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//! let vk = Groth16Bn254::read_verifying_key(vk)?;
//! let proof = Groth16Bn254::read_proof(proof)?;
//! let witness = Groth16Bn254::read_witness(witness)?;
//! Groth16Bn254::verify(&proof, &vk, &witness)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod framing;
pub mod groth16;
pub mod plonk;
pub mod plonk_kzg;

pub use error::{ParseError, VerifyFailure};
pub use groth16::Groth16Engine;
pub use plonk::PlonkEngine;
pub use plonk_kzg::PlonkKzgEngine;

pub type Groth16Bn254 = Groth16Engine<ark_bn254::Bn254>;
pub type Groth16Bls12_381 = Groth16Engine<ark_bls12_381::Bls12_381>;
pub type Groth16Bls12_377 = Groth16Engine<ark_bls12_377::Bls12_377>;
pub type Groth16Bw6_761 = Groth16Engine<ark_bw6_761::BW6_761>;
pub type PlonkBls12_381 = PlonkEngine;
pub type PlonkBn254 = PlonkKzgEngine<ark_bn254::Bn254>;
pub type PlonkBls12_377 = PlonkKzgEngine<ark_bls12_377::Bls12_377>;

/// A proof system's read and verify entry points for one curve.
pub trait ProofSystemEngine {
    type VerifyingKey;
    type Proof;
    type Witness;

    fn read_verifying_key(bytes: &[u8]) -> Result<Self::VerifyingKey, ParseError>;

    fn read_proof(bytes: &[u8]) -> Result<Self::Proof, ParseError>;

    /// Public inputs only; private witness values never reach the verifier.
    fn read_witness(bytes: &[u8]) -> Result<Self::Witness, ParseError>;

    fn verify(
        proof: &Self::Proof,
        vk: &Self::VerifyingKey,
        witness: &Self::Witness,
    ) -> Result<(), VerifyFailure>;
}
