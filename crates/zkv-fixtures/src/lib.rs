// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkv-fixtures
//!
//! Generates verifying keys, proofs and public witnesses for the circuit
//! `y = x³ + x + 5` in the exact wire formats `zkv-engine` reads. Only used
//! by tests; the contract itself never proves anything.

pub mod cubic;
pub mod plonk;
pub mod plonk_kzg;

use anyhow::{anyhow, bail, Result};
use ark_ec::pairing::Pairing;
use ark_groth16::Groth16;
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, CryptoRng, RngCore, SeedableRng};
use dusk_plonk::prelude::{Compiler, PublicParameters};
use zkv_engine::{Groth16Engine, PlonkEngine, PlonkKzgEngine};

pub use cubic::{cubic_output, CubicCircuit};
pub use plonk::CubicPlonkCircuit;
pub use plonk_kzg::GateCircuit;

/// The `x` used by the reference scenario (`y = 35`).
pub const SCENARIO_X: u64 = 3;

const PLONK_CAPACITY: usize = 1 << 6;
const PLONK_LABEL: &[u8] = b"zkv-cubic";
const PLONK_KZG_POWERS: usize = 16;

/// Binary artifacts for one proof, before base64 encoding.
#[derive(Clone, Debug)]
pub struct RawArtifacts {
    pub vk: Vec<u8>,
    pub proof: Vec<u8>,
    pub witness: Vec<u8>,
}

pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Run Groth16 setup and prove `y = x³ + x + 5` over `E`.
pub fn groth16<E: Pairing, R: RngCore + CryptoRng>(x: u64, rng: &mut R) -> Result<RawArtifacts> {
    let circuit = CubicCircuit::<E::ScalarField>::assigned(E::ScalarField::from(x));
    let (pk, vk) = Groth16::<E>::circuit_specific_setup(CubicCircuit::empty(circuit.y), rng)
        .map_err(|e| anyhow!("groth16 setup failed: {e}"))?;
    let proof =
        Groth16::<E>::prove(&pk, circuit, rng).map_err(|e| anyhow!("groth16 proving failed: {e}"))?;

    let encode_err = |e: ark_serialize::SerializationError| anyhow!("groth16 encoding failed: {e}");
    Ok(RawArtifacts {
        vk: Groth16Engine::<E>::write_verifying_key(&vk).map_err(encode_err)?,
        proof: Groth16Engine::<E>::write_proof(&proof).map_err(encode_err)?,
        witness: Groth16Engine::<E>::write_witness(&[circuit.y]).map_err(encode_err)?,
    })
}

/// Run PLONK setup and prove `y = x³ + x + 5` over BLS12-381.
pub fn plonk<R: RngCore + CryptoRng>(x: u64, rng: &mut R) -> Result<RawArtifacts> {
    let pp = PublicParameters::setup(PLONK_CAPACITY, rng)
        .map_err(|e| anyhow!("plonk setup failed: {e:?}"))?;
    let (prover, verifier) = Compiler::compile::<CubicPlonkCircuit>(&pp, PLONK_LABEL)
        .map_err(|e| anyhow!("plonk compile failed: {e:?}"))?;
    let (proof, public_inputs) = prover
        .prove(rng, &CubicPlonkCircuit::new(x))
        .map_err(|e| anyhow!("plonk proving failed: {e:?}"))?;

    Ok(RawArtifacts {
        vk: PlonkEngine::write_verifying_key(&verifier),
        proof: PlonkEngine::write_proof(&proof),
        witness: PlonkEngine::write_witness(&public_inputs),
    })
}

/// Run KZG setup and prove `y = x³ + x + 5` as PLONK gates over `E`.
pub fn plonk_kzg<E: Pairing, R: RngCore + CryptoRng>(x: u64, rng: &mut R) -> Result<RawArtifacts> {
    let circuit = GateCircuit::<E::ScalarField>::cubic(E::ScalarField::from(x));
    let srs = plonk_kzg::Srs::<E>::setup(PLONK_KZG_POWERS, rng);
    let pk = plonk_kzg::preprocess(&srs, &circuit)?;
    let proof = plonk_kzg::prove(&srs, &pk, &circuit)?;

    let encode_err = |e: ark_serialize::SerializationError| anyhow!("plonk encoding failed: {e}");
    Ok(RawArtifacts {
        vk: PlonkKzgEngine::<E>::write_verifying_key(&pk.vk).map_err(encode_err)?,
        proof: PlonkKzgEngine::<E>::write_proof(&proof).map_err(encode_err)?,
        witness: PlonkKzgEngine::<E>::write_witness(&circuit.public_inputs()).map_err(encode_err)?,
    })
}

/// Generate artifacts for a `(proof system tag, curve name)` pair.
pub fn generate<R: RngCore + CryptoRng>(system: &str, curve: &str, x: u64, rng: &mut R) -> Result<RawArtifacts> {
    match (system, curve) {
        ("groth16", "BN254") => groth16::<ark_bn254::Bn254, _>(x, rng),
        ("groth16", "BLS12-381") => groth16::<ark_bls12_381::Bls12_381, _>(x, rng),
        ("groth16", "BLS12-377") => groth16::<ark_bls12_377::Bls12_377, _>(x, rng),
        ("groth16", "BW6-761") => groth16::<ark_bw6_761::BW6_761, _>(x, rng),
        ("plonk", "BN254") => plonk_kzg::<ark_bn254::Bn254, _>(x, rng),
        ("plonk", "BLS12-381") => plonk(x, rng),
        ("plonk", "BLS12-377") => plonk_kzg::<ark_bls12_377::Bls12_377, _>(x, rng),
        _ => bail!("no fixture for {system} on {curve}"),
    }
}
