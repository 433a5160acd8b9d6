// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PLONK binding over any arkworks pairing, with KZG commitments.
//!
//! Gates are `q_l·a + q_r·b + q_o·c + q_m·a·b + q_c + PI = 0` over three
//! wire columns. Copy constraints are a grand-product permutation argument
//! with the column cosets `1, g, g²` where `g` is the field's multiplicative
//! generator. Every committed polynomial is opened at the challenge `ζ` and
//! the permutation accumulator also at `ζω`; both openings are checked with
//! one pairing equation. Challenges come from a SHA-256 [`Transcript`] over
//! the verifying key, the public inputs and each prover message in turn.
//!
//! # Wire format
//!
//! Arkworks canonical *compressed* encoding with point validation.
//!
//! - **Verifying key**: `n (u64) | ℓ (u64) | q_l q_r q_o q_m q_c σ_a σ_b σ_c (G1) | τ·G2`
//!   where `n` is the evaluation domain size and `ℓ` the public input count.
//! - **Proof**: `[a] [b] [c] [z] [t] [W_ζ] [W_ζω] (G1) | 14 scalars`, the
//!   scalars ordered as in [`PlonkEvaluations`].
//! - **Public witness**: `field tag | n | n × scalar`.

use std::marker::PhantomData;

use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{FftField, Field, One, PrimeField, Zero};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use sha2::{Digest, Sha256};

use crate::error::{ParseError, VerifyFailure};
use crate::framing;
use crate::ProofSystemEngine;

/// Domain separator opening every transcript.
pub const TRANSCRIPT_LABEL: &[u8] = b"zkv-plonk-kzg-v1";

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PlonkVerifyingKey<E: Pairing> {
    pub domain_size: u64,
    pub num_public: u64,
    pub q_l: E::G1Affine,
    pub q_r: E::G1Affine,
    pub q_o: E::G1Affine,
    pub q_m: E::G1Affine,
    pub q_c: E::G1Affine,
    pub sigma_a: E::G1Affine,
    pub sigma_b: E::G1Affine,
    pub sigma_c: E::G1Affine,
    pub tau_g2: E::G2Affine,
}

/// Claimed evaluations. All but `z_omega` are taken at `ζ`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PlonkEvaluations<F: PrimeField> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub z: F,
    pub t: F,
    pub q_l: F,
    pub q_r: F,
    pub q_o: F,
    pub q_m: F,
    pub q_c: F,
    pub sigma_a: F,
    pub sigma_b: F,
    pub sigma_c: F,
    pub z_omega: F,
}

impl<F: PrimeField> PlonkEvaluations<F> {
    /// Evaluations at `ζ` in batching order.
    pub fn at_zeta(&self) -> [F; 13] {
        [
            self.a, self.b, self.c, self.z, self.t, self.q_l, self.q_r, self.q_o, self.q_m,
            self.q_c, self.sigma_a, self.sigma_b, self.sigma_c,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PlonkProof<E: Pairing> {
    pub a: E::G1Affine,
    pub b: E::G1Affine,
    pub c: E::G1Affine,
    pub z: E::G1Affine,
    pub t: E::G1Affine,
    pub w_zeta: E::G1Affine,
    pub w_zeta_omega: E::G1Affine,
    pub evals: PlonkEvaluations<E::ScalarField>,
}

/// A verifying key whose domain has been checked and built.
#[derive(Clone, Debug)]
pub struct PreparedPlonkKey<E: Pairing> {
    pub vk: PlonkVerifyingKey<E>,
    pub domain: Radix2EvaluationDomain<E::ScalarField>,
}

/// Identity labels of the three wire columns.
pub fn coset_shifts<F: FftField>() -> [F; 3] {
    [F::one(), F::GENERATOR, F::GENERATOR.square()]
}

/// Fiat-Shamir transcript shared by prover and verifier.
#[derive(Clone)]
pub struct Transcript {
    hasher: Sha256,
}

impl Transcript {
    pub fn new(label: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(label);
        Self { hasher }
    }

    pub fn append<T: CanonicalSerialize>(
        &mut self,
        label: &[u8],
        value: &T,
    ) -> Result<(), SerializationError> {
        self.hasher.update(label);
        self.hasher.update(framing::write_compressed(value)?);
        Ok(())
    }

    pub fn challenge<F: PrimeField>(&mut self, label: &[u8]) -> F {
        self.hasher.update(label);
        let digest = self.hasher.clone().finalize();
        self.hasher.update(digest);
        F::from_le_bytes_mod_order(&digest)
    }
}

/// Challenges in the order the prover derives them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenges<F> {
    pub beta: F,
    pub gamma: F,
    pub alpha: F,
    pub zeta: F,
    pub v: F,
    pub u: F,
}

impl<F: PrimeField> Challenges<F> {
    /// Replay the transcript for `proof` against `vk` and `public_inputs`.
    pub fn derive<E: Pairing<ScalarField = F>>(
        vk: &PlonkVerifyingKey<E>,
        public_inputs: &[F],
        proof: &PlonkProof<E>,
    ) -> Result<Self, SerializationError> {
        let mut transcript = Transcript::new(TRANSCRIPT_LABEL);
        transcript.append(b"vk", vk)?;
        transcript.append(b"pi", &public_inputs.to_vec())?;
        transcript.append(b"a", &proof.a)?;
        transcript.append(b"b", &proof.b)?;
        transcript.append(b"c", &proof.c)?;
        let beta = transcript.challenge(b"beta");
        let gamma = transcript.challenge(b"gamma");
        transcript.append(b"z", &proof.z)?;
        let alpha = transcript.challenge(b"alpha");
        transcript.append(b"t", &proof.t)?;
        let zeta = transcript.challenge(b"zeta");
        transcript.append(b"evals", &proof.evals)?;
        let v = transcript.challenge(b"v");
        transcript.append(b"w_zeta", &proof.w_zeta)?;
        transcript.append(b"w_zeta_omega", &proof.w_zeta_omega)?;
        let u = transcript.challenge(b"u");
        Ok(Self { beta, gamma, alpha, zeta, v, u })
    }
}

/// KZG PLONK verification over the pairing `E`.
pub struct PlonkKzgEngine<E: Pairing>(PhantomData<E>);

impl<E: Pairing> PlonkKzgEngine<E> {
    pub fn write_verifying_key(vk: &PlonkVerifyingKey<E>) -> Result<Vec<u8>, SerializationError> {
        framing::write_compressed(vk)
    }

    pub fn write_proof(proof: &PlonkProof<E>) -> Result<Vec<u8>, SerializationError> {
        framing::write_compressed(proof)
    }

    pub fn write_witness(inputs: &[E::ScalarField]) -> Result<Vec<u8>, SerializationError> {
        framing::write_scalars(inputs)
    }
}

/// `L_i(ζ) = ωⁱ·Z_H(ζ) / (n·(ζ − ωⁱ))` for the domain point `omega_i = ωⁱ`.
fn lagrange_at<F: Field>(omega_i: F, zeta: F, vanishing: F, n: F) -> Option<F> {
    let denominator = (n * (zeta - omega_i)).inverse()?;
    Some(omega_i * vanishing * denominator)
}

impl<E: Pairing> ProofSystemEngine for PlonkKzgEngine<E> {
    type VerifyingKey = PreparedPlonkKey<E>;
    type Proof = PlonkProof<E>;
    type Witness = Vec<E::ScalarField>;

    fn read_verifying_key(bytes: &[u8]) -> Result<Self::VerifyingKey, ParseError> {
        let vk: PlonkVerifyingKey<E> = framing::read_exact(bytes)?;
        let domain = usize::try_from(vk.domain_size)
            .ok()
            .filter(|n| *n >= 2 && n.is_power_of_two())
            .and_then(Radix2EvaluationDomain::<E::ScalarField>::new)
            .filter(|d| d.size() as u64 == vk.domain_size)
            .ok_or_else(|| ParseError::Invalid(format!("unusable domain size {}", vk.domain_size)))?;
        if vk.num_public > vk.domain_size {
            return Err(ParseError::Invalid(format!(
                "{} public inputs do not fit a domain of {}",
                vk.num_public, vk.domain_size
            )));
        }
        Ok(PreparedPlonkKey { vk, domain })
    }

    fn read_proof(bytes: &[u8]) -> Result<Self::Proof, ParseError> {
        framing::read_exact(bytes)
    }

    fn read_witness(bytes: &[u8]) -> Result<Self::Witness, ParseError> {
        framing::read_scalars(bytes)
    }

    fn verify(
        proof: &Self::Proof,
        key: &Self::VerifyingKey,
        witness: &Self::Witness,
    ) -> Result<(), VerifyFailure> {
        let vk = &key.vk;
        if witness.len() as u64 != vk.num_public {
            return Err(VerifyFailure::Rejected(format!(
                "verifying key expects {} public inputs, witness has {}",
                vk.num_public,
                witness.len()
            )));
        }

        let Challenges { beta, gamma, alpha, zeta, v, u } =
            Challenges::derive(vk, witness, proof).map_err(|e| VerifyFailure::Fault(e.to_string()))?;
        let e = &proof.evals;

        let omega = key.domain.group_gen();
        let n = key.domain.size_as_field_element();
        let vanishing = key.domain.evaluate_vanishing_polynomial(zeta);
        if vanishing.is_zero() {
            return Err(VerifyFailure::Rejected("challenge fell inside the domain".into()));
        }

        let mut pi = E::ScalarField::zero();
        let mut omega_i = E::ScalarField::one();
        for input in witness {
            let l_i = lagrange_at(omega_i, zeta, vanishing, n)
                .ok_or_else(|| VerifyFailure::Fault("lagrange denominator vanished".into()))?;
            pi -= *input * l_i;
            omega_i *= omega;
        }
        let l_0 = lagrange_at(E::ScalarField::one(), zeta, vanishing, n)
            .ok_or_else(|| VerifyFailure::Fault("lagrange denominator vanished".into()))?;

        // gate, permutation and boundary terms must equal t(ζ)·Z_H(ζ)
        let [_, k1, k2] = coset_shifts::<E::ScalarField>();
        let gate = e.q_l * e.a + e.q_r * e.b + e.q_o * e.c + e.q_m * e.a * e.b + e.q_c + pi;
        let permutation = (e.a + beta * zeta + gamma)
            * (e.b + beta * k1 * zeta + gamma)
            * (e.c + beta * k2 * zeta + gamma)
            * e.z
            - (e.a + beta * e.sigma_a + gamma)
                * (e.b + beta * e.sigma_b + gamma)
                * (e.c + beta * e.sigma_c + gamma)
                * e.z_omega;
        let boundary = (e.z - E::ScalarField::one()) * l_0;
        if gate + alpha * permutation + alpha.square() * boundary != e.t * vanishing {
            return Err(VerifyFailure::Rejected("quotient identity does not hold".into()));
        }

        let commitments = [
            proof.a, proof.b, proof.c, proof.z, proof.t, vk.q_l, vk.q_r, vk.q_o, vk.q_m, vk.q_c,
            vk.sigma_a, vk.sigma_b, vk.sigma_c,
        ];
        let mut folded = E::G1::zero();
        let mut folded_eval = E::ScalarField::zero();
        let mut power = E::ScalarField::one();
        for (commitment, eval) in commitments.iter().zip(e.at_zeta()) {
            folded += *commitment * power;
            folded_eval += eval * power;
            power *= v;
        }
        folded += proof.z * u;
        folded_eval += e.z_omega * u;

        // e(W_ζ + u·W_ζω, τ) = e(ζ·W_ζ + uζω·W_ζω + F − E·G, 1)
        let lhs = proof.w_zeta.into_group() + proof.w_zeta_omega * u;
        let rhs = proof.w_zeta * zeta + proof.w_zeta_omega * (u * zeta * omega) + folded
            - E::G1Affine::generator() * folded_eval;
        if E::pairing(lhs.into_affine(), vk.tau_g2)
            != E::pairing(rhs.into_affine(), E::G2Affine::generator())
        {
            return Err(VerifyFailure::Rejected("opening pairing check failed".into()));
        }
        Ok(())
    }
}
