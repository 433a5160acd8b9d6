// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Gate circuit and KZG PLONK prover for `y = x³ + x + 5` over any
//! arkworks pairing.
//!
//! | Row | a | b | c | Gate |
//! |---|---|---|---|---|
//! | 0 | y | 0 | 0 | `a = PI` |
//! | 1 | x | x | x² | `a·b = c` |
//! | 2 | x² | x | x³ | `a·b = c` |
//! | 3 | x³ | x | y | `a + b + 5 = c` |
//!
//! No blinding: these proofs exist to exercise the verifier.

use anyhow::{anyhow, bail, ensure, Result};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, One, PrimeField, Zero};
use ark_poly::univariate::{DenseOrSparsePolynomial, DensePolynomial};
use ark_poly::{
    DenseUVPolynomial, EvaluationDomain, Evaluations, Polynomial, Radix2EvaluationDomain,
};
use ark_std::rand::{CryptoRng, RngCore};
use ark_std::UniformRand;
use zkv_engine::plonk_kzg::{
    coset_shifts, Challenges, PlonkEvaluations, PlonkProof, PlonkVerifyingKey,
};

use crate::cubic::cubic_output;

/// Variable index always holding zero; fills unused wire slots.
const ZERO: usize = 0;

#[derive(Clone, Copy, Debug)]
pub struct Gate<F> {
    pub q_l: F,
    pub q_r: F,
    pub q_o: F,
    pub q_m: F,
    pub q_c: F,
    /// Variable indices on the a, b and c wires.
    pub wires: [usize; 3],
}

impl<F: Field> Gate<F> {
    fn public(var: usize) -> Self {
        Self {
            q_l: F::one(),
            q_r: F::zero(),
            q_o: F::zero(),
            q_m: F::zero(),
            q_c: F::zero(),
            wires: [var, ZERO, ZERO],
        }
    }

    fn mul(a: usize, b: usize, c: usize) -> Self {
        Self {
            q_l: F::zero(),
            q_r: F::zero(),
            q_o: -F::one(),
            q_m: F::one(),
            q_c: F::zero(),
            wires: [a, b, c],
        }
    }

    fn add_constant(a: usize, b: usize, c: usize, constant: F) -> Self {
        Self {
            q_l: F::one(),
            q_r: F::one(),
            q_o: -F::one(),
            q_m: F::zero(),
            q_c: constant,
            wires: [a, b, c],
        }
    }

    fn padding() -> Self {
        Self {
            q_l: F::zero(),
            q_r: F::zero(),
            q_o: F::zero(),
            q_m: F::zero(),
            q_c: F::zero(),
            wires: [ZERO; 3],
        }
    }
}

/// Gates with their variable assignment. The first `num_public` rows bind
/// the public inputs.
#[derive(Clone, Debug)]
pub struct GateCircuit<F> {
    pub values: Vec<F>,
    pub gates: Vec<Gate<F>>,
    pub num_public: usize,
}

impl<F: PrimeField> GateCircuit<F> {
    pub fn cubic(x: F) -> Self {
        let y = cubic_output(x);
        // 0 = zero, 1 = y, 2 = x, 3 = x², 4 = x³
        let values = vec![F::zero(), y, x, x * x, x * x * x];
        let gates = vec![
            Gate::public(1),
            Gate::mul(2, 2, 3),
            Gate::mul(3, 2, 4),
            Gate::add_constant(4, 2, 1, F::from(5u64)),
        ];
        Self { values, gates, num_public: 1 }
    }

    pub fn public_inputs(&self) -> Vec<F> {
        self.gates[..self.num_public]
            .iter()
            .map(|gate| self.values[gate.wires[0]])
            .collect()
    }

    /// Row-by-row check of every gate, public rows included.
    pub fn is_satisfied(&self) -> bool {
        let public = self.public_inputs();
        self.gates.iter().enumerate().all(|(row, gate)| {
            let [a, b, c] = gate.wires.map(|w| self.values[w]);
            let pi = public.get(row).map_or(F::zero(), |p| -*p);
            gate.q_l * a + gate.q_r * b + gate.q_o * c + gate.q_m * a * b + gate.q_c + pi
                == F::zero()
        })
    }
}

/// Universal KZG setup: `[τⁱ]₁` for `i < len` and `τ·G2`.
pub struct Srs<E: Pairing> {
    pub powers: Vec<E::G1Affine>,
    pub tau_g2: E::G2Affine,
}

impl<E: Pairing> Srs<E> {
    pub fn setup<R: RngCore + CryptoRng>(len: usize, rng: &mut R) -> Self {
        let tau = E::ScalarField::rand(rng);
        let g1 = E::G1Affine::generator();
        let mut power = E::ScalarField::one();
        let mut projective = Vec::with_capacity(len);
        for _ in 0..len {
            projective.push(g1 * power);
            power *= tau;
        }
        Self {
            powers: E::G1::normalize_batch(&projective),
            tau_g2: (E::G2Affine::generator() * tau).into_affine(),
        }
    }

    fn commit(&self, poly: &DensePolynomial<E::ScalarField>) -> Result<E::G1Affine> {
        ensure!(
            poly.coeffs.len() <= self.powers.len(),
            "degree {} exceeds the setup",
            poly.coeffs.len()
        );
        let sum: E::G1 = poly
            .coeffs
            .iter()
            .zip(&self.powers)
            .map(|(coeff, base)| *base * *coeff)
            .sum();
        Ok(sum.into_affine())
    }
}

/// Everything the prover keeps after preprocessing.
pub struct ProvingKey<E: Pairing> {
    pub vk: PlonkVerifyingKey<E>,
    domain: Radix2EvaluationDomain<E::ScalarField>,
    selectors: [DensePolynomial<E::ScalarField>; 5],
    sigmas: [DensePolynomial<E::ScalarField>; 3],
}

fn interpolate<F: PrimeField>(
    domain: Radix2EvaluationDomain<F>,
    values: Vec<F>,
) -> DensePolynomial<F> {
    Evaluations::from_vec_and_domain(values, domain).interpolate()
}

fn constant<F: PrimeField>(c: F) -> DensePolynomial<F> {
    DensePolynomial::from_coefficients_vec(vec![c])
}

fn scaled<F: PrimeField>(poly: &DensePolynomial<F>, by: F) -> DensePolynomial<F> {
    DensePolynomial::from_coefficients_vec(poly.coeffs.iter().map(|c| *c * by).collect())
}

fn divide<F: PrimeField>(
    numerator: &DensePolynomial<F>,
    divisor: DenseOrSparsePolynomial<'_, F>,
) -> Result<DensePolynomial<F>> {
    let (quotient, remainder) = DenseOrSparsePolynomial::from(numerator)
        .divide_with_q_and_r(&divisor)
        .ok_or_else(|| anyhow!("division by the zero polynomial"))?;
    ensure!(
        remainder.coeffs.iter().all(Zero::is_zero),
        "polynomial does not divide evenly"
    );
    Ok(quotient)
}

/// Divide out `X − point` after subtracting the evaluation there.
fn open_at<F: PrimeField>(poly: &DensePolynomial<F>, point: F) -> Result<DensePolynomial<F>> {
    let shifted = poly - &constant(poly.evaluate(&point));
    let divisor = DensePolynomial::from_coefficients_vec(vec![-point, F::one()]);
    divide(&shifted, DenseOrSparsePolynomial::from(divisor))
}

/// Fix the circuit shape: selector and permutation commitments.
pub fn preprocess<E: Pairing>(
    srs: &Srs<E>,
    circuit: &GateCircuit<E::ScalarField>,
) -> Result<ProvingKey<E>> {
    let domain = Radix2EvaluationDomain::<E::ScalarField>::new(circuit.gates.len().max(2))
        .ok_or_else(|| anyhow!("no evaluation domain for {} gates", circuit.gates.len()))?;
    let n = domain.size();
    let mut gates = circuit.gates.clone();
    gates.resize(n, Gate::padding());

    let column = |pick: fn(&Gate<E::ScalarField>) -> E::ScalarField| {
        interpolate(domain, gates.iter().map(pick).collect())
    };
    let selectors = [
        column(|g| g.q_l),
        column(|g| g.q_r),
        column(|g| g.q_o),
        column(|g| g.q_m),
        column(|g| g.q_c),
    ];

    // each wire slot points at the next slot holding the same variable
    let shifts = coset_shifts::<E::ScalarField>();
    let label = |col: usize, row: usize| shifts[col] * domain.element(row);
    let mut slots: Vec<Vec<(usize, usize)>> = vec![Vec::new(); circuit.values.len()];
    for (row, gate) in gates.iter().enumerate() {
        for (col, var) in gate.wires.iter().enumerate() {
            slots
                .get_mut(*var)
                .ok_or_else(|| anyhow!("gate {row} uses unknown variable {var}"))?
                .push((col, row));
        }
    }
    let mut sigma_values = vec![vec![E::ScalarField::zero(); n]; 3];
    for cycle in &slots {
        for (i, &(col, row)) in cycle.iter().enumerate() {
            let (next_col, next_row) = cycle[(i + 1) % cycle.len()];
            sigma_values[col][row] = label(next_col, next_row);
        }
    }
    let [sa, sb, sc]: [Vec<E::ScalarField>; 3] = sigma_values
        .try_into()
        .map_err(|_| anyhow!("expected three wire columns"))?;
    let sigmas = [interpolate(domain, sa), interpolate(domain, sb), interpolate(domain, sc)];

    let vk = PlonkVerifyingKey {
        domain_size: n as u64,
        num_public: circuit.num_public as u64,
        q_l: srs.commit(&selectors[0])?,
        q_r: srs.commit(&selectors[1])?,
        q_o: srs.commit(&selectors[2])?,
        q_m: srs.commit(&selectors[3])?,
        q_c: srs.commit(&selectors[4])?,
        sigma_a: srs.commit(&sigmas[0])?,
        sigma_b: srs.commit(&sigmas[1])?,
        sigma_c: srs.commit(&sigmas[2])?,
        tau_g2: srs.tau_g2,
    };
    Ok(ProvingKey { vk, domain, selectors, sigmas })
}

pub fn prove<E: Pairing>(
    srs: &Srs<E>,
    pk: &ProvingKey<E>,
    circuit: &GateCircuit<E::ScalarField>,
) -> Result<PlonkProof<E>> {
    if !circuit.is_satisfied() {
        bail!("circuit assignment does not satisfy its gates");
    }
    let domain = pk.domain;
    let n = domain.size();
    let one = E::ScalarField::one();
    let public_inputs = circuit.public_inputs();

    let mut gates = circuit.gates.clone();
    gates.resize(n, Gate::padding());
    let wire_values: Vec<Vec<E::ScalarField>> = (0..3)
        .map(|col| gates.iter().map(|g| circuit.values[g.wires[col]]).collect())
        .collect();
    let wires: Vec<DensePolynomial<E::ScalarField>> =
        wire_values.iter().map(|v| interpolate(domain, v.clone())).collect();

    // round 1: wires
    let [a_comm, b_comm, c_comm] = [
        srs.commit(&wires[0])?,
        srs.commit(&wires[1])?,
        srs.commit(&wires[2])?,
    ];

    // the transcript is replayed after every message; only the prefix
    // covering messages already fixed matters for each challenge
    let mut proof = PlonkProof::<E> {
        a: a_comm,
        b: b_comm,
        c: c_comm,
        z: E::G1Affine::zero(),
        t: E::G1Affine::zero(),
        w_zeta: E::G1Affine::zero(),
        w_zeta_omega: E::G1Affine::zero(),
        evals: PlonkEvaluations {
            a: E::ScalarField::zero(),
            b: E::ScalarField::zero(),
            c: E::ScalarField::zero(),
            z: E::ScalarField::zero(),
            t: E::ScalarField::zero(),
            q_l: E::ScalarField::zero(),
            q_r: E::ScalarField::zero(),
            q_o: E::ScalarField::zero(),
            q_m: E::ScalarField::zero(),
            q_c: E::ScalarField::zero(),
            sigma_a: E::ScalarField::zero(),
            sigma_b: E::ScalarField::zero(),
            sigma_c: E::ScalarField::zero(),
            z_omega: E::ScalarField::zero(),
        },
    };
    let challenges = |proof: &PlonkProof<E>| {
        Challenges::derive(&pk.vk, &public_inputs, proof)
            .map_err(|e| anyhow!("transcript encoding failed: {e}"))
    };
    let Challenges { beta, gamma, .. } = challenges(&proof)?;

    // round 2: permutation accumulator
    let shifts = coset_shifts::<E::ScalarField>();
    let sigma_values: Vec<Vec<E::ScalarField>> = pk
        .sigmas
        .iter()
        .map(|s| domain.elements().map(|x| s.evaluate(&x)).collect())
        .collect();
    let mut z_values = Vec::with_capacity(n);
    let mut acc = one;
    for row in 0..n {
        z_values.push(acc);
        let point = domain.element(row);
        let mut numerator = one;
        let mut denominator = one;
        for col in 0..3 {
            let w = wire_values[col][row];
            numerator *= w + beta * shifts[col] * point + gamma;
            denominator *= w + beta * sigma_values[col][row] + gamma;
        }
        acc *= numerator
            * denominator
                .inverse()
                .ok_or_else(|| anyhow!("permutation denominator vanished"))?;
    }
    ensure!(acc == one, "copy constraints do not hold");
    let z = interpolate(domain, z_values);
    proof.z = srs.commit(&z)?;
    let Challenges { alpha, .. } = challenges(&proof)?;

    // round 3: quotient
    let [q_l, q_r, q_o, q_m, q_c] = &pk.selectors;
    let [s_a, s_b, s_c] = &pk.sigmas;
    let (a, b, c) = (&wires[0], &wires[1], &wires[2]);

    let mut pi_values = vec![E::ScalarField::zero(); n];
    for (row, input) in public_inputs.iter().enumerate() {
        pi_values[row] = -*input;
    }
    let pi = interpolate(domain, pi_values);

    let gate = &(&(&(&(q_l * a) + &(q_r * b)) + &(q_o * c)) + &(&(q_m * a) * b)) + &(q_c + &pi);

    let x_term = |k: E::ScalarField| {
        DensePolynomial::from_coefficients_vec(vec![gamma, beta * k])
    };
    let identity = &(&(&(a + &x_term(shifts[0])) * &(b + &x_term(shifts[1])))
        * &(c + &x_term(shifts[2])))
        * &z;
    let omega = domain.group_gen();
    let mut power = one;
    let z_shifted = DensePolynomial::from_coefficients_vec(
        z.coeffs
            .iter()
            .map(|coeff| {
                let shifted = *coeff * power;
                power *= omega;
                shifted
            })
            .collect(),
    );
    let gamma_poly = constant(gamma);
    let permuted = &(&(&(a + &(&scaled(s_a, beta) + &gamma_poly))
        * &(b + &(&scaled(s_b, beta) + &gamma_poly)))
        * &(c + &(&scaled(s_c, beta) + &gamma_poly)))
        * &z_shifted;
    let permutation = &identity - &permuted;

    let mut l0_values = vec![E::ScalarField::zero(); n];
    l0_values[0] = one;
    let l0 = interpolate(domain, l0_values);
    let boundary = &(&z - &constant(one)) * &l0;

    let numerator =
        &(&gate + &scaled(&permutation, alpha)) + &scaled(&boundary, alpha.square());
    let t = divide(
        &numerator,
        DenseOrSparsePolynomial::from(domain.vanishing_polynomial()),
    )?;
    proof.t = srs.commit(&t)?;
    let Challenges { zeta, .. } = challenges(&proof)?;

    // round 4: evaluations
    let zeta_omega = zeta * omega;
    proof.evals = PlonkEvaluations {
        a: a.evaluate(&zeta),
        b: b.evaluate(&zeta),
        c: c.evaluate(&zeta),
        z: z.evaluate(&zeta),
        t: t.evaluate(&zeta),
        q_l: q_l.evaluate(&zeta),
        q_r: q_r.evaluate(&zeta),
        q_o: q_o.evaluate(&zeta),
        q_m: q_m.evaluate(&zeta),
        q_c: q_c.evaluate(&zeta),
        sigma_a: s_a.evaluate(&zeta),
        sigma_b: s_b.evaluate(&zeta),
        sigma_c: s_c.evaluate(&zeta),
        z_omega: z.evaluate(&zeta_omega),
    };
    let Challenges { v, .. } = challenges(&proof)?;

    // round 5: openings, batched in the verifier's order
    let opened = [a, b, c, &z, &t, q_l, q_r, q_o, q_m, q_c, s_a, s_b, s_c];
    let mut batched = DensePolynomial::from_coefficients_vec(Vec::new());
    let mut power = one;
    for poly in opened {
        batched = &batched + &scaled(poly, power);
        power *= v;
    }
    proof.w_zeta = srs.commit(&open_at(&batched, zeta)?)?;
    proof.w_zeta_omega = srs.commit(&open_at(&z, zeta_omega)?)?;
    Ok(proof)
}
