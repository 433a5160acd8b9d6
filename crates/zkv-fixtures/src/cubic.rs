// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! R1CS circuit: `y = x³ + x + 5`
//!
//! Public input: y
//! Private witness: x

use ark_ff::PrimeField;
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};

/// `x³ + x + 5` evaluated in the field.
pub fn cubic_output<F: PrimeField>(x: F) -> F {
    x * x * x + x + F::from(5u64)
}

#[derive(Clone, Copy)]
pub struct CubicCircuit<F: PrimeField> {
    pub x: Option<F>,
    pub y: F,
}

impl<F: PrimeField> CubicCircuit<F> {
    /// Shape-only instance for setup.
    pub fn empty(y: F) -> Self {
        Self { x: None, y }
    }

    pub fn assigned(x: F) -> Self {
        Self { x: Some(x), y: cubic_output(x) }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for CubicCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let y_var = cs.new_input_variable(|| Ok(self.y))?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let x_squared_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;
        let x_cubed_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x * x)
        })?;

        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + x_squared_var)?;
        cs.enforce_constraint(lc!() + x_squared_var, lc!() + x_var, lc!() + x_cubed_var)?;

        let five = F::from(5u64);
        cs.enforce_constraint(
            lc!() + x_cubed_var + x_var + (five, Variable::One),
            lc!() + Variable::One,
            lc!() + y_var,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_relations::r1cs::ConstraintSystem;

    #[test]
    fn cubic_output_for_three() {
        assert_eq!(cubic_output(Fr::from(3u64)), Fr::from(35u64));
    }

    #[test]
    fn assigned_circuit_is_satisfied() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        CubicCircuit::assigned(Fr::from(3u64))
            .generate_constraints(cs.clone())
            .unwrap();
        assert!(cs.is_satisfied().unwrap());
        assert_eq!(cs.num_constraints(), 3);
    }

    #[test]
    fn wrong_output_is_unsatisfied() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let circuit = CubicCircuit { x: Some(Fr::from(3u64)), y: Fr::from(36u64) };
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap(), "should fail: y != x^3 + x + 5");
    }
}
