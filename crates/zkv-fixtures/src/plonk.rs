// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PLONK gate circuit for `y = x³ + x + 5` over BLS12-381.

use dusk_plonk::prelude::{BlsScalar, Circuit, Composer, Constraint, Error};

#[derive(Debug, Default)]
pub struct CubicPlonkCircuit {
    x: BlsScalar,
    y: BlsScalar,
}

impl CubicPlonkCircuit {
    pub fn new(x: u64) -> Self {
        let x = BlsScalar::from(x);
        Self { x, y: x * x * x + x + BlsScalar::from(5u64) }
    }

    /// Public output claimed by the circuit.
    pub fn output(&self) -> BlsScalar {
        self.y
    }
}

impl Circuit for CubicPlonkCircuit {
    fn circuit(&self, composer: &mut Composer) -> Result<(), Error> {
        let one = BlsScalar::one();
        let x = composer.append_witness(self.x);
        let x_squared = composer.gate_mul(Constraint::new().mult(one).a(x).b(x));
        let x_cubed = composer.gate_mul(Constraint::new().mult(one).a(x_squared).b(x));
        let y = composer.gate_add(
            Constraint::new()
                .left(one)
                .right(one)
                .constant(BlsScalar::from(5u64))
                .a(x_cubed)
                .b(x),
        );
        composer.assert_equal_constant(y, BlsScalar::zero(), Some(self.y));
        Ok(())
    }
}
