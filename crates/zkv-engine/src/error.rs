// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors raised by engine bindings.

use ark_serialize::SerializationError;

/// An artifact could not be read into its typed form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("{0} trailing bytes after artifact")]
    TrailingBytes(usize),

    #[error("invalid encoding: {0}")]
    Invalid(String),

    #[error("public witness is encoded for a different scalar field")]
    ForeignField,
}

impl From<SerializationError> for ParseError {
    fn from(err: SerializationError) -> Self {
        match err {
            // slice readers only fail by running out of input
            SerializationError::IoError(_) => ParseError::UnexpectedEof,
            other => ParseError::Invalid(other.to_string()),
        }
    }
}

/// Verification did not accept the proof.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyFailure {
    /// Well-formed inputs that do not satisfy the verification equation.
    #[error("proof rejected: {0}")]
    Rejected(String),

    /// The engine could not reach a verdict.
    #[error("engine fault: {0}")]
    Fault(String),
}
