// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Base64 wire codec for artifacts.
//!
//! Standard alphabet with mandatory padding. Non-canonical trailing bits are
//! rejected, so every accepted string maps to exactly one byte sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{ArtifactKind, VerifyError};

pub fn decode(field: ArtifactKind, text: &str) -> Result<Vec<u8>, VerifyError> {
    STANDARD.decode(text).map_err(|e| VerifyError::Decoding {
        field,
        cause: e.to_string(),
    })
}

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
