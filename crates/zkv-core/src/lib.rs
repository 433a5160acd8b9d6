// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkv-core: the verification contract.
//!
//! Turns caller-supplied base64 strings into typed artifacts, dispatches to
//! the engine binding for the requested (curve, proof system) pair and
//! reports the outcome in the shape each entry point promises.

pub mod artifact;
pub mod bundle;
pub mod codec;
pub mod contract;
pub mod dispatch;
pub mod error;
pub mod invoke;
pub mod registry;
pub mod response;

pub use bundle::{ArtifactBundle, BundleEntry, BundleError};
pub use contract::{describe, ContractConfig, ContractInfo, SupportedPair, VerifierContract};
pub use dispatch::VerificationRequest;
pub use error::{ArtifactKind, VerifyError};
pub use invoke::{InvokeError, InvokeResponse, TransactionFunction};
pub use registry::{Binding, CurveId, ProofSystem};
pub use response::{ContractError, Outcome, OutcomeKind, VerificationResult, VerifyProofResponse};
