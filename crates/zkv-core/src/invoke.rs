// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Transaction-function surface: invoke an entry point by name with
//! positional string arguments, the way a ledger peer does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::contract::VerifierContract;
use crate::response::OutcomeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionFunction {
    VerifyGroth16Proof,
    VerifyPlonkProof,
    CheckGroth16Proof,
    CheckPlonkProof,
    VerifyProof,
    GetContractInfo,
}

impl TransactionFunction {
    pub const ALL: [TransactionFunction; 6] = [
        TransactionFunction::VerifyGroth16Proof,
        TransactionFunction::VerifyPlonkProof,
        TransactionFunction::CheckGroth16Proof,
        TransactionFunction::CheckPlonkProof,
        TransactionFunction::VerifyProof,
        TransactionFunction::GetContractInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransactionFunction::VerifyGroth16Proof => "VerifyGroth16Proof",
            TransactionFunction::VerifyPlonkProof => "VerifyPlonkProof",
            TransactionFunction::CheckGroth16Proof => "CheckGroth16Proof",
            TransactionFunction::CheckPlonkProof => "CheckPlonkProof",
            TransactionFunction::VerifyProof => "VerifyProof",
            TransactionFunction::GetContractInfo => "GetContractInfo",
        }
    }

    /// Number of positional arguments.
    pub fn arity(self) -> usize {
        match self {
            TransactionFunction::VerifyGroth16Proof
            | TransactionFunction::VerifyPlonkProof
            | TransactionFunction::CheckGroth16Proof
            | TransactionFunction::CheckPlonkProof => 4,
            TransactionFunction::VerifyProof => 3,
            TransactionFunction::GetContractInfo => 0,
        }
    }
}

impl fmt::Display for TransactionFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransactionFunction {
    type Err = InvokeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| InvokeError::UnknownFunction(crate::error::clip(name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    #[error("unknown transaction function {0:?}")]
    UnknownFunction(String),

    #[error("{function} takes {expected} arguments, got {actual}")]
    Arity {
        function: TransactionFunction,
        expected: usize,
        actual: usize,
    },
}

/// What a ledger peer hands back: a payload, an error string, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<OutcomeKind>,
}

impl VerifierContract {
    pub fn invoke<S: AsRef<str>>(
        &self,
        function: &str,
        args: &[S],
    ) -> Result<InvokeResponse, InvokeError> {
        let function: TransactionFunction = function.parse()?;
        if args.len() != function.arity() {
            return Err(InvokeError::Arity {
                function,
                expected: function.arity(),
                actual: args.len(),
            });
        }
        let arg = |i: usize| args[i].as_ref();

        let response = match function {
            TransactionFunction::VerifyGroth16Proof | TransactionFunction::VerifyPlonkProof => {
                let (message, result) = if function == TransactionFunction::VerifyGroth16Proof {
                    self.verify_groth16_proof(arg(0), arg(1), arg(2), arg(3))
                } else {
                    self.verify_plonk_proof(arg(0), arg(1), arg(2), arg(3))
                };
                InvokeResponse {
                    payload: Some(Value::String(message)),
                    kind: Some(result.as_ref().map_or_else(|e| e.kind(), |_| OutcomeKind::Verified)),
                    error: result.err().map(|e| e.to_string()),
                }
            }
            TransactionFunction::CheckGroth16Proof | TransactionFunction::CheckPlonkProof => {
                let result = if function == TransactionFunction::CheckGroth16Proof {
                    self.check_groth16_proof(arg(0), arg(1), arg(2), arg(3))
                } else {
                    self.check_plonk_proof(arg(0), arg(1), arg(2), arg(3))
                };
                InvokeResponse {
                    payload: None,
                    kind: Some(result.as_ref().map_or_else(|e| e.kind(), |_| OutcomeKind::Verified)),
                    error: result.err().map(|e| e.to_string()),
                }
            }
            TransactionFunction::VerifyProof => match self.verify_proof(arg(0), arg(1), arg(2)) {
                Ok(record) => InvokeResponse {
                    kind: Some(record.kind),
                    payload: Some(json!({
                        "success": record.success,
                        "message": record.message,
                        "kind": record.kind.as_str(),
                    })),
                    error: None,
                },
                Err(e) => InvokeResponse {
                    payload: None,
                    kind: Some(e.kind()),
                    error: Some(e.to_string()),
                },
            },
            TransactionFunction::GetContractInfo => match self.get_contract_info() {
                Ok(text) => InvokeResponse {
                    payload: Some(Value::String(text)),
                    error: None,
                    kind: None,
                },
                Err(e) => InvokeResponse {
                    payload: None,
                    kind: Some(e.kind()),
                    error: Some(e.to_string()),
                },
            },
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for f in TransactionFunction::ALL {
            assert_eq!(f.name().parse::<TransactionFunction>().unwrap(), f);
        }
        assert!(matches!(
            "verifyProof".parse::<TransactionFunction>(),
            Err(InvokeError::UnknownFunction(_))
        ));
    }

    #[test]
    fn wrong_arity_is_an_invoke_error() {
        let contract = VerifierContract::default();
        let err = contract.invoke("VerifyProof", &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            InvokeError::Arity {
                function: TransactionFunction::VerifyProof,
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(err.to_string(), "VerifyProof takes 3 arguments, got 2");
    }

    #[test]
    fn get_contract_info_payload() {
        let contract = VerifierContract::default();
        let response = contract.invoke::<&str>("GetContractInfo", &[]).unwrap();
        assert_eq!(response.payload, Some(Value::String(crate::describe())));
        assert!(response.error.is_none());
    }

    #[test]
    fn verify_groth16_with_unknown_curve_reports_error_and_message() {
        let contract = VerifierContract::default();
        let response = contract
            .invoke("VerifyGroth16Proof", &["NOT_A_CURVE", "", "", ""])
            .unwrap();
        assert_eq!(response.payload, Some(Value::String("unknown curve".into())));
        assert_eq!(response.kind, Some(OutcomeKind::UnknownCurve));
        assert!(response.error.unwrap().contains("NOT_A_CURVE"));
    }

    #[test]
    fn verify_proof_never_sets_error() {
        let contract = VerifierContract::default();
        let response = contract
            .invoke("VerifyProof", &["not-base64-@@@", "", ""])
            .unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.kind, Some(OutcomeKind::DecodingError));
        let payload = response.payload.unwrap();
        assert_eq!(payload["success"], false);
        assert_eq!(payload["message"], "decode proof failed");
    }

    #[test]
    fn verify_proof_payload_carries_the_full_record() {
        let contract = VerifierContract::default();
        let response = contract
            .invoke("VerifyProof", &["@@@", "", ""])
            .unwrap();
        let payload = response.payload.unwrap();
        assert_eq!(payload["kind"], "decoding_error");
        assert_eq!(payload.as_object().unwrap().len(), 3);
        assert_eq!(response.kind, Some(OutcomeKind::DecodingError));
    }
}
