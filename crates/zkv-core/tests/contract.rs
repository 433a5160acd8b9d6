// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Contract entry points, transaction functions and bundles end to end.

use serde_json::Value;
use zkv_core::{
    bundle, codec, ArtifactBundle, ContractConfig, ContractError, CurveId, OutcomeKind,
    ProofSystem, VerifierContract, VerifyError,
};
use zkv_fixtures::SCENARIO_X;

fn bundle_for(system: &str, curve: &str, x: u64) -> ArtifactBundle {
    let raw = zkv_fixtures::generate(system, curve, x, &mut zkv_fixtures::test_rng()).unwrap();
    ArtifactBundle {
        vk: codec::encode(&raw.vk),
        proof: codec::encode(&raw.proof),
        witness_public: codec::encode(&raw.witness),
    }
}

/// Replace the last base64 character with a different one.
fn mutate_last_char(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if let Some(last) = chars.last_mut() {
        *last = if *last == 'A' { 'B' } else { 'A' };
    }
    chars.into_iter().collect()
}

// ── scenario: y = x³ + x + 5, x = 3 ──

#[test]
fn bn254_scenario_verifies_then_fails_after_witness_mutation() {
    let contract = VerifierContract::default();
    let b = bundle_for("groth16", "BN254", SCENARIO_X);

    let (message, result) = contract.verify_groth16_proof("BN254", &b.proof, &b.vk, &b.witness_public);
    assert_eq!(message, "verify groth16 proof success");
    assert!(result.is_ok());

    let record = contract.verify_proof(&b.proof, &b.vk, &b.witness_public).unwrap();
    assert!(record.success);
    assert_eq!(record.kind, OutcomeKind::Verified);

    let mutated = mutate_last_char(&b.witness_public);
    assert_ne!(mutated, b.witness_public);

    let (message, result) = contract.verify_groth16_proof("BN254", &b.proof, &b.vk, &mutated);
    assert!(result.is_err());
    assert_ne!(message, "verify groth16 proof success");

    let record = contract.verify_proof(&b.proof, &b.vk, &mutated).unwrap();
    assert!(!record.success);
    assert_ne!(record.kind, OutcomeKind::Verified);
}

// ── entry points ──

#[test]
fn plonk_entry_point_verifies_bls12_381() {
    let contract = VerifierContract::default();
    let b = bundle_for("plonk", "BLS12-381", SCENARIO_X);

    let (message, result) = contract.verify_plonk_proof("BLS12-381", &b.proof, &b.vk, &b.witness_public);
    assert_eq!(message, "verify plonk proof success");
    assert!(result.is_ok());
    assert!(contract.check_plonk_proof("BLS12-381", &b.proof, &b.vk, &b.witness_public).is_ok());
}

#[test]
fn plonk_entry_point_verifies_bn254_and_bls12_377() {
    let contract = VerifierContract::default();
    for curve in ["BN254", "BLS12-377"] {
        let b = bundle_for("plonk", curve, SCENARIO_X);
        let (message, result) = contract.verify_plonk_proof(curve, &b.proof, &b.vk, &b.witness_public);
        assert_eq!(message, "verify plonk proof success", "{curve}");
        assert!(result.is_ok());

        let mutated = mutate_last_char(&b.witness_public);
        let (_, result) = contract.verify_plonk_proof(curve, &b.proof, &b.vk, &mutated);
        assert!(result.is_err(), "{curve}");
    }
}

#[test]
fn plonk_entry_point_refuses_groth16_only_curve() {
    let contract = VerifierContract::default();
    let b = bundle_for("groth16", "BW6-761", SCENARIO_X);

    let (message, result) = contract.verify_plonk_proof("BW6-761", &b.proof, &b.vk, &b.witness_public);
    assert_eq!(message, "unsupported proof system");
    assert!(matches!(
        result,
        Err(ContractError::Failed(VerifyError::UnsupportedProofSystem { curve: CurveId::Bw6_761, .. }))
    ));
}

#[test]
fn rejected_proof_is_not_a_malformed_input() {
    let contract = VerifierContract::default();
    let good = bundle_for("groth16", "BN254", SCENARIO_X);
    let other = bundle_for("groth16", "BN254", 4);

    // x = 4 proves y = 73; its witness is well formed but wrong for this proof
    let err = contract
        .check_groth16_proof("BN254", &good.proof, &good.vk, &other.witness_public)
        .unwrap_err();
    assert!(matches!(err, ContractError::Rejected(_)));
    assert_eq!(err.kind(), OutcomeKind::Rejected);

    let err = contract
        .check_groth16_proof("BN254", &good.proof, &good.vk, "AAAA")
        .unwrap_err();
    assert_eq!(err.kind(), OutcomeKind::MalformedArtifact);
}

#[test]
fn verify_proof_uses_configured_binding() {
    let config = ContractConfig::from_tokens("BLS12-381", "plonk").unwrap();
    let contract = VerifierContract::new(config);
    let plonk = bundle_for("plonk", "BLS12-381", SCENARIO_X);
    let groth16 = bundle_for("groth16", "BN254", SCENARIO_X);

    let record = contract
        .verify_proof(&plonk.proof, &plonk.vk, &plonk.witness_public)
        .unwrap();
    assert!(record.success);
    assert_eq!(record.message, "verify plonk proof success");

    let record = contract
        .verify_proof(&groth16.proof, &groth16.vk, &groth16.witness_public)
        .unwrap();
    assert!(!record.success);
    assert_eq!(record.kind, OutcomeKind::MalformedArtifact);
    assert_eq!(record.message, "read plonk proof failed");
}

#[test]
fn verify_proof_folds_every_failure_into_the_record() {
    let contract = VerifierContract::default();
    let record = contract.verify_proof("not-base64-@@@", "", "").unwrap();
    assert!(!record.success);
    assert_eq!(record.kind, OutcomeKind::DecodingError);
    assert_eq!(record.message, "decode proof failed");
}

// ── transaction functions ──

#[test]
fn invoke_mirrors_direct_calls() {
    let contract = VerifierContract::default();
    let b = bundle_for("groth16", "BLS12-377", SCENARIO_X);
    let args = ["BLS12-377", b.proof.as_str(), b.vk.as_str(), b.witness_public.as_str()];

    let response = contract.invoke("VerifyGroth16Proof", &args).unwrap();
    assert_eq!(response.payload, Some(Value::String("verify groth16 proof success".into())));
    assert_eq!(response.error, None);
    assert_eq!(response.kind, Some(OutcomeKind::Verified));

    let response = contract.invoke("CheckGroth16Proof", &args).unwrap();
    assert_eq!(response.payload, None);
    assert_eq!(response.error, None);

    // groth16 artifacts do not parse as a PLONK proof on the same curve
    let response = contract.invoke("VerifyPlonkProof", &args).unwrap();
    assert_eq!(response.kind, Some(OutcomeKind::MalformedArtifact));
    assert_eq!(response.payload, Some(Value::String("read plonk proof failed".into())));
    assert!(response.error.is_some());
}

#[test]
fn invoke_verify_proof_returns_record_payload() {
    let contract = VerifierContract::default();
    let b = bundle_for("groth16", "BN254", SCENARIO_X);
    let args = vec![b.proof.clone(), b.vk.clone(), b.witness_public.clone()];

    let response = contract.invoke("VerifyProof", &args).unwrap();
    let payload = response.payload.unwrap();
    assert_eq!(payload["success"], true);
    assert_eq!(payload["message"], "verify groth16 proof success");
    assert_eq!(payload["kind"], "verified");
}

// ── bundles ──

#[test]
fn scanned_bundles_verify() {
    let dir = tempfile::tempdir().unwrap();
    for (system, curve) in [
        (ProofSystem::Groth16, CurveId::Bn254),
        (ProofSystem::Plonk, CurveId::Bn254),
        (ProofSystem::Plonk, CurveId::Bls12_381),
    ] {
        let name = bundle::file_name(system, curve, "2026-01-01_00-00-00");
        bundle::save(&dir.path().join(name), &bundle_for(system.tag(), curve.name(), SCENARIO_X))
            .unwrap();
    }

    let contract = VerifierContract::default();
    let entries = bundle::scan_dir(dir.path()).unwrap();
    let mut verified = 0;
    for entry in &entries {
        let Some(path) = &entry.path else { continue };
        let b = bundle::load(path).unwrap();
        let result = contract.evaluate(
            entry.system.tag(),
            entry.curve.name(),
            &b.proof,
            &b.vk,
            &b.witness_public,
        );
        assert!(result.is_verified(), "{} {}", entry.system, entry.curve);
        verified += 1;
    }
    assert_eq!(verified, 3);
    assert_eq!(entries.iter().filter(|e| e.path.is_none()).count(), 4);
}
