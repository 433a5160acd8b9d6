// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use zkv_core::{codec, ContractConfig, VerifierContract};
use zkv_gateway::api::{self, AppState};
use zkv_fixtures::SCENARIO_X;

fn app(config: ContractConfig) -> axum::Router {
    api::router(Arc::new(AppState {
        contract: VerifierContract::new(config),
    }))
}

fn encoded(system: &str, curve: &str) -> (String, String, String) {
    let raw = zkv_fixtures::generate(system, curve, SCENARIO_X, &mut zkv_fixtures::test_rng()).unwrap();
    (
        codec::encode(&raw.proof),
        codec::encode(&raw.vk),
        codec::encode(&raw.witness),
    )
}

async fn get(app: &axum::Router, uri: &str) -> (u16, Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: &axum::Router, uri: &str, body: Value) -> (u16, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_and_info() {
    let app = app(ContractConfig::default());

    let (status, json) = get(&app, "/v1/health").await;
    assert_eq!(status, 200);
    assert_eq!(json["status"], "ok");

    let (status, json) = get(&app, "/v1/info").await;
    assert_eq!(status, 200);
    assert_eq!(json["name"], "zkv-verifier");
    assert_eq!(json["supported"].as_array().unwrap().len(), 7);
    assert_eq!(json["single"], json!({ "system": "groth16", "curve": "BN254" }));
}

#[tokio::test]
async fn invoke_scenario_through_http() {
    let app = app(ContractConfig::default());
    let (proof, vk, witness) = encoded("groth16", "BN254");

    let (status, json) = post(
        &app,
        "/v1/invoke/VerifyGroth16Proof",
        json!({ "args": ["BN254", &proof, &vk, &witness] }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json["payload"], "verify groth16 proof success");
    assert_eq!(json["kind"], "verified");
    assert!(json.get("error").is_none());

    let (status, json) = post(
        &app,
        "/v1/invoke/VerifyProof",
        json!({ "args": [&proof, &vk, &witness] }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json["payload"]["success"], true);

    let (status, json) = post(&app, "/v1/invoke/GetContractInfo", json!({})).await;
    assert_eq!(status, 200);
    assert!(json["payload"].as_str().unwrap().contains("Groth16"));
}

#[tokio::test]
async fn invoke_failures_are_payloads_not_http_errors() {
    let app = app(ContractConfig::default());

    let (status, json) = post(
        &app,
        "/v1/invoke/VerifyGroth16Proof",
        json!({ "args": ["NOT_A_CURVE", "not-base64-@@@", "", ""] }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json["payload"], "unknown curve");
    assert_eq!(json["kind"], "unknown_curve");
    assert!(json["error"].as_str().unwrap().contains("NOT_A_CURVE"));
}

#[tokio::test]
async fn invoke_errors_map_to_http_status() {
    let app = app(ContractConfig::default());

    let (status, json) = post(&app, "/v1/invoke/NoSuchFunction", json!({ "args": [] })).await;
    assert_eq!(status, 404);
    assert!(json["error"].as_str().unwrap().contains("NoSuchFunction"));

    let (status, _) = post(&app, "/v1/invoke/VerifyProof", json!({ "args": ["only-one"] })).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn verify_route_returns_record() {
    let app = app(ContractConfig::default());
    let (proof, vk, witness) = encoded("plonk", "BLS12-381");

    let (status, json) = post(
        &app,
        "/v1/verify",
        json!({ "system": "plonk", "curve": "BLS12-381", "vk": &vk, "proof": &proof, "witnessPublic": &witness }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({ "success": true, "message": "verify plonk proof success", "kind": "verified" })
    );

    let (status, json) = post(
        &app,
        "/v1/verify",
        json!({ "system": "groth16", "curve": "BLS12-381", "vk": &vk, "proof": &proof, "witnessPublic": &witness }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json["success"], false);
    assert_eq!(json["kind"], "malformed_artifact");
}

#[tokio::test]
async fn plonk_on_bn254_through_invoke() {
    let app = app(ContractConfig::default());
    let (proof, vk, witness) = encoded("plonk", "BN254");

    let (status, json) = post(
        &app,
        "/v1/invoke/VerifyPlonkProof",
        json!({ "args": ["BN254", &proof, &vk, &witness] }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json["payload"], "verify plonk proof success");
    assert_eq!(json["kind"], "verified");
}
