// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkv-gateway: HTTP stand-in for a ledger peer hosting the verifier contract.

pub mod api;
pub mod config;
