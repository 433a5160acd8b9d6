// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{anyhow, Result};
use zkv_core::ContractConfig;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub listen_addr: String,
    pub contract: ContractConfig,
}

impl GatewayConfig {
    /// Read `ZKV_LISTEN_ADDR`, `ZKV_SINGLE_CURVE` and `ZKV_SINGLE_SYSTEM`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("ZKV_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());

        let default = ContractConfig::default();
        let curve = lookup("ZKV_SINGLE_CURVE").unwrap_or_else(|| default.single.curve.name().into());
        let system = lookup("ZKV_SINGLE_SYSTEM").unwrap_or_else(|| default.single.system.tag().into());
        let contract = ContractConfig::from_tokens(&curve, &system)
            .map_err(|e| anyhow!("invalid single-curve binding: {e}"))?;

        Ok(Self { listen_addr, contract })
    }
}
