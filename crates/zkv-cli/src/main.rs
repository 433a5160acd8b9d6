// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::verify::ArtifactSource;

#[derive(Parser)]
#[command(name = "zkv", about = "Verify Groth16 and PLONK proofs against the zkv contract")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    /// Gateway URL, overrides the config file
    #[arg(long, global = true)]
    gateway: Option<String>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Show supported proof systems and curves
    Info,
    /// Verify one proof locally
    Verify {
        /// Proof system tag (groth16, plonk)
        #[arg(long)]
        system: String,
        /// Curve name (BN254, BLS12-381, BLS12-377, BW6-761)
        #[arg(long)]
        curve: String,
        /// JSON bundle with vk, proof and witnessPublic
        #[arg(long, conflicts_with_all = ["vk", "proof", "witness"])]
        bundle: Option<PathBuf>,
        /// Base64 verifying key, or @FILE
        #[arg(long)]
        vk: Option<String>,
        /// Base64 proof, or @FILE
        #[arg(long)]
        proof: Option<String>,
        /// Base64 public witness, or @FILE
        #[arg(long)]
        witness: Option<String>,
    },
    /// Verify every {system}_{curve}_*.json bundle in a directory
    VerifyDir {
        dir: PathBuf,
    },
    /// Invoke a contract function through the gateway
    Invoke {
        /// Function name, e.g. VerifyGroth16Proof
        function: String,
        /// Positional string arguments; @FILE reads a file
        args: Vec<String>,
    },
    /// Check the gateway is reachable
    Status,
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a config value
    Set { key: String, value: String },
    /// Show current config
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    output::set_json_mode(cli.json);

    match cli.command {
        Cmd::Info => commands::info::run()?,
        Cmd::Verify { system, curve, bundle, vk, proof, witness } => {
            let source = ArtifactSource { bundle, vk, proof, witness };
            commands::verify::run(&system, &curve, &source)?
        }
        Cmd::VerifyDir { dir } => commands::verify_dir::run(&dir)?,
        Cmd::Invoke { function, args } => {
            let gateway = config::gateway_url(cli.gateway.as_deref())?;
            commands::invoke::run(&gateway, &function, &args).await?
        }
        Cmd::Status => {
            let gateway = config::gateway_url(cli.gateway.as_deref())?;
            commands::status::run(&gateway).await?
        }
        Cmd::Config { action } => match action {
            ConfigAction::Set { key, value } => commands::config::set(&key, &value)?,
            ConfigAction::Show => commands::config::show()?,
        },
    }
    Ok(())
}
