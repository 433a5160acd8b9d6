// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use zkv_core::{OutcomeKind, VerifyProofResponse};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Color of a human-readable status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Caution,
    Bad,
}

/// Status line on stderr; silent in JSON mode.
pub fn say(tone: Tone, msg: &str) {
    if is_json() {
        return;
    }
    match tone {
        Tone::Plain => eprintln!("{msg}"),
        Tone::Good => eprintln!("{}", msg.green()),
        Tone::Caution => eprintln!("{}", msg.yellow()),
        Tone::Bad => eprintln!("{}", msg.red()),
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

pub fn json_output(value: serde_json::Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}

/// One verification record, colored by outcome.
pub fn record(title: &str, record: &VerifyProofResponse) {
    let kind = match record.kind {
        OutcomeKind::Verified => record.kind.as_str().green(),
        OutcomeKind::Rejected => record.kind.as_str().yellow(),
        _ => record.kind.as_str().red(),
    };
    label(title, &format!("{} ({kind})", record.message));
}

pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}
