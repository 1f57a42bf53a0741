// Copyright (c) Velocity BPA, LLC. Licensed under the Business Source License 1.1.
// Commercial use requires a separate commercial license.

//! # Aztec Privacy Shell
//!
//! Entry point for the `aztec-privacy` binary. Parses CLI arguments,
//! initializes logging, prints the licensing notice once, runs the requested
//! utility operation and writes its JSON result to stdout.
//!
//! - `derive-keys`, `generate-master-secret` — key material
//! - `derive-address` — account addresses
//! - `compute-commitment`, `compute-nullifier`, `secret-hash` — notes
//! - `encrypt-note`, `decrypt-note` — the note cipher
//! - `health` — remote API health check

mod cli;
mod transport;
mod logging;
mod ops;

use std::sync::Once;

use anyhow::{Context, Result};
use clap::Parser;

use aztec_privacy_core::config::LICENSING_NOTICE;

use cli::AztecPrivacyCli;

static LICENSING_NOTICE_SHOWN: Once = Once::new();

/// Emit the licensing notice on stderr, at most once per process.
fn show_licensing_notice() {
    LICENSING_NOTICE_SHOWN.call_once(|| {
        eprintln!("{LICENSING_NOTICE}\n");
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = AztecPrivacyCli::parse();

    logging::init_logging(&cli.log_level, cli.log_format);
    if !cli.quiet {
        show_licensing_notice();
    }

    let operation = cli.command.into_operation();
    let name = operation.name();
    tracing::info!(operation = name, "starting");

    let output = operation
        .execute()
        .await
        .with_context(|| format!("{name} failed"))?;

    let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{rendered}");

    tracing::info!(operation = name, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn licensing_notice_is_shown_once() {
        show_licensing_notice();
        show_licensing_notice();
        assert!(LICENSING_NOTICE_SHOWN.is_completed());
    }
}
