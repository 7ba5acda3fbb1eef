//! # Verify Subcommand
//!
//! Unpacks a transport payload and verifies the proof. The root check
//! against the consumer's own member list is optional but recommended; a
//! proof that verifies against a root the consumer does not recognize
//! proves membership in some group, not this one.

use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::Args;
use sigil_crypto::ContextId;
use sigil_proof::TransparentProver;

use crate::group;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the payload file.
    #[arg(long)]
    pub payload: PathBuf,
    /// Member list file to check the root against.
    #[arg(long)]
    pub members: Option<PathBuf>,
    /// Tree depth for the member list.
    #[arg(long, default_value_t = 20)]
    pub depth: u8,
    /// Expected context label.
    #[arg(long)]
    pub context: Option<String>,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let payload = std::fs::read(&args.payload)
        .with_context(|| format!("reading payload from {}", args.payload.display()))?;
    let bundle = sigil_pack::unpack(&payload).context("unpacking payload")?;

    let backend = TransparentProver::new();
    if !bundle.verify_with(&backend).context("verifying proof")? {
        bail!("proof does not verify against its public inputs");
    }

    if let Some(members) = &args.members {
        let group = group::load_group(members, args.depth)?;
        if bundle.root != *group.root() {
            bail!(
                "root mismatch: payload has {}, member list yields {}",
                bundle.root.to_hex(),
                group.root().to_hex()
            );
        }
    }

    if let Some(label) = &args.context {
        let expected = ContextId::new(label.clone());
        if bundle.context != expected {
            bail!("context mismatch: payload was not produced for {expected}");
        }
    }

    println!(
        "{}",
        serde_json::json!({
            "valid": true,
            "root": bundle.root.to_hex(),
            "nullifier_hash": bundle.nullifier_hash.to_hex(),
            "signal": bundle.signal.text(),
        })
    );
    Ok(())
}
