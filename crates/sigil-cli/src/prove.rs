//! # Prove Subcommand
//!
//! Runs the full submission flow with the transparent backend and emits
//! the packed transport payload.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use sigil_crypto::{ContextId, Signal};
use sigil_proof::{ProofRequestMachine, TransparentProver};

use crate::{group, identity};

/// Arguments for the prove subcommand.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Path to the identity secret file.
    #[arg(long)]
    pub secret: PathBuf,
    /// Path to the member list file.
    #[arg(long)]
    pub members: PathBuf,
    /// Tree depth.
    #[arg(long, default_value_t = 20)]
    pub depth: u8,
    /// Signal content (at most 31 bytes of UTF-8).
    #[arg(long)]
    pub signal: String,
    /// Context label (external nullifier).
    #[arg(long)]
    pub context: String,
    /// Write the payload to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ProveArgs) -> anyhow::Result<()> {
    let identity = identity::load_identity(&args.secret)?;
    let group = group::load_group(&args.members, args.depth)?;
    let signal = Signal::encode(args.signal).context("encoding signal")?;
    let context = ContextId::new(args.context);

    let backend = TransparentProver::new();
    let mut machine = ProofRequestMachine::with_identity(identity);
    let bundle = machine
        .submit(&backend, &group, &signal, &context)
        .context("generating proof")?
        .clone();
    let payload = sigil_pack::pack(&bundle).context("packing payload")?;
    tracing::info!(
        bytes = payload.len(),
        nullifier_hash = %bundle.nullifier_hash,
        "payload packed"
    );

    match args.out {
        Some(path) => std::fs::write(&path, &payload)
            .with_context(|| format!("writing payload to {}", path.display()))?,
        None => {
            // The payload is canonical JSON, safe to print as a line.
            println!(
                "{}",
                String::from_utf8(payload).context("payload is not UTF-8")?
            );
        }
    }
    Ok(())
}
