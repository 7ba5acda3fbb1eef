//! # Identity Subcommand
//!
//! Identity secret generation and inspection. Secret files are written
//! with no trailing newline so they can be read back verbatim.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Subcommand};
use sigil_crypto::IdentitySecret;

/// Arguments for the identity subcommand.
#[derive(Args, Debug)]
pub struct IdentityArgs {
    #[command(subcommand)]
    pub command: IdentityCommand,
}

#[derive(Subcommand, Debug)]
pub enum IdentityCommand {
    /// Generate a new identity secret.
    New {
        /// Write the secret to this file; only the commitment goes to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the public commitment of a stored identity.
    Show {
        /// Path to the identity secret file.
        #[arg(long)]
        secret: PathBuf,
    },
}

pub fn run(args: IdentityArgs) -> anyhow::Result<()> {
    match args.command {
        IdentityCommand::New { out } => {
            let identity = IdentitySecret::generate();
            let commitment = identity.commitment().to_hex();
            match out {
                Some(path) => {
                    std::fs::write(&path, identity.to_secret_string())
                        .with_context(|| format!("writing secret to {}", path.display()))?;
                    tracing::info!(path = %path.display(), "identity secret written");
                    println!("{}", serde_json::json!({ "commitment": commitment }));
                }
                None => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "secret": identity.to_secret_string(),
                            "commitment": commitment,
                        })
                    );
                }
            }
            Ok(())
        }
        IdentityCommand::Show { secret } => {
            let identity = load_identity(&secret)?;
            println!(
                "{}",
                serde_json::json!({ "commitment": identity.commitment().to_hex() })
            );
            Ok(())
        }
    }
}

/// Read and parse an identity secret file.
pub fn load_identity(path: &Path) -> anyhow::Result<IdentitySecret> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading secret from {}", path.display()))?;
    IdentitySecret::from_secret_string(raw.trim())
        .with_context(|| format!("parsing secret from {}", path.display()))
}
