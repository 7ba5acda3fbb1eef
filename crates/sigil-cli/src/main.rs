//! # sigil CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Sigil Stack CLI — anonymous signal submission toolchain.
///
/// Generates identities, computes group roots, runs the proof submission
/// flow, and verifies transport payloads.
#[derive(Parser, Debug)]
#[command(name = "sigil", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate or inspect identity secrets.
    Identity(sigil_cli::identity::IdentityArgs),
    /// Group root computation.
    Group(sigil_cli::group::GroupArgs),
    /// Run the submission flow and emit a transport payload.
    Prove(sigil_cli::prove::ProveArgs),
    /// Unpack and verify a transport payload.
    Verify(sigil_cli::verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Identity(args) => sigil_cli::identity::run(args),
        Commands::Group(args) => sigil_cli::group::run(args),
        Commands::Prove(args) => sigil_cli::prove::run(args),
        Commands::Verify(args) => sigil_cli::verify::run(args),
    }
}
