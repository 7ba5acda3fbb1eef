//! # Group Subcommand
//!
//! Group root computation from member list files. A member list is one
//! commitment hex per line; blank lines and `#` comments are skipped.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Subcommand};
use sigil_core::FieldElement;
use sigil_crypto::Group;

/// Arguments for the group subcommand.
#[derive(Args, Debug)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    /// Compute the Merkle root of a member list.
    Root {
        /// Path to the member list file.
        #[arg(long)]
        members: PathBuf,
        /// Tree depth.
        #[arg(long, default_value_t = 20)]
        depth: u8,
    },
}

pub fn run(args: GroupArgs) -> anyhow::Result<()> {
    match args.command {
        GroupCommand::Root { members, depth } => {
            let group = load_group(&members, depth)?;
            println!(
                "{}",
                serde_json::json!({
                    "root": group.root().to_hex(),
                    "depth": group.depth(),
                    "members": group.len(),
                })
            );
            Ok(())
        }
    }
}

/// Read a member list file and build the group.
pub fn load_group(path: &Path, depth: u8) -> anyhow::Result<Group> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading member list from {}", path.display()))?;
    let mut members = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let commitment = FieldElement::from_hex(line)
            .with_context(|| format!("{}:{}: invalid commitment", path.display(), lineno + 1))?;
        members.push(commitment);
    }
    Group::build(members, depth).context("building group")
}
