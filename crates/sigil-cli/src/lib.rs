//! # sigil-cli — Sigil Stack Command-Line Interface
//!
//! ## Subcommands
//!
//! - `identity` — Generate or inspect identity secrets
//! - `group` — Group root computation from member lists
//! - `prove` — Run the submission flow and emit a transport payload
//! - `verify` — Unpack and verify a transport payload
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no business logic here.
//! - Output is line-oriented JSON so scripts can consume it.

pub mod group;
pub mod identity;
pub mod prove;
pub mod verify;
