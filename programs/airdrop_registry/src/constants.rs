use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seed prefixes and size limits used throughout the airdrop registry.
 */

/// Seed for the singleton config PDA
/// - Used in: ["config"]
#[constant]
pub const CONFIG_SEED: &str = "config";

/// Seed for supported-token allow-list PDAs
/// - Used in: ["supported_token", token_mint]
/// - One entry per distributable mint
#[constant]
pub const SUPPORTED_TOKEN_SEED: &str = "supported_token";

/// Seed for project PDA derivation
/// - Used in: ["project", project_id]
/// - The caller-chosen string identifier makes project addresses
///   deterministic and registry-unique
#[constant]
pub const PROJECT_SEED: &str = "project";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", project_key, token_mint]
/// - Keyed by mint as well so replacing a project's token gets a fresh
///   vault while the drained one stays addressable
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", project_key, receiver, index_le]
/// - One record per (project, receiver, entitlement index), created on
///   first claim and never reset
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// Upper bound on project identifiers; also the PDA seed length limit
pub const MAX_PROJECT_ID_LEN: usize = 32;

/// Upper bound on the stored project name
pub const MAX_PROJECT_NAME_LEN: usize = 64;
