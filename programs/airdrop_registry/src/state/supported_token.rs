use anchor_lang::prelude::*;

/**
 * Supported-token allow-list entry
 *
 * One account per token mint the registry accepts for new projects.
 * Removal deactivates the entry in place rather than closing the account,
 * so re-adding a mint is a flag flip and the create-time check stays a
 * plain field read.
 *
 * Derivation: ["supported_token", token_mint]
 */
#[account]
#[derive(Default, Debug)]
pub struct SupportedToken {
    /// Whether the mint is currently eligible for new projects
    pub active: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl SupportedToken {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<SupportedToken>();
}
