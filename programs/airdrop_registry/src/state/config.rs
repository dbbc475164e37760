use anchor_lang::prelude::*;

/**
 * Registry config account
 *
 * Singleton holding the administrator key that gates the supported-token
 * allow-list. Created once by the initialize instruction.
 *
 * Derivation: ["config"]
 */
#[account]
#[derive(Default, Debug)]
pub struct Config {
    /// The registry administrator
    pub admin: Pubkey,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Config {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Config>();
}
