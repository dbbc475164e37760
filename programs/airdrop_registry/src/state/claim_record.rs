use anchor_lang::prelude::*;

/**
 * Claim record account
 *
 * Marks one entitlement index as consumed for one receiver within one
 * project. Created on first claim and set exactly once; the record is
 * never closed or reset, which is what makes double-claiming impossible
 * even across merkle root rotations and later deposits.
 *
 * Derivation: ["claim", project_key, receiver, index_le]
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Whether this entitlement has been consumed
    pub claimed: bool,

    /// Amount that was issued when the entitlement was consumed
    pub amount: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}
