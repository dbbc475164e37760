use anchor_lang::prelude::*;

use crate::constants::{MAX_PROJECT_ID_LEN, MAX_PROJECT_NAME_LEN};
use crate::error::AirdropRegistryError;

/**
 * Per-project ledger account
 *
 * One account per registered airdrop project, holding the distribution
 * parameters and the allocation/claim accounting. The project PDA is also
 * the token authority over the project's vault.
 *
 * Derivation: ["project", project_id]
 *
 * Lifecycle:
 * 1. Created by create_project with claimed = 0
 * 2. Mutated by claims (claimed grows), deposits (allocated grows), and
 *    root rotation
 * 3. Fully replaced by update_project while claimed == 0
 * 4. Settled by reclaim_tokens, which brings claimed up to allocated;
 *    the account is never deleted
 */
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Project {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner of the project
    /// - Can deposit, rotate the root, replace the project, and reclaim
    pub owner: Pubkey,

    /// Mint of the token being distributed
    pub token_mint: Pubkey,

    /// Merkle root committing to the (index, receiver, token, amount)
    /// entitlement set
    pub merkle_root: [u8; 32],

    /// Total amount set aside for claims
    pub allocated: u64,

    /// Running total of claimed amounts
    /// - May exceed `allocated` after a final oversized claim; see
    ///   `record_claim`
    pub claimed: u64,

    /// Registry-unique identifier, also the PDA seed
    #[max_len(MAX_PROJECT_ID_LEN)]
    pub id: String,

    /// Human-readable project name
    #[max_len(MAX_PROJECT_NAME_LEN)]
    pub name: String,
}

impl Project {
    /// Books a claim against the allocation.
    ///
    /// The headroom check compares the pre-claim totals; the full `amount`
    /// is then added without clamping, so the final claim on a project may
    /// push `claimed` past `allocated`. Subsequent claims are then refused
    /// here, and `reclaim_unclaimed` treats the overshoot as zero
    /// remainder.
    ///
    /// Returns the updated running total.
    pub fn record_claim(&mut self, amount: u64) -> Result<u64> {
        require!(
            self.claimed < self.allocated,
            AirdropRegistryError::AllocationExhausted
        );
        self.claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(AirdropRegistryError::ArithmeticOverflow)?;
        Ok(self.claimed)
    }

    /// Raises the allocation by a deposit. Returns the new allocation.
    pub fn credit_allocation(&mut self, amount: u64) -> Result<u64> {
        self.allocated = self
            .allocated
            .checked_add(amount)
            .ok_or(AirdropRegistryError::ArithmeticOverflow)?;
        Ok(self.allocated)
    }

    /// Amount still available for the owner to reclaim.
    pub fn unclaimed(&self) -> u64 {
        self.allocated.saturating_sub(self.claimed)
    }

    /// Settles the project: marks the whole allocation as claimed and
    /// returns the remainder the owner is owed.
    pub fn reclaim_unclaimed(&mut self) -> Result<u64> {
        let unclaimed = self.unclaimed();
        require!(unclaimed > 0, AirdropRegistryError::NothingToReclaim);
        self.claimed = self.allocated;
        Ok(unclaimed)
    }

    /// Swaps the project to a new token, root, name, and allocation.
    /// Refused once any claim has been recorded, so no receiver can be
    /// stranded mid-distribution.
    pub fn replace(
        &mut self,
        token_mint: Pubkey,
        merkle_root: [u8; 32],
        name: String,
        allocated: u64,
    ) -> Result<()> {
        require!(self.claimed == 0, AirdropRegistryError::ClaimsStarted);
        self.token_mint = token_mint;
        self.merkle_root = merkle_root;
        self.name = name;
        self.allocated = allocated;
        Ok(())
    }
}
