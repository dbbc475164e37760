use anchor_lang::prelude::*;

declare_id!("EXSdRVdbKYmyzFGUWJHJ61Up4RFcofYtu1uRJFb1Q26L");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Registry Program
 *
 * A Solana program that hosts many independent token airdrop projects in a
 * single registry. Each project commits to a merkle root over
 * (index, receiver, token, amount) entitlements; receivers redeem their
 * entitlement with a merkle proof and the program pays out from the
 * project's vault.
 *
 * Key Features:
 * - Merkle tree-based claim verification with per-index claim records
 * - Projects keyed by a caller-chosen string identifier
 * - Administrator-curated allow-list of distributable token mints
 * - Owner operations: deposit, root rotation, full project replacement
 *   before claims start, and reclaiming unclaimed tokens
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Config PDA: stores the registry administrator
 * - SupportedToken PDAs: the mint allow-list
 * - Project PDA: per-project parameters and allocation accounting
 * - Token Vault PDA: holds each project's custody, one per (project, mint)
 * - ClaimRecord PDAs: mark each (project, receiver, index) entitlement as
 *   consumed, exactly once
 *
 * Workflow:
 * 1. Administrator initializes the config and allow-lists token mints
 * 2. An issuer creates a project, depositing its allocation into the vault
 * 3. Receivers claim entitlements with valid merkle proofs
 * 4. The owner may deposit more, rotate the root, or (before any claim)
 *    replace the project's token and terms
 * 5. The owner reclaims whatever remains unclaimed
 */
#[program]
pub mod airdrop_registry {
    use super::*;

    /**
     * Initializes the registry config
     *
     * Creates the singleton config account and records the signer as the
     * registry administrator. Can only run once.
     *
     * Access Control: First caller becomes admin
     */
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handle_initialize(ctx)
    }

    /**
     * Adds a token mint to the supported allow-list
     *
     * Projects can only be created (or replaced onto) mints that are
     * currently allow-listed.
     *
     * Access Control: Admin only
     */
    pub fn add_supported_token(ctx: Context<AddSupportedToken>) -> Result<()> {
        handle_add_supported_token(ctx)
    }

    /**
     * Removes a token mint from the supported allow-list
     *
     * Existing projects on the mint keep working; only new project
     * creation and replacement are blocked.
     *
     * Access Control: Admin only
     */
    pub fn remove_supported_token(ctx: Context<RemoveSupportedToken>) -> Result<()> {
        handle_remove_supported_token(ctx)
    }

    /**
     * Creates a new airdrop project
     *
     * Registers a project under a caller-chosen string identifier, commits
     * to a merkle root over its entitlements, and pulls the allocation from
     * the owner into the project vault.
     *
     * @param ctx - Account context containing project, vault, and owner accounts
     * @param project_id - Registry-unique identifier, doubles as the PDA seed
     * @param name - Human-readable project name
     * @param allocated - Total amount of tokens set aside for claims
     * @param merkle_root - 32-byte root committing to the entitlement set
     *
     * Access Control: Anyone; the signer becomes the project owner
     */
    pub fn create_project(
        ctx: Context<CreateProject>,
        project_id: String,
        name: String,
        allocated: u64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_create_project(ctx, project_id, name, allocated, merkle_root)
    }

    /**
     * Rotates the project's merkle root
     *
     * Replaces the committed entitlement set, e.g. to add new receivers.
     * Previously consumed claim records stay consumed.
     *
     * @param ctx - Account context containing project and owner accounts
     * @param merkle_root - 32-byte root of the replacement tree
     *
     * Access Control: Project owner only
     */
    pub fn update_merkle_root(ctx: Context<UpdateMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_update_merkle_root(ctx, merkle_root)
    }

    /**
     * Replaces a project's token and terms
     *
     * Swaps the project to a new mint, root, name, and allocation. Only
     * permitted while no claim has been recorded. The old custody is
     * returned to the owner and the new allocation is pulled in.
     *
     * @param ctx - Account context with both the current and replacement mint accounts
     * @param name - Replacement project name
     * @param allocated - Replacement allocation
     * @param merkle_root - Root committing to the replacement entitlement set
     *
     * Access Control: Project owner only
     */
    pub fn update_project(
        ctx: Context<UpdateProject>,
        name: String,
        allocated: u64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_update_project(ctx, name, allocated, merkle_root)
    }

    /**
     * Tops up a project's allocation
     *
     * Pulls tokens from the owner into the vault and raises the allocation
     * by the same amount.
     *
     * @param ctx - Account context containing project, vault, and owner accounts
     * @param amount - Amount of tokens to add
     *
     * Access Control: Project owner only
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Claims an entitlement with merkle proof verification
     *
     * Verifies that (index, claimant, project token, amount) is committed
     * under the project's current root, marks the entitlement consumed, and
     * transfers the amount from the vault to the claimant.
     *
     * @param ctx - Account context containing project, claim record, and token accounts
     * @param index - Entitlement index inside the committed tree
     * @param amount - Entitled token amount
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * Access Control: Any receiver with a valid merkle proof
     */
    pub fn issue_tokens(
        ctx: Context<IssueTokens>,
        index: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_issue_tokens(ctx, index, amount, proof)
    }

    /**
     * Reclaims the unclaimed remainder of a project
     *
     * Transfers allocated - claimed back to the owner and closes the books
     * by setting claimed equal to allocated. The project record itself is
     * kept so claim history stays queryable.
     *
     * @param ctx - Account context containing project, vault, and owner accounts
     *
     * Access Control: Project owner only
     */
    pub fn reclaim_tokens(ctx: Context<ReclaimTokens>) -> Result<()> {
        handle_reclaim_tokens(ctx)
    }
}
