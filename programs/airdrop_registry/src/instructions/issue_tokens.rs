use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::merkle::{encode_leaf, verify};
use crate::utils::transfer_tokens;

/**
 * Account context for claiming an entitlement
 *
 * The claimant presents the entitlement parameters plus a merkle proof.
 * The instruction verifies the proof against the project's current root,
 * marks the entitlement consumed, and pays out from the vault.
 *
 * Access Control: Any receiver with a valid merkle proof; the leaf commits
 * to the receiver key, so a proof cannot be redeemed by anyone else
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct IssueTokens<'info> {
    /// The project being claimed from
    /// - Will be modified to update the claimed total
    #[account(mut)]
    pub project: Account<'info, Project>,

    /// Claim record for this (project, claimant, index) entitlement
    /// - Created on first claim, set exactly once
    /// - Derived from: ["claim", project_key, claimant_key, index_le]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            project.key().as_ref(),
            claimant.key().as_ref(),
            index.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the project's custody
    /// - Derived from: ["vault", project_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), project.key().as_ref(), project.token_mint.as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the project's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == project.token_mint @ AirdropRegistryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The receiver claiming its entitlement
    /// - Must sign and pays for the claim record account
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes an entitlement claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param index - Entitlement index inside the committed tree
 * @param amount - Entitled token amount (from the merkle tree)
 * @param proof - Array of 32-byte sibling hashes forming the proof path
 *
 * Validation Process:
 * 1. Reject zero amounts and already consumed entitlements
 * 2. Verify the proof for (index, claimant, project token, amount)
 * 3. Book the claim against the allocation
 * 4. Transfer the amount from the vault to the claimant
 *
 * All state is written before the outbound transfer is issued, so a token
 * program calling back into the registry observes the entitlement as
 * already consumed.
 */
pub fn handle_issue_tokens(
    ctx: Context<IssueTokens>,
    index: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let claim_record = &mut ctx.accounts.claim_record;

    // ===== VALIDATION PHASE =====

    require!(amount > 0, AirdropRegistryError::InvalidAmount);
    require!(!claim_record.claimed, AirdropRegistryError::AlreadyClaimed);

    let claimant_key = ctx.accounts.claimant.key();

    // The leaf binds the index, the receiver, the project's current mint,
    // and the amount; changing any of them invalidates the proof.
    let leaf = encode_leaf(index, &claimant_key, &project.token_mint, amount);
    require!(
        verify(proof, project.merkle_root, leaf),
        AirdropRegistryError::InvalidProof
    );

    // ===== EFFECTS PHASE (State Updates) =====

    let total_claimed = project.record_claim(amount)?;

    claim_record.claimed = true;
    claim_record.amount = amount;

    let project_id = project.id.clone();
    let project_bump = project.bump;
    let project_key = project.key();

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    require!(
        ctx.accounts.token_vault.amount >= amount,
        AirdropRegistryError::InsufficientVaultBalance
    );

    let seeds = &[
        PROJECT_SEED.as_bytes(),
        project_id.as_bytes(),
        &[project_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_tokens(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.project.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokenIssued {
        project: project_key,
        project_id,
        receiver: claimant_key,
        index,
        amount,
        total_claimed,
    });

    Ok(())
}
