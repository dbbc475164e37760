use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;

/**
 * Account context for reclaiming a project's unclaimed remainder
 *
 * Transfers allocated - claimed back to the owner and settles the books
 * by marking the whole allocation as claimed. The project account stays
 * alive so the claim history remains queryable, and a later deposit can
 * re-open the distribution.
 *
 * Access Control: Project owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ReclaimTokens<'info> {
    /// The project being settled
    #[account(mut)]
    pub project: Account<'info, Project>,

    /// Token vault holding the project's custody
    /// - Derived from: ["vault", project_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), project.key().as_ref(), project.token_mint.as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the project's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == project.token_mint @ AirdropRegistryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account receiving the remainder
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The project owner
    /// - Must match the owner stored in the project state
    #[account(constraint = owner.key() == project.owner @ AirdropRegistryError::NotOwner)]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Reclaims the unclaimed remainder of the project
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Rules:
 * - Fails if claimed already covers the allocation
 * - The remainder is computed before the books are settled, so exactly
 *   allocated - claimed at call time is returned
 */
pub fn handle_reclaim_tokens(ctx: Context<ReclaimTokens>) -> Result<()> {
    let project = &mut ctx.accounts.project;

    let reclaimed = project.reclaim_unclaimed()?;

    let project_id = project.id.clone();
    let project_bump = project.bump;
    let project_key = project.key();

    let seeds = &[
        PROJECT_SEED.as_bytes(),
        project_id.as_bytes(),
        &[project_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_tokens(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.project.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        reclaimed,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokenReclaimed {
        project: project_key,
        project_id,
        owner: ctx.accounts.owner.key(),
        amount: reclaimed,
    });

    Ok(())
}
