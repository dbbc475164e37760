use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;

/**
 * Account context for topping up a project's allocation
 *
 * Pulls tokens from the owner into the project vault and raises the
 * allocation by the same amount, re-opening claims on a project whose
 * allocation was exhausted.
 *
 * Access Control: Project owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The project to top up
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

    /// Owner's token account funding the deposit
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
 * Tops up the project's allocation
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to add to the allocation
 */
pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let project = &mut ctx.accounts.project;

    require!(amount > 0, AirdropRegistryError::InvalidAmount);

    let allocated = project.credit_allocation(amount)?;
    let project_key = project.key();

    transfer_tokens(
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    emit_cpi!(TokensDeposited {
        project: project_key,
        owner: ctx.accounts.owner.key(),
        amount,
        allocated,
    });

    Ok(())
}
