use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;

/**
 * Account context for replacing a project's token and terms
 *
 * Swaps the project onto a new mint, root, name, and allocation while no
 * claim has been recorded. The current custody is refunded to the owner
 * and the replacement allocation is pulled into the new mint's vault.
 *
 * The current and replacement mints may live in different token programs
 * (SPL Token vs Token 2022), so each side carries its own program
 * account. When the mint is unchanged both vault accounts resolve to the
 * same address and the refund/funding transfers simply net out.
 *
 * Access Control: Project owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateProject<'info> {
    /// The project being replaced
    #[account(mut)]
    pub project: Account<'info, Project>,

    /// Allow-list entry for the replacement mint
    /// - Must be active
    #[account(
        seeds = [SUPPORTED_TOKEN_SEED.as_bytes(), new_token_mint.key().as_ref()],
        bump = supported_token.bump,
        constraint = supported_token.active @ AirdropRegistryError::UnsupportedToken
    )]
    pub supported_token: Account<'info, SupportedToken>,

    /// Vault for the current mint, drained back to the owner
    /// - Derived from: ["vault", project_key, current_token_mint]
    /// - Left empty but open afterwards
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), project.key().as_ref(), project.token_mint.as_ref()],
        bump
    )]
    pub current_vault: InterfaceAccount<'info, TokenAccount>,

    /// The current token mint
    /// - Must match the project's stored mint
    #[account(
        token::token_program = current_token_program,
        constraint = current_token_mint.key() == project.token_mint @ AirdropRegistryError::TokenMintMismatch
    )]
    pub current_token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account receiving the refunded custody
    #[account(
        mut,
        token::mint = current_token_mint,
        token::authority = owner,
        token::token_program = current_token_program,
    )]
    pub owner_current_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Vault for the replacement mint
    /// - Derived from: ["vault", project_key, new_token_mint]
    #[account(
        init_if_needed,
        payer = owner,
        token::mint = new_token_mint,
        token::authority = project,
        token::token_program = new_token_program,
        seeds = [VAULT_SEED.as_bytes(), project.key().as_ref(), new_token_mint.key().as_ref()],
        bump
    )]
    pub new_vault: InterfaceAccount<'info, TokenAccount>,

    /// The replacement token mint
    #[account(token::token_program = new_token_program)]
    pub new_token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the replacement allocation
    #[account(
        mut,
        token::mint = new_token_mint,
        token::authority = owner,
        token::token_program = new_token_program,
    )]
    pub owner_new_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The project owner
    /// - Must match the owner stored in the project state
    #[account(
        mut,
        constraint = owner.key() == project.owner @ AirdropRegistryError::NotOwner
    )]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program owning the current mint
    pub current_token_program: Interface<'info, TokenInterface>,

    /// Token program owning the replacement mint
    pub new_token_program: Interface<'info, TokenInterface>,
}

/**
 * Replaces the project's token and terms
 *
 * @param ctx - The account context containing all required accounts
 * @param name - Replacement project name
 * @param allocated - Replacement allocation pulled from the owner
 * @param merkle_root - Root committing to the replacement entitlement set
 *
 * Validation Rules:
 * - Refused once any claim has been recorded
 * - The replacement mint must be allow-listed and the allocation non-zero
 */
pub fn handle_update_project(
    ctx: Context<UpdateProject>,
    name: String,
    allocated: u64,
    merkle_root: [u8; 32],
) -> Result<()> {
    let project = &mut ctx.accounts.project;

    require!(allocated > 0, AirdropRegistryError::InvalidAllocation);
    require!(merkle_root != [0u8; 32], AirdropRegistryError::InvalidMerkleRoot);
    require!(
        name.len() <= MAX_PROJECT_NAME_LEN,
        AirdropRegistryError::NameTooLong
    );

    // Snapshot the refund before any transfer touches the vault.
    let refund = ctx.accounts.current_vault.amount;

    // Rejects with ClaimsStarted unless claimed == 0, then rewrites the
    // record to the replacement terms.
    project.replace(
        ctx.accounts.new_token_mint.key(),
        merkle_root,
        name,
        allocated,
    )?;

    let project_id = project.id.clone();
    let project_bump = project.bump;
    let project_key = project.key();

    let seeds = &[
        PROJECT_SEED.as_bytes(),
        project_id.as_bytes(),
        &[project_bump],
    ];
    let signer = &[&seeds[..]];

    // Return the old custody to the owner.
    if refund > 0 {
        transfer_tokens(
            ctx.accounts.current_vault.to_account_info(),
            ctx.accounts.owner_current_token_account.to_account_info(),
            ctx.accounts.project.to_account_info(),
            ctx.accounts.current_token_mint.to_account_info(),
            ctx.accounts.current_token_program.to_account_info(),
            refund,
            ctx.accounts.current_token_mint.decimals,
            Some(signer),
        )?;
    }

    // Pull the replacement allocation into its vault.
    transfer_tokens(
        ctx.accounts.owner_new_token_account.to_account_info(),
        ctx.accounts.new_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.new_token_mint.to_account_info(),
        ctx.accounts.new_token_program.to_account_info(),
        allocated,
        ctx.accounts.new_token_mint.decimals,
        None,
    )?;

    emit_cpi!(ProjectUpdated {
        project: project_key,
        project_id,
        token_mint: ctx.accounts.new_token_mint.key(),
        allocated,
        merkle_root,
    });

    Ok(())
}
