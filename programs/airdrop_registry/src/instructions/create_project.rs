use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;

/**
 * Account context for creating a new airdrop project
 *
 * Registers a project under a caller-chosen string identifier:
 * - Creates the project PDA keyed by the identifier
 * - Creates the token vault PDA controlled by the project
 * - Transfers the allocation from the owner into the vault
 *
 * Both the project and the vault use init_if_needed so that a clash on an
 * identifier already in use surfaces as the named ProjectAlreadyExists
 * error from the handler instead of a raw system-program failure.
 *
 * Access Control: Anyone; the signer becomes the project owner
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(project_id: String)]
pub struct CreateProject<'info> {
    /// The project ledger account
    /// - Derived from: ["project", project_id]
    /// - Must not have been initialized before; checked in the handler
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Project::INIT_SPACE,
        seeds = [PROJECT_SEED.as_bytes(), project_id.as_bytes()],
        bump
    )]
    pub project: Account<'info, Project>,

    /// Allow-list entry for the mint being distributed
    /// - Must be active
    #[account(
        seeds = [SUPPORTED_TOKEN_SEED.as_bytes(), token_mint.key().as_ref()],
        bump = supported_token.bump,
        constraint = supported_token.active @ AirdropRegistryError::UnsupportedToken
    )]
    pub supported_token: Account<'info, SupportedToken>,

    /// Token vault holding the project's custody
    /// - Controlled by the project PDA as token authority
    /// - Derived from: ["vault", project_key, token_mint]
    #[account(
        init_if_needed,
        payer = owner,
        token::mint = token_mint,
        token::authority = project,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), project.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the allocation
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The project owner
    /// - Pays for the new accounts and funds the allocation
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new airdrop project
 *
 * @param ctx - The account context containing all required accounts
 * @param project_id - Registry-unique identifier; length is bounded by the
 *                     32-byte PDA seed limit
 * @param name - Human-readable project name
 * @param allocated - Amount pulled from the owner into the vault
 * @param merkle_root - Root committing to the entitlement set
 */
pub fn handle_create_project(
    ctx: Context<CreateProject>,
    project_id: String,
    name: String,
    allocated: u64,
    merkle_root: [u8; 32],
) -> Result<()> {
    let project = &mut ctx.accounts.project;

    // A freshly created project account has an all-zero mint; anything
    // else means the identifier is already taken.
    require!(
        project.token_mint == Pubkey::default(),
        AirdropRegistryError::ProjectAlreadyExists
    );
    require!(allocated > 0, AirdropRegistryError::InvalidAllocation);
    require!(merkle_root != [0u8; 32], AirdropRegistryError::InvalidMerkleRoot);
    require!(
        name.len() <= MAX_PROJECT_NAME_LEN,
        AirdropRegistryError::NameTooLong
    );

    project.bump = ctx.bumps.project;
    project.owner = ctx.accounts.owner.key();
    project.token_mint = ctx.accounts.token_mint.key();
    project.merkle_root = merkle_root;
    project.allocated = allocated;
    project.claimed = 0;
    project.id = project_id.clone();
    project.name = name;

    let project_key = project.key();

    // Pull the allocation from the owner into the vault. Failure aborts
    // the whole transaction, so the record above never outlives a failed
    // funding transfer.
    transfer_tokens(
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        allocated,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    emit_cpi!(ProjectCreated {
        project: project_key,
        project_id,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        allocated,
        merkle_root,
    });

    Ok(())
}
