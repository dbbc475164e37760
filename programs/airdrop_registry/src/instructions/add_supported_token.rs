use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for adding a token mint to the allow-list
 *
 * Creates (or re-activates) the allow-list entry for a mint. Projects can
 * only be created on mints whose entry is active.
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddSupportedToken<'info> {
    /// The registry config holding the admin key
    #[account(seeds = [CONFIG_SEED.as_bytes()], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// Allow-list entry for the mint
    /// - Derived from: ["supported_token", token_mint]
    /// - Re-adding a previously removed mint reuses the account
    #[account(
        init_if_needed,
        payer = admin,
        space = SupportedToken::LEN,
        seeds = [SUPPORTED_TOKEN_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub supported_token: Account<'info, SupportedToken>,

    /// The token mint being allow-listed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The registry administrator
    /// - Must match the admin stored in the config
    #[account(
        mut,
        constraint = admin.key() == config.admin @ AirdropRegistryError::NotAuthorized
    )]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program owning the mint
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_add_supported_token(ctx: Context<AddSupportedToken>) -> Result<()> {
    let supported_token = &mut ctx.accounts.supported_token;

    supported_token.active = true;
    supported_token.bump = ctx.bumps.supported_token;

    emit_cpi!(SupportedTokenAdded {
        token_mint: ctx.accounts.token_mint.key(),
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}
