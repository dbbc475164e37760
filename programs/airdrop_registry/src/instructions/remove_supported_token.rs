use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for removing a token mint from the allow-list
 *
 * Deactivates the entry in place. Projects already distributing the mint
 * keep working; only new project creation and replacement are blocked.
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RemoveSupportedToken<'info> {
    /// The registry config holding the admin key
    #[account(seeds = [CONFIG_SEED.as_bytes()], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// Allow-list entry for the mint
    /// - Must already exist; removing an unknown mint is an error
    #[account(
        mut,
        seeds = [SUPPORTED_TOKEN_SEED.as_bytes(), token_mint.key().as_ref()],
        bump = supported_token.bump
    )]
    pub supported_token: Account<'info, SupportedToken>,

    /// The token mint being removed
    #[account(token::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The registry administrator
    /// - Must match the admin stored in the config
    #[account(constraint = admin.key() == config.admin @ AirdropRegistryError::NotAuthorized)]
    pub admin: Signer<'info>,

    /// Token program owning the mint
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_remove_supported_token(ctx: Context<RemoveSupportedToken>) -> Result<()> {
    let supported_token = &mut ctx.accounts.supported_token;

    supported_token.active = false;

    emit_cpi!(SupportedTokenRemoved {
        token_mint: ctx.accounts.token_mint.key(),
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}
