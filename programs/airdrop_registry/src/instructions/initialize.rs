use anchor_lang::prelude::*;

use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing the registry
 *
 * Creates the singleton config account and records the signer as the
 * registry administrator. Because the config PDA can only be initialized
 * once, the admin role is fixed at first call.
 *
 * Access Control: First caller becomes admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The singleton registry config
    /// - Derived from: ["config"]
    #[account(
        init,
        payer = admin,
        space = Config::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    /// The registry administrator
    /// - Pays for the config account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.bump = ctx.bumps.config;
    config.admin = ctx.accounts.admin.key();

    emit_cpi!(ConfigInitialized {
        admin: config.admin,
    });

    Ok(())
}
