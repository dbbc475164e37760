use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for rotating a project's merkle root
 *
 * Replaces the committed entitlement set, e.g. to append newly eligible
 * receivers. Consumed claim records are keyed by entitlement index, not by
 * root, so rotation never re-opens an already claimed entitlement.
 *
 * Access Control: Project owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateMerkleRoot<'info> {
    /// The project to update
    #[account(mut)]
    pub project: Account<'info, Project>,

    /// The project owner
    /// - Must match the owner stored in the project state
    #[account(constraint = owner.key() == project.owner @ AirdropRegistryError::NotOwner)]
    pub owner: Signer<'info>,
}

/**
 * Rotates the merkle root for the project
 *
 * @param ctx - The account context containing project and owner accounts
 * @param merkle_root - 32-byte root of the replacement tree
 *
 * Validation Rules:
 * - Merkle root cannot be all zeros
 * - Only the project owner can rotate the root
 * - The root can be rotated any number of times
 */
pub fn handle_update_merkle_root(
    ctx: Context<UpdateMerkleRoot>,
    merkle_root: [u8; 32],
) -> Result<()> {
    let project = &mut ctx.accounts.project;

    require!(merkle_root != [0u8; 32], AirdropRegistryError::InvalidMerkleRoot);

    project.merkle_root = merkle_root;

    emit_cpi!(MerkleRootUpdated {
        project: project.key(),
        owner: ctx.accounts.owner.key(),
        merkle_root,
    });

    Ok(())
}
