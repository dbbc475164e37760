use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropRegistryError {
    // Access control errors
    #[msg("Only the registry admin can perform this action")]
    NotAuthorized,
    #[msg("Only the project owner can perform this action")]
    NotOwner,

    // Project lifecycle errors
    #[msg("A project with this identifier already exists")]
    ProjectAlreadyExists,
    #[msg("Token mint is not on the supported list")]
    UnsupportedToken,
    #[msg("Allocation must be greater than zero")]
    InvalidAllocation,
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Project name is too long")]
    NameTooLong,
    #[msg("Project cannot be replaced once claims have started")]
    ClaimsStarted,
    #[msg("Nothing left to reclaim")]
    NothingToReclaim,

    // Claim validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Entitlement has already been claimed")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Project allocation is exhausted")]
    AllocationExhausted,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the project's token mint")]
    TokenMintMismatch,
}
