use anchor_lang::prelude::*;

/// Event emitted when the registry config is initialized
#[event]
pub struct ConfigInitialized {
    /// The registry administrator
    pub admin: Pubkey,
}

/// Event emitted when a token mint is added to the allow-list
#[event]
pub struct SupportedTokenAdded {
    /// The allow-listed token mint
    pub token_mint: Pubkey,
    /// Admin who added it
    pub admin: Pubkey,
}

/// Event emitted when a token mint is removed from the allow-list
#[event]
pub struct SupportedTokenRemoved {
    /// The deactivated token mint
    pub token_mint: Pubkey,
    /// Admin who removed it
    pub admin: Pubkey,
}

/// Event emitted when a new project is created
#[event]
pub struct ProjectCreated {
    /// The project account public key
    pub project: Pubkey,
    /// Registry-unique project identifier
    pub project_id: String,
    /// Owner of the project
    pub owner: Pubkey,
    /// Token mint being distributed
    pub token_mint: Pubkey,
    /// Initial allocation pulled into the vault
    pub allocated: u64,
    /// Root committing to the entitlement set
    pub merkle_root: [u8; 32],
}

/// Event emitted when a project's merkle root is rotated
#[event]
pub struct MerkleRootUpdated {
    /// The project account public key
    pub project: Pubkey,
    /// Owner who rotated the root
    pub owner: Pubkey,
    /// The replacement merkle root
    pub merkle_root: [u8; 32],
}

/// Event emitted when a project is replaced before claims start
#[event]
pub struct ProjectUpdated {
    /// The project account public key
    pub project: Pubkey,
    /// Registry-unique project identifier
    pub project_id: String,
    /// Replacement token mint
    pub token_mint: Pubkey,
    /// Replacement allocation
    pub allocated: u64,
    /// Replacement merkle root
    pub merkle_root: [u8; 32],
}

/// Event emitted when an owner tops up a project
#[event]
pub struct TokensDeposited {
    /// The project account public key
    pub project: Pubkey,
    /// Owner who deposited
    pub owner: Pubkey,
    /// Amount added to the allocation
    pub amount: u64,
    /// Allocation after the deposit
    pub allocated: u64,
}

/// Event emitted when an entitlement is claimed
#[event]
pub struct TokenIssued {
    /// The project account public key
    pub project: Pubkey,
    /// Registry-unique project identifier
    pub project_id: String,
    /// Receiver of the tokens
    pub receiver: Pubkey,
    /// Entitlement index inside the committed tree
    pub index: u64,
    /// Amount transferred to the receiver
    pub amount: u64,
    /// Total amount claimed from the project by all receivers
    pub total_claimed: u64,
}

/// Event emitted when the owner reclaims the unclaimed remainder
#[event]
pub struct TokenReclaimed {
    /// The project account public key
    pub project: Pubkey,
    /// Registry-unique project identifier
    pub project_id: String,
    /// Owner who reclaimed
    pub owner: Pubkey,
    /// Amount returned to the owner
    pub amount: u64,
}
