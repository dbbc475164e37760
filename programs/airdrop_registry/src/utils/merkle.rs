//! Entitlement leaf encoding and merkle proof verification.
//!
//! Notes on construction:
//! - A leaf is keccak256 over the fixed layout
//!   `index (u64 LE, widened to 32 bytes) || receiver (32 bytes) ||
//!   token mint (32 bytes) || amount (u64 LE)`.
//!   Off-chain tree builders must use the exact same byte order to match.
//! - Interior pairs are hashed in sorted order (lexicographically by
//!   32-byte value), so proofs carry no left/right position tags.

use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::pubkey::Pubkey;

/// Computes the leaf digest for one entitlement.
pub fn encode_leaf(index: u64, receiver: &Pubkey, token: &Pubkey, amount: u64) -> [u8; 32] {
    let mut index_bytes = [0u8; 32];
    index_bytes[..8].copy_from_slice(&index.to_le_bytes());
    keccak::hashv(&[
        &index_bytes,
        receiver.as_ref(),
        token.as_ref(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}

/// Hashes two sibling nodes with the lower 32-byte value on the left.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[a, b]).to_bytes()
    } else {
        keccak::hashv(&[b, a]).to_bytes()
    }
}

/// Folds the proof over the leaf and compares the result to the root.
///
/// Returns false for any mismatch, including an empty proof against a
/// root that is not the leaf itself. Never fails.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof.iter() {
        computed = hash_pair(&computed, sibling);
    }
    computed == root
}
