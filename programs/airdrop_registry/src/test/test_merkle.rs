use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::merkle::{encode_leaf, hash_pair, verify};

/// One committed entitlement, mirroring what an off-chain tree builder
/// would feed the leaf encoder.
#[derive(Debug, Clone)]
struct Entitlement {
    index: u64,
    receiver: Pubkey,
    token: Pubkey,
    amount: u64,
}

impl Entitlement {
    fn leaf(&self) -> [u8; 32] {
        encode_leaf(self.index, &self.receiver, &self.token, self.amount)
    }
}

/// In-memory sorted-pair merkle tree over entitlements, using the same
/// hashing as the on-chain verifier. Odd levels duplicate the last node.
struct EntitlementTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl EntitlementTree {
    fn new(entitlements: &[Entitlement]) -> Self {
        let leaf_count = entitlements.len();
        let mut tree = EntitlementTree {
            nodes: entitlements.iter().map(Entitlement::leaf).collect(),
            leaf_count,
        };
        tree.build();
        tree
    }

    fn build(&mut self) {
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let next_len = level_len.div_ceil(2);
            for i in 0..next_len {
                let left = self.nodes[level_start + 2 * i];
                let right = if 2 * i + 1 < level_len {
                    self.nodes[level_start + 2 * i + 1]
                } else {
                    left
                };
                self.nodes.push(hash_pair(&left, &right));
            }
            level_start += level_len;
            level_len = next_len;
        }
    }

    fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("tree has at least one node")
    }

    /// Sibling path for the leaf at the given position.
    fn proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.leaf_count, "leaf index out of bounds");

        let mut proof = Vec::new();
        let mut pos = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if pos % 2 == 0 {
                if pos + 1 < level_len {
                    pos + 1
                } else {
                    pos
                }
            } else {
                pos - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            pos /= 2;
            level_start += level_len;
            level_len = level_len.div_ceil(2);
        }

        proof
    }
}

fn pk(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

fn sample_entitlements() -> Vec<Entitlement> {
    let token = pk(0xAA);
    vec![
        Entitlement {
            index: 0,
            receiver: pk(1),
            token,
            amount: 1_000,
        },
        Entitlement {
            index: 1,
            receiver: pk(2),
            token,
            amount: 2_000,
        },
        Entitlement {
            index: 2,
            receiver: pk(3),
            token,
            amount: 3_000,
        },
        Entitlement {
            index: 3,
            receiver: pk(4),
            token,
            amount: 4_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_leaves_verify() {
        let entitlements = sample_entitlements();
        let tree = EntitlementTree::new(&entitlements);
        let root = tree.root();

        for (i, entitlement) in entitlements.iter().enumerate() {
            let proof = tree.proof(i);
            assert!(
                verify(proof, root, entitlement.leaf()),
                "proof failed for leaf {}",
                i
            );
        }
    }

    #[test]
    fn test_forged_entitlement_rejected() {
        let entitlements = sample_entitlements();
        let tree = EntitlementTree::new(&entitlements);
        let root = tree.root();
        let genuine = &entitlements[0];
        let proof = tree.proof(0);

        // Each field is bound into the leaf; a one-unit change anywhere
        // must invalidate the fixed proof.
        let forged_amount = Entitlement {
            amount: genuine.amount + 1,
            ..genuine.clone()
        };
        let forged_index = Entitlement {
            index: genuine.index + 1,
            ..genuine.clone()
        };
        let forged_receiver = Entitlement {
            receiver: pk(0x7F),
            ..genuine.clone()
        };
        let forged_token = Entitlement {
            token: pk(0x7E),
            ..genuine.clone()
        };

        for forged in [forged_amount, forged_index, forged_receiver, forged_token] {
            assert!(
                !verify(proof.clone(), root, forged.leaf()),
                "forged entitlement {:?} unexpectedly verified",
                forged
            );
        }

        // The untouched entitlement still passes with the same proof.
        assert!(verify(proof, root, genuine.leaf()));
    }

    #[test]
    fn test_tampered_proof_rejected() {
        let entitlements = sample_entitlements();
        let tree = EntitlementTree::new(&entitlements);
        let root = tree.root();
        let leaf = entitlements[2].leaf();

        let mut tampered = tree.proof(2);
        tampered[0][0] = tampered[0][0].wrapping_add(1);
        assert!(!verify(tampered, root, leaf));

        let truncated = tree.proof(2)[..1].to_vec();
        assert!(!verify(truncated, root, leaf));
    }

    #[test]
    fn test_single_leaf_tree() {
        let entitlement = Entitlement {
            index: 0,
            receiver: pk(9),
            token: pk(0xAA),
            amount: 500,
        };
        let tree = EntitlementTree::new(std::slice::from_ref(&entitlement));

        // A one-leaf tree's root is the leaf itself and the proof is empty.
        assert_eq!(tree.root(), entitlement.leaf());
        assert!(verify(Vec::new(), tree.root(), entitlement.leaf()));

        // An empty proof against any other root must fail rather than error.
        let other_root = sample_entitlements()[0].leaf();
        assert!(!verify(Vec::new(), other_root, entitlement.leaf()));
    }

    #[test]
    fn test_odd_leaf_count() {
        let mut entitlements = sample_entitlements();
        entitlements.push(Entitlement {
            index: 4,
            receiver: pk(5),
            token: pk(0xAA),
            amount: 5_000,
        });

        let tree = EntitlementTree::new(&entitlements);
        let root = tree.root();

        for (i, entitlement) in entitlements.iter().enumerate() {
            assert!(
                verify(tree.proof(i), root, entitlement.leaf()),
                "proof failed for leaf {} of odd-sized tree",
                i
            );
        }
    }

    #[test]
    fn test_root_rotation_extends_entitlements() {
        let entitlements = sample_entitlements();
        let old_tree = EntitlementTree::new(&entitlements[..2]);
        let new_tree = EntitlementTree::new(&entitlements);

        // Proofs generated against the old root are stale under the new one.
        assert!(!verify(
            old_tree.proof(0),
            new_tree.root(),
            entitlements[0].leaf()
        ));

        // After rotation every entitlement, old and new, proves against
        // the new root with a fresh path.
        for (i, entitlement) in entitlements.iter().enumerate() {
            assert!(verify(new_tree.proof(i), new_tree.root(), entitlement.leaf()));
        }
    }
}
