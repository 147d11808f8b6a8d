use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

/// Leaf commitment for a claimant: keccak over the raw 32 key bytes. Must
/// match the off-chain tree builder exactly.
pub fn leaf(identity: &Pubkey) -> [u8; 32] {
    keccak::hash(identity.as_ref()).to_bytes()
}

/// Folds the sibling path up to the root, hashing each pair in sorted order
/// so the verifier does not depend on left/right position.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut node = leaf;
    for sibling in proof {
        node = if node <= *sibling {
            keccak::hashv(&[node.as_ref(), sibling.as_ref()]).to_bytes()
        } else {
            keccak::hashv(&[sibling.as_ref(), node.as_ref()]).to_bytes()
        };
    }
    node == root
}
