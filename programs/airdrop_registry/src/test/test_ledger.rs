use anchor_lang::solana_program::pubkey::Pubkey;

use crate::error::AirdropRegistryError;
use crate::state::{ClaimRecord, Project};

fn project(allocated: u64) -> Project {
    Project {
        owner: Pubkey::new_from_array([1; 32]),
        token_mint: Pubkey::new_from_array([2; 32]),
        merkle_root: [3; 32],
        allocated,
        id: "launch".to_string(),
        name: "Launch Airdrop".to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_accumulate_into_total() {
        let mut p = project(10_000);
        let amounts = [1_500u64, 2_500, 4_000];

        for amount in amounts {
            p.record_claim(amount).unwrap();
        }

        // The running total is exactly the sum of issued amounts.
        assert_eq!(p.claimed, amounts.iter().sum::<u64>());
        assert_eq!(p.unclaimed(), 2_000);
    }

    #[test]
    fn test_claim_blocked_once_allocation_is_exhausted() {
        let mut p = project(100);
        p.record_claim(100).unwrap();

        // claimed == allocated leaves no headroom, whatever the amount.
        assert_eq!(
            p.record_claim(1),
            Err(AirdropRegistryError::AllocationExhausted.into())
        );
        assert_eq!(p.claimed, 100);
    }

    #[test]
    fn test_final_claim_may_overshoot_allocation() {
        // The headroom check compares pre-claim totals and the full amount
        // is booked without clamping, so the last claim can overshoot.
        let mut p = project(10);
        p.record_claim(9_000).unwrap();
        assert_eq!(p.claimed, 9_000);

        // Further claims are refused, and the overshoot reads as a zero
        // remainder instead of underflowing.
        assert_eq!(
            p.record_claim(1),
            Err(AirdropRegistryError::AllocationExhausted.into())
        );
        assert_eq!(p.unclaimed(), 0);
        assert_eq!(
            p.reclaim_unclaimed(),
            Err(AirdropRegistryError::NothingToReclaim.into())
        );
    }

    #[test]
    fn test_claim_total_overflow_is_rejected() {
        let mut p = project(u64::MAX);
        p.record_claim(u64::MAX - 1).unwrap();

        assert_eq!(
            p.record_claim(2),
            Err(AirdropRegistryError::ArithmeticOverflow.into())
        );
        // A failed claim leaves the total untouched.
        assert_eq!(p.claimed, u64::MAX - 1);
    }

    #[test]
    fn test_reclaim_returns_exact_remainder() {
        let mut p = project(10_000);
        p.record_claim(9_000).unwrap();

        assert_eq!(p.reclaim_unclaimed(), Ok(1_000));
        assert_eq!(p.claimed, p.allocated);

        // Settling is final until a new deposit arrives.
        assert_eq!(
            p.reclaim_unclaimed(),
            Err(AirdropRegistryError::NothingToReclaim.into())
        );
    }

    #[test]
    fn test_deposit_raises_allocation_and_reopens_claims() {
        let mut p = project(100);
        p.record_claim(100).unwrap();
        assert_eq!(
            p.record_claim(50),
            Err(AirdropRegistryError::AllocationExhausted.into())
        );

        assert_eq!(p.credit_allocation(200), Ok(300));
        p.record_claim(50).unwrap();
        assert_eq!(p.claimed, 150);

        assert_eq!(
            p.credit_allocation(u64::MAX),
            Err(AirdropRegistryError::ArithmeticOverflow.into())
        );
    }

    #[test]
    fn test_replace_requires_no_claims() {
        let mut p = project(5_000);
        p.record_claim(1).unwrap();

        assert_eq!(
            p.replace(Pubkey::new_from_array([9; 32]), [7; 32], "v2".to_string(), 8_000),
            Err(AirdropRegistryError::ClaimsStarted.into())
        );
        // The record is untouched by the refused replacement.
        assert_eq!(p.allocated, 5_000);
        assert_eq!(p.merkle_root, [3; 32]);
    }

    #[test]
    fn test_replace_swaps_the_full_record() {
        let mut p = project(5_000);
        let new_mint = Pubkey::new_from_array([9; 32]);

        p.replace(new_mint, [7; 32], "v2".to_string(), 8_000).unwrap();

        assert_eq!(p.token_mint, new_mint);
        assert_eq!(p.merkle_root, [7; 32]);
        assert_eq!(p.name, "v2");
        assert_eq!(p.allocated, 8_000);
        assert_eq!(p.claimed, 0);
        // Identity and ownership survive the swap.
        assert_eq!(p.id, "launch");
        assert_eq!(p.owner, Pubkey::new_from_array([1; 32]));
    }

    #[test]
    fn test_exhaustion_scenario_after_reclaim() {
        // Project funded with 10_000; entitlement 0 claims 9_000, the
        // owner reclaims the remaining 1_000, and the late claim for
        // entitlement 1 is judged against the settled books.
        let mut p = project(10_000);

        p.record_claim(9_000).unwrap();
        assert_eq!(p.reclaim_unclaimed(), Ok(1_000));

        assert_eq!(
            p.record_claim(10_000),
            Err(AirdropRegistryError::AllocationExhausted.into())
        );
        assert_eq!(p.claimed, p.allocated);
    }

    #[test]
    fn test_claim_record_defaults_unclaimed() {
        let mut record = ClaimRecord::default();
        assert!(!record.claimed);

        // Consuming the record is a one-way flag flip; the handler refuses
        // any record whose flag is already set.
        record.claimed = true;
        record.amount = 42;
        assert!(record.claimed);
    }
}
