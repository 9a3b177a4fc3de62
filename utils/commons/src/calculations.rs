use super::*;

/// Shares of the participant pool at settlement.
#[derive(Debug, PartialEq, Eq)]
pub struct PoolShares {
    /// Share paid out to the winning seller.
    pub seller: Amount,
    /// Commission kept for the platform treasury.
    pub platform: Amount,
}

// Split the pooled deposits between the winning seller and the platform.
// Integer truncation rounds the commission down; the two shares always sum
// to the exact pool.
pub fn split_pool(pool: Amount, commission: Percentage) -> PoolShares {
    let platform = commission * pool;
    PoolShares {
        seller: Amount::from_micro_ccd(pool.micro_ccd - platform.micro_ccd),
        platform,
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_split_pool() {
        let shares = split_pool(
            Amount::from_micro_ccd(1000),
            Percentage::from_percent(PLATFORM_COMMISSION_PERCENT),
        );

        claim_eq!(shares.seller, Amount::from_micro_ccd(900));
        claim_eq!(shares.platform, Amount::from_micro_ccd(100));
    }

    #[concordium_test]
    fn test_split_pool_truncation() {
        // 10% of 1005 truncates to 100, the remainder stays with the seller.
        let shares = split_pool(
            Amount::from_micro_ccd(1005),
            Percentage::from_percent(PLATFORM_COMMISSION_PERCENT),
        );

        claim_eq!(shares.seller, Amount::from_micro_ccd(905));
        claim_eq!(shares.platform, Amount::from_micro_ccd(100));
        claim_eq!(
            shares.seller + shares.platform,
            Amount::from_micro_ccd(1005)
        );
    }

    #[concordium_test]
    fn test_split_pool_empty() {
        let shares = split_pool(
            Amount::zero(),
            Percentage::from_percent(PLATFORM_COMMISSION_PERCENT),
        );

        claim_eq!(shares.seller, Amount::zero());
        claim_eq!(shares.platform, Amount::zero());
    }
}
