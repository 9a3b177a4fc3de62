/// Tag for the Purchase event.
pub const PURCHASE_TAG: u8 = u8::MAX;

/// Tag for the Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 1;

/// Tag for the Offer event.
pub const OFFER_TAG: u8 = u8::MAX - 2;

/// Tag for the Finalize event.
pub const FINALIZE_TAG: u8 = u8::MAX - 3;

/// Commission the platform keeps out of the participant pool at settlement.
pub const PLATFORM_COMMISSION_PERCENT: u64 = 10;
