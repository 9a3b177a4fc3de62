use concordium_std::*;

/// Type of the parameter to the `init` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Largest number of participants allowed to join.
    pub max_participants: u32,
    /// Per-participant deposit, also paid by sellers as an offer bond.
    pub price: Amount,
    /// Campaign display title.
    pub title: String,
    /// Campaign display description.
    pub description: String,
    /// How long the campaign accepts participants and offers.
    pub duration: Duration,
    /// Account that receives the platform commission at settlement.
    pub platform_treasury: AccountAddress,
}

/// Shipping details recorded together with a participant's deposit.
#[derive(Debug, Serialize, SchemaType)]
pub struct PurchaseParams {
    pub full_name: String,
    pub shipping_address: String,
    pub phone_number: String,
}

/// A seller's candidate offer.
#[derive(Debug, Serialize, SchemaType)]
pub struct OfferParams {
    /// Proposed per-item price.
    pub price: Amount,
    pub product_name: String,
    pub product_link: String,
}

/// Campaign snapshot returned by `getParticipantInfo`.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ParticipantInfo {
    pub current_participants: u32,
    pub max_participants: u32,
    pub end_date: Timestamp,
    pub price: Amount,
    pub title: String,
    pub description: String,
    /// Winning seller, present once the campaign settled with offers.
    pub sender_company: Option<AccountAddress>,
    pub is_finalized: bool,
}

/// A single entry returned by `getOffers`, in submission order.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct OfferEntry {
    pub price: Amount,
    pub product_name: String,
    pub product_link: String,
    pub wallet_address: AccountAddress,
}
