use commons::{FINALIZE_TAG, OFFER_TAG, PURCHASE_TAG, WITHDRAW_TAG};
use concordium_std::*;

/// A participant joined and deposited the campaign price.
#[derive(Debug, Serialize, SchemaType)]
pub struct PurchaseEvent {
    /// Participant account.
    pub account: AccountAddress,
    /// Deposited amount.
    pub amount: Amount,
}

/// A participant left the campaign before the end date.
#[derive(Debug, Serialize, SchemaType)]
pub struct WithdrawEvent {
    /// Participant account.
    pub account: AccountAddress,
    /// Refunded deposit.
    pub amount: Amount,
}

/// A seller submitted an offer.
#[derive(Debug, Serialize, SchemaType)]
pub struct OfferEvent {
    /// Seller account.
    pub seller: AccountAddress,
    /// Proposed per-item price.
    pub bid: Amount,
    /// Entry bond paid alongside the bid.
    pub bond: Amount,
}

/// The campaign settled.
#[derive(Debug, Serialize, SchemaType)]
pub struct FinalizeEvent {
    /// Winning seller, absent when no offers were made.
    pub winner: Option<AccountAddress>,
    /// Pool share transferred to the winning seller.
    pub seller_share: Amount,
    /// Commission transferred to the platform treasury.
    pub platform_share: Amount,
}

/// Tagged campaign event to be serialized for the event log.
#[derive(Debug)]
pub enum CampaignEvent {
    Purchase(PurchaseEvent),
    Withdraw(WithdrawEvent),
    Offer(OfferEvent),
    Finalize(FinalizeEvent),
}

impl Serial for CampaignEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CampaignEvent::Purchase(event) => {
                out.write_u8(PURCHASE_TAG)?;
                event.serial(out)
            }
            CampaignEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
            CampaignEvent::Offer(event) => {
                out.write_u8(OFFER_TAG)?;
                event.serial(out)
            }
            CampaignEvent::Finalize(event) => {
                out.write_u8(FINALIZE_TAG)?;
                event.serial(out)
            }
        }
    }
}
