use commons::{split_pool, CustomContractError, Percentage, PLATFORM_COMMISSION_PERCENT};
use concordium_std::*;

use crate::external::{InitParams, OfferParams, PurchaseParams};

/// The settlement stage of a campaign.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub enum CampaignState {
    /// The campaign is either
    /// - still accepting deposits and offers or
    /// - past its end date, waiting for somebody to settle it.
    Open,
    /// The campaign has settled. Holds the winning seller, if any offer was
    /// submitted before the end date.
    Finalized(Option<AccountAddress>),
}

impl CampaignState {
    pub fn is_finalized(&self) -> bool {
        matches!(self, CampaignState::Finalized(_))
    }

    pub fn winner(&self) -> Option<AccountAddress> {
        match self {
            CampaignState::Open => None,
            CampaignState::Finalized(winner) => *winner,
        }
    }
}

/// A participant's deposit with the shipping details submitted alongside it.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct Participant {
    pub full_name: String,
    pub shipping_address: String,
    pub phone_number: String,
    pub deposit: Amount,
}

/// A seller's bid together with the bond paid to submit it.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct Offer {
    pub seller: AccountAddress,
    /// Proposed per-item price. The lowest one wins at settlement.
    pub price: Amount,
    pub product_name: String,
    pub product_link: String,
    /// Entry bond, always equal to the campaign price.
    pub bond: Amount,
}

/// Campaign settings and counters, separate from the per-account ledgers.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct CampaignDetails {
    pub state: CampaignState,
    pub max_participants: u32,
    pub current_participants: u32,
    pub price: Amount,
    pub title: String,
    pub description: String,
    /// Deposits and offers close at this time; settlement opens.
    pub end_date: Timestamp,
    pub platform_treasury: AccountAddress,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    pub details: CampaignDetails,
    /// Deposits keyed by participant account.
    pub participants: StateMap<AccountAddress, Participant, S>,
    /// Seller bids in submission order, at most one per account.
    pub offers: Vec<Offer>,
}

/// Fund movements owed after a successful settlement.
#[must_use]
pub enum Settlement {
    /// The lowest offer won: pay the seller and the platform, return every
    /// bond.
    Awarded {
        winner: AccountAddress,
        seller_share: Amount,
        platform_share: Amount,
        bond_refunds: Vec<(AccountAddress, Amount)>,
    },
    /// Nobody made an offer: every participant deposit goes back.
    NoOffers {
        deposit_refunds: Vec<(AccountAddress, Amount)>,
    },
}

impl<S: HasStateApi> State<S> {
    /// Creates an open campaign, validating the creation settings.
    pub fn new(
        params: InitParams,
        created_at: Timestamp,
        state_builder: &mut StateBuilder<S>,
    ) -> Result<Self, CustomContractError> {
        ensure!(
            params.max_participants >= 2,
            CustomContractError::InvalidConfiguration
        );
        ensure!(
            params.price > Amount::zero(),
            CustomContractError::InvalidConfiguration
        );
        let end_date = created_at
            .checked_add(params.duration)
            .ok_or(CustomContractError::InvalidConfiguration)?;

        Ok(State {
            details: CampaignDetails {
                state: CampaignState::Open,
                max_participants: params.max_participants,
                current_participants: 0,
                price: params.price,
                title: params.title,
                description: params.description,
                end_date,
                platform_treasury: params.platform_treasury,
            },
            participants: state_builder.new_map(),
            offers: Vec::new(),
        })
    }

    /// Whether deposits and offers are still accepted at `slot_time`.
    fn is_open(&self, slot_time: Timestamp) -> bool {
        !self.details.state.is_finalized() && slot_time < self.details.end_date
    }

    /// Record a participant deposit with its shipping details.
    pub fn purchase(
        &mut self,
        sender: AccountAddress,
        params: PurchaseParams,
        amount: Amount,
        slot_time: Timestamp,
    ) -> Result<(), CustomContractError> {
        ensure!(self.is_open(slot_time), CustomContractError::CampaignClosed);
        ensure!(
            amount == self.details.price,
            CustomContractError::InsufficientPayment
        );
        ensure!(
            self.participants.get(&sender).is_none(),
            CustomContractError::AlreadyJoined
        );
        ensure!(
            self.details.current_participants < self.details.max_participants,
            CustomContractError::CapacityExceeded
        );

        self.participants.insert(
            sender,
            Participant {
                full_name: params.full_name,
                shipping_address: params.shipping_address,
                phone_number: params.phone_number,
                deposit: amount,
            },
        );
        self.details.current_participants += 1;

        Ok(())
    }

    /// Remove the sender from the ledger, returning the deposit that MUST be
    /// refunded.
    pub fn withdraw(
        &mut self,
        sender: AccountAddress,
        slot_time: Timestamp,
    ) -> Result<Amount, CustomContractError> {
        ensure!(self.is_open(slot_time), CustomContractError::CampaignClosed);

        let participant = self
            .participants
            .remove_and_get(&sender)
            .ok_or(CustomContractError::NotParticipant)?;
        self.details.current_participants -= 1;

        Ok(participant.deposit)
    }

    /// Append a seller's offer after the bond and uniqueness checks.
    pub fn submit_offer(
        &mut self,
        sender: AccountAddress,
        params: OfferParams,
        amount: Amount,
        slot_time: Timestamp,
    ) -> Result<(), CustomContractError> {
        ensure!(
            self.is_open(slot_time),
            CustomContractError::OfferPeriodEnded
        );
        ensure!(
            amount == self.details.price,
            CustomContractError::InsufficientPayment
        );
        ensure!(
            self.offers.iter().all(|offer| offer.seller != sender),
            CustomContractError::DuplicateOffer
        );

        self.offers.push(Offer {
            seller: sender,
            price: params.price,
            product_name: params.product_name,
            product_link: params.product_link,
            bond: amount,
        });

        Ok(())
    }

    /// Lowest offer so far. Earlier submissions win ties, hence the strict
    /// comparison over the submission-ordered list.
    fn min_offer(&self) -> Option<&Offer> {
        let mut best: Option<&Offer> = None;
        for offer in self.offers.iter() {
            match best {
                Some(current) if current.price <= offer.price => {}
                _ => best = Some(offer),
            }
        }
        best
    }

    /// Settle the campaign, recording the outcome and computing the fund
    /// movements owed. The state transition happens before any transfer.
    pub fn finalize(&mut self, slot_time: Timestamp) -> Result<Settlement, CustomContractError> {
        ensure!(
            !self.details.state.is_finalized(),
            CustomContractError::AlreadyFinalized
        );
        ensure!(
            slot_time >= self.details.end_date,
            CustomContractError::TooEarly
        );

        let settlement = match self.min_offer() {
            Some(winning) => {
                let pool = Amount::from_micro_ccd(
                    self.details.price.micro_ccd * self.details.current_participants as u64,
                );
                let shares = split_pool(
                    pool,
                    Percentage::from_percent(PLATFORM_COMMISSION_PERCENT),
                );
                // Every bond goes back, the winner's included.
                let bond_refunds = self
                    .offers
                    .iter()
                    .map(|offer| (offer.seller, offer.bond))
                    .collect();

                Settlement::Awarded {
                    winner: winning.seller,
                    seller_share: shares.seller,
                    platform_share: shares.platform,
                    bond_refunds,
                }
            }
            None => {
                let deposit_refunds = self
                    .participants
                    .iter()
                    .map(|(account, participant)| (*account, participant.deposit))
                    .collect();

                Settlement::NoOffers { deposit_refunds }
            }
        };

        let winner = match &settlement {
            Settlement::Awarded { winner, .. } => Some(*winner),
            Settlement::NoOffers { .. } => None,
        };
        self.details.state = CampaignState::Finalized(winner);

        Ok(settlement)
    }

    pub fn is_participant(&self, account: &AccountAddress) -> bool {
        self.participants.get(account).is_some()
    }
}
