use commons::{ContractResult, CustomContractError};
use concordium_std::*;

use crate::events::*;
use crate::external::*;
use crate::state::{Settlement, State};

/// Init function that creates a new campaign.
///
/// The creator seeds the escrow with exactly the per-item price; the seed is
/// returned at settlement.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - `max_participants` is below 2 or `price` is zero.
/// - The attached amount differs from `price`.
#[init(contract = "SwayCampaign", parameter = "InitParams", payable)]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
    amount: Amount,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;
    ensure!(
        amount == params.price,
        CustomContractError::InsufficientPayment.into()
    );
    let state = State::new(params, ctx.metadata().slot_time(), state_builder)?;
    Ok(state)
}

/// Receive function in which accounts deposit the campaign price to join,
/// leaving their shipping details.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The campaign is past its end date or finalized.
/// - The attached amount differs from the campaign price.
/// - The sender already joined, or the campaign is full.
#[receive(
    contract = "SwayCampaign",
    name = "purchase",
    parameter = "PurchaseParams",
    mutable,
    payable,
    enable_logger
)]
fn contract_purchase<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: PurchaseParams = ctx.parameter_cursor().get()?;
    let sender = only_account(ctx.sender())?;
    let slot_time = ctx.metadata().slot_time();

    host.state_mut().purchase(sender, params, amount, slot_time)?;

    logger.log(&CampaignEvent::Purchase(PurchaseEvent {
        account: sender,
        amount,
    }))?;

    Ok(())
}

/// Receive function in which a participant leaves the campaign and reclaims
/// the deposit, only while the campaign is open.
///
/// Rejects if:
/// - The campaign is past its end date or finalized.
/// - The sender never joined or already withdrew.
#[receive(
    contract = "SwayCampaign",
    name = "withdraw",
    mutable,
    enable_logger
)]
fn contract_withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = only_account(ctx.sender())?;
    let slot_time = ctx.metadata().slot_time();

    let deposit = host.state_mut().withdraw(sender, slot_time)?;

    logger.log(&CampaignEvent::Withdraw(WithdrawEvent {
        account: sender,
        amount: deposit,
    }))?;

    host.invoke_transfer(&sender, deposit)?;

    Ok(())
}

/// Receive function in which sellers submit a competing offer, bonding the
/// campaign price. The bid itself is the `price` field of the parameter.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The campaign is past its end date or finalized.
/// - The attached bond differs from the campaign price.
/// - The sender already submitted an offer.
#[receive(
    contract = "SwayCampaign",
    name = "submitOffer",
    parameter = "OfferParams",
    mutable,
    payable,
    enable_logger
)]
fn contract_submit_offer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: OfferParams = ctx.parameter_cursor().get()?;
    let sender = only_account(ctx.sender())?;
    let slot_time = ctx.metadata().slot_time();
    let bid = params.price;

    host.state_mut()
        .submit_offer(sender, params, amount, slot_time)?;

    logger.log(&CampaignEvent::Offer(OfferEvent {
        seller: sender,
        bid,
        bond: amount,
    }))?;

    Ok(())
}

/// Receive function used to settle the campaign after its end date.
///
/// With at least one offer: the lowest bid wins, the pooled participant
/// deposits go to the winning seller minus the platform commission, and
/// every seller bond is returned. Without offers: every participant deposit
/// is refunded. The creator's seed deposit is returned in both cases.
///
/// Rejects if:
/// - The end date has not been reached yet.
/// - The campaign has already been finalized.
#[receive(
    contract = "SwayCampaign",
    name = "finalize",
    mutable,
    enable_logger
)]
fn contract_finalize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let slot_time = ctx.metadata().slot_time();

    let outcome = host.state_mut().finalize(slot_time)?;
    let seed = host.state().details.price;
    let treasury = host.state().details.platform_treasury;

    match outcome {
        Settlement::Awarded {
            winner,
            seller_share,
            platform_share,
            bond_refunds,
        } => {
            logger.log(&CampaignEvent::Finalize(FinalizeEvent {
                winner: Some(winner),
                seller_share,
                platform_share,
            }))?;

            if seller_share > Amount::zero() {
                host.invoke_transfer(&winner, seller_share)?;
            }
            if platform_share > Amount::zero() {
                host.invoke_transfer(&treasury, platform_share)?;
            }
            for (seller, bond) in bond_refunds {
                host.invoke_transfer(&seller, bond)?;
            }
        }
        Settlement::NoOffers { deposit_refunds } => {
            logger.log(&CampaignEvent::Finalize(FinalizeEvent {
                winner: None,
                seller_share: Amount::zero(),
                platform_share: Amount::zero(),
            }))?;

            for (account, deposit) in deposit_refunds {
                host.invoke_transfer(&account, deposit)?;
            }
        }
    }

    // Return the creator's seed deposit.
    host.invoke_transfer(&ctx.owner(), seed)?;

    Ok(())
}

/// View function that returns the campaign snapshot shown to participants.
/// All fields are read from the same state, so the tuple is never internally
/// inconsistent.
#[receive(
    contract = "SwayCampaign",
    name = "getParticipantInfo",
    return_value = "ParticipantInfo"
)]
fn contract_get_participant_info<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ParticipantInfo> {
    let details = &host.state().details;
    Ok(ParticipantInfo {
        current_participants: details.current_participants,
        max_participants: details.max_participants,
        end_date: details.end_date,
        price: details.price,
        title: details.title.clone(),
        description: details.description.clone(),
        sender_company: details.state.winner(),
        is_finalized: details.state.is_finalized(),
    })
}

/// View function that returns all offers in submission order. Callers sort
/// for display themselves.
#[receive(
    contract = "SwayCampaign",
    name = "getOffers",
    return_value = "Vec<OfferEntry>"
)]
fn contract_get_offers<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<OfferEntry>> {
    let entries = host
        .state()
        .offers
        .iter()
        .map(|offer| OfferEntry {
            price: offer.price,
            product_name: offer.product_name.clone(),
            product_link: offer.product_link.clone(),
            wallet_address: offer.seller,
        })
        .collect();
    Ok(entries)
}

/// View function that returns whether the given account currently holds a
/// participant deposit.
#[receive(
    contract = "SwayCampaign",
    name = "isParticipant",
    parameter = "AccountAddress",
    return_value = "bool"
)]
fn contract_is_participant<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    let account: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().is_participant(&account))
}

fn only_account(address: Address) -> ContractResult<AccountAddress> {
    match address {
        Address::Account(account) => Ok(account),
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use core::fmt::Debug;
    use test_infrastructure::*;

    const CREATOR: AccountAddress = AccountAddress([0u8; 32]);
    const TREASURY: AccountAddress = AccountAddress([1u8; 32]);
    const ALICE: AccountAddress = AccountAddress([2u8; 32]);
    const BOB: AccountAddress = AccountAddress([3u8; 32]);
    const CAROL: AccountAddress = AccountAddress([4u8; 32]);
    const SELLER_1: AccountAddress = AccountAddress([16u8; 32]);
    const SELLER_2: AccountAddress = AccountAddress([17u8; 32]);
    const SELLER_3: AccountAddress = AccountAddress([18u8; 32]);

    const PRICE: Amount = Amount::from_micro_ccd(100);
    const CAMPAIGN_END: u64 = 10;

    fn init_params(max_participants: u32) -> InitParams {
        InitParams {
            max_participants,
            price: PRICE,
            title: String::from("Standing desk bulk buy"),
            description: String::from("Group purchase of 50 standing desks"),
            duration: Duration::from_millis(CAMPAIGN_END),
            platform_treasury: TREASURY,
        }
    }

    /// Deploy a campaign at slot time 0 with the creator's seed attached.
    fn fresh_campaign(max_participants: u32) -> TestHost<State<TestStateApi>> {
        let parameter_bytes = to_bytes(&init_params(max_participants));
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(CREATOR)
            .set_parameter(&parameter_bytes)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(0));
        let mut state_builder = TestStateBuilder::new();

        let state = contract_init(&ctx, &mut state_builder, PRICE)
            .expect_report("Campaign creation should pass");

        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: AccountAddress, slot_time: u64) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender));
        ctx.set_owner(CREATOR);
        ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(slot_time));
        ctx
    }

    fn join_with(
        host: &mut TestHost<State<TestStateApi>>,
        account: AccountAddress,
        amount: Amount,
        slot_time: u64,
    ) -> ContractResult<()> {
        let parameter_bytes = to_bytes(&PurchaseParams {
            full_name: String::from("Jordan Keel"),
            shipping_address: String::from("12 Harbor Lane"),
            phone_number: String::from("555-0101"),
        });
        let mut ctx = receive_ctx(account, slot_time);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        contract_purchase(&ctx, host, amount, &mut logger)
    }

    fn join(
        host: &mut TestHost<State<TestStateApi>>,
        account: AccountAddress,
    ) -> ContractResult<()> {
        join_with(host, account, PRICE, 1)
    }

    fn leave(
        host: &mut TestHost<State<TestStateApi>>,
        account: AccountAddress,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = receive_ctx(account, slot_time);
        let mut logger = TestLogger::init();
        contract_withdraw(&ctx, host, &mut logger)
    }

    fn offer_with(
        host: &mut TestHost<State<TestStateApi>>,
        seller: AccountAddress,
        bid: Amount,
        bond: Amount,
        slot_time: u64,
    ) -> ContractResult<()> {
        let parameter_bytes = to_bytes(&OfferParams {
            price: bid,
            product_name: String::from("Standing desk"),
            product_link: String::from("https://shop.example/desk"),
        });
        let mut ctx = receive_ctx(seller, slot_time);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        contract_submit_offer(&ctx, host, bond, &mut logger)
    }

    fn offer(
        host: &mut TestHost<State<TestStateApi>>,
        seller: AccountAddress,
        bid: Amount,
    ) -> ContractResult<()> {
        offer_with(host, seller, bid, PRICE, 1)
    }

    fn settle(
        host: &mut TestHost<State<TestStateApi>>,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = receive_ctx(CAROL, slot_time);
        let mut logger = TestLogger::init();
        contract_finalize(&ctx, host, &mut logger)
    }

    fn expect_error<E, T>(expr: Result<T, E>, err: E, msg: &str)
    where
        E: Eq + Debug,
        T: Debug,
    {
        let actual = expr.expect_err(msg);
        claim_eq!(actual, err);
    }

    #[concordium_test]
    /// Creation records the settings and starts with an empty ledger.
    fn test_init() {
        let host = fresh_campaign(2);
        let details = &host.state().details;

        claim!(!details.state.is_finalized());
        claim_eq!(details.current_participants, 0);
        claim_eq!(details.max_participants, 2);
        claim_eq!(details.price, PRICE);
        claim_eq!(
            details.end_date,
            Timestamp::from_timestamp_millis(CAMPAIGN_END)
        );
        claim_eq!(details.platform_treasury, TREASURY);
        claim!(host.state().offers.is_empty());
    }

    #[concordium_test]
    /// A campaign for fewer than two participants is rejected.
    fn test_init_rejects_small_capacity() {
        let parameter_bytes = to_bytes(&init_params(1));
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(CREATOR)
            .set_parameter(&parameter_bytes)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(0));
        let mut state_builder = TestStateBuilder::new();

        let err = match contract_init(&ctx, &mut state_builder, PRICE) {
            Ok(_) => fail!("Creating a single-participant campaign should reject"),
            Err(err) => err,
        };
        claim_eq!(err, CustomContractError::InvalidConfiguration.into());
    }

    #[concordium_test]
    /// A campaign with a zero price is rejected.
    fn test_init_rejects_zero_price() {
        let mut params = init_params(2);
        params.price = Amount::zero();
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(CREATOR)
            .set_parameter(&parameter_bytes)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(0));
        let mut state_builder = TestStateBuilder::new();

        let err = match contract_init(&ctx, &mut state_builder, Amount::zero()) {
            Ok(_) => fail!("Creating a free campaign should reject"),
            Err(err) => err,
        };
        claim_eq!(err, CustomContractError::InvalidConfiguration.into());
    }

    #[concordium_test]
    /// The creator must seed the escrow with exactly the campaign price.
    fn test_init_rejects_wrong_seed() {
        let parameter_bytes = to_bytes(&init_params(2));
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(CREATOR)
            .set_parameter(&parameter_bytes)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(0));
        let mut state_builder = TestStateBuilder::new();

        let err = match contract_init(&ctx, &mut state_builder, PRICE + PRICE) {
            Ok(_) => fail!("Overfunding the seed should reject"),
            Err(err) => err,
        };
        claim_eq!(err, CustomContractError::InsufficientPayment.into());
    }

    #[concordium_test]
    /// The participant count never exceeds the capacity; the extra joiner is
    /// rejected.
    fn test_purchase_capacity() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("First join should pass");
        join(&mut host, BOB).expect_report("Second join should pass");
        claim_eq!(host.state().details.current_participants, 2);

        expect_error(
            join(&mut host, CAROL),
            CustomContractError::CapacityExceeded,
            "Joining a full campaign should reject",
        );
        claim_eq!(host.state().details.current_participants, 2);
    }

    #[concordium_test]
    /// Joining twice from the same account without withdrawing is rejected.
    fn test_purchase_duplicate() {
        let mut host = fresh_campaign(3);

        join(&mut host, ALICE).expect_report("First join should pass");
        expect_error(
            join(&mut host, ALICE),
            CustomContractError::AlreadyJoined,
            "Joining twice should reject",
        );
        claim_eq!(host.state().details.current_participants, 1);
    }

    #[concordium_test]
    /// A deposit that differs from the campaign price is rejected.
    fn test_purchase_wrong_amount() {
        let mut host = fresh_campaign(2);

        expect_error(
            join_with(&mut host, ALICE, Amount::from_micro_ccd(99), 1),
            CustomContractError::InsufficientPayment,
            "Underpaying should reject",
        );
        expect_error(
            join_with(&mut host, ALICE, PRICE + PRICE, 1),
            CustomContractError::InsufficientPayment,
            "Overpaying should reject",
        );
    }

    #[concordium_test]
    /// Joining at or after the end date is rejected.
    fn test_purchase_after_end() {
        let mut host = fresh_campaign(2);

        expect_error(
            join_with(&mut host, ALICE, PRICE, CAMPAIGN_END),
            CustomContractError::CampaignClosed,
            "Joining at the end date should reject",
        );
    }

    #[concordium_test]
    /// Withdrawing before the end date returns the exact deposit and frees
    /// the spot.
    fn test_withdraw_roundtrip() {
        let mut host = fresh_campaign(2);
        host.set_self_balance(PRICE + PRICE);

        join(&mut host, ALICE).expect_report("Join should pass");
        claim!(host.state().is_participant(&ALICE));

        leave(&mut host, ALICE, 2).expect_report("Withdraw should pass");

        claim!(host.transfer_occurred(&ALICE, PRICE));
        claim!(!host.state().is_participant(&ALICE));
        claim_eq!(host.state().details.current_participants, 0);

        // The spot is free again.
        join(&mut host, ALICE).expect_report("Re-joining after withdraw should pass");
    }

    #[concordium_test]
    /// Withdrawing without a deposit is rejected.
    fn test_withdraw_not_participant() {
        let mut host = fresh_campaign(2);

        expect_error(
            leave(&mut host, ALICE, 1),
            CustomContractError::NotParticipant,
            "Withdrawing without joining should reject",
        );

        join(&mut host, ALICE).expect_report("Join should pass");
        host.set_self_balance(PRICE + PRICE);
        leave(&mut host, ALICE, 2).expect_report("Withdraw should pass");

        expect_error(
            leave(&mut host, ALICE, 3),
            CustomContractError::NotParticipant,
            "Withdrawing twice should reject",
        );
    }

    #[concordium_test]
    /// Withdrawals are not possible once the campaign has ended.
    fn test_withdraw_after_end() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("Join should pass");
        expect_error(
            leave(&mut host, ALICE, CAMPAIGN_END),
            CustomContractError::CampaignClosed,
            "Withdrawing at the end date should reject",
        );
    }

    #[concordium_test]
    /// A seller may submit at most one offer, regardless of the new bid.
    fn test_offer_duplicate() {
        let mut host = fresh_campaign(2);

        offer(&mut host, SELLER_1, Amount::from_micro_ccd(90))
            .expect_report("First offer should pass");
        expect_error(
            offer(&mut host, SELLER_1, Amount::from_micro_ccd(80)),
            CustomContractError::DuplicateOffer,
            "A second offer from the same seller should reject",
        );
        claim_eq!(host.state().offers.len(), 1);
    }

    #[concordium_test]
    /// The bond must equal the campaign price, not the seller's bid.
    fn test_offer_wrong_bond() {
        let mut host = fresh_campaign(2);

        expect_error(
            offer_with(
                &mut host,
                SELLER_1,
                Amount::from_micro_ccd(90),
                Amount::from_micro_ccd(90),
                1,
            ),
            CustomContractError::InsufficientPayment,
            "Bonding the bid instead of the campaign price should reject",
        );
    }

    #[concordium_test]
    /// Offers are rejected once the campaign has ended.
    fn test_offer_after_end() {
        let mut host = fresh_campaign(2);

        expect_error(
            offer_with(
                &mut host,
                SELLER_1,
                Amount::from_micro_ccd(90),
                PRICE,
                CAMPAIGN_END,
            ),
            CustomContractError::OfferPeriodEnded,
            "Offering at the end date should reject",
        );
    }

    #[concordium_test]
    /// Settling before the end date is rejected.
    fn test_finalize_too_early() {
        let mut host = fresh_campaign(2);

        expect_error(
            settle(&mut host, CAMPAIGN_END - 1),
            CustomContractError::TooEarly,
            "Settling before the end date should reject",
        );
    }

    #[concordium_test]
    /// The lowest bid wins regardless of submission order, and every bond is
    /// returned.
    fn test_finalize_selects_minimum() {
        let mut host = fresh_campaign(2);

        offer(&mut host, SELLER_1, Amount::from_micro_ccd(5)).expect_report("Offer should pass");
        offer(&mut host, SELLER_2, Amount::from_micro_ccd(3)).expect_report("Offer should pass");
        offer(&mut host, SELLER_3, Amount::from_micro_ccd(8)).expect_report("Offer should pass");

        // Seed plus three bonds; nobody joined.
        host.set_self_balance(PRICE * 4);
        settle(&mut host, CAMPAIGN_END).expect_report("Settling should pass");

        claim_eq!(host.state().details.state.winner(), Some(SELLER_2));
        claim!(host.transfer_occurred(&SELLER_1, PRICE));
        claim!(host.transfer_occurred(&SELLER_2, PRICE));
        claim!(host.transfer_occurred(&SELLER_3, PRICE));
        claim!(host.transfer_occurred(&CREATOR, PRICE));
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    /// On equal bids the earlier submission wins.
    fn test_finalize_tie_break() {
        let mut host = fresh_campaign(2);

        offer(&mut host, SELLER_2, Amount::from_micro_ccd(3)).expect_report("Offer should pass");
        offer(&mut host, SELLER_1, Amount::from_micro_ccd(3)).expect_report("Offer should pass");

        host.set_self_balance(PRICE * 3);
        settle(&mut host, CAMPAIGN_END).expect_report("Settling should pass");

        claim_eq!(host.state().details.state.winner(), Some(SELLER_2));
    }

    #[concordium_test]
    /// Two participants at 100 each pool 200; the winning seller receives
    /// 180, the treasury 20, and the losing bond comes back. Nothing is lost
    /// or duplicated.
    fn test_finalize_payout_math() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("Join should pass");
        join(&mut host, BOB).expect_report("Join should pass");
        offer(&mut host, SELLER_1, Amount::from_micro_ccd(90))
            .expect_report("Offer should pass");
        offer(&mut host, SELLER_2, Amount::from_micro_ccd(80))
            .expect_report("Offer should pass");

        // Seed 100 + deposits 200 + bonds 200.
        host.set_self_balance(PRICE * 5);
        settle(&mut host, CAMPAIGN_END).expect_report("Settling should pass");

        claim_eq!(host.state().details.state.winner(), Some(SELLER_2));
        claim!(host.transfer_occurred(&SELLER_2, Amount::from_micro_ccd(180)));
        claim!(host.transfer_occurred(&TREASURY, Amount::from_micro_ccd(20)));
        claim!(host.transfer_occurred(&SELLER_1, PRICE));
        claim!(host.transfer_occurred(&SELLER_2, PRICE));
        claim!(host.transfer_occurred(&CREATOR, PRICE));
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    /// Without offers the campaign still settles: no winner, every
    /// participant deposit refunded.
    fn test_finalize_no_offers() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("Join should pass");
        join(&mut host, BOB).expect_report("Join should pass");

        // Seed plus two deposits.
        host.set_self_balance(PRICE * 3);
        settle(&mut host, CAMPAIGN_END).expect_report("Settling should pass");

        claim_eq!(host.state().details.state.winner(), None);
        claim!(host.state().details.state.is_finalized());
        claim!(host.transfer_occurred(&ALICE, PRICE));
        claim!(host.transfer_occurred(&BOB, PRICE));
        claim!(host.transfer_occurred(&CREATOR, PRICE));
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    /// A settled campaign stays settled: every later call is rejected.
    fn test_finalize_terminal_state() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("Join should pass");
        offer(&mut host, SELLER_1, Amount::from_micro_ccd(90))
            .expect_report("Offer should pass");

        host.set_self_balance(PRICE * 3);
        settle(&mut host, CAMPAIGN_END).expect_report("Settling should pass");

        expect_error(
            settle(&mut host, CAMPAIGN_END + 1),
            CustomContractError::AlreadyFinalized,
            "Settling twice should reject",
        );
        expect_error(
            join_with(&mut host, BOB, PRICE, 1),
            CustomContractError::CampaignClosed,
            "Joining a settled campaign should reject",
        );
        expect_error(
            offer_with(
                &mut host,
                SELLER_2,
                Amount::from_micro_ccd(80),
                PRICE,
                1,
            ),
            CustomContractError::OfferPeriodEnded,
            "Offering on a settled campaign should reject",
        );
        expect_error(
            leave(&mut host, ALICE, 1),
            CustomContractError::CampaignClosed,
            "Withdrawing from a settled campaign should reject",
        );
        claim!(host.state().details.state.is_finalized());
    }

    #[concordium_test]
    /// The snapshot view mirrors the ledger before and after settlement.
    fn test_get_participant_info() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("Join should pass");

        let ctx = receive_ctx(CAROL, 1);
        let info = contract_get_participant_info(&ctx, &host)
            .expect_report("Snapshot view should pass");
        claim_eq!(info.current_participants, 1);
        claim_eq!(info.max_participants, 2);
        claim_eq!(info.price, PRICE);
        claim_eq!(
            info.end_date,
            Timestamp::from_timestamp_millis(CAMPAIGN_END)
        );
        claim_eq!(info.sender_company, None);
        claim!(!info.is_finalized);

        offer(&mut host, SELLER_1, Amount::from_micro_ccd(90))
            .expect_report("Offer should pass");
        host.set_self_balance(PRICE * 3);
        settle(&mut host, CAMPAIGN_END).expect_report("Settling should pass");

        let info = contract_get_participant_info(&ctx, &host)
            .expect_report("Snapshot view should pass");
        claim_eq!(info.sender_company, Some(SELLER_1));
        claim!(info.is_finalized);
    }

    #[concordium_test]
    /// Offers come back in submission order with the fields the sellers sent.
    fn test_get_offers() {
        let mut host = fresh_campaign(2);

        offer(&mut host, SELLER_1, Amount::from_micro_ccd(90))
            .expect_report("Offer should pass");
        offer(&mut host, SELLER_2, Amount::from_micro_ccd(80))
            .expect_report("Offer should pass");

        let ctx = receive_ctx(CAROL, 1);
        let entries = contract_get_offers(&ctx, &host).expect_report("Offer view should pass");

        claim_eq!(entries.len(), 2);
        claim_eq!(entries[0].wallet_address, SELLER_1);
        claim_eq!(entries[0].price, Amount::from_micro_ccd(90));
        claim_eq!(entries[1].wallet_address, SELLER_2);
        claim_eq!(entries[1].price, Amount::from_micro_ccd(80));
    }

    #[concordium_test]
    /// The membership view follows joins and withdrawals.
    fn test_is_participant() {
        let mut host = fresh_campaign(2);

        join(&mut host, ALICE).expect_report("Join should pass");

        let parameter_bytes = to_bytes(&ALICE);
        let mut ctx = receive_ctx(CAROL, 1);
        ctx.set_parameter(&parameter_bytes);
        claim!(contract_is_participant(&ctx, &host).expect_report("View should pass"));

        let parameter_bytes = to_bytes(&BOB);
        let mut ctx = receive_ctx(CAROL, 1);
        ctx.set_parameter(&parameter_bytes);
        claim!(!contract_is_participant(&ctx, &host).expect_report("View should pass"));
    }
}
