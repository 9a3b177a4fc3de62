use super::*;

/// The custom errors the campaign contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Only account addresses can interact with a campaign (Error code: -4).
    OnlyAccountAddress,
    /// Failed to invoke a transfer (Error code: -5).
    InvokeTransferError,
    /// Campaign was created with invalid settings (Error code: -6).
    InvalidConfiguration,
    /// Call was not accompanied by exactly the required deposit
    /// (Error code: -7).
    InsufficientPayment,
    /// Campaign already has the maximum number of participants
    /// (Error code: -8).
    CapacityExceeded,
    /// Campaign has passed its end date or was finalized (Error code: -9).
    CampaignClosed,
    /// Sender already holds a participant deposit (Error code: -10).
    AlreadyJoined,
    /// Sender never joined the campaign or already withdrew
    /// (Error code: -11).
    NotParticipant,
    /// Sender has already submitted an offer (Error code: -12).
    DuplicateOffer,
    /// Offers are no longer accepted (Error code: -13).
    OfferPeriodEnded,
    /// Campaign end date has not been reached yet (Error code: -14).
    TooEarly,
    /// Campaign has already been finalized (Error code: -15).
    AlreadyFinalized,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}
