use super::*;

pub type ContractResult<A> = Result<A, CustomContractError>;
