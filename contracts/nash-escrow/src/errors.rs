use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InvalidFeeRate = 4,
    InsufficientBalance = 5,
    AuthorizationError = 6,
    NotFound = 7,
    AlreadyClaimed = 8,
    WrongTransactionType = 9,
    Unauthorized = 10,
    AlreadySet = 11,
    AlreadyConfirmed = 12,
    OutOfOrderConfirmation = 13,
    SettlementFailure = 14,
    InvalidStatus = 15,
    InvalidDetails = 16,
    IndexExhausted = 17,
}
