use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FlashSwapError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    IdenticalAssets = 402,
    InvalidAsset = 403,
    InvalidAmount = 404,
    UnauthorizedCaller = 405,
    UntrustedInitiator = 406,
    MalformedCallback = 407,
    InsufficientAuthorization = 408,
    InsufficientFunds = 409,
    Overflow = 410,
    LoanNotSettled = 411,
    SettlementPending = 412,
}
