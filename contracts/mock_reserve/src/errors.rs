use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ReserveError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InsufficientLiquidity = 102,
    InsufficientInputAmount = 103,
    InsufficientOutputAmount = 104,
    InvalidK = 105,
    Overflow = 107,
    IdenticalTokens = 108,
    InvalidTo = 109,
}
