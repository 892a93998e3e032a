use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SCErrors {
    // Core Errors
    NotStarted = 10,
    ContractAlreadyInitiated = 11,
    Unauthorized = 12,
    ProtocolPaused = 13,

    // Ledger
    InvalidAmount = 20,
    InsufficientBalance = 21,
    InsufficientCollateral = 22,
    InsufficientFunds = 23,
    CollateralAssetNotSupported = 24,

    // Positions
    LoanNotFound = 30,
    CollateralNotFound = 31,

    // Liquidations
    PositionHealthy = 40,
    ContractVerificationFailed = 41,
    AssetRestrictionFailed = 42,
    LiquidationFailed = 43,
}
