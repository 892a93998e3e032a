use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 15;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CoreState {
    pub admin: Address,

    // Token the pool lends out, deposits and loans are denominated in it
    pub asset: Address,

    // Contract that attests the code fingerprint of liquidator modules
    pub code_registry: Address,

    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CoreStats {
    pub total_deposits: u128,
    pub total_borrows: u128,
}

#[contracttype]
pub enum CoreDataKeys {
    CoreState,
    CoreStats,

    /// Code fingerprint of the only liquidator the pool trusts, last write wins.
    VerifiedLiquidator,

    /// Token contract backing a collateral symbol, for example "STX".
    CollateralAsset(Symbol),
}

pub trait CoreStorageFunc {
    fn _core_state(&self) -> Option<CoreState>;
    fn _set_core_state(&self, v: &CoreState);
    fn _core_stats(&self) -> CoreStats;
    fn _set_core_stats(&self, v: &CoreStats);
    fn _verified_liquidator(&self) -> Option<BytesN<32>>;
    fn _set_verified_liquidator(&self, v: &BytesN<32>);
    fn _collateral_asset(&self, asset: &Symbol) -> Option<Address>;
    fn _set_collateral_asset(&self, asset: &Symbol, token: &Address);
    fn _bump_instance(&self);
}

impl CoreStorageFunc for Env {
    fn _core_state(&self) -> Option<CoreState> {
        self.storage().instance().get(&CoreDataKeys::CoreState)
    }

    fn _set_core_state(&self, v: &CoreState) {
        self.storage().instance().set(&CoreDataKeys::CoreState, v);
    }

    fn _core_stats(&self) -> CoreStats {
        self.storage()
            .instance()
            .get(&CoreDataKeys::CoreStats)
            .unwrap_or(CoreStats {
                total_deposits: 0,
                total_borrows: 0,
            })
    }

    fn _set_core_stats(&self, v: &CoreStats) {
        self.storage().instance().set(&CoreDataKeys::CoreStats, v);
    }

    fn _verified_liquidator(&self) -> Option<BytesN<32>> {
        self.storage()
            .instance()
            .get(&CoreDataKeys::VerifiedLiquidator)
    }

    fn _set_verified_liquidator(&self, v: &BytesN<32>) {
        self.storage()
            .instance()
            .set(&CoreDataKeys::VerifiedLiquidator, v);
    }

    fn _collateral_asset(&self, asset: &Symbol) -> Option<Address> {
        self.storage()
            .instance()
            .get(&CoreDataKeys::CollateralAsset(asset.clone()))
    }

    fn _set_collateral_asset(&self, asset: &Symbol, token: &Address) {
        self.storage()
            .instance()
            .set(&CoreDataKeys::CollateralAsset(asset.clone()), token);
    }

    fn _bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}
