use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, Symbol};

pub const PERSISTENT_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 60;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Deposit {
    pub owner: Address,
    pub amount: u128,

    // Time of the most recent deposit, withdrawals leave it untouched
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Collateral {
    pub owner: Address,
    pub amount: u128,

    // Single slot per account, it always holds the asset of the latest call
    pub asset: Symbol,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Loan {
    pub owner: Address,
    pub principal: u128,
    pub interest_accrued: u128,
    pub borrow_time: u64,
    pub last_interest_update: u64,
}

#[contracttype]
pub enum PositionsDataKeys {
    Deposit(Address),
    Collateral(Address),
    Loan(Address),
}

pub struct Positions {
    pub env: Env,
}

impl Positions {
    #[inline(always)]
    fn new(e: &Env) -> Positions {
        Positions { env: e.clone() }
    }

    pub fn deposit(&self, owner: &Address) -> Option<Deposit> {
        self.env
            .storage()
            .persistent()
            .get(&PositionsDataKeys::Deposit(owner.clone()))
    }

    pub fn set_deposit(&self, deposit: &Deposit) {
        let key = PositionsDataKeys::Deposit(deposit.owner.clone());
        self.env.storage().persistent().set(&key, deposit);
        self.bump(&key);
    }

    pub fn collateral(&self, owner: &Address) -> Option<Collateral> {
        self.env
            .storage()
            .persistent()
            .get(&PositionsDataKeys::Collateral(owner.clone()))
    }

    pub fn set_collateral(&self, collateral: &Collateral) {
        let key = PositionsDataKeys::Collateral(collateral.owner.clone());
        self.env.storage().persistent().set(&key, collateral);
        self.bump(&key);
    }

    pub fn remove_collateral(&self, owner: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&PositionsDataKeys::Collateral(owner.clone()));
    }

    pub fn loan(&self, owner: &Address) -> Option<Loan> {
        self.env
            .storage()
            .persistent()
            .get(&PositionsDataKeys::Loan(owner.clone()))
    }

    pub fn set_loan(&self, loan: &Loan) {
        let key = PositionsDataKeys::Loan(loan.owner.clone());
        self.env.storage().persistent().set(&key, loan);
        self.bump(&key);
    }

    pub fn remove_loan(&self, owner: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&PositionsDataKeys::Loan(owner.clone()));
    }

    fn bump(&self, key: &PositionsDataKeys) {
        self.env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }
}

pub trait PositionsStorageFunc {
    fn _positions(&self) -> Positions;
}

impl PositionsStorageFunc for Env {
    #[inline(always)]
    fn _positions(&self) -> Positions {
        Positions::new(self)
    }
}
