use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Attests the code currently deployed at a contract address.
///
/// The fingerprint must change whenever the code behind `module` changes, so the pool
/// asks for it again on every liquidation instead of trusting the value it saw when the
/// liquidator was registered.
#[contractclient(name = "CodeRegistryClient")]
pub trait CodeRegistry {
    fn fingerprint(e: Env, module: Address) -> BytesN<32>;
}
