use cosmwasm_std::{Binary, StdResult, Storage};
use cw_storage_plus::Map;

/// Ledger entries written by chaincode operations, keyed by variable name.
const STATE: Map<&str, Binary> = Map::new("state");

/// Read access to ledger state.
pub trait StateReader {
    /// Loads the value stored under `key`. Keys that were never written are
    /// reported as errors, the same as any other store fault.
    fn get_state(&self, key: &str) -> StdResult<Binary>;
}

/// Write access to ledger state. Durability and visibility of a put are
/// owned by the host chain once the surrounding transaction commits.
pub trait StateWriter: StateReader {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StdResult<()>;
}

impl<'a> StateReader for dyn Storage + 'a {
    fn get_state(&self, key: &str) -> StdResult<Binary> {
        STATE.load(self, key)
    }
}

impl<'a> StateWriter for dyn Storage + 'a {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StdResult<()> {
        STATE.save(self, key, &Binary::from(value))
    }
}
