use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event};

#[cw_serde]
pub enum DomainEvent {
    ChaincodeInitialized { contract_address: Addr, key: String },
    StateWritten { contract_address: Addr, key: String },
}

impl From<DomainEvent> for Event {
    fn from(event: DomainEvent) -> Self {
        match event {
            DomainEvent::ChaincodeInitialized {
                contract_address,
                key,
            } => Event::new("_chaincode_initialized")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("key", key),
            DomainEvent::StateWritten {
                contract_address,
                key,
            } => Event::new("_state_written")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("key", key),
        }
    }
}
