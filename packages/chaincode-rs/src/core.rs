use cosmwasm_std::{Binary, Response, StdError};
use thiserror::Error;

use crate::operation::{EntryPoint, Operation};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Failure reported by the ledger store while writing. The message is
    /// passed through untouched.
    #[error("{0}")]
    Store(StdError),

    #[error(
        "Incorrect number of arguments. {operation}() expecting {expected}: {}, received {received}",
        .operation.params()
    )]
    ArgumentCount {
        operation: Operation,
        expected: usize,
        received: usize,
    },

    #[error("Received unknown function {entry_point}: {function}")]
    UnknownFunction {
        entry_point: EntryPoint,
        function: String,
    },

    #[error("{{\"error\":\"failed to get state for {key}\"}}")]
    KeyLookup { key: String },

    #[error("Cannot migrate from {stored} to {expected}")]
    InvalidMigration { stored: String, expected: String },
}

pub type ContractResult = Result<Response, ContractError>;

/// Outcome of a single chaincode operation: an optional payload or an error.
pub type ChaincodeResult = Result<Option<Binary>, ContractError>;
