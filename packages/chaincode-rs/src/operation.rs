use std::fmt::{self, Display};

use cosmwasm_schema::cw_serde;

use crate::core::ContractError;

/// The host entry points that can dispatch a named function.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum EntryPoint {
    Invoke,
    Query,
}

impl EntryPoint {
    /// Operations reachable from this entry point. Reads are query-only and
    /// every state change goes through an invocation.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            EntryPoint::Invoke => &[Operation::Init, Operation::Write],
            EntryPoint::Query => &[Operation::Read],
        }
    }
}

impl Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPoint::Invoke => write!(f, "invocation"),
            EntryPoint::Query => write!(f, "query"),
        }
    }
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Operation {
    Init,
    Write,
    Read,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Write => "write",
            Operation::Read => "read",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Operation::Init => 1,
            Operation::Write => 2,
            Operation::Read => 1,
        }
    }

    pub fn params(&self) -> &'static str {
        match self {
            Operation::Init => "initial value for the well-known key",
            Operation::Write => "name of variable and value to set",
            Operation::Read => "name of variable to query",
        }
    }

    /// Resolves a function name against the dispatch table of `entry_point`.
    pub fn resolve(entry_point: EntryPoint, function: &str) -> Result<Self, ContractError> {
        entry_point
            .operations()
            .iter()
            .copied()
            .find(|operation| operation.name() == function)
            .ok_or_else(|| ContractError::UnknownFunction {
                entry_point,
                function: function.to_string(),
            })
    }

    /// Checks the argument count, handing the arguments back on success so
    /// callers can destructure them.
    pub fn validate<'a>(&self, args: &'a [String]) -> Result<&'a [String], ContractError> {
        if args.len() != self.arity() {
            return Err(ContractError::ArgumentCount {
                operation: *self,
                expected: self.arity(),
                received: args.len(),
            });
        }

        Ok(args)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
