use chaincode_rs::{
    core::{ChaincodeResult, ContractError},
    ledger::{StateReader, StateWriter},
    operation::{EntryPoint, Operation},
};

/// Ledger key populated by the `init` operation.
pub const INIT_KEY: &str = "hello world";

/// Runs an operation resolved from the invoke dispatch table. Reads are
/// served by queries only.
pub fn invoke<S: StateWriter + ?Sized>(
    stub: &mut S,
    operation: Operation,
    args: &[String],
) -> ChaincodeResult {
    match operation {
        Operation::Init => initialize(stub, args),
        Operation::Write => write(stub, args),
        Operation::Read => Err(ContractError::UnknownFunction {
            entry_point: EntryPoint::Invoke,
            function: operation.name().to_string(),
        }),
    }
}

/// Runs an operation resolved from the query dispatch table. Queries only
/// ever see a read-only stub, so mutating operations are not reachable here.
pub fn query<S: StateReader + ?Sized>(
    stub: &S,
    operation: Operation,
    args: &[String],
) -> ChaincodeResult {
    match operation {
        Operation::Read => read(stub, args),
        Operation::Init | Operation::Write => Err(ContractError::UnknownFunction {
            entry_point: EntryPoint::Query,
            function: operation.name().to_string(),
        }),
    }
}

pub fn initialize<S: StateWriter + ?Sized>(stub: &mut S, args: &[String]) -> ChaincodeResult {
    let args = Operation::Init.validate(args)?;

    stub
        .put_state(INIT_KEY, args[0].as_bytes())
        .map_err(ContractError::Store)?;

    Ok(None)
}

pub fn write<S: StateWriter + ?Sized>(stub: &mut S, args: &[String]) -> ChaincodeResult {
    let args = Operation::Write.validate(args)?;
    let (name, value) = (&args[0], &args[1]);

    stub
        .put_state(name, value.as_bytes())
        .map_err(ContractError::Store)?;

    Ok(None)
}

pub fn read<S: StateReader + ?Sized>(stub: &S, args: &[String]) -> ChaincodeResult {
    let args = Operation::Read.validate(args)?;
    let name = &args[0];

    // missing keys and store faults collapse into the same lookup error
    let value = stub
        .get_state(name)
        .map_err(|_| ContractError::KeyLookup { key: name.clone() })?;

    Ok(Some(value))
}

#[cfg(test)]
fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
